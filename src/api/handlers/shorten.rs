//! Handler for link shortening endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::credential_cookie;
use crate::utils::request_origin::request_origin;

/// Registers a URL and returns its short URL as plain text.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// Form-encoded or JSON, both fields optional:
///
/// ```text
/// apikey=<api key>&url=https://example.com
/// ```
///
/// The body `apikey` is used whenever present, even if blank; otherwise the
/// `i8apikey` cookie is used.
///
/// # Response
///
/// ```text
/// https://i8.example.com/7H
/// ```
///
/// Shortening an already registered URL returns the existing short URL.
///
/// # Errors
///
/// Returns 400 Bad Request if the credential is missing or unknown, or if
/// the URL is missing or blank.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: ShortenForm,
) -> Result<impl IntoResponse, AppError> {
    let request = ShortenRequest::from(form);

    let user = state
        .auth_service
        .authenticate([request.apikey.clone(), credential_cookie::read(&headers)])
        .await?;

    request.validate()?;

    let slug = state.link_service.shorten(&request.url, &user).await?;

    let origin = request_origin(&headers, state.public_url.as_deref())?;
    let short_url = state.link_service.short_url(&origin, &slug);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        short_url,
    ))
}
