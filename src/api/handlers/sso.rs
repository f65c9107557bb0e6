//! Handlers for SSO sign-in and sign-out.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Response,
};
use chrono::Utc;
use serde_json::json;

use crate::api::dto::sso::SsoCallbackQuery;
use crate::application::services::SsoService;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;
use crate::utils::{credential_cookie, redirect};

fn sso_service(state: &AppState) -> Result<&Arc<SsoService>, AppError> {
    state
        .sso_service
        .as_ref()
        .ok_or_else(|| AppError::not_found("Not found", json!({})))
}

/// Redirects to the identity provider.
///
/// # Endpoint
///
/// `GET /sso`
///
/// The callback URL is `<origin>/sso/callback`, where the origin is
/// `PUBLIC_URL` or is derived from the request.
///
/// # Errors
///
/// Returns 404 Not Found when SSO is disabled.
pub async fn sso_initiate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let sso = sso_service(&state)?;

    let origin = request_origin(&headers, state.public_url.as_deref())?;
    let target = sso.initiate(&format!("{origin}/sso/callback"))?;

    redirect::found(&target)
}

/// Completes sign-in: verifies the assertion, then issues the credential cookie.
///
/// # Endpoint
///
/// `GET /sso/callback?payload=..&signature=..`
///
/// On success the user's API key is set as the `i8apikey` cookie for seven
/// days and the browser is sent to `/`.
///
/// # Errors
///
/// Returns 400 Bad Request if a parameter is missing or the signature does
/// not verify (the two cases are indistinguishable in the response).
/// Returns 404 Not Found when SSO is disabled.
pub async fn sso_callback_handler(
    State(state): State<AppState>,
    Query(query): Query<SsoCallbackQuery>,
) -> Result<Response, AppError> {
    let sso = sso_service(&state)?;
    let (payload, signature) = query.into_parts()?;

    let user = sso.verify_and_resolve(&payload, &signature).await?;

    let cookie = credential_cookie::issue(&user.api_key, Utc::now()).ok_or_else(|| {
        AppError::internal("API key cannot be stored in a cookie", json!({ "user_id": user.id }))
    })?;

    redirect::found_with_cookie("/", cookie)
}

/// Clears the credential cookie and returns to `/`.
///
/// # Endpoint
///
/// `POST /sso/logout`
pub async fn sso_logout_handler() -> Result<Response, AppError> {
    redirect::found_with_cookie("/", credential_cookie::clear())
}
