//! API key page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Extension, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::web::middleware::web_auth::Viewer;

#[derive(Template, WebTemplate)]
#[template(path = "apikey.html")]
pub struct ApiKeyTemplate {
    pub api_key: String,
}

/// Shows the signed-in viewer their API key.
///
/// # Endpoint
///
/// `GET /apikey`
///
/// # Errors
///
/// Returns 404 Not Found for anonymous viewers, so the page's existence is
/// not revealed.
pub async fn apikey_handler(
    Extension(Viewer(user)): Extension<Viewer>,
) -> Result<impl IntoResponse, AppError> {
    let user = user.ok_or_else(|| AppError::not_found("Not found", json!({})))?;

    Ok(ApiKeyTemplate {
        api_key: user.api_key,
    })
}
