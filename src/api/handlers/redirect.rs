//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect;

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Slugs are case-insensitive and leading `0` padding is ignored, so `7H`,
/// `7h` and `007H` all resolve to the same link.
///
/// # Errors
///
/// Returns 404 Not Found if the slug is malformed or has no stored link.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.link_service.resolve(&slug).await?;

    redirect::found(&target)
}
