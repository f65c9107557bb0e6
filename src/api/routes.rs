//! API route configuration.
//!
//! These routes authenticate inside their handlers: `/shorten` takes a body
//! or cookie credential, and the SSO routes establish one.

use crate::api::handlers::{
    debug_handler, redirect_handler, shorten_handler, sso_callback_handler, sso_initiate_handler,
    sso_logout_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET  /sso`          - Redirect to the identity provider
/// - `GET  /sso/callback` - Verify the assertion and issue the credential cookie
/// - `POST /sso/logout`   - Clear the credential cookie
/// - `POST /shorten`      - Register a URL, respond with its short URL
/// - `GET  /{slug}`       - Redirect to the target URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sso", get(sso_initiate_handler))
        .route("/sso/callback", get(sso_callback_handler))
        .route("/sso/logout", post(sso_logout_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{slug}", get(redirect_handler))
}

/// Developer-only routes.
///
/// # Endpoints
///
/// - `GET /debug?setapikey=<key>` - Set the credential cookie directly
pub fn debug_routes() -> Router<AppState> {
    Router::new().route("/debug", get(debug_handler))
}
