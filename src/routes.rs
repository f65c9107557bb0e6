//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `ANY  /`             - Landing page (public, viewer-aware)
//! - `GET  /apikey`       - Viewer's API key (cookie credential, 404 otherwise)
//! - `GET  /sso`          - Identity-provider redirect
//! - `GET  /sso/callback` - Sign-in completion
//! - `POST /sso/logout`   - Sign-out
//! - `POST /shorten`      - Shorten a URL (body or cookie credential)
//! - `GET  /debug`        - Cookie helper (development and test only)
//! - `GET  /{slug}`       - Short link redirect (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Viewer resolution** - Cookie credential lookup for web pages
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing, without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `debug_routes` - when `true`, mounts `/debug`; enable only in
///   development and test environments
pub fn router(state: AppState, debug_routes: bool) -> Router {
    let mut router = Router::new()
        .merge(api::routes::routes())
        .merge(web::routes::routes(state.clone()));

    if debug_routes {
        router = router.merge(api::routes::debug_routes());
    }

    router.with_state(state).layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/7H/` redirects like `/7H`.
pub fn app_router(state: AppState, debug_routes: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, debug_routes))
}
