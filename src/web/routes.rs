//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{apikey_handler, index_handler};
use crate::web::middleware::web_auth;
use axum::{
    Router, middleware,
    routing::{any, get},
};

/// Pages rendered for the viewer behind the credential cookie.
///
/// Every route resolves the viewer through [`web_auth::layer`].
///
/// # Endpoints
///
/// - `ANY /`       - Landing page (log in, or shorten form when signed in)
/// - `GET /apikey` - Viewer's API key, 404 when anonymous
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", any(index_handler))
        .route("/apikey", get(apikey_handler))
        .route_layer(middleware::from_fn_with_state(state, web_auth::layer))
}
