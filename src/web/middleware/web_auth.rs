//! Cookie-based viewer resolution for web pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::credential_cookie;

/// The user behind the credential cookie, if it resolves.
#[derive(Debug, Clone, Default)]
pub struct Viewer(pub Option<User>);

/// Resolves the credential cookie and stores a [`Viewer`] in request extensions.
///
/// # Cookie Format
///
/// ```text
/// Cookie: i8apikey=<api key>
/// ```
///
/// Unlike the `/shorten` handler, this never rejects a request: a missing or
/// unknown key simply yields an anonymous viewer, and each page decides how
/// to render it.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let pages = Router::new()
///     .route("/", get(index_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the user lookup fails.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = match credential_cookie::read(req.headers()) {
        Some(api_key) => st.auth_service.resolve(&api_key).await?,
        None => None,
    };

    req.extensions_mut().insert(Viewer(user));

    Ok(next.run(req).await)
}
