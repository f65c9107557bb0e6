//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Extension, State},
    response::IntoResponse,
};

use crate::state::AppState;
use crate::web::middleware::web_auth::Viewer;

/// Template for the landing page.
///
/// Renders `templates/index.html`:
/// - Signed in: shorten form, API key and log out buttons
/// - Anonymous: log in button (when SSO is enabled)
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub email: Option<String>,
    pub sso_enabled: bool,
}

/// Renders the landing page for the current viewer.
///
/// # Endpoint
///
/// Any method on `/`
pub async fn index_handler(
    State(st): State<AppState>,
    Extension(Viewer(user)): Extension<Viewer>,
) -> impl IntoResponse {
    IndexTemplate {
        email: user.map(|u| u.email),
        sso_enabled: st.sso_service.is_some(),
    }
}
