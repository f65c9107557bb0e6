//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, ResourceStore, SsoService};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub link_service: Arc<LinkService>,
    /// `None` when SSO sign-in is disabled; `/sso` routes then answer 404.
    pub sso_service: Option<Arc<SsoService>>,
    /// Configured public origin, if any.
    pub public_url: Option<String>,
}

impl AppState {
    /// Wires the services around a single resource store.
    pub fn new(
        store: Arc<ResourceStore>,
        sso_service: Option<SsoService>,
        public_url: Option<String>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(store.clone())),
            link_service: Arc::new(LinkService::new(store)),
            sso_service: sso_service.map(Arc::new),
            public_url,
        }
    }
}
