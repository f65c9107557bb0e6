//! Business logic services for the application layer.

pub mod auth_service;
pub mod link_service;
pub mod resource_store;
pub mod sso_service;

pub use auth_service::AuthService;
pub use link_service::LinkService;
pub use resource_store::ResourceStore;
pub use sso_service::SsoService;
