//! Application layer services implementing business logic.
//!
//! Services consume repository traits through [`services::ResourceStore`] and
//! provide a clean API for HTTP handlers and the `admin` CLI.
//!
//! # Available Services
//!
//! - [`services::resource_store::ResourceStore`] - Idempotent get-or-create for users and links
//! - [`services::auth_service::AuthService`] - API key resolution
//! - [`services::sso_service::SsoService`] - Identity-provider sign-in
//! - [`services::link_service::LinkService`] - Slug registration and resolution

pub mod services;
