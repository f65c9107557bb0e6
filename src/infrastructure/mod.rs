//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and wraps
//! external collaborators.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`sso`] - Shared-secret signature scheme of the identity provider

pub mod persistence;
pub mod sso;
