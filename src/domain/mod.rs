//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Typed records for users and short links
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in
//! [`crate::infrastructure::persistence`]; the get-or-create protocol built on
//! top of them lives in [`crate::application::services::ResourceStore`].

pub mod entities;
pub mod repositories;
