//! Core domain entities representing the business data model.
//!
//! Entities are plain typed records constructed at the persistence boundary.
//!
//! # Entity Types
//!
//! - [`User`] - An account mapped from an identity-provider identity
//! - [`ShortLink`] - A registered target URL
//!
//! Creation inputs use separate structs: [`NewUser`], [`NewShortLink`].

pub mod link;
pub mod user;

pub use link::{NewShortLink, ShortLink};
pub use user::{NewUser, User};
