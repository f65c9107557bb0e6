//! Data Transfer Objects for API requests.
//!
//! DTOs use Serde for deserialization and validator for input validation.

pub mod debug;
pub mod shorten;
pub mod sso;
