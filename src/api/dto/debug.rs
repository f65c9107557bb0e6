//! DTOs for developer-only routes.

use serde::Deserialize;

/// Query string of `GET /debug`.
#[derive(Debug, Deserialize)]
pub struct DebugQuery {
    /// Value to store in the credential cookie.
    pub setapikey: Option<String>,
}
