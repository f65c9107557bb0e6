//! Opaque API key generation.

use crate::error::AppError;
use serde_json::json;

/// Random bytes per generated key.
const API_KEY_BYTES: usize = 20;

/// Generates a fresh bearer credential.
///
/// Uses `getrandom` for entropy and hex-encodes the result, producing a
/// 40-character lowercase key.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_api_key() -> Result<String, AppError> {
    let mut buffer = [0u8; API_KEY_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate API key",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(hex::encode(buffer))
}
