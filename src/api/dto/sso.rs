//! DTOs for the SSO callback.

use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;

/// Query string of `GET /sso/callback`.
#[derive(Debug, Default, Deserialize)]
pub struct SsoCallbackQuery {
    pub payload: Option<String>,
    pub signature: Option<String>,
}

impl SsoCallbackQuery {
    /// Returns `(payload, signature)` when both are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] otherwise.
    pub fn into_parts(self) -> Result<(String, String), AppError> {
        match (self.payload, self.signature) {
            (Some(payload), Some(signature)) if !payload.is_empty() && !signature.is_empty() => {
                Ok((payload, signature))
            }
            _ => Err(AppError::bad_request("Bad request", json!({}))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_parts() {
        let query = SsoCallbackQuery {
            payload: Some("cGF5bG9hZA==".to_string()),
            signature: Some("c2ln".to_string()),
        };

        let (payload, signature) = query.into_parts().unwrap();
        assert_eq!(payload, "cGF5bG9hZA==");
        assert_eq!(signature, "c2ln");
    }

    #[test]
    fn test_missing_or_empty_parts() {
        assert!(SsoCallbackQuery::default().into_parts().is_err());

        let no_signature = SsoCallbackQuery {
            payload: Some("cGF5bG9hZA==".to_string()),
            signature: None,
        };
        assert!(no_signature.into_parts().is_err());

        let empty_payload = SsoCallbackQuery {
            payload: Some(String::new()),
            signature: Some("c2ln".to_string()),
        };
        assert!(empty_payload.into_parts().is_err());
    }
}
