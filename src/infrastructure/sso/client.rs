//! Signing and verification of SSO messages.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use url::Url;

type HmacSha256 = Hmac<Sha256>;

/// Errors raised while building or reading SSO messages.
#[derive(Debug, Error)]
pub enum SsoError {
    #[error("signature does not match payload")]
    InvalidSignature,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("invalid identity provider URL: {0}")]
    InvalidServerUrl(#[from] url::ParseError),
}

/// Identity asserted by the provider after a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoAssertion {
    pub external_id: String,
    pub email: String,
}

#[derive(Serialize)]
struct RequestData<'a> {
    callback_url: &'a str,
    scopes: &'a [&'a str],
}

#[derive(Deserialize)]
struct ResponseData {
    user_data: UserData,
}

#[derive(Deserialize)]
struct UserData {
    external_id: String,
    email: String,
}

/// Client for the identity provider's shared-secret scheme.
///
/// Holds the client credentials; carries no per-request state.
#[derive(Clone)]
pub struct SsoClient {
    client_id: String,
    client_secret: String,
    server_url: String,
}

impl SsoClient {
    pub fn new(client_id: String, client_secret: String, server_url: String) -> Self {
        Self {
            client_id,
            client_secret,
            server_url,
        }
    }

    /// Computes the base64 HMAC-SHA256 of `payload` under the client secret.
    pub fn sign(&self, payload: &str) -> String {
        STANDARD.encode(self.mac(payload).finalize().into_bytes())
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.client_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac
    }

    /// Builds the provider authorization URL for a login round-trip.
    ///
    /// The signed request embeds `callback_url` as the return destination.
    /// No nonce or state parameter is included.
    ///
    /// # Errors
    ///
    /// Returns [`SsoError::InvalidServerUrl`] if the configured server URL
    /// does not parse.
    pub fn authorization_url(&self, callback_url: &str) -> Result<String, SsoError> {
        let data = RequestData {
            callback_url,
            scopes: &[],
        };
        let json = serde_json::to_vec(&data)
            .map_err(|e| SsoError::MalformedPayload(e.to_string()))?;
        let payload = STANDARD.encode(json);
        let signature = self.sign(&payload);

        let url = Url::parse_with_params(
            &self.server_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("payload", payload.as_str()),
                ("signature", signature.as_str()),
            ],
        )?;

        Ok(url.into())
    }

    /// Verifies a provider response and extracts the asserted identity.
    ///
    /// The MAC is checked first, in constant time, before the payload is
    /// decoded at all.
    ///
    /// # Errors
    ///
    /// Returns [`SsoError::InvalidSignature`] if `signature` is not valid
    /// base64 or does not match `payload`, and [`SsoError::MalformedPayload`]
    /// if a correctly signed payload cannot be decoded.
    pub fn verify_response(&self, payload: &str, signature: &str) -> Result<SsoAssertion, SsoError> {
        let signature = STANDARD
            .decode(signature.trim())
            .map_err(|_| SsoError::InvalidSignature)?;

        self.mac(payload)
            .verify_slice(&signature)
            .map_err(|_| SsoError::InvalidSignature)?;

        let json = STANDARD
            .decode(payload.trim())
            .map_err(|e| SsoError::MalformedPayload(e.to_string()))?;
        let data: ResponseData =
            serde_json::from_slice(&json).map_err(|e| SsoError::MalformedPayload(e.to_string()))?;

        if data.user_data.external_id.is_empty() {
            return Err(SsoError::MalformedPayload(
                "empty external_id".to_string(),
            ));
        }

        Ok(SsoAssertion {
            external_id: data.user_data.external_id,
            email: data.user_data.email,
        })
    }
}
