//! Federated sign-in through the identity provider.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::application::services::ResourceStore;
use crate::application::services::resource_store::race_lost;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::infrastructure::sso::{SsoClient, SsoError};

/// Bridges identity-provider assertions to local accounts.
///
/// Each callback either verifies (the asserted identity is mapped to a user,
/// created on first sight) or is rejected with no store access at all.
pub struct SsoService {
    client: SsoClient,
    store: Arc<ResourceStore>,
}

impl SsoService {
    pub fn new(client: SsoClient, store: Arc<ResourceStore>) -> Self {
        Self { client, store }
    }

    /// Builds the provider URL that starts a login returning to `callback_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the provider URL is misconfigured.
    pub fn initiate(&self, callback_url: &str) -> Result<String, AppError> {
        self.client.authorization_url(callback_url).map_err(|e| {
            AppError::internal(
                "Failed to build SSO request",
                json!({ "reason": e.to_string() }),
            )
        })
    }

    /// Verifies a signed assertion and resolves (or creates) its user.
    ///
    /// The returned user's `api_key` is the credential to hand to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Signature`] if the signature does not verify and
    /// [`AppError::Validation`] if a verified payload cannot be decoded; in
    /// both cases no account is created or updated. Returns
    /// [`AppError::Conflict`] if a concurrent first login did not settle and
    /// [`AppError::Internal`] on database errors.
    pub async fn verify_and_resolve(&self, payload: &str, signature: &str) -> Result<User, AppError> {
        let assertion = self
            .client
            .verify_response(payload, signature)
            .map_err(|e| match e {
                SsoError::InvalidSignature => AppError::signature(e.to_string()),
                other => {
                    warn!(error = %other, "Malformed SSO payload");
                    AppError::bad_request("Bad request", json!({}))
                }
            })?;

        let user = self
            .store
            .get_or_create_user(&assertion.external_id, &assertion.email, true)
            .await?
            .ok_or_else(|| race_lost("user"))?;

        info!(user_id = user.id, "SSO login");

        Ok(user)
    }
}
