//! Bearer credential resolution.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::ResourceStore;
use crate::domain::entities::User;
use crate::error::AppError;

/// Service resolving API keys to users.
///
/// The API key is compared by exact match against the stored value. There is
/// no hashing, expiry, or revocation: whoever holds the key is the user.
pub struct AuthService {
    store: Arc<ResourceStore>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self { store }
    }

    /// Resolves a credential to its user, if any.
    ///
    /// Blank credentials resolve to `None` without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, credential: &str) -> Result<Option<User>, AppError> {
        if credential.is_empty() {
            return Ok(None);
        }

        self.store.get_user_by_api_key(credential).await
    }

    /// Resolves the first present credential, rejecting missing or unknown ones.
    ///
    /// Candidates are checked in order; the first `Some` is the one used, even
    /// if it does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no credential was supplied or it
    /// matches no user. Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(
        &self,
        candidates: impl IntoIterator<Item = Option<String>>,
    ) -> Result<User, AppError> {
        let credential = candidates.into_iter().flatten().next().ok_or_else(|| {
            AppError::bad_request("Missing API key", json!({ "field": "apikey" }))
        })?;

        self.resolve(&credential)
            .await?
            .ok_or_else(|| AppError::bad_request("Unknown API key", json!({})))
    }
}
