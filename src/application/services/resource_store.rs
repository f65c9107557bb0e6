//! Idempotent get-or-create access to users and short links.

use std::future::Future;
use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{NewShortLink, NewUser, ShortLink, User};
use crate::domain::repositories::{LinkRepository, UserRepository};
use crate::error::AppError;
use crate::utils::api_key::generate_api_key;

/// Persistent-backed accessors for [`User`] and [`ShortLink`].
///
/// Both entity types share one protocol keyed by a store-enforced unique
/// column (`external_id` for users, `url` for links):
///
/// 1. Look the row up by key; return it if present.
/// 2. If creation is not allowed, return `None`.
/// 3. Insert once.
/// 4. Look the row up exactly once more and return whatever the store holds.
///
/// A uniqueness violation at step 3 means a concurrent request created the
/// row first. It is logged and step 4 still runs, so the loser normally
/// returns the winner's row. If that final lookup is empty the result is
/// `None`. Any other store failure propagates.
pub struct ResourceStore {
    users: Arc<dyn UserRepository>,
    links: Arc<dyn LinkRepository>,
}

impl ResourceStore {
    pub fn new(users: Arc<dyn UserRepository>, links: Arc<dyn LinkRepository>) -> Self {
        Self { users, links }
    }

    /// Returns the user for `external_id`, creating it if allowed.
    ///
    /// An existing user whose stored email differs from `email` is updated in
    /// place; `id` and `api_key` never change. New users get a fresh API key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures other than a lost
    /// insert race.
    pub async fn get_or_create_user(
        &self,
        external_id: &str,
        email: &str,
        allow_create: bool,
    ) -> Result<Option<User>, AppError> {
        let user = get_or_create(
            external_id,
            allow_create,
            || self.users.find_by_external_id(external_id),
            || async {
                let new_user = NewUser {
                    external_id: external_id.to_string(),
                    email: email.to_string(),
                    api_key: generate_api_key()?,
                };
                self.users.insert(new_user).await?;
                info!(external_id, "Created user");
                Ok::<(), AppError>(())
            },
        )
        .await?;

        let Some(mut user) = user else {
            return Ok(None);
        };

        if user.email != email {
            self.users.update_email(user.id, email).await?;
            info!(user_id = user.id, "Updated user email");
            user.email = email.to_string();
        }

        Ok(Some(user))
    }

    /// Looks a user up by API key. Never creates.
    pub async fn get_user_by_api_key(&self, api_key: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_api_key(api_key).await
    }

    /// Returns the link registered for `url`, creating it if allowed.
    ///
    /// Existing links are returned unchanged, regardless of `creator_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures other than a lost
    /// insert race.
    pub async fn get_or_create_link(
        &self,
        url: &str,
        creator_id: i64,
        allow_create: bool,
    ) -> Result<Option<ShortLink>, AppError> {
        get_or_create(
            url,
            allow_create,
            || self.links.find_by_url(url),
            || async {
                let new_link = NewShortLink {
                    url: url.to_string(),
                    creator_id,
                };
                self.links.insert(new_link).await?;
                info!(creator_id, "Created short link");
                Ok::<(), AppError>(())
            },
        )
        .await
    }

    /// Looks a link up by id. Never creates.
    pub async fn get_link_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError> {
        self.links.find_by_id(id).await
    }
}

/// Lookup, single insert, single re-lookup.
async fn get_or_create<T, Lookup, LookupFut, Insert, InsertFut>(
    key: &str,
    allow_create: bool,
    lookup: Lookup,
    insert: Insert,
) -> Result<Option<T>, AppError>
where
    Lookup: Fn() -> LookupFut,
    LookupFut: Future<Output = Result<Option<T>, AppError>>,
    Insert: FnOnce() -> InsertFut,
    InsertFut: Future<Output = Result<(), AppError>>,
{
    if let Some(existing) = lookup().await? {
        return Ok(Some(existing));
    }

    if !allow_create {
        return Ok(None);
    }

    match insert().await {
        Ok(()) => {}
        Err(AppError::Conflict { .. }) => {
            warn!(key, "Lost insert race, re-reading the winning row");
        }
        Err(e) => return Err(e),
    }

    let stored = lookup().await?;
    if stored.is_none() {
        warn!(key, "Row missing after insert");
    }
    Ok(stored)
}

/// Converts a missing get-or-create result into a retryable error.
pub(crate) fn race_lost(what: &str) -> AppError {
    AppError::conflict(
        "Concurrent creation did not settle, retry the request",
        json!({ "resource": what }),
    )
}
