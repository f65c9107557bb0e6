//! User entity representing a federated account.

use chrono::{DateTime, Utc};

/// An account mapped from an identity-provider identity.
///
/// Exactly one row exists per `external_id`. The `api_key` is generated once at
/// creation and acts as a long-lived bearer credential; only `email` is ever
/// updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub external_id: String,
    pub email: String,
    pub api_key: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        external_id: String,
        email: String,
        api_key: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            external_id,
            email,
            api_key,
            created_at,
        }
    }
}

/// Input data for inserting a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub external_id: String,
    pub email: String,
    pub api_key: String,
}
