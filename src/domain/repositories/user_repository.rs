//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// The store must enforce uniqueness of `external_id` and `api_key`; the
/// get-or-create protocol relies on [`UserRepository::insert`] failing with
/// [`AppError::Conflict`] when a concurrent creator won.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by identity-provider id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by API key (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user as a single statement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `external_id` or `api_key` already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<(), AppError>;

    /// Overwrites the stored email of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_email(&self, id: i64, email: &str) -> Result<(), AppError>;
}
