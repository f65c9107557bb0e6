//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    external_id: String,
    email: String,
    api_key: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.external_id, r.email, r.api_key, r.created_at)
    }
}

/// PostgreSQL repository for user accounts.
///
/// Relies on the `users_external_id_key` and `users_api_key_key` unique
/// constraints to reject duplicate inserts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, external_id, email, api_key, created_at
            FROM users
            WHERE external_id = $1
            "#,
        )
        .bind(external_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, external_id, email, api_key, created_at
            FROM users
            WHERE api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (external_id, email, api_key)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&new_user.external_id)
        .bind(&new_user.email)
        .bind(&new_user.api_key)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn update_email(&self, id: i64, email: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET email = $1 WHERE id = $2")
            .bind(email)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
