//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. The pool
//! is passed explicitly to each repository constructor.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User accounts and API keys
//! - [`PgLinkRepository`] - Registered target URLs

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
