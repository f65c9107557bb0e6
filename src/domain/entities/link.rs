//! Short link entity representing a registered target URL.

use chrono::{DateTime, Utc};

/// A registered target URL.
///
/// The public slug is not stored; it is derived from `id` via
/// [`crate::utils::slug_codec`]. Exactly one row exists per `url`
/// (byte-exact, no normalization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub url: String,
    pub creator_id: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, url: String, creator_id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url,
            creator_id,
            created_at,
        }
    }
}

/// Input data for inserting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub url: String,
    pub creator_id: i64,
}
