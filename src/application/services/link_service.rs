//! Short link registration and resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::application::services::ResourceStore;
use crate::application::services::resource_store::race_lost;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::utils::slug_codec;

/// Service turning target URLs into slugs and back.
///
/// URLs are deduplicated by exact match: shortening the same URL twice, by the
/// same or different users, yields the same slug.
pub struct LinkService {
    store: Arc<ResourceStore>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self { store }
    }

    /// Registers `target_url` under `creator` and returns its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a concurrent registration of the same
    /// URL did not settle, and [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, target_url: &str, creator: &User) -> Result<String, AppError> {
        let link = self
            .store
            .get_or_create_link(target_url, creator.id, true)
            .await?
            .ok_or_else(|| race_lost("short_link"))?;

        let id = u64::try_from(link.id).map_err(|_| {
            AppError::internal("Negative link id", json!({ "id": link.id }))
        })?;

        Ok(slug_codec::encode(id))
    }

    /// Resolves a slug to its target URL.
    ///
    /// Malformed slugs, slugs outside the id range, and slugs with no backing
    /// row are all reported the same way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug does not name a stored link.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        let not_found = || AppError::not_found("Short link not found", json!({ "slug": slug }));

        let id = match slug_codec::decode(slug) {
            Ok(id) => i64::try_from(id).map_err(|_| not_found())?,
            Err(e) => {
                debug!(slug, error = %e, "Undecodable slug");
                return Err(not_found());
            }
        };

        self.store
            .get_link_by_id(id)
            .await?
            .map(|link| link.url)
            .ok_or_else(not_found)
    }

    /// Constructs the full short URL from the public origin and a slug.
    pub fn short_url(&self, origin: &str, slug: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortLink;
    use crate::domain::repositories::{MockLinkRepository, MockUserRepository};
    use chrono::Utc;

    fn creator(id: i64) -> User {
        User::new(
            id,
            format!("ext-{id}"),
            "alice@example.com".to_string(),
            "key".to_string(),
            Utc::now(),
        )
    }

    fn link(id: i64, url: &str) -> ShortLink {
        ShortLink::new(id, url.to_string(), 1, Utc::now())
    }

    fn service(links: MockLinkRepository) -> LinkService {
        let store = ResourceStore::new(Arc::new(MockUserRepository::new()), Arc::new(links));
        LinkService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_shorten_existing_url() {
        let mut links = MockLinkRepository::new();
        let existing = link(999, "https://example.com");
        links
            .expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        links.expect_insert().times(0);

        let slug = service(links)
            .shorten("https://example.com", &creator(2))
            .await
            .unwrap();

        assert_eq!(slug, "7H");
    }

    #[tokio::test]
    async fn test_shorten_new_url() {
        let mut links = MockLinkRepository::new();
        let mut seq = mockall::Sequence::new();
        links
            .expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        links
            .expect_insert()
            .withf(|new_link| new_link.creator_id == 3)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let stored = link(1, "https://example.com");
        links
            .expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(stored.clone())));

        let slug = service(links)
            .shorten("https://example.com", &creator(3))
            .await
            .unwrap();

        assert_eq!(slug, "0B");
    }

    #[tokio::test]
    async fn test_shorten_unsettled_race() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_url().times(2).returning(|_| Ok(None));
        links
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let result = service(links)
            .shorten("https://example.com", &creator(3))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_resolve_existing_slug() {
        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_id()
            .withf(|id| *id == 9393939)
            .times(1)
            .returning(|id| Ok(Some(link(id, "https://example.com/target"))));

        let url = service(links).resolve("i6vyt").await.unwrap();

        assert_eq!(url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = service(links).resolve("ZZ").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_slug_skips_store() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_id().times(0);

        let result = service(links).resolve("abc-1").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_out_of_range_slug_skips_store() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_id().times(0);

        // u64::MAX does not fit in a database id
        let slug = slug_codec::encode(u64::MAX);
        let result = service(links).resolve(&slug).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_short_url() {
        let service = service(MockLinkRepository::new());

        assert_eq!(
            service.short_url("https://i8.example.com/", "7H"),
            "https://i8.example.com/7H"
        );
        assert_eq!(
            service.short_url("http://localhost:3000", "0B"),
            "http://localhost:3000/0B"
        );
    }
}
