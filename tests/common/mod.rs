#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, Mutex};

use i8_shortener::application::services::{ResourceStore, SsoService};
use i8_shortener::domain::entities::{NewShortLink, NewUser, ShortLink, User};
use i8_shortener::domain::repositories::{LinkRepository, UserRepository};
use i8_shortener::error::AppError;
use i8_shortener::infrastructure::sso::SsoClient;
use i8_shortener::routes::router;
use i8_shortener::state::AppState;

pub const PUBLIC_URL: &str = "https://i8.test";
pub const SSO_CLIENT_ID: &str = "i8-test";
pub const SSO_SECRET: &str = "test-shared-secret";
pub const SSO_SERVER_URL: &str = "https://sso.test/authorize";

/// In-memory users and links with the same unique keys as the database.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    links: Mutex<Vec<ShortLink>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn links(&self) -> Vec<ShortLink> {
        self.links.lock().unwrap().clone()
    }

    /// Inserts a user directly and returns it.
    pub fn seed_user(&self, external_id: &str, email: &str, api_key: &str) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User::new(
            users.len() as i64 + 1,
            external_id.to_string(),
            email.to_string(),
            api_key.to_string(),
            Utc::now(),
        );
        users.push(user.clone());
        user
    }

    /// Inserts a link with an explicit id.
    pub fn seed_link(&self, id: i64, url: &str, creator_id: i64) {
        self.links
            .lock()
            .unwrap()
            .push(ShortLink::new(id, url.to_string(), creator_id, Utc::now()));
    }
}

fn unique_violation(constraint: &str) -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": constraint }),
    )
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.api_key == api_key)
            .cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.external_id == new_user.external_id) {
            return Err(unique_violation("users_external_id_key"));
        }
        if users.iter().any(|u| u.api_key == new_user.api_key) {
            return Err(unique_violation("users_api_key_key"));
        }

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(User::new(
            id,
            new_user.external_id,
            new_user.email,
            new_user.api_key,
            Utc::now(),
        ));
        Ok(())
    }

    async fn update_email(&self, id: i64, email: &str) -> Result<(), AppError> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.email = email.to_string();
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.url == url)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<(), AppError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.url == new_link.url) {
            return Err(unique_violation("urls_url_key"));
        }

        let id = links.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        links.push(ShortLink::new(id, new_link.url, new_link.creator_id, Utc::now()));
        Ok(())
    }
}

pub fn sso_client() -> SsoClient {
    SsoClient::new(
        SSO_CLIENT_ID.to_string(),
        SSO_SECRET.to_string(),
        SSO_SERVER_URL.to_string(),
    )
}

/// Builds the resource store over the in-memory fixture.
pub fn create_test_store(memory: &Arc<InMemoryStore>) -> Arc<ResourceStore> {
    Arc::new(ResourceStore::new(memory.clone(), memory.clone()))
}

pub fn create_test_state(
    memory: &Arc<InMemoryStore>,
    sso_enabled: bool,
    public_url: Option<&str>,
) -> AppState {
    let store = create_test_store(memory);
    let sso = sso_enabled.then(|| SsoService::new(sso_client(), store.clone()));
    AppState::new(store, sso, public_url.map(str::to_string))
}

/// Test server over the full router, with SSO and debug routes enabled.
pub fn create_test_server(memory: &Arc<InMemoryStore>) -> TestServer {
    let state = create_test_state(memory, true, Some(PUBLIC_URL));
    TestServer::new(router(state, true)).unwrap()
}

/// Signs an assertion the way the identity provider does.
pub fn signed_assertion(external_id: &str, email: &str) -> (String, String) {
    let payload = STANDARD.encode(
        json!({ "user_data": { "external_id": external_id, "email": email } }).to_string(),
    );
    let signature = sso_client().sign(&payload);
    (payload, signature)
}

pub fn cookie_header(api_key: &str) -> axum::http::HeaderValue {
    axum::http::HeaderValue::from_str(&format!("i8apikey={api_key}")).unwrap()
}
