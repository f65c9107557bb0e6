mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_shorten_with_form_apikey() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    let server = common::create_test_server(&memory);

    let response = server
        .post("/shorten")
        .form(&[("apikey", "alice-key"), ("url", "https://example.com")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "https://i8.test/0B");
    assert!(
        response
            .header(header::CONTENT_TYPE)
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );

    let links = memory.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "https://example.com");
    assert_eq!(links[0].creator_id, 1);
}

#[tokio::test]
async fn test_shorten_with_json_body() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    let server = common::create_test_server(&memory);

    let response = server
        .post("/shorten")
        .json(&json!({ "apikey": "alice-key", "url": "https://rust-lang.org" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "https://i8.test/0B");
}

#[tokio::test]
async fn test_shorten_with_cookie_credential() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    let server = common::create_test_server(&memory);

    let response = server
        .post("/shorten")
        .add_header(header::COOKIE, common::cookie_header("alice-key"))
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "https://i8.test/0B");
}

#[tokio::test]
async fn test_body_apikey_takes_precedence_over_cookie() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    memory.seed_user("ext-2", "bob@example.com", "bob-key");
    let server = common::create_test_server(&memory);

    server
        .post("/shorten")
        .add_header(header::COOKIE, common::cookie_header("alice-key"))
        .form(&[("apikey", "bob-key"), ("url", "https://example.com")])
        .await
        .assert_status_ok();

    assert_eq!(memory.links()[0].creator_id, 2);
}

#[tokio::test]
async fn test_blank_body_apikey_is_used_over_cookie() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    let server = common::create_test_server(&memory);

    server
        .post("/shorten")
        .add_header(header::COOKIE, common::cookie_header("alice-key"))
        .form(&[("apikey", ""), ("url", "https://example.com")])
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(memory.links().is_empty());
}

#[tokio::test]
async fn test_same_url_returns_same_slug_for_any_user() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    memory.seed_user("ext-2", "bob@example.com", "bob-key");
    let server = common::create_test_server(&memory);

    let first = server
        .post("/shorten")
        .form(&[("apikey", "alice-key"), ("url", "https://example.com")])
        .await
        .text();
    let again = server
        .post("/shorten")
        .form(&[("apikey", "alice-key"), ("url", "https://example.com")])
        .await
        .text();
    let other_user = server
        .post("/shorten")
        .form(&[("apikey", "bob-key"), ("url", "https://example.com")])
        .await
        .text();

    assert_eq!(first, again);
    assert_eq!(first, other_user);
    assert_eq!(memory.links().len(), 1);
    assert_eq!(memory.links()[0].creator_id, 1);
}

#[tokio::test]
async fn test_url_is_stored_verbatim() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    let server = common::create_test_server(&memory);

    let padded = server
        .post("/shorten")
        .form(&[("apikey", "alice-key"), ("url", "  https://example.com  ")])
        .await
        .text();
    let plain = server
        .post("/shorten")
        .form(&[("apikey", "alice-key"), ("url", "https://example.com")])
        .await
        .text();

    assert_ne!(padded, plain);
    let links = memory.links();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].url, "  https://example.com  ");
    assert_eq!(links[1].url, "https://example.com");
}

#[tokio::test]
async fn test_slug_follows_link_id() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    memory.seed_link(998, "https://example.com/earlier", 1);
    let server = common::create_test_server(&memory);

    let response = server
        .post("/shorten")
        .form(&[("apikey", "alice-key"), ("url", "https://example.com/next")])
        .await;

    assert_eq!(response.text(), "https://i8.test/7H");
}

#[tokio::test]
async fn test_missing_credential_is_bad_request() {
    let memory = common::InMemoryStore::new();
    let server = common::create_test_server(&memory);

    let response = server
        .post("/shorten")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(memory.links().is_empty());
}

#[tokio::test]
async fn test_unknown_credential_is_bad_request() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    let server = common::create_test_server(&memory);

    let response = server
        .post("/shorten")
        .form(&[("apikey", "wrong-key"), ("url", "https://example.com")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(memory.links().is_empty());
}

#[tokio::test]
async fn test_missing_or_blank_url_is_bad_request() {
    let memory = common::InMemoryStore::new();
    memory.seed_user("ext-1", "alice@example.com", "alice-key");
    let server = common::create_test_server(&memory);

    server
        .post("/shorten")
        .form(&[("apikey", "alice-key")])
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/shorten")
        .form(&[("apikey", "alice-key"), ("url", "   ")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "bad_request");
    assert!(memory.links().is_empty());
}
