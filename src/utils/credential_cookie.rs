//! Bearer credential cookie transport.
//!
//! The API key travels in a cookie named [`COOKIE_NAME`], scoped to `/`,
//! valid for seven days.

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};
use chrono::{DateTime, Duration, Utc};

/// Name of the cookie carrying the API key.
pub const COOKIE_NAME: &str = "i8apikey";

/// Lifetime of an issued credential cookie.
pub const COOKIE_MAX_AGE_DAYS: i64 = 7;

/// Extracts the credential from the `Cookie` header(s).
///
/// Handles multiple cookies per header and multiple `Cookie` headers.
/// Empty values are treated as absent.
pub fn read(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(COOKIE_NAME), Some(value)) if !value.is_empty() => Some(value.to_string()),
                _ => None,
            }
        })
}

/// Builds a `Set-Cookie` value issuing `api_key` for seven days from `now`.
///
/// Returns `None` if the key contains characters not allowed in a cookie value.
pub fn issue(api_key: &str, now: DateTime<Utc>) -> Option<HeaderValue> {
    if api_key.is_empty()
        || !api_key
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, ';' | ',' | '"' | '\\'))
    {
        return None;
    }

    let max_age = Duration::days(COOKIE_MAX_AGE_DAYS);
    let expires = (now + max_age).format("%a, %d %b %Y %H:%M:%S GMT");

    HeaderValue::from_str(&format!(
        "{COOKIE_NAME}={api_key}; Path=/; Max-Age={}; Expires={expires}; HttpOnly; SameSite=Lax",
        max_age.num_seconds()
    ))
    .ok()
}

/// Builds a `Set-Cookie` value that deletes the credential cookie.
pub fn clear() -> HeaderValue {
    HeaderValue::from_static(
        "i8apikey=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax",
    )
}
