//! `302 Found` redirect responses.
//!
//! Axum's [`axum::response::Redirect`] only offers 303/307/308; short link
//! and SSO redirects are plain 302s.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::AppError;

/// Builds a `302 Found` response pointing at `location`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if `location` cannot be carried in a header.
pub fn found(location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(location).map_err(|_| {
        AppError::internal(
            "Redirect target is not a valid header value",
            json!({ "location": location }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `302 Found` response that also sets a cookie.
pub fn found_with_cookie(location: &str, cookie: HeaderValue) -> Result<Response, AppError> {
    let mut response = found(location)?;
    response.headers_mut().append(header::SET_COOKIE, cookie);
    Ok(response)
}
