//! Public origin resolution for absolute URLs.

use crate::AppError;
use axum::http::{HeaderMap, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the public origin (`scheme://host[:port]`) of the service.
///
/// A configured `public_url` always wins. Otherwise the origin is rebuilt
/// from the request: scheme from `X-Forwarded-Proto` (default `http`) and
/// authority from the `Host` header, port included.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no public URL is configured and the
/// `Host` header is missing, empty, or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "i8.example.com:8080".parse().unwrap());
///
/// let origin = request_origin(&headers, None).unwrap();
/// assert_eq!(origin, "http://i8.example.com:8080");
/// ```
pub fn request_origin(headers: &HeaderMap, public_url: Option<&str>) -> Result<String, AppError> {
    if let Some(url) = public_url {
        return Ok(url.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request(
            "Missing Host header",
            serde_json::json!({}),
        ));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| *v == "http" || *v == "https")
        .unwrap_or("http");

    Ok(format!("{scheme}://{host}"))
}
