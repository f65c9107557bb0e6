//! Developer-only helpers, mounted in development and test environments.

use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

use crate::api::dto::debug::DebugQuery;
use crate::error::AppError;
use crate::utils::credential_cookie;

/// Applies debug actions from the query string.
///
/// # Endpoint
///
/// `GET /debug?setapikey=<key>`
///
/// `setapikey` stores the given value in the credential cookie without any
/// check, which lets a developer act as any user whose key they know.
///
/// # Errors
///
/// Returns 400 Bad Request if the value cannot be carried in a cookie.
pub async fn debug_handler(Query(query): Query<DebugQuery>) -> Result<Response, AppError> {
    let mut response = "Debug actions OK".into_response();

    if let Some(api_key) = query.setapikey {
        let cookie = credential_cookie::issue(&api_key, Utc::now()).ok_or_else(|| {
            AppError::bad_request("Invalid cookie value", json!({ "field": "setapikey" }))
        })?;
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }

    Ok(response)
}
