//! DTOs for the link shortening endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::Deserialize;
use serde_json::json;
use validator::{Validate, ValidationError};

use crate::error::AppError;

/// Raw `/shorten` body, accepted as a form or as JSON.
///
/// Both fields are optional at this stage so that a missing field becomes a
/// validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenForm {
    pub apikey: Option<String>,
    pub url: Option<String>,
}

impl<S> FromRequest<S> for ShortenForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.trim_start().starts_with("application/json"));

        if is_json {
            let Json(form) = Json::<ShortenForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() })))?;
            Ok(form)
        } else {
            let Form(form) = Form::<ShortenForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request("Invalid form body", json!({ "reason": e.body_text() })))?;
            Ok(form)
        }
    }
}

/// Shorten request as received.
///
/// A present body credential is used even when blank. The URL is kept
/// byte-for-byte; only the blank check ignores surrounding whitespace.
#[derive(Debug, Validate)]
pub struct ShortenRequest {
    pub apikey: Option<String>,

    #[validate(custom(function = "not_blank", message = "URL is required"))]
    pub url: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl From<ShortenForm> for ShortenRequest {
    fn from(form: ShortenForm) -> Self {
        Self {
            apikey: form.apikey,
            url: form.url.unwrap_or_default(),
        }
    }
}
