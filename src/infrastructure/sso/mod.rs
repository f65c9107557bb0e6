//! Identity-provider integration.
//!
//! The provider and this service share a client secret. Every message in
//! either direction is a base64 JSON `payload` plus a base64
//! HMAC-SHA256 `signature` computed over the payload string as transmitted.

mod client;

pub use client::{SsoAssertion, SsoClient, SsoError};
