//! Utility functions for slug encoding, credentials, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`slug_codec`] - Bijective base-32 slug encoding of link ids
//! - [`api_key`] - Opaque API key generation
//! - [`credential_cookie`] - Credential cookie parsing and `Set-Cookie` building
//! - [`request_origin`] - Public origin resolution from config or headers
//! - [`redirect`] - `302 Found` responses

pub mod api_key;
pub mod credential_cookie;
pub mod redirect;
pub mod request_origin;
pub mod slug_codec;
