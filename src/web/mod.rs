//! Web layer for browser-based UI.
//!
//! Provides the landing page and the API key page.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cookie credential resolution
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
