//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod debug;
pub mod redirect;
pub mod shorten;
pub mod sso;

pub use debug::debug_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use sso::{sso_callback_handler, sso_initiate_handler, sso_logout_handler};
