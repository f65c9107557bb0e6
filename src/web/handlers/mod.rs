//! HTML template rendering handlers for the web pages.

mod apikey;
mod index;

pub use apikey::apikey_handler;
pub use index::index_handler;
