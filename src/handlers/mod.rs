//! HTTP request handlers.

pub mod auth_handler;
pub mod member_handler;

pub use auth_handler::*;
pub use member_handler::*;
