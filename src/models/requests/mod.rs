//! Request models for API endpoints.

pub mod auth;
pub mod member;

pub use auth::*;
pub use member::*;
