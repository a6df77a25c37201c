//! Response models for API endpoints.

pub mod api;
pub mod member;
pub mod pagination;

pub use api::*;
pub use member::*;
pub use pagination::*;
