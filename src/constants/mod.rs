//! Application constants module.
//!
//! Centralizes constant strings and numeric defaults used throughout the
//! application: error messages, success messages, collection names, and
//! pagination/filter defaults.

pub mod collections;
pub mod errors;
pub mod filters;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use errors::*;
pub use filters::*;
pub use messages::*;
pub use pagination::*;
