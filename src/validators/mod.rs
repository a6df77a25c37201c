//! Request validation helpers and custom validators.

pub mod common;
pub mod member;

pub use common::*;
pub use member::*;
