//! Data models organized by type.

pub mod claims;
pub mod filter;
pub mod member;
pub mod requests;
pub mod responses;

pub use claims::*;
pub use filter::*;
pub use member::*;
pub use requests::*;
pub use responses::*;
