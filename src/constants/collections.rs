//! MongoDB collection names.

/// Collection holding member documents.
pub const COLLECTION_MEMBERS: &str = "members";
