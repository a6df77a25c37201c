//! Defaults and bounds for the member list filter.

/// Minimum age applied when the request does not specify one.
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Maximum age applied when the request does not specify one.
pub const DEFAULT_MAX_AGE: u32 = 100;

/// Upper bound accepted for `max_age`; larger values are rejected.
pub const MAX_AGE_FILTER: u32 = 150;
