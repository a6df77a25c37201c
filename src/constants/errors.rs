//! Error message constants.

pub const ERR_USERNAME_EXISTS: &str = "Username is already taken";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const ERR_MEMBER_NOT_FOUND: &str = "Member not found";
pub const ERR_INVALID_GENDER: &str = "Gender must be either 'male' or 'female'";
pub const ERR_INVALID_AGE_RANGE: &str =
    "Invalid age range: min_age must not exceed max_age, and max_age must be at most 150";
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or malformed Authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_FAILED_FETCH_MEMBER: &str = "Failed to load member record";
