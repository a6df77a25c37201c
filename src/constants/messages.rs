//! Success message constants.

pub const MSG_MEMBER_REGISTERED: &str = "Member registered successfully";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful";
pub const MSG_MEMBER_FOUND: &str = "Member found";
pub const MSG_PROFILE_RETRIEVED: &str = "Member profile retrieved";
pub const MSG_PROFILE_UPDATED: &str = "Member profile updated successfully";
