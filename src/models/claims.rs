use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Member id (hex ObjectId)
    pub sub: String,
    pub username: String,
    /// Expiration timestamp
    pub exp: usize,
    /// Issued-at timestamp
    pub iat: usize,
}
