//! Member projection returned by the API: no password hash, age computed
//! from the stored date of birth.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::member::{age_on, Gender, Member};

/// Member data returned in API responses (without sensitive fields)
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct MemberResponse {
    /// Member's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "lisa")]
    pub username: String,
    /// Display name
    #[schema(example = "Lisa")]
    pub known_as: String,
    /// Age in full years, derived from the date of birth
    #[schema(example = 29)]
    pub age: u32,
    pub gender: Gender,
    #[schema(example = "Lisbon")]
    pub city: String,
    #[schema(example = "Portugal")]
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    /// When the account was created
    pub created: DateTime<Utc>,
    /// When the member was last active
    pub last_active: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: member.username,
            known_as: member.known_as,
            age: age_on(member.date_of_birth, Utc::now().date_naive()),
            gender: member.gender,
            city: member.city,
            country: member.country,
            introduction: member.introduction,
            looking_for: member.looking_for,
            interests: member.interests,
            created: DateTime::from_timestamp_millis(member.created.timestamp_millis())
                .unwrap_or_default(),
            last_active: DateTime::from_timestamp_millis(member.last_active.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

/// Response for successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Response message
    pub message: String,
    /// JWT token for authentication
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Member information
    pub member: MemberResponse,
}
