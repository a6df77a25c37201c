use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for updating the editable profile fields
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMemberRequest {
    /// Short self-description
    #[validate(length(max = 500, message = "Introduction must be at most 500 characters"))]
    #[schema(example = "Rustacean looking for a hiking partner")]
    pub introduction: Option<String>,
    /// What the member is looking for
    #[validate(length(max = 500, message = "Looking-for must be at most 500 characters"))]
    #[schema(example = "Someone who enjoys the outdoors")]
    pub looking_for: Option<String>,
    /// Hobbies and interests
    #[validate(length(max = 500, message = "Interests must be at most 500 characters"))]
    #[schema(example = "Hiking, chess, cooking")]
    pub interests: Option<String>,
    /// City of residence
    #[validate(length(min = 1, max = 100, message = "City must be between 1 and 100 characters"))]
    #[schema(example = "Porto")]
    pub city: Option<String>,
    /// Country of residence
    #[validate(length(
        min = 1,
        max = 100,
        message = "Country must be between 1 and 100 characters"
    ))]
    #[schema(example = "Portugal")]
    pub country: Option<String>,
}

/// Query parameters for listing members with pagination, filters, and sort
#[derive(Debug, Deserialize)]
pub struct MemberListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Minimum age filter (default: 18)
    pub min_age: Option<u32>,
    /// Maximum age filter (default: 100)
    pub max_age: Option<u32>,
    /// Filter by gender: "male" or "female" (default: opposite of the requester)
    pub gender: Option<String>,
    /// Sort order: "created" or "last_active" (default)
    pub order_by: Option<String>,
}
