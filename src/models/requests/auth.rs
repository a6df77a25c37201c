use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for member registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique username (3-30 characters), stored lowercase
    #[validate(length(
        min = 3,
        max = 30,
        message = "Username must be between 3 and 30 characters"
    ))]
    #[schema(example = "lisa")]
    pub username: String,
    /// Display name shown to other members
    #[validate(length(
        min = 1,
        max = 50,
        message = "Display name must be between 1 and 50 characters"
    ))]
    #[schema(example = "Lisa")]
    pub known_as: String,
    /// Gender: 'male' or 'female'
    #[validate(custom(function = "crate::validators::validate_gender"))]
    #[schema(example = "female")]
    pub gender: String,
    /// Date of birth in YYYY-MM-DD format; members must be 18 or older
    #[validate(custom(function = "crate::validators::validate_date_of_birth"))]
    #[schema(example = "1995-04-23")]
    pub date_of_birth: NaiveDate,
    /// City of residence
    #[validate(length(min = 1, max = 100, message = "City must be between 1 and 100 characters"))]
    #[schema(example = "Lisbon")]
    pub city: String,
    /// Country of residence
    #[validate(length(
        min = 1,
        max = 100,
        message = "Country must be between 1 and 100 characters"
    ))]
    #[schema(example = "Portugal")]
    pub country: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

/// Request payload for member login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "lisa")]
    pub username: String,
    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}
