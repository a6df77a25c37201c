//! Authentication handlers for member registration and login.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::{MSG_LOGIN_SUCCESS, MSG_MEMBER_REGISTERED};
use crate::errors::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services::AuthService;
use crate::validators::validation_errors_to_api_error;

/// Register a new member account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Member registered successfully", body = AuthResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 409, description = "Username already exists", body = crate::errors::ErrorResponse)
    )
)]
pub async fn register(
    auth_service: web::Data<AuthService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let (member, token) = auth_service.register(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        success: true,
        message: MSG_MEMBER_REGISTERED.to_string(),
        token,
        member: member.into(),
    }))
}

/// Authenticate a member and get a JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::errors::ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let (member, token) = auth_service.login(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: MSG_LOGIN_SUCCESS.to_string(),
        token,
        member: member.into(),
    }))
}
