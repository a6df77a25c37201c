//! Member directory handlers: paged listing, lookup, and profile updates.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};
use validator::Validate;

use crate::constants::{
    ERR_AUTH_REQUIRED, ERR_MEMBER_NOT_FOUND, MSG_MEMBER_FOUND, MSG_PROFILE_RETRIEVED,
    MSG_PROFILE_UPDATED,
};
use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{
    ApiResponse, Claims, MemberListQuery, MemberResponse, PaginatedResponse, UpdateMemberRequest,
};
use crate::services::MemberService;
use crate::utils::mask_username;
use crate::validators::validation_errors_to_api_error;

fn require_claims(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Failed to get claims from request");
        ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
    })
}

/// List members with pagination, filters, and sort order
#[utoipa::path(
    get,
    path = "/api/members",
    tag = "Members",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)"),
        ("min_age" = Option<u32>, Query, description = "Minimum age (default: 18)"),
        ("max_age" = Option<u32>, Query, description = "Maximum age (default: 100)"),
        ("gender" = Option<String>, Query, description = "Filter by gender: 'male' or 'female' (default: opposite of the requester)"),
        ("order_by" = Option<String>, Query, description = "Sort order: 'created' or 'last_active' (default: last_active)")
    ),
    responses(
        (status = 200, description = "Paged list of members", body = PaginatedResponse<MemberResponse>),
        (status = 400, description = "Invalid filter parameters", body = crate::errors::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_members(
    member_service: web::Data<MemberService>,
    query: web::Query<MemberListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_claims(&req)?;

    let members = member_service
        .get_members(&claims.username, query.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::from(members)))
}

/// Get a specific member by username
#[utoipa::path(
    get,
    path = "/api/members/{username}",
    tag = "Members",
    params(
        ("username" = String, Path, description = "Member username")
    ),
    responses(
        (status = 200, description = "Member found", body = MemberResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 404, description = "Member not found", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_member(
    member_service: web::Data<MemberService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    debug!("Fetching member: {}", mask_username(&username));

    let member = member_service
        .get_member(&username)
        .await?
        .ok_or_else(|| {
            warn!("Member not found: {}", mask_username(&username));
            ApiError::NotFound(ERR_MEMBER_NOT_FOUND.to_string())
        })?;

    let member_response: MemberResponse = member.into();
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_MEMBER_FOUND, member_response)))
}

/// Get the currently authenticated member's profile
#[utoipa::path(
    get,
    path = "/api/members/me",
    tag = "Members",
    responses(
        (status = 200, description = "Current member profile", body = MemberResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 404, description = "Member not found", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_current_member(
    member_service: web::Data<MemberService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_claims(&req)?;

    let member = member_service
        .get_member(&claims.username)
        .await?
        .ok_or_else(|| ApiError::NotFound(ERR_MEMBER_NOT_FOUND.to_string()))?;

    let member_response: MemberResponse = member.into();
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROFILE_RETRIEVED, member_response)))
}

/// Update the currently authenticated member's profile
#[utoipa::path(
    put,
    path = "/api/members/me",
    tag = "Members",
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Profile updated", body = MemberResponse),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 404, description = "Member not found", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_current_member(
    member_service: web::Data<MemberService>,
    body: web::Json<UpdateMemberRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_claims(&req)?;

    // Validate input
    body.validate().map_err(validation_errors_to_api_error)?;

    let updated = member_service
        .update_member(&claims.username, body.into_inner())
        .await?;
    let member_response: MemberResponse = updated.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROFILE_UPDATED, member_response)))
}
