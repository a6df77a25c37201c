use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::ErrorResponse;
use crate::models::{
    AuthResponse, Gender, HealthResponse, LoginRequest, MemberResponse, PaginatedResponse,
    RegisterRequest, UpdateMemberRequest,
};

/// OpenAPI documentation for the MatchMeet API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MatchMeet API",
        version = "1.0.0",
        description = "REST API for the MatchMeet dating app: member directory with paged, filtered browsing and profile management.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authentication", description = "Member authentication endpoints (register, login)"),
        (name = "Members", description = "Member directory endpoints (paged listing, lookup, profile updates)")
    ),
    paths(
        crate::handlers::register,
        crate::handlers::login,
        crate::handlers::get_members,
        crate::handlers::get_member,
        crate::handlers::get_current_member,
        crate::handlers::update_current_member,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UpdateMemberRequest,
            Gender,
            MemberResponse,
            AuthResponse,
            PaginatedResponse<MemberResponse>,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT token obtained from the /api/auth/login endpoint",
                        ))
                        .build(),
                ),
            );
        }
    }
}
