use actix_web::{web, HttpResponse};

use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // Auth routes (public)
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login)),
            )
            // Member routes (protected)
            .service(
                web::scope("/members")
                    .wrap(AuthMiddleware)
                    // Current member profile - must be before /{username} to avoid conflict
                    .route("/me", web::get().to(handlers::get_current_member))
                    .route("/me", web::put().to(handlers::update_current_member))
                    // Paged member directory
                    .route("", web::get().to(handlers::get_members))
                    // Specific member by username
                    .route("/{username}", web::get().to(handlers::get_member)),
            ),
    );
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}
