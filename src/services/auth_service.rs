//! Authentication service for registration, login, token generation, and
//! password utilities.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::{debug, info};
use std::sync::Arc;

use crate::config::CONFIG;
use crate::constants::{
    ERR_FAILED_FETCH_MEMBER, ERR_INVALID_CREDENTIALS, ERR_INVALID_GENDER, ERR_USERNAME_EXISTS,
};
use crate::errors::ApiError;
use crate::models::{Claims, Gender, LoginRequest, Member, RegisterRequest};
use crate::repositories::MemberRepository;
use crate::utils::mask_username;

/// Service for authentication operations.
pub struct AuthService {
    repository: Arc<MemberRepository>,
}

impl AuthService {
    /// Create a new AuthService with a shared repository.
    pub fn with_repository(repository: Arc<MemberRepository>) -> Self {
        Self { repository }
    }

    /// Register a new member account and issue a JWT token.
    pub async fn register(&self, req: RegisterRequest) -> Result<(Member, String), ApiError> {
        let username = req.username.to_lowercase();

        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }

        let gender = Gender::from_str(&req.gender)
            .ok_or_else(|| ApiError::BadRequest(ERR_INVALID_GENDER.to_string()))?;

        let password_hash = hash_password(&req.password)?;

        let now = mongodb::bson::DateTime::now();
        let member = Member {
            id: None,
            username,
            password_hash,
            known_as: req.known_as,
            gender,
            date_of_birth: req.date_of_birth,
            city: req.city,
            country: req.country,
            introduction: None,
            looking_for: None,
            interests: None,
            created: now,
            last_active: now,
        };

        let id = self.repository.insert(&member).await?;
        let member = Member {
            id: Some(id),
            ..member
        };

        let token = generate_token(&member)?;
        info!("Registered member {}", mask_username(&member.username));

        Ok((member, token))
    }

    /// Authenticate a member, refresh their last-active timestamp, and
    /// return a JWT token.
    pub async fn login(&self, req: LoginRequest) -> Result<(Member, String), ApiError> {
        let member = self
            .repository
            .find_by_username(&req.username.to_lowercase())
            .await?
            .ok_or_else(|| ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&req.password, &member.password_hash)? {
            return Err(ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string()));
        }

        let id = member
            .id
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_MEMBER.to_string()))?;
        self.repository.update_last_active(id).await?;

        let token = generate_token(&member)?;

        Ok((member, token))
    }
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Generate a JWT token for a member.
pub fn generate_token(member: &Member) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.jwt_expiration_hours as usize * 3600);

    let claims = Claims {
        sub: member.id.map(|id| id.to_hex()).unwrap_or_default(),
        username: member.username.clone(),
        exp,
        iat: now,
    };

    debug!("Generated token for member {}", mask_username(&member.username));

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}
