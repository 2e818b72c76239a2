//! Auth service
//!
//! Admin login and JWT verification. Passwords are checked with bcrypt
//! against the stored hash; successful logins get an HS256 token good for
//! 24 hours.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{AdminRole, AdminUser};
use crate::domain::ports::AdminUserRepository;
use crate::error::AppError;

const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried in an admin JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin user id
    pub sub: Uuid,
    pub email: String,
    pub role: AdminRole,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Service for admin authentication
pub struct AuthService<AR>
where
    AR: AdminUserRepository,
{
    admins: Arc<AR>,
    jwt_secret: String,
}

impl<AR> AuthService<AR>
where
    AR: AdminUserRepository,
{
    pub fn new(admins: Arc<AR>, jwt_secret: String) -> Self {
        Self { admins, jwt_secret }
    }

    /// Verify credentials and issue a token.
    ///
    /// Unknown email and wrong password both resolve to the same
    /// Unauthorized error so the response does not leak which was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, AdminUser), AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }

        let admin = self
            .admins
            .find_by_email(email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let valid = bcrypt::verify(password, &admin.password_hash)
            .map_err(|e| AppError::Internal(format!("password verification failed: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized);
        }

        let token = self.issue_token(&admin)?;
        Ok((token, admin))
    }

    /// Verify a bearer token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthorized)?;

        Ok(data.claims)
    }

    fn issue_token(&self, admin: &AdminUser) -> Result<String, AppError> {
        let claims = AdminClaims {
            sub: admin.id.0,
            email: admin.email.clone(),
            role: admin.role,
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("token signing failed: {}", e)))
    }
}
