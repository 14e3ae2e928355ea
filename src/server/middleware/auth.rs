use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Flat role set. Routes declare the exact roles they accept; there is no
/// hierarchy (an ADMIN token does not satisfy a USER-only route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Shop,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Shop => "SHOP",
            Role::User => "USER",
        }
    }
}

/// Bearer token payload: subject id, email and role, plus expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: String,
    pub exp: u64,
    pub iat: u64,
}

/// HS256 key pair plus token lifetime, shared through `AppState`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl_seconds: u64,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            ttl_seconds,
        }
    }

    /// Issues a signed token for the given user.
    pub fn issue(&self, user: &entity::users::Model) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
            exp: now + self.ttl_seconds,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Decodes and validates a token, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Authorization guard executed at the top of protected handlers.
///
/// Extracts the bearer token, validates it, loads the caller from the
/// database and checks the role set. Fails closed: any missing piece
/// rejects the request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
    jwt: &'a JwtKeys,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap, jwt: &'a JwtKeys) -> Self {
        Self { db, headers, jwt }
    }

    /// Authenticates the caller and enforces the allowed role set.
    ///
    /// An empty `roles` slice means any authenticated, active account may
    /// pass. A non-empty slice is matched exactly against the caller's role.
    ///
    /// # Returns
    /// - `Ok(Model)` - the authenticated user row, for ownership checks
    /// - `Err(AppError)` - 401 for credential problems, 403 for role denial
    pub async fn require(&self, roles: &[Role]) -> Result<entity::users::Model, AppError> {
        let token = self.bearer_token()?;
        let claims = self.jwt.verify(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !user.active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        if !roles.is_empty() && !roles.iter().any(|r| r.as_str() == user.role) {
            return Err(AuthError::AccessDenied {
                user_id: user.id,
                role: user.role.clone(),
                message: "role not allowed for this route".to_string(),
            }
            .into());
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        self.headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
