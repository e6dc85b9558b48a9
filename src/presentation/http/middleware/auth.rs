use axum::http::{HeaderMap, header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presentation::http::errors::AppError;

/// Bearer token claims. Only the subject (actor id) is trusted from the
/// token; the role is re-resolved from the identity store inside every use
/// case before a mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub exp: usize,
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

pub fn decode_optional_claims(headers: &HeaderMap, secret: &str) -> Option<UserClaims> {
    let token = extract_bearer_token(headers)?;
    decode::<UserClaims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|d| d.claims)
}

/// Resolves the caller's actor id or fails with 401.
pub fn require_actor_id(headers: &HeaderMap, secret: &str) -> Result<Uuid, AppError> {
    let claims = decode_optional_claims(headers, secret).ok_or(AppError::Unauthenticated)?;
    Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthenticated)
}
