//! Stateless bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying only the username as subject plus
//! issued-at and expiry timestamps. Verification is a pure function of the
//! token string, the signing key, and the current time; the three failure
//! modes (expired, bad signature, unparseable) are kept distinct so the
//! boundary can report what actually went wrong.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
    get_current_timestamp,
};
use serde::{Deserialize, Serialize};

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username (subject claim)
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch
    pub iat: usize,
    /// Expiry, seconds since the Unix epoch
    pub exp: usize,
}

/// Issues a signed token asserting `username` until the configured
/// lifetime elapses. Claims have second granularity, so the lifetime
/// rounds up; a sub-second configuration still yields a live token.
pub fn create_token(username: &str, config: &JwtConfig) -> Result<String, AppError> {
    let iat = get_current_timestamp() as i64;
    // Ceiling division; `i64::div_ceil` is not yet stable.
    let exp = iat + (config.expiry_ms / 1000 + (config.expiry_ms % 1000 > 0) as i64);

    let claims = Claims {
        sub: username.to_string(),
        iat: iat as usize,
        exp: exp.max(0) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(&config.secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to create token: {}", e)))
}

/// Verifies `token` and returns its subject claim.
pub fn token_subject(token: &str, config: &JwtConfig) -> Result<String, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(&config.secret), &validation)
        .map(|data| data.claims.sub)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::TokenExpired,
            ErrorKind::InvalidSignature => AppError::TokenInvalid,
            _ => AppError::TokenMalformed,
        })
}

/// Checks that `token` verifies without caring about its contents.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<(), AppError> {
    token_subject(token, config).map(|_| ())
}
