//! Bearer credential verification.
//!
//! Identity is established outside this core; requests and WebSocket
//! connections present a signed bearer token whose claims carry the resolved
//! user id and role. This service verifies signatures and expiry and hands
//! the claims to the authorization guard. Issuing is provided for the login
//! boundary and for tests.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::user::Role};

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user.
    pub sub: i32,
    /// Role of the authenticated user.
    pub role: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Verifier (and issuer) for HS256 bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service around a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared with the token issuer
    ///
    /// # Returns
    /// - `TokenService` - Service ready to verify and issue tokens
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issues a token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `role` - Role to embed in the claims
    /// - `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AuthError::InvalidCredentials)` - Signing failed
    pub fn issue(
        &self,
        user_id: i32,
        role: Role,
        ttl: chrono::Duration,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id,
            role: role.as_str().to_string(),
            exp: (chrono::Utc::now() + ttl).timestamp().max(0) as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Bearer token presented by the client
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims
    /// - `Err(AuthError::InvalidCredentials)` - Malformed, forged, or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))
    }
}
