/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-limited tokens that prove
 * a caller's identity. Tokens are stateless: there is no revocation list, so
 * validity is decided by the signature and the expiry claim alone.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validity window of an issued token
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// User ID
    pub user_id: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Parse the user id claim
    pub fn user_uuid(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.user_id).map_err(|_| TokenError::InvalidToken)
    }
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed token or expired token
    #[error("invalid token")]
    InvalidToken,

    /// The token could not be signed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies HS256 tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service with the one hour validity window
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::seconds(TOKEN_TTL_SECONDS))
    }

    /// Create a token service with a custom validity window
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token for a user, valid from now
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify and decode a token
    ///
    /// Fails with [`TokenError::InvalidToken`] on a bad signature, a
    /// malformed token or an expired one. No leeway is applied to expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token verification failed: {:?}", e);
            TokenError::InvalidToken
        })?;
        Ok(token_data.claims)
    }
}
