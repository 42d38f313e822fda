/**
 * Authentication Middleware
 *
 * Annotates every request with an `AuthContext`. The middleware never
 * rejects a request: a missing, malformed, expired or badly signed token
 * simply yields an unauthenticated context, and the resolvers decide
 * whether that is acceptable for the operation at hand.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Authentication result attached to each request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Whether a valid token was presented
    pub is_auth: bool,
    /// User id decoded from the token
    pub user_id: Option<Uuid>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: Uuid) -> Self {
        Self {
            is_auth: true,
            user_id: Some(user_id),
        }
    }

    /// The authenticated user's id, or `Unauthorized`
    pub fn require_user(&self) -> Result<Uuid, BackendError> {
        match (self.is_auth, self.user_id) {
            (true, Some(user_id)) => Ok(user_id),
            _ => Err(BackendError::unauthorized("not authenticated")),
        }
    }
}

/// Derive the auth context from request headers
///
/// The token is the second space-separated part of the `Authorization`
/// header (`Bearer <token>`).
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> AuthContext {
    let Some(header) = headers.get(AUTHORIZATION) else {
        return AuthContext::anonymous();
    };

    let Some(token) = header
        .to_str()
        .ok()
        .and_then(|value| value.split(' ').nth(1))
    else {
        tracing::debug!("Malformed Authorization header");
        return AuthContext::anonymous();
    };

    match tokens.verify(token).and_then(|claims| claims.user_uuid()) {
        Ok(user_id) => AuthContext::authenticated(user_id),
        Err(e) => {
            tracing::debug!("Rejected bearer token: {}", e);
            AuthContext::anonymous()
        }
    }
}

/// Authentication middleware
///
/// Inserts the [`AuthContext`] into request extensions and always hands the
/// request on to the next service.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = authenticate(request.headers(), &tokens);
    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Axum extractor for the auth context
///
/// Falls back to an anonymous context when the middleware did not run.
#[derive(Clone, Debug)]
pub struct Auth(pub AuthContext);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .unwrap_or_default();
        Ok(Auth(context))
    }
}
