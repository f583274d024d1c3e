use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::TokenClaims;

use crate::shared::error::GatewayError;

/// Extractor for the session set by `require_session`
/// Usage in handlers: `async fn handler(CurrentSession(claims): CurrentSession) -> Response`
pub struct CurrentSession(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentSession)
            .ok_or(GatewayError::Unauthorized)
    }
}
