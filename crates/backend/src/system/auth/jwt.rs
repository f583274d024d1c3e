use chrono::Utc;
use contracts::system::auth::{SessionUser, TokenClaims};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::shared::error::GatewayError;

/// Signing keys and lifetime of gateway session tokens
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    /// Signs a session token wrapping the upstream bearer token
    pub fn issue(&self, user: &SessionUser, upstream_token: &str) -> Result<String, GatewayError> {
        let now = Utc::now();
        let exp = (now + chrono::Duration::hours(self.ttl_hours)).timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = TokenClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            upstream_token: upstream_token.to_string(),
            exp,
            iat,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| GatewayError::Internal(format!("Failed to encode session token: {}", e)))
    }

    /// Validate session token and extract claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, GatewayError> {
        decode::<TokenClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected session token: {}", e);
                GatewayError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn user() -> SessionUser {
        SessionUser {
            id: "u1".into(),
            name: "Rita".into(),
            email: "rita@freitasgas.com".into(),
            role: Role::Deliveryman,
        }
    }

    #[test]
    fn test_issue_then_verify() {
        let keys = SessionKeys::new("secret", 24);
        let token = keys.issue(&user(), "upstream-abc").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.upstream_token, "upstream-abc");
        assert_eq!(claims.user(), user());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let token = SessionKeys::new("one", 24).issue(&user(), "t").unwrap();
        assert!(matches!(
            SessionKeys::new("two", 24).verify(&token),
            Err(GatewayError::Unauthorized)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = SessionKeys::new("secret", -2);
        let token = keys.issue(&user(), "t").unwrap();
        assert!(keys.verify(&token).is_err());
        assert!(keys.verify("not-a-jwt").is_err());
    }
}
