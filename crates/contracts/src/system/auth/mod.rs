use serde::{Deserialize, Serialize};
use validator::Validate;

pub use crate::enums::Role;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Insira um email válido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecoveryPasswordRequest {
    #[validate(email(message = "Insira um email válido"))]
    pub email: String,
}

/// Signed-in user as exposed to every screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

crate::impl_identified!(SessionUser);

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Claims of the gateway session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user id
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Bearer token for the upstream API
    pub upstream_token: String,
    pub exp: usize,
    pub iat: usize,
}

impl TokenClaims {
    pub fn user(&self) -> SessionUser {
        SessionUser {
            id: self.sub.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_fields;

    #[test]
    fn test_login_requires_email_and_password() {
        let errors = validate_fields(&LoginRequest::default()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Insira um email válido"));
        assert_eq!(errors.get("password"), Some("Senha é obrigatória"));
    }

    #[test]
    fn test_session_user_accepts_underscore_id() {
        let user: SessionUser = serde_json::from_str(
            r#"{"_id":"u1","name":"Rita","email":"rita@gas.com","role":"DELIVERYMAN"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(!user.is_admin());
    }
}
