use axum::{extract::State, http::StatusCode, response::Response, Json};
use contracts::shared::api::Record;
use contracts::shared::validation::validate_fields;
use contracts::system::auth::{LoginRequest, LoginResponse, RecoveryPasswordRequest, SessionUser};
use serde::Deserialize;

use crate::routes::AppState;
use crate::shared::error::GatewayError;
use crate::system::auth::extractor::CurrentSession;
use crate::system::handlers::proxy::relay;

/// Sign-in answer of the upstream API
#[derive(Debug, Deserialize)]
struct UpstreamLogin {
    #[serde(alias = "access_token", alias = "accessToken")]
    token: String,
    user: Record<SessionUser>,
}

fn parse_upstream_login(body: &str) -> Result<UpstreamLogin, GatewayError> {
    serde_json::from_str(body)
        .map_err(|e| GatewayError::Internal(format!("Unexpected login response: {}", e)))
}

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, GatewayError> {
    validate_fields(&request)?;

    let response = state
        .upstream
        .client
        .post(state.upstream.login_url())
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::warn!("Login for {} rejected by upstream: {}", request.email, status);
        return Err(GatewayError::from_upstream(
            status,
            &body,
            "Email ou senha inválidos",
        ));
    }

    let upstream = parse_upstream_login(&body)?;
    let user = upstream.user.into_inner();
    let access_token = state.keys.issue(&user, &upstream.token)?;

    tracing::info!("User {} signed in ({})", user.email, user.role.code());
    Ok(Json(LoginResponse { access_token, user }))
}

/// Get current user handler (protected by middleware)
pub async fn me(CurrentSession(claims): CurrentSession) -> Json<SessionUser> {
    Json(claims.user())
}

/// Sessions are stateless, the client drops its token
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Public pass-through to the upstream recovery endpoint
pub async fn recovery_password(
    State(state): State<AppState>,
    Json(request): Json<RecoveryPasswordRequest>,
) -> Result<Response, GatewayError> {
    validate_fields(&request)?;

    let response = state
        .upstream
        .client
        .post(state.upstream.url("/recovery-password", None))
        .json(&request)
        .send()
        .await?;

    tracing::info!("Password recovery requested for {}", request.email);
    relay(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_token_field_aliases() {
        for field in ["token", "access_token", "accessToken"] {
            let body = format!(
                r#"{{"{}":"up-1","user":{{"id":"u1","name":"Ana","email":"ana@gas.com","role":"ADMIN"}}}}"#,
                field
            );
            let parsed = parse_upstream_login(&body).unwrap();
            assert_eq!(parsed.token, "up-1");
            assert!(parsed.user.0.is_admin());
        }
    }

    #[test]
    fn test_login_user_in_props_envelope() {
        let body = r#"{"token":"t","user":{"_id":"u9","props":{"name":"Rita","email":"rita@gas.com","role":"DELIVERYMAN"}}}"#;
        let user = parse_upstream_login(body).unwrap().user.into_inner();
        assert_eq!(user.id, "u9");
        assert_eq!(user.name, "Rita");
    }

    #[test]
    fn test_login_without_token_is_an_error() {
        let body = r#"{"user":{"id":"u1","name":"Ana","email":"ana@gas.com","role":"ADMIN"}}"#;
        assert!(matches!(
            parse_upstream_login(body),
            Err(GatewayError::Internal(_))
        ));
    }
}
