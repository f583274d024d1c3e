//! Error type of every gateway handler.
//!
//! Responses always carry the same `{ "error": msg }` body the upstream API
//! uses, so the SPA decodes gateway and upstream failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::api::ApiErrorBody;
use contracts::shared::validation::FieldErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{}", .0.first().unwrap_or("Dados inválidos"))]
    Validation(FieldErrors),
    #[error("Sessão inválida ou expirada")]
    Unauthorized,
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
    #[error("Servidor indisponível, tente novamente em instantes")]
    Unreachable(String),
    #[error("Erro interno do servidor")]
    Internal(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds an upstream failure from its status and raw body
    pub fn from_upstream(status: StatusCode, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.into_message(fallback))
            .unwrap_or_else(|_| fallback.to_string());
        GatewayError::Upstream { status, message }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Unreachable(e.to_string())
    }
}

impl From<FieldErrors> for GatewayError {
    fn from(errors: FieldErrors) -> Self {
        GatewayError::Validation(errors)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            GatewayError::Unreachable(detail) => tracing::error!("Upstream unreachable: {}", detail),
            GatewayError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            other => tracing::debug!("Request rejected with {}: {}", status, other),
        }

        let mut body = ApiErrorBody::new(self.to_string());
        if let GatewayError::Validation(errors) = self {
            body.details = Some(errors.0);
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: GatewayError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unauthorized_body() {
        let (status, body) = body_of(GatewayError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Sessão inválida ou expirada");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_validation_body_has_details() {
        let mut errors = FieldErrors::default();
        errors.insert("email", "Insira um email válido");
        errors.insert("password", "Senha é obrigatória");

        let (status, body) = body_of(GatewayError::Validation(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Insira um email válido");
        assert_eq!(body["details"]["password"][0], "Senha é obrigatória");
    }

    #[tokio::test]
    async fn test_upstream_message_is_relayed() {
        let err = GatewayError::from_upstream(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Email ou senha incorretos"}"#,
            "Falha ao entrar",
        );
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Email ou senha incorretos");
    }

    #[test]
    fn test_upstream_unreadable_body_uses_fallback() {
        let err = GatewayError::from_upstream(StatusCode::BAD_GATEWAY, "<html>", "Falha ao entrar");
        assert_eq!(err.to_string(), "Falha ao entrar");
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
