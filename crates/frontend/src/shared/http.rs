//! Authenticated JSON requests to the gateway.
//!
//! Every call attaches the session bearer token, decodes `{ error }` bodies
//! of non-2xx responses into [`ApiError::Http`] and never panics on a
//! malformed body.

use contracts::shared::api::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Falha de conexão com o servidor: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Resposta inválida do servidor: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// Message shown when the error body carries nothing readable
pub fn fallback_message(status: u16) -> String {
    match status {
        401 => "Sessão expirada, entre novamente".to_string(),
        403 => "Acesso negado".to_string(),
        404 => "Registro não encontrado".to_string(),
        s if s >= 500 => "Erro interno do servidor".to_string(),
        s => format!("Erro na requisição ({})", s),
    }
}

/// Turns a non-2xx body into the user-facing message
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let fallback = fallback_message(status);
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.into_message(&fallback))
        .unwrap_or(fallback);
    ApiError::Http { status, message }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn with_query(builder: RequestBuilder, query: &[(&str, String)]) -> RequestBuilder {
    if query.is_empty() {
        builder
    } else {
        builder.query(query.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

async fn execute(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    log::warn!("Request to {} failed with status {}", response.url(), status);
    let body = response.text().await.unwrap_or_default();
    Err(error_from_body(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder.build().map_err(|e| ApiError::Network(e.to_string()))
}

fn build_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_with_query(path, &[]).await
}

pub async fn get_with_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let builder = with_query(authorized(Request::get(&api_url(path))), query);
    decode(execute(build(builder)?).await?).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = build_json(authorized(Request::post(&api_url(path))), body)?;
    decode(execute(request).await?).await
}

pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = build_json(authorized(Request::post(&api_url(path))), body)?;
    execute(request).await.map(|_| ())
}

pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = build_json(authorized(Request::put(&api_url(path))), body)?;
    execute(request).await.map(|_| ())
}

pub async fn patch_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = build_json(authorized(Request::patch(&api_url(path))), body)?;
    execute(request).await.map(|_| ())
}

/// PATCH without a body, for one-way transitions such as mark-as-paid
pub async fn patch_empty(path: &str) -> Result<(), ApiError> {
    execute(build(authorized(Request::patch(&api_url(path))))?)
        .await
        .map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    execute(build(authorized(Request::delete(&api_url(path))))?)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message_is_surfaced() {
        let err = error_from_body(400, r#"{"error":"Cliente já cadastrado"}"#);
        assert_eq!(err.to_string(), "Cliente já cadastrado");
    }

    #[test]
    fn test_message_array_is_joined() {
        let err = error_from_body(422, r#"{"message":["email must be an email","name should not be empty"]}"#);
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("email must be an email"));
                assert!(message.contains("name should not be empty"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_body_falls_back() {
        let err = error_from_body(500, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Erro interno do servidor");
        assert!(error_from_body(401, "").is_unauthorized());
    }
}
