use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, Method},
    response::{IntoResponse, Response},
};

use crate::routes::AppState;
use crate::shared::error::GatewayError;
use crate::system::auth::extractor::CurrentSession;

/// Forwards `/api/*path` to the upstream API as the signed-in user
pub async fn forward(
    State(state): State<AppState>,
    CurrentSession(claims): CurrentSession,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let url = state.upstream.url(&path, query.as_deref());
    tracing::debug!("{} /api/{} -> {} ({})", method, path, url, claims.email);

    let mut request = state
        .upstream
        .client
        .request(method, url)
        .bearer_auth(&claims.upstream_token);
    if !body.is_empty() {
        request = request
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
    }

    relay(request.send().await?).await
}

/// Copies status, content type and body of an upstream response
pub async fn relay(response: reqwest::Response) -> Result<Response, GatewayError> {
    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = response.bytes().await?;

    if status.is_server_error() {
        tracing::warn!("Upstream answered {}", status);
    }

    let mut relayed = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            relayed.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        None => {
            relayed.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    Ok(relayed)
}
