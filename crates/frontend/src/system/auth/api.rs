use contracts::system::auth::{LoginRequest, LoginResponse, RecoveryPasswordRequest, SessionUser};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::shared::http::{error_from_body, ApiError};

/// Sign in with e-mail and password
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .json(request)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(status, &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Get the user behind a session token
pub async fn get_current_user(access_token: &str) -> Result<SessionUser, ApiError> {
    let response = Request::get(&format!("{}/api/auth/me", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(status, &body));
    }

    response
        .json::<SessionUser>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn logout(access_token: &str) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/api/auth/logout", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_body(response.status(), ""));
    }
    Ok(())
}

/// Asks the API to e-mail a recovery code. Public route.
pub async fn recover_password(request: &RecoveryPasswordRequest) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/api/recovery-password", api_base()))
        .json(request)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(status, &body));
    }
    Ok(())
}
