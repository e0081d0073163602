//! # Authentication Endpoints
//!
//! Credential exchange. Login is the only call sent without a bearer token.

use shared::{LoginRequest, LoginResponse};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Login with id and password.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<LoginResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = ApiClient::send(client.client.post(client.api_url("/auth/login")).json(&request)).await?;
    let status = response.status();

    match ApiClient::read_json::<LoginResponse>(response).await {
        Ok(credentials) => {
            tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
            Ok(credentials)
        }
        Err(e) => {
            tracing::warn!(
                status = status.as_u16(),
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Login failed"
            );
            Err(e)
        }
    }
}
