//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;

use crate::core::config::ClientConfig;
use crate::core::error::ApiError;
use crate::core::service::{ApiService, TokenStore};

/// HTTP client for communicating with the backend API server.
///
/// Authenticated requests read the access token from the token store on
/// every call, so a token written by login is picked up immediately.
pub struct ApiClient {
    pub(crate) client: Client,
    api_base_url: String,
    storage_base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            api_base_url: config.api_base_url.clone(),
            storage_base_url: config.storage_base_url.clone(),
            tokens,
        }
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub(crate) fn storage_url(&self, path: &str) -> String {
        format!("{}{}", self.storage_base_url, path)
    }

    /// Attach `Authorization: Bearer <token>`.
    ///
    /// No stored token means the call cannot be authorized, so it fails as an
    /// auth error without touching the network. A token store that cannot be
    /// read is a [`ApiError::TokenStorage`] error and leaves the session alone.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.get_token().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read access token");
            ApiError::TokenStorage(e.to_string())
        })?;

        match token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => {
                tracing::debug!("No access token stored");
                Err(ApiError::Auth {
                    status: ApiError::MISSING_TOKEN_STATUS,
                })
            }
        }
    }

    /// Send a request, mapping transport failures to [`ApiError::Network`].
    pub(crate) async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Network error");
            ApiError::from(e)
        })
    }

    /// Turn a non-success response into an [`ApiError`], reading the error
    /// body when the backend sent one.
    pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or(body),
            Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };
        Err(ApiError::from_status(status.as_u16(), message))
    }

    /// Check status and parse a JSON body.
    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(ApiError::from)
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, request: shared::LoginRequest) -> Result<shared::LoginResponse, ApiError> {
        crate::services::api::auth::login(self, request).await
    }

    async fn get_member_info(&self) -> Result<shared::MemberInfo, ApiError> {
        crate::services::api::member::get_member_info(self).await
    }

    async fn get_board_list(&self) -> Result<Vec<shared::Board>, ApiError> {
        crate::services::api::board::get_board_list(self).await
    }

    async fn get_profile(&self) -> Result<shared::Profile, ApiError> {
        crate::services::api::member::get_profile(self).await
    }

    async fn get_profile_image(&self) -> Result<Vec<u8>, ApiError> {
        crate::services::api::member::get_profile_image(self).await
    }

    async fn update_profile(&self, request: shared::ProfileUpdateRequest) -> Result<(), ApiError> {
        crate::services::api::member::update_profile(self, request).await
    }

    async fn update_university(&self, request: shared::UniversityRequest) -> Result<(), ApiError> {
        crate::services::api::member::update_university(self, request).await
    }

    async fn get_board_post_list(
        &self,
        board_id: i64,
        page: u32,
        size: u32,
        sort: shared::PostSort,
    ) -> Result<shared::BoardPostPage, ApiError> {
        crate::services::api::board::get_board_post_list(self, board_id, page, size, sort).await
    }

    async fn get_board_post(&self, post_id: i64) -> Result<shared::BoardPost, ApiError> {
        crate::services::api::board::get_board_post(self, post_id).await
    }
}
