//! # Member & Profile Endpoints

use shared::{MemberInfo, Profile, ProfileUpdateRequest, UniversityRequest};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// `GET /member/info`
#[tracing::instrument(skip(client))]
pub async fn get_member_info(client: &ApiClient) -> Result<MemberInfo, ApiError> {
    let start = std::time::Instant::now();
    let request = client.authorize(client.client.get(client.api_url("/member/info"))).await?;
    let result = ApiClient::read_json::<MemberInfo>(ApiClient::send(request).await?).await;

    match &result {
        Ok(member) => tracing::debug!(
            member_id = member.id,
            duration_ms = start.elapsed().as_millis(),
            "Fetched member info"
        ),
        Err(e) => tracing::warn!(error = %e, "Member info fetch failed"),
    }
    result
}

/// `GET /profile`
pub async fn get_profile(client: &ApiClient) -> Result<Profile, ApiError> {
    let request = client.authorize(client.client.get(client.api_url("/profile"))).await?;
    ApiClient::read_json(ApiClient::send(request).await?).await
}

/// `GET /profile/image` on the storage server; returns raw bytes.
pub async fn get_profile_image(client: &ApiClient) -> Result<Vec<u8>, ApiError> {
    let request = client
        .authorize(client.client.get(client.storage_url("/profile/image")))
        .await?;
    let response = ApiClient::check_status(ApiClient::send(request).await?).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// `POST /profile/update`
pub async fn update_profile(client: &ApiClient, body: ProfileUpdateRequest) -> Result<(), ApiError> {
    let request = client
        .authorize(client.client.post(client.api_url("/profile/update")).json(&body))
        .await?;
    ApiClient::check_status(ApiClient::send(request).await?).await?;
    Ok(())
}

/// `POST /member/univ`
pub async fn update_university(client: &ApiClient, body: UniversityRequest) -> Result<(), ApiError> {
    let request = client
        .authorize(client.client.post(client.api_url("/member/univ")).json(&body))
        .await?;
    ApiClient::check_status(ApiClient::send(request).await?).await?;
    Ok(())
}
