//! # Service Traits
//!
//! Seams to the two external collaborators: the backend API and the token store.
//! The orchestrator only ever holds `Arc<dyn ApiService>` / `Arc<dyn TokenStore>`,
//! so tests swap in in-memory doubles.

use async_trait::async_trait;
use shared::{
    Board, BoardPost, BoardPostPage, LoginRequest, LoginResponse, MemberInfo, PostSort, Profile,
    ProfileUpdateRequest, UniversityRequest,
};

use crate::core::error::{ApiError, TokenStoreError};

/// Trait for backend API operations
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials for an access token
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Fetch the logged-in member
    async fn get_member_info(&self) -> Result<MemberInfo, ApiError>;

    /// Fetch the list of boards
    async fn get_board_list(&self) -> Result<Vec<Board>, ApiError>;

    /// Fetch the member's profile
    async fn get_profile(&self) -> Result<Profile, ApiError>;

    /// Fetch the raw profile image bytes from the storage server
    async fn get_profile_image(&self) -> Result<Vec<u8>, ApiError>;

    /// Replace the member's profile
    async fn update_profile(&self, request: ProfileUpdateRequest) -> Result<(), ApiError>;

    /// Set the member's school affiliation
    async fn update_university(&self, request: UniversityRequest) -> Result<(), ApiError>;

    /// Fetch one page of posts for a board
    async fn get_board_post_list(
        &self,
        board_id: i64,
        page: u32,
        size: u32,
        sort: PostSort,
    ) -> Result<BoardPostPage, ApiError>;

    /// Fetch a single post with its comments
    async fn get_board_post(&self, post_id: i64) -> Result<BoardPost, ApiError>;
}

/// Persistent credential storage.
///
/// Values are opaque strings; absence is `Ok(None)`, not an error.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get_token(&self) -> Result<Option<String>, TokenStoreError>;

    async fn set_token(&self, token: &str) -> Result<(), TokenStoreError>;

    async fn remove_token(&self) -> Result<(), TokenStoreError>;

    async fn get_refresh_token(&self) -> Result<Option<String>, TokenStoreError>;

    async fn set_refresh_token(&self, token: &str) -> Result<(), TokenStoreError>;

    async fn remove_refresh_token(&self) -> Result<(), TokenStoreError>;
}
