//! # Application Events
//!
//! Results of background tasks, sent to the UI thread and applied there.

use shared::{Board, BoardPost, BoardPostPage, MemberInfo, Profile};

use crate::app::bootstrap::BootstrapOutcome;
use crate::app::theme::Appearance;
use crate::core::error::ApiError;

/// Async task results sent to main thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Launch check resolved
    BootstrapFinished(BootstrapOutcome),
    /// Login request and token storage completed
    LoginResult(Result<(), String>),
    /// Member info fetched after login or a profile change
    MemberInfoResult(Result<MemberInfo, ApiError>),
    /// Board list refetched
    BoardListResult(Result<Vec<Board>, ApiError>),
    /// One page of board posts received
    BoardPostsResult(Result<BoardPostPage, ApiError>),
    /// A single post with its comments received
    BoardPostResult(Result<BoardPost, ApiError>),
    /// Profile and, when available, its image
    ProfileLoaded {
        profile: Result<Profile, ApiError>,
        image: Option<Vec<u8>>,
    },
    /// Profile update acknowledged
    ProfileUpdated(Result<(), ApiError>),
    /// School affiliation update acknowledged
    UniversityUpdated(Result<(), ApiError>),
    /// System appearance changed
    AppearanceChanged(Appearance),
}
