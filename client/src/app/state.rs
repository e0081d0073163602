//! # Application State Types
//!
//! The slices that make up the global store. Each slice is a plain struct;
//! all mutation goes through [`crate::app::store::Store`] so subscribers are
//! notified.

use shared::{Board, BoardPost, BoardPostPage, MemberInfo, Profile};

use crate::app::theme::ThemeMode;

/// Login flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSlice {
    pub is_logged_in: bool,
}

/// Who is logged in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSlice {
    /// Replaced wholesale on every successful fetch
    pub member_info: Option<MemberInfo>,
    pub profile: Option<Profile>,
    pub profile_image: Option<Vec<u8>>,
}

/// Cached board list and its invalidation signals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSlice {
    pub board_list: Vec<Board>,
    /// Bumped by one whenever dependent screens must refetch
    pub board_refresh_param: u64,
    /// Set after creating a post, cleared once the board screen refetched
    pub pending_board_refresh: bool,
    /// Last board post page loaded by a screen
    pub post_page: Option<BoardPostPage>,
    /// Last post opened by a screen
    pub post: Option<BoardPost>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeSlice {
    pub mode: ThemeMode,
}

/// Login form status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub submitting: bool,
    pub error: Option<String>,
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-visible toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: Option<String>,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            body: None,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            body: Some(body.into()),
        }
    }

    /// Shown when an authenticated call comes back 401/403
    pub fn session_expired() -> Self {
        Self::error("Your session has expired.", "Please log in again.")
    }

    /// Shown when the backend could not be reached or failed
    pub fn server_error() -> Self {
        Self::error(
            "There was a problem communicating with the server.",
            "Please try again in a moment.",
        )
    }
}

/// Snapshot of the login flag and member
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub is_logged_in: bool,
    pub member_info: Option<MemberInfo>,
}

/// All slices together
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub auth: AuthSlice,
    pub profile: ProfileSlice,
    pub board: BoardSlice,
    pub theme: ThemeSlice,
    pub login_form: LoginFormState,
    /// Splash stays up until the bootstrap check resolves
    pub splash_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            auth: AuthSlice::default(),
            profile: ProfileSlice::default(),
            board: BoardSlice::default(),
            theme: ThemeSlice::default(),
            login_form: LoginFormState::default(),
            splash_visible: true,
        }
    }
}

impl AppState {
    pub fn session(&self) -> Session {
        Session {
            is_logged_in: self.auth.is_logged_in,
            member_info: self.profile.member_info.clone(),
        }
    }
}
