//! # Session Bootstrap
//!
//! The one-time launch check that decides which navigation graph to mount.
//!
//! [`check_session`] performs the I/O and returns a [`BootstrapOutcome`]
//! without touching the store; [`apply_outcome`] commits it. The orchestrator
//! runs the first on a task and the second on the UI thread, which is what
//! lets an unmounted app drop a late result without side effects.

use shared::{Board, MemberInfo};

use crate::app::store::Store;
use crate::core::error::ApiError;
use crate::core::service::{ApiService, TokenStore};
use crate::services::jwt::decode_claims;

/// Result of the launch check
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    /// Nothing stored; the backend was not contacted.
    NoToken,
    /// Token accepted. `boards` is `None` when the board list fetch failed.
    LoggedIn {
        member: MemberInfo,
        boards: Option<Vec<Board>>,
    },
    /// Token rejected with 401/403.
    Unauthorized { status: u16 },
    /// Anything else; not retried.
    Failed(String),
}

impl BootstrapOutcome {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, BootstrapOutcome::LoggedIn { .. })
    }
}

/// Ask the token store and, if a token exists, the backend.
pub async fn check_session(api: &dyn ApiService, tokens: &dyn TokenStore) -> BootstrapOutcome {
    let token = match tokens.get_token().await {
        Ok(Some(token)) => token,
        Ok(None) => {
            tracing::info!("No access token stored; starting logged out");
            return BootstrapOutcome::NoToken;
        }
        Err(e) => {
            tracing::error!(error = %e, "Token store unreadable; starting logged out");
            return BootstrapOutcome::NoToken;
        }
    };

    if let Some(claims) = decode_claims(&token) {
        tracing::debug!(
            subject = ?claims.sub,
            expires_at = ?claims.expires_at(),
            "Stored access token"
        );
    }

    let member = match api.get_member_info().await {
        Ok(member) => member,
        Err(ApiError::Auth { status }) => {
            // Refresh tokens are stored but not exchanged; there is no refresh endpoint yet
            tracing::warn!(status, "Stored token rejected; token refresh is not implemented");
            return BootstrapOutcome::Unauthorized { status };
        }
        Err(e) => {
            tracing::error!(error = %e, "Session check failed");
            return BootstrapOutcome::Failed(e.to_string());
        }
    };

    let boards = match api.get_board_list().await {
        Ok(boards) => Some(boards),
        Err(e) => {
            tracing::warn!(error = %e, "Board list fetch failed during bootstrap");
            None
        }
    };

    tracing::info!(member_id = member.id, "Session restored");
    BootstrapOutcome::LoggedIn { member, boards }
}

/// Commit an outcome to the store and dismiss the splash.
pub fn apply_outcome(store: &Store, outcome: BootstrapOutcome) {
    match outcome {
        BootstrapOutcome::LoggedIn { member, boards } => {
            store.set_member_info(Some(member));
            store.set_logged_in(true);
            if let Some(boards) = boards {
                store.set_board_list(boards);
            }
        }
        BootstrapOutcome::Unauthorized { .. } => {
            store.reset_session();
        }
        BootstrapOutcome::NoToken | BootstrapOutcome::Failed(_) => {
            store.set_logged_in(false);
        }
    }
    store.dismiss_splash();
}
