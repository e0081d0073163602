//! # Authentication Handlers
//!
//! Login, logout and the shared reaction to an unauthorized backend call.

use std::sync::Arc;
use std::time::Instant;

use async_channel::Sender;
use shared::{LoginRequest, LoginResponse, MemberInfo};

use crate::app::events::AppEvent;
use crate::app::state::Notice;
use crate::app::store::Store;
use crate::core::error::{ApiError, Result, TokenStoreError};
use crate::core::service::{ApiService, TokenStore};
use crate::utils::validation::validate_login;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    store: &Store,
    api: Arc<dyn ApiService>,
    tokens: Arc<dyn TokenStore>,
    event_tx: Sender<AppEvent>,
    username: String,
    password: String,
) {
    if store.login_submitting() {
        tracing::debug!("Login already in flight; ignoring click");
        return;
    }

    let validation = validate_login(&username, &password);
    if !validation.is_valid {
        store.set_login_form(false, validation.error);
        return;
    }

    store.set_login_form(true, None);

    tokio::spawn(async move {
        let start = Instant::now();
        let request = LoginRequest { username, password };
        let result = match api.login(request).await {
            Ok(response) => persist_tokens(tokens.as_ref(), &response)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Failed to store tokens after login");
                    "Could not save your login. Please try again.".to_string()
                }),
            Err(e) => Err(login_error_message(&e)),
        };
        tracing::info!(
            success = result.is_ok(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Login finished"
        );
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

async fn persist_tokens(
    tokens: &dyn TokenStore,
    response: &LoginResponse,
) -> std::result::Result<(), TokenStoreError> {
    tokens.set_token(&response.access_token).await?;
    if let Some(refresh) = &response.refresh_token {
        tokens.set_refresh_token(refresh).await?;
    }
    Ok(())
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Auth { .. } => "Incorrect ID or password.".to_string(),
        ApiError::Network(_) => "Could not reach the server.".to_string(),
        other => other.to_string(),
    }
}

/// Apply a login result; on success start the member info fetch.
pub(crate) fn handle_login_result(
    store: &Store,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    result: std::result::Result<(), String>,
) {
    match result {
        Ok(()) => {
            store.on_login_success();
            fetch_member_info(api, event_tx);
        }
        Err(message) => {
            tracing::warn!(error = %message, "Login failed");
            store.on_login_failure();
            store.set_login_form(false, Some(message));
        }
    }
}

/// Refetch the logged-in member in the background.
pub(crate) fn fetch_member_info(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = api.get_member_info().await;
        let _ = event_tx.send(AppEvent::MemberInfoResult(result)).await;
    });
}

pub(crate) fn handle_member_info_result(
    store: &Store,
    result: std::result::Result<MemberInfo, ApiError>,
) {
    match result {
        Ok(member) => {
            tracing::debug!(member_id = member.id, "Member info updated");
            store.set_member_info(Some(member));
        }
        Err(e) => {
            report_api_error(store, e);
        }
    }
}

/// Remove both tokens and reset the session.
///
/// Safe to call when already logged out. The session is reset even when a
/// token could not be removed; the first removal error is returned.
pub(crate) async fn logout(store: &Store, tokens: &dyn TokenStore) -> Result<()> {
    let access = tokens.remove_token().await;
    let refresh = tokens.remove_refresh_token().await;

    store.reset_session();
    tracing::info!("Logged out");

    access?;
    refresh?;
    Ok(())
}

/// Route a failed backend call.
///
/// An auth error outside bootstrap resets the session and tells the user;
/// anything else is only logged. The error is handed back unchanged.
pub(crate) fn report_api_error(store: &Store, err: ApiError) -> ApiError {
    if err.is_auth() {
        tracing::warn!(error = %err, "Authenticated call rejected; resetting session");
        store.reset_session();
        store.notify(Notice::session_expired());
    } else {
        tracing::warn!(error = %err, "API call failed");
    }
    err
}
