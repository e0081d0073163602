//! # Board Handlers
//!
//! Board list refresh, board post paging and single posts.

use std::sync::Arc;

use async_channel::Sender;
use shared::{Board, BoardPost, BoardPostPage, PostSort};

use crate::app::events::AppEvent;
use crate::app::handlers::auth::report_api_error;
use crate::app::state::Notice;
use crate::app::store::Store;
use crate::core::error::ApiError;
use crate::core::service::ApiService;

/// Refetch the board list in the background.
pub(crate) fn refresh_board_list(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = api.get_board_list().await;
        let _ = event_tx.send(AppEvent::BoardListResult(result)).await;
    });
}

/// Store the refetched list and bump the refresh counter so dependent
/// screens reload.
///
/// A failure other than an expired session keeps the cached list and tells
/// the user the server could not be reached.
pub(crate) fn handle_board_list_result(store: &Store, result: Result<Vec<Board>, ApiError>) {
    match result {
        Ok(boards) => {
            store.set_board_list(boards);
            let param = store.increment_board_refresh();
            tracing::debug!(board_refresh_param = param, "Board list refreshed");
        }
        Err(e) => {
            if !report_api_error(store, e).is_auth() {
                store.notify(Notice::server_error());
            }
        }
    }
}

/// Mark the board screen stale after a post was created.
pub(crate) fn request_board_refresh(store: &Store) {
    if !store.pending_board_refresh() {
        store.set_pending_board_refresh(true);
    }
}

/// Fetch one page of posts in the background.
pub(crate) fn load_board_posts(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    board_id: i64,
    page: u32,
    size: u32,
    sort: PostSort,
) {
    tokio::spawn(async move {
        let result = api.get_board_post_list(board_id, page, size, sort).await;
        let _ = event_tx.send(AppEvent::BoardPostsResult(result)).await;
    });
}

/// Store the page; a successful load consumes the pending-refresh flag.
pub(crate) fn handle_board_posts_result(store: &Store, result: Result<BoardPostPage, ApiError>) {
    match result {
        Ok(page) => {
            tracing::debug!(
                posts = page.number_of_elements,
                page = page.number,
                "Board posts loaded"
            );
            store.set_post_page(Some(page));
            if store.pending_board_refresh() {
                store.set_pending_board_refresh(false);
            }
        }
        Err(e) => {
            report_api_error(store, e);
        }
    }
}

/// Fetch one post in the background.
pub(crate) fn load_board_post(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, post_id: i64) {
    tokio::spawn(async move {
        let result = api.get_board_post(post_id).await;
        let _ = event_tx.send(AppEvent::BoardPostResult(result)).await;
    });
}

/// Store the opened post. A failed load clears it.
pub(crate) fn handle_board_post_result(store: &Store, result: Result<BoardPost, ApiError>) {
    match result {
        Ok(post) => {
            tracing::debug!(post_id = post.post_id, likes = post.likes, "Board post loaded");
            store.set_post(Some(post));
        }
        Err(e) => {
            store.set_post(None);
            report_api_error(store, e);
        }
    }
}
