//! # Global State Store
//!
//! One [`Store`] per process, handed to every consumer explicitly (it is a
//! cheap `Arc` clone). Setters replace a field wholesale, take effect before
//! they return, and publish one [`StoreEvent`] per call to every live
//! subscriber. Updates that touch two slices are two writes and two events.
//!
//! ```rust
//! use one_bucket::app::store::{Store, StoreEvent};
//!
//! let store = Store::new();
//! let events = store.subscribe();
//!
//! store.set_logged_in(true);
//! assert!(store.is_logged_in());
//! assert_eq!(events.try_recv().unwrap(), StoreEvent::LoginChanged(true));
//! ```

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use shared::{Board, BoardPost, BoardPostPage, MemberInfo, Profile};

use crate::app::state::{AppState, Notice, Session};
use crate::app::theme::{Palette, ThemeMode};

/// Change notification published after each write.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    LoginChanged(bool),
    MemberInfoChanged(Option<MemberInfo>),
    ProfileChanged,
    BoardListChanged(usize),
    BoardRefreshRequested(u64),
    PendingBoardRefreshChanged(bool),
    BoardPostsChanged,
    BoardPostChanged(Option<i64>),
    ThemeChanged(ThemeMode),
    LoginFormChanged,
    SplashDismissed,
    Notice(Notice),
}

/// Shared handle to the application state.
#[derive(Clone, Default)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    subscribers: Arc<Mutex<Vec<Sender<StoreEvent>>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every event published from now on.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    fn publish(&self, event: StoreEvent) {
        tracing::trace!(?event, "Store event");
        self.subscribers
            .lock()
            .retain(|tx| tx.try_send(event.clone()).is_ok());
    }

    fn write<F>(&self, apply: F, event: StoreEvent)
    where
        F: FnOnce(&mut AppState),
    {
        {
            let mut state = self.state.write();
            apply(&mut state);
        }
        self.publish(event);
    }

    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    // ---- auth slice ----

    pub fn is_logged_in(&self) -> bool {
        self.state.read().auth.is_logged_in
    }

    pub fn set_logged_in(&self, is_logged_in: bool) {
        self.write(
            |s| s.auth.is_logged_in = is_logged_in,
            StoreEvent::LoginChanged(is_logged_in),
        );
    }

    // ---- profile slice ----

    pub fn member_info(&self) -> Option<MemberInfo> {
        self.state.read().profile.member_info.clone()
    }

    pub fn set_member_info(&self, member_info: Option<MemberInfo>) {
        let event = StoreEvent::MemberInfoChanged(member_info.clone());
        self.write(|s| s.profile.member_info = member_info, event);
    }

    pub fn profile(&self) -> Option<Profile> {
        self.state.read().profile.profile.clone()
    }

    pub fn profile_image(&self) -> Option<Vec<u8>> {
        self.state.read().profile.profile_image.clone()
    }

    pub fn set_profile(&self, profile: Option<Profile>, image: Option<Vec<u8>>) {
        self.write(
            |s| {
                s.profile.profile = profile;
                s.profile.profile_image = image;
            },
            StoreEvent::ProfileChanged,
        );
    }

    pub fn session(&self) -> Session {
        self.state.read().session()
    }

    // ---- board slice ----

    pub fn board_list(&self) -> Vec<Board> {
        self.state.read().board.board_list.clone()
    }

    pub fn set_board_list(&self, board_list: Vec<Board>) {
        let event = StoreEvent::BoardListChanged(board_list.len());
        self.write(|s| s.board.board_list = board_list, event);
    }

    pub fn board_refresh_param(&self) -> u64 {
        self.state.read().board.board_refresh_param
    }

    /// Bump the refresh counter by one and return the new value.
    pub fn increment_board_refresh(&self) -> u64 {
        let value = {
            let mut state = self.state.write();
            state.board.board_refresh_param += 1;
            state.board.board_refresh_param
        };
        self.publish(StoreEvent::BoardRefreshRequested(value));
        value
    }

    pub fn pending_board_refresh(&self) -> bool {
        self.state.read().board.pending_board_refresh
    }

    pub fn set_pending_board_refresh(&self, pending: bool) {
        self.write(
            |s| s.board.pending_board_refresh = pending,
            StoreEvent::PendingBoardRefreshChanged(pending),
        );
    }

    pub fn post_page(&self) -> Option<BoardPostPage> {
        self.state.read().board.post_page.clone()
    }

    pub fn set_post_page(&self, page: Option<BoardPostPage>) {
        self.write(|s| s.board.post_page = page, StoreEvent::BoardPostsChanged);
    }

    pub fn post(&self) -> Option<BoardPost> {
        self.state.read().board.post.clone()
    }

    pub fn set_post(&self, post: Option<BoardPost>) {
        let event = StoreEvent::BoardPostChanged(post.as_ref().map(|p| p.post_id));
        self.write(|s| s.board.post = post, event);
    }

    // ---- theme slice ----

    pub fn theme_mode(&self) -> ThemeMode {
        self.state.read().theme.mode
    }

    pub fn palette(&self) -> Palette {
        *Palette::for_mode(self.theme_mode())
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.write(|s| s.theme.mode = mode, StoreEvent::ThemeChanged(mode));
    }

    // ---- shell ----

    pub fn splash_visible(&self) -> bool {
        self.state.read().splash_visible
    }

    pub fn dismiss_splash(&self) {
        self.write(|s| s.splash_visible = false, StoreEvent::SplashDismissed);
    }

    pub fn login_error(&self) -> Option<String> {
        self.state.read().login_form.error.clone()
    }

    pub fn login_submitting(&self) -> bool {
        self.state.read().login_form.submitting
    }

    pub fn set_login_form(&self, submitting: bool, error: Option<String>) {
        self.write(
            |s| {
                s.login_form.submitting = submitting;
                s.login_form.error = error;
            },
            StoreEvent::LoginFormChanged,
        );
    }

    /// Publish a toast. Nothing is stored.
    pub fn notify(&self, notice: Notice) {
        self.publish(StoreEvent::Notice(notice));
    }

    // ---- composite actions ----

    pub fn on_login_success(&self) {
        self.set_login_form(false, None);
        self.set_logged_in(true);
    }

    pub fn on_login_failure(&self) {
        self.set_logged_in(false);
    }

    /// Back to unauthenticated: login flag first, then the member.
    pub fn reset_session(&self) {
        self.set_logged_in(false);
        self.set_member_info(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, nickname: &str) -> MemberInfo {
        MemberInfo {
            id,
            nickname: nickname.to_string(),
            university: None,
            university_email: None,
            profile_image: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let store = Store::new();
        assert!(!store.is_logged_in());
        assert_eq!(store.member_info(), None);
        assert!(store.splash_visible());
        assert_eq!(store.theme_mode(), ThemeMode::Light);
        assert_eq!(store.board_refresh_param(), 0);
    }

    #[test]
    fn test_writes_are_visible_immediately_to_other_handles() {
        let store = Store::new();
        let other = store.clone();
        store.set_member_info(Some(member(1, "abc")));
        assert_eq!(other.member_info(), Some(member(1, "abc")));
    }

    #[test]
    fn test_member_info_is_replaced_not_merged() {
        let store = Store::new();
        store.set_member_info(Some(MemberInfo {
            university: Some("Kookmin".to_string()),
            ..member(1, "old")
        }));
        store.set_member_info(Some(member(2, "new")));
        assert_eq!(store.member_info(), Some(member(2, "new")));
    }

    #[test]
    fn test_one_event_per_setter() {
        let store = Store::new();
        let events = store.subscribe();

        store.reset_session();
        assert_eq!(events.try_recv().unwrap(), StoreEvent::LoginChanged(false));
        assert_eq!(events.try_recv().unwrap(), StoreEvent::MemberInfoChanged(None));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_refresh_counter_is_monotonic() {
        let store = Store::new();
        let events = store.subscribe();
        assert_eq!(store.increment_board_refresh(), 1);
        assert_eq!(store.increment_board_refresh(), 2);
        assert_eq!(events.try_recv().unwrap(), StoreEvent::BoardRefreshRequested(1));
        assert_eq!(events.try_recv().unwrap(), StoreEvent::BoardRefreshRequested(2));
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let store = Store::new();
        let kept = store.subscribe();
        drop(store.subscribe());

        store.set_logged_in(true);
        assert_eq!(store.subscribers.lock().len(), 1);
        assert_eq!(kept.try_recv().unwrap(), StoreEvent::LoginChanged(true));
    }

    #[test]
    fn test_notice_is_published_not_stored() {
        let store = Store::new();
        let events = store.subscribe();
        let before = store.snapshot();

        store.notify(Notice::session_expired());
        assert_eq!(store.snapshot(), before);
        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::Notice(Notice::session_expired())
        );
    }

    #[test]
    fn test_login_success_clears_form_error() {
        let store = Store::new();
        store.set_login_form(true, Some("Logging in...".to_string()));
        store.on_login_success();
        assert!(store.is_logged_in());
        assert_eq!(store.login_error(), None);
        assert!(!store.login_submitting());
    }
}
