//! # Application Orchestrator
//!
//! The [`App`] struct ties the store, the router and the two external
//! services together and owns the event loop plumbing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      UI thread                              │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - mount() / unmount()   - bootstrap lifecycle       │   │
//! │  │  - on_tick()             - apply pending results     │   │
//! │  │  - handle_*() / navigate - user actions              │   │
//! │  └────────────┬──────────────────────────┬──────────────┘   │
//! │               │                          │ StoreEvent       │
//! │  ┌────────────▼───────────────┐   ┌──────▼──────────────┐   │
//! │  │  Store                     │──▶│  Router             │   │
//! │  │  Arc<RwLock<AppState>>     │   │  graph + stack      │   │
//! │  └────────────────────────────┘   └─────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded) AppEvent
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio tasks                                    │
//! │  bootstrap check, login, board/profile fetches,             │
//! │  appearance watcher                                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never write the store. They send an [`AppEvent`] and the UI thread
//! applies it, so unmounting only has to stop applying events.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use one_bucket::app::App;
//! use one_bucket::app::theme::Appearance;
//! use one_bucket::core::ClientConfig;
//! use one_bucket::services::{ApiClient, FileTokenStore};
//!
//! # async fn run() -> one_bucket::core::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let tokens = Arc::new(FileTokenStore::new(&config.token_file));
//! let api = Arc::new(ApiClient::new(&config, tokens.clone()));
//!
//! let mut app = App::new(api, tokens);
//! app.initialize_theme(Appearance::Unspecified);
//! app.mount()?;
//! app.run_until_bootstrapped().await?;
//!
//! let route = app.current_route().clone();
//! println!("{} at {}", app.session().is_logged_in, route);
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
mod event_handler;
pub mod events;
mod handlers;
pub mod router;
pub mod state;
pub mod store;
pub mod theme;

pub use bootstrap::BootstrapOutcome;
pub use events::AppEvent;
pub use router::{NavGraph, Route, Router, Tab};
pub use state::{AppState, Notice, NoticeLevel, Session};
pub use store::{Store, StoreEvent};
pub use theme::{Appearance, Palette, ThemeMode, ThemeResolver};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use shared::{PostSort, ProfileUpdateRequest, UniversityRequest};
use tokio::task::JoinHandle;

use crate::app::event_handler::AppEventHandler;
use crate::core::error::{ApiError, AppError, Result};
use crate::core::service::{ApiService, TokenStore};

/// Where the launch check stands
#[derive(Debug, Default)]
pub(crate) enum BootstrapPhase {
    #[default]
    NotStarted,
    Running(JoinHandle<()>),
    Finished,
    /// Torn down; late results are discarded.
    Unmounted,
}

/// Main application orchestrator.
///
/// Owns the only [`Router`] and the receiving ends of both channels, so every
/// method that mutates takes `&mut self` and runs on the UI thread.
pub struct App {
    /// Shared state handle. Clone it freely for reads.
    store: Store,
    router: Router,
    api: Arc<dyn ApiService>,
    tokens: Arc<dyn TokenStore>,
    theme: ThemeResolver,

    /// Sender cloned into every background task.
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
    /// Store changes, drained into the router after every update.
    store_rx: Receiver<StoreEvent>,

    bootstrap: BootstrapPhase,
    appearance_watch: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(api: Arc<dyn ApiService>, tokens: Arc<dyn TokenStore>) -> Self {
        let store = Store::new();
        let store_rx = store.subscribe();
        let (event_tx, event_rx) = unbounded();

        Self {
            theme: ThemeResolver::new(store.clone()),
            store,
            router: Router::new(),
            api,
            tokens,
            event_tx,
            event_rx,
            store_rx,
            bootstrap: BootstrapPhase::NotStarted,
            appearance_watch: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The router, caught up with any login change written to the store.
    pub fn router(&mut self) -> &Router {
        self.sync_router();
        &self.router
    }

    pub fn current_route(&mut self) -> &Route {
        self.sync_router();
        self.router.current()
    }

    pub fn session(&self) -> Session {
        self.store.session()
    }

    /// Sender for feeding results in from outside the crate's own tasks.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    /// Whether the launch check has been started and not yet resolved.
    pub fn is_bootstrapping(&self) -> bool {
        matches!(self.bootstrap, BootstrapPhase::Running(_))
    }

    pub fn is_unmounted(&self) -> bool {
        matches!(self.bootstrap, BootstrapPhase::Unmounted)
    }

    // ---- lifecycle ----

    /// Start the one-time session check.
    ///
    /// Fails with [`AppError::State`] on any call after the first; no I/O is
    /// performed then.
    pub fn mount(&mut self) -> Result<()> {
        if !matches!(self.bootstrap, BootstrapPhase::NotStarted) {
            tracing::warn!(phase = ?self.bootstrap, "Mount rejected");
            return Err(AppError::State(
                "App is already mounted; bootstrap runs once per launch".to_string(),
            ));
        }

        let api = self.api.clone();
        let tokens = self.tokens.clone();
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = bootstrap::check_session(api.as_ref(), tokens.as_ref()).await;
            let _ = tx.send(AppEvent::BootstrapFinished(outcome)).await;
        });

        tracing::info!("App mounted; checking stored session");
        self.bootstrap = BootstrapPhase::Running(handle);
        Ok(())
    }

    /// Abandon any in-flight work. Results that arrive later are dropped.
    pub fn unmount(&mut self) {
        match std::mem::replace(&mut self.bootstrap, BootstrapPhase::Unmounted) {
            BootstrapPhase::Running(handle) => {
                handle.abort();
                tracing::info!("App unmounted; bootstrap check abandoned");
            }
            BootstrapPhase::Unmounted => {}
            _ => tracing::info!("App unmounted"),
        }
        if let Some(watch) = self.appearance_watch.take() {
            watch.abort();
        }
    }

    /// Apply every result that is already waiting. Never blocks.
    ///
    /// Returns how many events were applied.
    pub fn on_tick(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        self.sync_router();
        applied
    }

    /// Wait for the next result and apply it.
    pub async fn process_next_event(&mut self) -> Result<()> {
        let event = self
            .event_rx
            .recv()
            .await
            .map_err(|e| AppError::State(format!("Event channel closed: {}", e)))?;
        self.handle_event(event);
        self.sync_router();
        Ok(())
    }

    /// Apply results until the launch check has resolved.
    pub async fn run_until_bootstrapped(&mut self) -> Result<()> {
        if matches!(self.bootstrap, BootstrapPhase::NotStarted) {
            return Err(AppError::State("App is not mounted".to_string()));
        }
        while self.is_bootstrapping() {
            self.process_next_event().await?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    fn sync_router(&mut self) {
        handlers::navigation::sync_router(&mut self.router, &self.store_rx);
    }

    // ---- session ----

    /// Submit the login form.
    ///
    /// Ignored while the launch check runs; the splash covers the form then.
    pub fn handle_login_click(&mut self, username: String, password: String) {
        if self.is_bootstrapping() {
            tracing::debug!("Session check still running; ignoring login click");
            return;
        }
        handlers::auth::handle_login_click(
            &self.store,
            self.api.clone(),
            self.tokens.clone(),
            self.event_tx.clone(),
            username,
            password,
        );
    }

    /// Remove stored tokens and return to the login screen.
    pub async fn logout(&mut self) -> Result<()> {
        let result = handlers::auth::logout(&self.store, self.tokens.as_ref()).await;
        self.sync_router();
        result
    }

    /// Route a failed backend call made by a screen.
    pub fn report_api_error(&mut self, err: ApiError) -> ApiError {
        let err = handlers::auth::report_api_error(&self.store, err);
        self.sync_router();
        err
    }

    // ---- navigation ----

    pub fn navigate(&mut self, route: Route) -> Result<()> {
        self.sync_router();
        handlers::navigation::handle_navigate(&mut self.router, &self.store, route)
    }

    pub fn go_back(&mut self) -> bool {
        self.sync_router();
        handlers::navigation::handle_go_back(&mut self.router)
    }

    pub fn switch_tab(&mut self, tab: Tab) -> Result<()> {
        self.sync_router();
        handlers::navigation::handle_switch_tab(&mut self.router, tab)
    }

    // ---- theme ----

    pub fn initialize_theme(&self, appearance: Appearance) -> ThemeMode {
        self.theme.initialize(appearance)
    }

    /// Forward system appearance changes until unmount.
    pub fn watch_appearance(&mut self, changes: Receiver<Appearance>) {
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            while let Ok(appearance) = changes.recv().await {
                if tx.send(AppEvent::AppearanceChanged(appearance)).await.is_err() {
                    break;
                }
            }
        });
        if let Some(previous) = self.appearance_watch.replace(handle) {
            previous.abort();
        }
    }

    pub fn override_theme(&self, mode: ThemeMode) {
        self.theme.override_theme(mode);
    }

    // ---- boards ----

    pub fn refresh_board_list(&self) {
        handlers::board::refresh_board_list(self.api.clone(), self.event_tx.clone());
    }

    pub fn request_board_refresh(&self) {
        handlers::board::request_board_refresh(&self.store);
    }

    pub fn load_board_post(&self, post_id: i64) {
        handlers::board::load_board_post(self.api.clone(), self.event_tx.clone(), post_id);
    }

    pub fn load_board_posts(&self, board_id: i64, page: u32, size: u32, sort: PostSort) {
        handlers::board::load_board_posts(
            self.api.clone(),
            self.event_tx.clone(),
            board_id,
            page,
            size,
            sort,
        );
    }

    // ---- profile ----

    pub fn load_profile(&self) {
        handlers::profile::load_profile(self.api.clone(), self.event_tx.clone());
    }

    pub fn update_profile(&self, request: ProfileUpdateRequest) -> Result<()> {
        handlers::profile::update_profile(self.api.clone(), self.event_tx.clone(), request)
    }

    pub fn update_university(&self, request: UniversityRequest) -> Result<()> {
        handlers::profile::update_university(self.api.clone(), self.event_tx.clone(), request)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let BootstrapPhase::Running(handle) = &self.bootstrap {
            handle.abort();
        }
        if let Some(watch) = &self.appearance_watch {
            watch.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use shared::{SortDirection, SortKey};

    use crate::services::token_store::MemoryTokenStore;
    use crate::test_support::{board_post, boards, member, post_page, MockApiService};

    fn app_with(mock: Arc<MockApiService>, tokens: Arc<MemoryTokenStore>) -> App {
        App::new(mock, tokens)
    }

    async fn next(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(2), app.process_next_event())
            .await
            .expect("timed out waiting for an event")
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_token_starts_logged_out_with_zero_calls() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::new()));

        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();

        assert!(!app.session().is_logged_in);
        assert!(!app.store().splash_visible());
        assert_eq!(app.current_route(), &Route::Login);
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_token_restores_session() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("t")));

        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();

        let session = app.session();
        assert!(session.is_logged_in);
        assert_eq!(session.member_info, Some(member(1, "abc")));
        assert_eq!(app.store().board_list(), boards());
        assert_eq!(app.current_route(), &Route::Main(Tab::Home));
    }

    #[tokio::test]
    async fn test_rejected_token_resets_session() {
        for status in [401, 403] {
            let mock = Arc::new(MockApiService::new());
            mock.set_member_info(Err(ApiError::Auth { status }));
            let mut app = app_with(mock, Arc::new(MemoryTokenStore::with_token("stale")));
            let events = app.store().subscribe();

            app.mount().unwrap();
            app.run_until_bootstrapped().await.unwrap();

            assert_eq!(app.session(), Session::default());
            assert_eq!(app.current_route(), &Route::Login);
            // No toast during bootstrap
            let notices = std::iter::from_fn(|| events.try_recv().ok())
                .filter(|e| matches!(e, StoreEvent::Notice(_)))
                .count();
            assert_eq!(notices, 0);
        }
    }

    #[tokio::test]
    async fn test_second_mount_is_rejected_without_io() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("t")));

        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();
        let err = app.mount().unwrap_err();

        assert!(matches!(err, AppError::State(_)));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(app.on_tick(), 0);
        assert_eq!(mock.member_info_calls(), 1);
    }

    #[tokio::test]
    async fn test_unmount_discards_in_flight_bootstrap() {
        let mock = Arc::new(MockApiService::new());
        mock.hold_member_info();
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("t")));
        let before = app.store().snapshot();

        app.mount().unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.unmount();
        mock.release_member_info();

        // Even a result that slipped through before the abort is dropped
        app.event_tx()
            .send(AppEvent::BootstrapFinished(BootstrapOutcome::LoggedIn {
                member: member(1, "abc"),
                boards: Some(boards()),
            }))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.on_tick();

        assert_eq!(app.store().snapshot(), before);
        assert!(app.store().splash_visible());
        assert!(app.is_unmounted());
    }

    #[tokio::test]
    async fn test_login_flow_stores_tokens_and_fetches_member() {
        let mock = Arc::new(MockApiService::new());
        let tokens = Arc::new(MemoryTokenStore::new());
        let mut app = app_with(mock.clone(), tokens.clone());
        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();

        app.handle_login_click("student01".to_string(), "pw".to_string());
        assert!(app.store().login_submitting());
        next(&mut app).await; // LoginResult
        assert!(app.session().is_logged_in);
        assert_eq!(app.current_route(), &Route::Main(Tab::Home));
        next(&mut app).await; // MemberInfoResult

        assert_eq!(app.session().member_info, Some(member(1, "abc")));
        assert_eq!(tokens.get_token().await.unwrap().as_deref(), Some("access"));
        assert_eq!(tokens.get_refresh_token().await.unwrap().as_deref(), Some("refresh"));
        assert_eq!(mock.last_login().map(|r| r.username), Some("student01".to_string()));
    }

    #[tokio::test]
    async fn test_login_click_ignored_while_session_check_runs() {
        let mock = Arc::new(MockApiService::new());
        mock.hold_member_info();
        mock.set_member_info(Err(ApiError::Network("down".to_string())));
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("stale")));

        app.mount().unwrap();
        app.handle_login_click("student01".to_string(), "pw".to_string());
        assert!(!app.store().login_submitting());

        mock.release_member_info();
        app.run_until_bootstrapped().await.unwrap();
        assert!(!app.session().is_logged_in);
        assert_eq!(app.current_route(), &Route::Login);
        assert_eq!(mock.calls("login"), 0);

        // Once the check has resolved the form works
        mock.set_member_info(Ok(member(1, "abc")));
        app.handle_login_click("student01".to_string(), "pw".to_string());
        next(&mut app).await; // LoginResult
        next(&mut app).await; // MemberInfoResult
        assert!(app.session().is_logged_in);
        assert_eq!(app.current_route(), &Route::Main(Tab::Home));
    }

    #[tokio::test]
    async fn test_login_landing_during_session_check_wins() {
        let mock = Arc::new(MockApiService::new());
        mock.hold_member_info();
        mock.set_member_info(Err(ApiError::Network("down".to_string())));
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("stale")));

        // Submitted before mount, answered while the check is still held
        app.handle_login_click("student01".to_string(), "pw".to_string());
        app.mount().unwrap();
        next(&mut app).await; // LoginResult
        assert!(!app.is_bootstrapping());
        assert!(!app.store().splash_visible());
        assert!(app.session().is_logged_in);

        mock.release_member_info();
        tokio::time::sleep(Duration::from_millis(50)).await;
        app.on_tick();

        assert!(app.session().is_logged_in);
        assert_eq!(app.current_route(), &Route::Main(Tab::Home));
    }

    #[tokio::test]
    async fn test_router_follows_login_flag_written_through_store() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock, Arc::new(MemoryTokenStore::new()));

        app.store().set_logged_in(true);
        assert_eq!(app.current_route(), &Route::Main(Tab::Home));
        app.navigate(Route::Search).unwrap();
        assert_eq!(app.current_route(), &Route::Search);

        app.store().reset_session();
        assert!(app.navigate(Route::SignUp5).is_ok());
        assert_eq!(app.router().stack(), &[Route::Login, Route::SignUp5]);

        app.store().set_logged_in(true);
        app.switch_tab(Tab::Chat).unwrap();
        assert_eq!(app.router().stack(), &[Route::Main(Tab::Chat)]);
    }

    #[tokio::test]
    async fn test_empty_credentials_never_reach_backend() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::new()));

        app.handle_login_click(String::new(), "pw".to_string());
        assert_eq!(app.store().login_error().as_deref(), Some("ID is required"));
        assert!(!app.store().login_submitting());
        assert_eq!(mock.calls("login"), 0);
    }

    #[tokio::test]
    async fn test_rejected_credentials_stay_logged_out() {
        let mock = Arc::new(MockApiService::new());
        mock.set_login(Err(ApiError::Auth { status: 401 }));
        let tokens = Arc::new(MemoryTokenStore::new());
        let mut app = app_with(mock, tokens.clone());

        app.handle_login_click("student01".to_string(), "wrong".to_string());
        next(&mut app).await;

        assert!(!app.session().is_logged_in);
        assert_eq!(app.store().login_error().as_deref(), Some("Incorrect ID or password."));
        assert_eq!(tokens.get_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_twice_returns_to_login() {
        let mock = Arc::new(MockApiService::new());
        let tokens = Arc::new(MemoryTokenStore::with_token("t"));
        let mut app = app_with(mock, tokens.clone());
        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();
        app.navigate(Route::Search).unwrap();

        app.logout().await.unwrap();
        let after_first = app.store().snapshot();
        app.logout().await.unwrap();

        assert_eq!(app.store().snapshot(), after_first);
        assert_eq!(app.router().stack(), &[Route::Login]);
        assert_eq!(tokens.get_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_auth_error_from_screen_returns_to_login() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock, Arc::new(MemoryTokenStore::with_token("t")));
        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();
        let events = app.store().subscribe();

        let err = app.report_api_error(ApiError::Auth { status: 401 });
        assert!(err.is_auth());
        assert_eq!(app.current_route(), &Route::Login);
        assert!(std::iter::from_fn(|| events.try_recv().ok())
            .any(|e| e == StoreEvent::Notice(Notice::session_expired())));
    }

    #[tokio::test]
    async fn test_appearance_changes_replace_override() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock, Arc::new(MemoryTokenStore::new()));
        let (tx, rx) = unbounded();

        app.initialize_theme(Appearance::Dark);
        app.watch_appearance(rx);
        app.override_theme(ThemeMode::Light);
        assert_eq!(app.store().theme_mode(), ThemeMode::Light);

        tx.send(Appearance::Dark).await.unwrap();
        next(&mut app).await;
        assert_eq!(app.store().theme_mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_board_refresh_and_posts() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("t")));

        app.refresh_board_list();
        next(&mut app).await;
        assert_eq!(app.store().board_refresh_param(), 1);

        app.request_board_refresh();
        let sort = PostSort::new(SortKey::Title, SortDirection::Asc);
        app.load_board_posts(1, 0, 20, sort);
        next(&mut app).await;

        assert_eq!(app.store().post_page(), Some(post_page(1)));
        assert!(!app.store().pending_board_refresh());
        assert_eq!(mock.last_sort(), Some(sort));
    }

    #[tokio::test]
    async fn test_open_single_post() {
        let mock = Arc::new(MockApiService::new());
        mock.set_post(Ok(board_post(42)));
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("t")));
        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();
        app.navigate(Route::BoardPost {
            board_id: 1,
            post_id: 42,
        })
        .unwrap();

        app.load_board_post(42);
        next(&mut app).await;
        assert_eq!(app.store().post().map(|p| p.comment_count()), Some(1));

        mock.set_post(Err(ApiError::Auth { status: 401 }));
        app.load_board_post(42);
        next(&mut app).await;
        assert_eq!(app.store().post(), None);
        assert_eq!(app.current_route(), &Route::Login);
        assert_eq!(mock.calls("get_board_post"), 2);
    }

    #[tokio::test]
    async fn test_profile_load_without_image() {
        let mock = Arc::new(MockApiService::new());
        mock.set_profile_image(Err(ApiError::Status {
            status: 404,
            message: "not found".to_string(),
        }));
        let mut app = app_with(mock, Arc::new(MemoryTokenStore::with_token("t")));

        app.load_profile();
        next(&mut app).await;

        assert_eq!(app.store().profile().map(|p| p.name), Some("Kim".to_string()));
        assert_eq!(app.store().profile_image(), None);
    }

    #[tokio::test]
    async fn test_university_update_refetches_member() {
        let mock = Arc::new(MockApiService::new());
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("t")));
        mock.set_member_info(Ok(shared::MemberInfo {
            university: Some("Kookmin".to_string()),
            ..member(1, "abc")
        }));

        app.update_university(UniversityRequest {
            university: "Kookmin".to_string(),
            university_email: "abc@kookmin.ac.kr".to_string(),
        })
        .unwrap();
        next(&mut app).await; // UniversityUpdated
        next(&mut app).await; // MemberInfoResult

        assert_eq!(
            app.session().member_info.and_then(|m| m.university),
            Some("Kookmin".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_update_surfaces_no_session_change() {
        let mock = Arc::new(MockApiService::new());
        mock.set_update(Err(ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }));
        mock.set_posts(Err(ApiError::Network("down".to_string())));
        let mut app = app_with(mock.clone(), Arc::new(MemoryTokenStore::with_token("t")));
        app.mount().unwrap();
        app.run_until_bootstrapped().await.unwrap();

        app.update_profile(ProfileUpdateRequest {
            name: "Kim".to_string(),
            gender: "F".to_string(),
            age: 21,
            description: String::new(),
        })
        .unwrap();
        next(&mut app).await;
        app.load_board_posts(1, 0, 20, PostSort::default());
        next(&mut app).await;

        assert!(app.session().is_logged_in);
        assert_eq!(app.store().post_page(), None);
        assert_eq!(mock.calls("get_profile"), 0);
    }
}
