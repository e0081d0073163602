//! # Event Handler
//!
//! Applies [`AppEvent`] results from background tasks to the store.
//!
//! Runs on the UI thread only, from [`App::on_tick`] or
//! [`App::process_next_event`]. Nothing is applied once the app is unmounted.

use crate::app::bootstrap::{apply_outcome, BootstrapOutcome};
use crate::app::handlers;
use crate::app::{App, AppEvent, BootstrapPhase};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        if matches!(self.bootstrap, BootstrapPhase::Unmounted) {
            tracing::debug!(?event, "Discarding event after unmount");
            return;
        }

        match event {
            AppEvent::BootstrapFinished(outcome) => {
                self.handle_bootstrap_finished(outcome);
            }
            AppEvent::LoginResult(result) => {
                if result.is_ok() {
                    self.supersede_bootstrap();
                }
                handlers::auth::handle_login_result(
                    &self.store,
                    self.api.clone(),
                    self.event_tx.clone(),
                    result,
                );
            }
            AppEvent::MemberInfoResult(result) => {
                handlers::auth::handle_member_info_result(&self.store, result);
            }
            AppEvent::BoardListResult(result) => {
                handlers::board::handle_board_list_result(&self.store, result);
            }
            AppEvent::BoardPostsResult(result) => {
                handlers::board::handle_board_posts_result(&self.store, result);
            }
            AppEvent::BoardPostResult(result) => {
                handlers::board::handle_board_post_result(&self.store, result);
            }
            AppEvent::ProfileLoaded { profile, image } => {
                handlers::profile::handle_profile_loaded(&self.store, profile, image);
            }
            AppEvent::ProfileUpdated(result) => {
                handlers::profile::handle_profile_updated(
                    &self.store,
                    self.api.clone(),
                    self.event_tx.clone(),
                    result,
                );
            }
            AppEvent::UniversityUpdated(result) => {
                handlers::profile::handle_university_updated(
                    &self.store,
                    self.api.clone(),
                    self.event_tx.clone(),
                    result,
                );
            }
            AppEvent::AppearanceChanged(appearance) => {
                self.theme.on_appearance_changed(appearance);
            }
        }
    }
}

impl App {
    fn handle_bootstrap_finished(&mut self, outcome: BootstrapOutcome) {
        if !matches!(self.bootstrap, BootstrapPhase::Running(_)) {
            tracing::warn!(?outcome, "Ignoring bootstrap result with no check running");
            return;
        }

        tracing::info!(logged_in = outcome.is_logged_in(), "Bootstrap finished");
        self.bootstrap = BootstrapPhase::Finished;
        apply_outcome(&self.store, outcome);
    }

    /// A login that lands before the launch check resolves wins over its outcome.
    fn supersede_bootstrap(&mut self) {
        if !matches!(self.bootstrap, BootstrapPhase::Running(_)) {
            return;
        }
        if let BootstrapPhase::Running(handle) =
            std::mem::replace(&mut self.bootstrap, BootstrapPhase::Finished)
        {
            handle.abort();
        }
        tracing::info!("Login completed during session check; check abandoned");
        self.store.dismiss_splash();
    }
}
