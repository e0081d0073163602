//! # Navigation Handlers
//!
//! Screen navigation and keeping the router on the right graph.

use async_channel::Receiver;

use crate::app::router::{Route, Router, Tab};
use crate::app::store::{Store, StoreEvent};
use crate::core::error::Result;

/// Handle a route push
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_navigate(router: &mut Router, store: &Store, route: Route) -> Result<()> {
    // A board opened after creating a post refetches even if the caller forgot
    let route = match route {
        Route::Board { pending_refresh } => Route::Board {
            pending_refresh: pending_refresh || store.pending_board_refresh(),
        },
        other => other,
    };
    router.navigate(route)
}

pub(crate) fn handle_go_back(router: &mut Router) -> bool {
    let popped = router.go_back();
    if !popped {
        tracing::debug!(route = router.current().name(), "Already at root");
    }
    popped
}

pub(crate) fn handle_switch_tab(router: &mut Router, tab: Tab) -> Result<()> {
    router.switch_tab(tab)?;
    tracing::debug!(?tab, "Tab selected");
    Ok(())
}

/// Drain pending store events into the router. Returns how many were seen.
pub(crate) fn sync_router(router: &mut Router, store_rx: &Receiver<StoreEvent>) -> usize {
    let mut seen = 0;
    while let Ok(event) = store_rx.try_recv() {
        router.handle_store_event(&event);
        seen += 1;
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::router::NavGraph;

    #[test]
    fn test_board_route_picks_up_pending_refresh() {
        let store = Store::new();
        let mut router = Router::new();
        router.sync_login(true);
        store.set_pending_board_refresh(true);

        handle_navigate(
            &mut router,
            &store,
            Route::Board {
                pending_refresh: false,
            },
        )
        .unwrap();
        assert_eq!(
            router.current(),
            &Route::Board {
                pending_refresh: true
            }
        );
    }

    #[test]
    fn test_sync_follows_last_login_flag() {
        let store = Store::new();
        let rx = store.subscribe();
        let mut router = Router::new();

        store.set_logged_in(true);
        store.dismiss_splash();
        assert_eq!(sync_router(&mut router, &rx), 2);
        assert_eq!(router.graph(), NavGraph::Authenticated);

        store.reset_session();
        sync_router(&mut router, &rx);
        assert_eq!(router.current(), &Route::Login);
    }
}
