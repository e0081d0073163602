//! # Navigation Router
//!
//! Two screen graphs, selected by the login flag:
//!
//! ```text
//!   Unauthenticated ──login / bootstrap ok──▶ Authenticated
//!         ▲                                       │
//!         └──────── logout / 401 / 403 ───────────┘
//! ```
//!
//! A transition tears down the whole stack and starts over at the new
//! graph's root; no history survives it. Routes of the other graph are never
//! reachable.

use std::fmt;

use crate::app::store::StoreEvent;
use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_phone_number;

/// Which screen graph is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGraph {
    Unauthenticated,
    Authenticated,
}

impl NavGraph {
    pub fn for_login(is_logged_in: bool) -> Self {
        if is_logged_in {
            NavGraph::Authenticated
        } else {
            NavGraph::Unauthenticated
        }
    }

    pub fn root(&self) -> Route {
        match self {
            NavGraph::Unauthenticated => Route::Login,
            NavGraph::Authenticated => Route::Main(Tab::Home),
        }
    }
}

/// Bottom tabs of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Chat,
    Setting,
}

/// Named routes with their navigation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Unauthenticated graph
    Login,
    SignUp5,
    SignUp6,
    SignUp7,
    NewPw,

    // Authenticated graph
    Main(Tab),
    Board { pending_refresh: bool },
    BoardPost { board_id: i64, post_id: i64 },
    BoardCreatePost { board_name: String, board_id: i64 },
    Search,
    Notification,
    SchoolAuth1,
    SchoolAuth2 { school_name: String, school_email: String },
    SchoolAuth3,
    PhoneAuth1,
    PhoneAuth2 { phone_number: String },
    PhoneAuth3,
    AlertSetting,
    Announcement,
    Support,
    VersionCheck,
    ChatList,
    Chat { room_id: String },
    ProfileDetails,
    GroupPurchasePost,
    PostGroupPurchase,
    ImageEnlargement { image_uri_list: Vec<String>, index: usize },
}

impl Route {
    /// Graph this route belongs to
    pub fn graph(&self) -> NavGraph {
        match self {
            Route::Login | Route::SignUp5 | Route::SignUp6 | Route::SignUp7 | Route::NewPw => {
                NavGraph::Unauthenticated
            }
            _ => NavGraph::Authenticated,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::SignUp5 => "SignUp5",
            Route::SignUp6 => "SignUp6",
            Route::SignUp7 => "SignUp7",
            Route::NewPw => "NewPw",
            Route::Main(_) => "Main",
            Route::Board { .. } => "Board",
            Route::BoardPost { .. } => "BoardPost",
            Route::BoardCreatePost { .. } => "BoardCreatePost",
            Route::Search => "Search",
            Route::Notification => "Notification",
            Route::SchoolAuth1 => "SchoolAuth1",
            Route::SchoolAuth2 { .. } => "SchoolAuth2",
            Route::SchoolAuth3 => "SchoolAuth3",
            Route::PhoneAuth1 => "PhoneAuth1",
            Route::PhoneAuth2 { .. } => "PhoneAuth2",
            Route::PhoneAuth3 => "PhoneAuth3",
            Route::AlertSetting => "AlertSetting",
            Route::Announcement => "Announcement",
            Route::Support => "Support",
            Route::VersionCheck => "VersionCheck",
            Route::ChatList => "ChatList",
            Route::Chat { .. } => "Chat",
            Route::ProfileDetails => "ProfileDetails",
            Route::GroupPurchasePost => "GroupPurchasePost",
            Route::PostGroupPurchase => "PostGroupPurchase",
            Route::ImageEnlargement { .. } => "ImageEnlargement",
        }
    }

    /// Parameter checks a screen would otherwise have to repeat
    fn check_params(&self) -> Result<()> {
        match self {
            Route::Main(_) => Err(AppError::Navigation(
                "Main is the root of the authenticated graph; use switch_tab".to_string(),
            )),
            Route::ImageEnlargement {
                image_uri_list,
                index,
            } if *index >= image_uri_list.len() => Err(AppError::Navigation(format!(
                "Image index {} out of range for {} images",
                index,
                image_uri_list.len()
            ))),
            Route::PhoneAuth2 { phone_number } => validate_phone_number(phone_number).into_result(),
            Route::Chat { room_id } if room_id.is_empty() => {
                Err(AppError::Navigation("Chat requires a room id".to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack navigator over the currently mounted graph.
#[derive(Debug, Clone)]
pub struct Router {
    graph: NavGraph,
    stack: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Starts unauthenticated, at the login screen.
    pub fn new() -> Self {
        Self::mounted(NavGraph::Unauthenticated)
    }

    fn mounted(graph: NavGraph) -> Self {
        Self {
            graph,
            stack: vec![graph.root()],
        }
    }

    pub fn graph(&self) -> NavGraph {
        self.graph
    }

    pub fn current(&self) -> &Route {
        // Never empty: go_back refuses to pop the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    /// Push a route of the mounted graph.
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        if route.graph() != self.graph {
            tracing::warn!(
                route = route.name(),
                graph = ?self.graph,
                "Navigation denied: route belongs to the other graph"
            );
            return Err(AppError::Navigation(format!(
                "{} is not reachable from the {:?} graph",
                route, self.graph
            )));
        }
        route.check_params()?;

        tracing::debug!(route = route.name(), depth = self.stack.len() + 1, "Navigate");
        self.stack.push(route);
        Ok(())
    }

    /// Pop the top route. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Select a bottom tab, dropping anything pushed above the main screen.
    pub fn switch_tab(&mut self, tab: Tab) -> Result<()> {
        if self.graph != NavGraph::Authenticated {
            return Err(AppError::Navigation(
                "Tabs are only available while logged in".to_string(),
            ));
        }
        self.stack.clear();
        self.stack.push(Route::Main(tab));
        Ok(())
    }

    /// Mount the graph for `is_logged_in`. Returns whether a transition
    /// happened; the same flag twice is a no-op.
    pub fn sync_login(&mut self, is_logged_in: bool) -> bool {
        let target = NavGraph::for_login(is_logged_in);
        if target == self.graph {
            return false;
        }

        tracing::info!(from = ?self.graph, to = ?target, "Switching navigation graph");
        *self = Self::mounted(target);
        true
    }

    /// React to store changes.
    pub fn handle_store_event(&mut self, event: &StoreEvent) {
        if let StoreEvent::LoginChanged(is_logged_in) = event {
            self.sync_login(*is_logged_in);
        }
    }
}
