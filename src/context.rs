//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the handful of
//! actions several components trigger (refresh, banners, logout).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::state::{AppState, BannerKind};
use taskboard_client::view::BANNER_TIMEOUT_MS;
use taskboard_client::{ApiClient, ApiConfig, ApiError, Controller, Session};

use crate::http::FetchTransport;
use crate::storage::BrowserStorage;
use crate::store::{self, DashboardStateStoreFields, DashboardStore};

pub type BrowserController = Controller<FetchTransport, BrowserStorage>;

/// Controller over fetch + localStorage. Both are stateless handles, so
/// building one per call is cheap.
pub fn controller() -> BrowserController {
    let session = Session::new(BrowserStorage);
    Controller::new(ApiClient::new(FetchTransport, session, ApiConfig::from_build_env()))
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen, overlay, banner, cached user
    pub state: RwSignal<AppState>,
    /// Stats, task list and filters
    pub dashboard: DashboardStore,
}

impl AppContext {
    pub fn new(state: RwSignal<AppState>, dashboard: DashboardStore) -> Self {
        Self { state, dashboard }
    }

    /// Refetch stats and task list concurrently; resolves when both are in
    pub async fn refresh(self) {
        let filters = self.dashboard.filters().get_untracked();
        let ticket = store::begin_task_load(&self.dashboard);
        let snapshot = controller().load_dashboard(&filters).await;
        if let Some(err) = snapshot.auth_expired().cloned() {
            self.fail(&err);
            return;
        }
        store::apply_snapshot(&self.dashboard, ticket, snapshot);
    }

    /// Refetch only the task list (filter change)
    pub async fn reload_tasks(self) {
        let filters = self.dashboard.filters().get_untracked();
        let ticket = store::begin_task_load(&self.dashboard);
        let listing = controller().load_tasks(&filters).await;
        if let Err(err) = &listing {
            if self.fail(err) {
                return;
            }
        }
        store::apply_listing(&self.dashboard, ticket, listing);
    }

    /// Handle a failed dashboard call. Returns true when the session expired
    /// and the app went back to the login view.
    pub fn fail(&self, err: &ApiError) -> bool {
        let mut expired = false;
        self.state.update(|s| expired = s.absorb_error(err));
        if expired {
            store::reset(&self.dashboard);
        }
        expired
    }

    /// Show a dashboard banner that clears itself
    pub fn flash(&self, kind: BannerKind, message: impl Into<String>) {
        let message = message.into();
        let mut seq = 0;
        self.state.update(|s| seq = s.show_banner(kind, message));
        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
            state.update(|s| s.clear_banner(seq));
        });
    }

    pub fn logout(&self) {
        controller().logout();
        self.state.update(|s| s.log_out());
        store::reset(&self.dashboard);
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
