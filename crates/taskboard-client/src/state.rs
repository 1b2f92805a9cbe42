//! View State Machine
//!
//! `LoggedOut(Login|Register)` ⇄ `Dashboard`, with at most one overlay
//! (task modal or delete confirmation) on top of the dashboard. Plain data:
//! the UI keeps it in a signal and calls these transitions.

use crate::api::ApiError;
use crate::models::{Task, User};
use crate::view::DELETE_CONFIRM_MESSAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    LoggedOut(AuthView),
    /// Token present, profile being fetched
    Restoring,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskModal {
    Create,
    Edit(Task),
}

impl TaskModal {
    pub fn is_edit(&self) -> bool {
        matches!(self, TaskModal::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            TaskModal::Create => "Create New Task",
            TaskModal::Edit(_) => "Edit Task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    Task(TaskModal),
    ConfirmDelete { task_id: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert-success",
            BannerKind::Error => "alert alert-error",
        }
    }
}

/// Transient dashboard message; `seq` identifies it for auto-clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub user: Option<User>,
    pub overlay: Overlay,
    pub banner: Option<Banner>,
    /// Inline message for the login form (e.g. after a forced logout)
    pub auth_notice: Option<String>,
    banner_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::logged_out()
    }
}

impl AppState {
    pub fn logged_out() -> Self {
        Self {
            screen: Screen::LoggedOut(AuthView::Login),
            user: None,
            overlay: Overlay::None,
            banner: None,
            auth_notice: None,
            banner_seq: 0,
        }
    }

    /// Startup state from what the session holds
    pub fn initial(authenticated: bool, user: Option<User>) -> Self {
        let mut state = Self::logged_out();
        match (authenticated, user) {
            (true, Some(user)) => state.enter_dashboard(user),
            (true, None) => state.screen = Screen::Restoring,
            (false, _) => {}
        }
        state
    }

    pub fn is_dashboard(&self) -> bool {
        self.screen == Screen::Dashboard
    }

    pub fn show_login(&mut self) {
        if matches!(self.screen, Screen::LoggedOut(_)) {
            self.screen = Screen::LoggedOut(AuthView::Login);
        }
    }

    pub fn show_register(&mut self) {
        if matches!(self.screen, Screen::LoggedOut(_)) {
            self.screen = Screen::LoggedOut(AuthView::Register);
            self.auth_notice = None;
        }
    }

    /// Successful login/register/restore
    pub fn enter_dashboard(&mut self, user: User) {
        self.screen = Screen::Dashboard;
        self.user = Some(user);
        self.overlay = Overlay::None;
        self.banner = None;
        self.auth_notice = None;
    }

    /// Back to the login view with everything dashboard-related dropped
    pub fn log_out(&mut self) {
        let seq = self.banner_seq;
        *self = Self::logged_out();
        self.banner_seq = seq;
    }

    /// Route an error from a dashboard-initiated call. An expired session
    /// forces the login view; returns true when that happened.
    pub fn absorb_error(&mut self, err: &ApiError) -> bool {
        if err.is_auth_expired() {
            self.log_out();
            self.auth_notice = Some(err.to_string());
            true
        } else {
            false
        }
    }

    pub fn open_task_modal(&mut self, modal: TaskModal) {
        if self.is_dashboard() {
            self.overlay = Overlay::Task(modal);
        }
    }

    pub fn confirm_delete(&mut self, task_id: impl Into<String>) {
        if self.is_dashboard() {
            self.overlay = Overlay::ConfirmDelete {
                task_id: task_id.into(),
                message: DELETE_CONFIRM_MESSAGE.to_string(),
            };
        }
    }

    /// Cancel, overlay click, or successful save; drops the edited task
    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Close the task modal only if `modal` is still the one showing
    pub fn close_task_modal(&mut self, modal: &TaskModal) {
        if matches!(&self.overlay, Overlay::Task(open) if open == modal) {
            self.overlay = Overlay::None;
        }
    }

    /// Task currently open in the edit modal
    pub fn editing_task(&self) -> Option<&Task> {
        match &self.overlay {
            Overlay::Task(TaskModal::Edit(task)) => Some(task),
            _ => None,
        }
    }

    /// Replace the banner; returns its sequence number for `clear_banner`
    pub fn show_banner(&mut self, kind: BannerKind, message: impl Into<String>) -> u64 {
        self.banner_seq += 1;
        self.banner = Some(Banner {
            kind,
            message: message.into(),
            seq: self.banner_seq,
        });
        self.banner_seq
    }

    /// Clear the banner only if it is still the one identified by `seq`
    pub fn clear_banner(&mut self, seq: u64) {
        if self.banner.as_ref().map(|b| b.seq) == Some(seq) {
            self.banner = None;
        }
    }
}

/// Monotonic request counter; only the latest ticket may apply its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new request, superseding all earlier ones
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}
