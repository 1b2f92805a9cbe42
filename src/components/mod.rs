//! UI Components
//!
//! Leptos components for the auth screens, dashboard and modals.

mod alert;
mod confirm_modal;
mod dashboard;
mod login_form;
mod navbar;
mod password_field;
mod register_form;
mod stats_panel;
mod task_list;
mod task_modal;

pub use alert::Alert;
pub use confirm_modal::ConfirmModal;
pub use dashboard::Dashboard;
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use password_field::PasswordField;
pub use register_form::RegisterForm;
pub use stats_panel::StatsPanel;
pub use task_list::{TaskCard, TaskList};
pub use task_modal::TaskModalView;
