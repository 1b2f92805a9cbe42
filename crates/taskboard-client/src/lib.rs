//! Taskboard Client Core
//!
//! Everything the task board needs that does not touch the DOM:
//! - config: API base URL
//! - models: users, tasks, stats and request payloads
//! - session: token + cached profile over a durable key/value store
//! - api: HTTP client, status mapping and per-resource facades
//! - state: the view state machine driven by the UI
//! - controller: operations the UI triggers (login, load dashboard, save, delete)
//! - view: pure helpers shared by the components

pub mod api;
pub mod config;
pub mod controller;
pub mod models;
pub mod session;
pub mod state;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, ApiError, ApiResult, HttpTransport};
pub use config::ApiConfig;
pub use controller::{Controller, DashboardSnapshot};
pub use session::{MemoryStorage, Session, SessionError, SessionStorage};
pub use state::{AppState, AuthView, Banner, BannerKind, Overlay, Screen, TaskModal};
