//! REST API Layer
//!
//! `ApiClient` sends requests and maps failures; the resource facades
//! (`AuthApi`, `TasksApi`, `UsersApi`) build URLs and bodies on top of it.

mod auth;
mod client;
mod error;
mod query;
mod tasks;
mod transport;
mod users;

pub use auth::AuthApi;
pub use client::{ApiClient, RequestOptions};
pub use error::{ApiError, ApiResult};
pub use query::QueryBuilder;
pub use tasks::{extract_pagination, extract_tasks, task_list_path, TasksApi};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
pub use users::UsersApi;
