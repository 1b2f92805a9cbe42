//! Application Controller
//!
//! The operations behind each UI event. Results come back as values; the
//! caller applies them to `AppState` and the rendered views.

use futures::join;

use crate::api::{extract_pagination, extract_tasks, ApiClient, ApiError, ApiResult, HttpTransport};
use crate::models::{LoginRequest, Pagination, RegisterRequest, StatusSummary, Task, TaskFilters, User};
use crate::session::{SessionError, SessionStorage};
use crate::state::AppState;
use crate::view::{TaskForm, TASK_CREATED, TASK_UPDATED};

/// One task list load
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListing {
    pub tasks: Vec<Task>,
    pub pagination: Option<Pagination>,
}

/// Stats and task list fetched side by side
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: ApiResult<StatusSummary>,
    pub tasks: ApiResult<TaskListing>,
}

impl DashboardSnapshot {
    /// First session-expiry among the two results
    pub fn auth_expired(&self) -> Option<&ApiError> {
        [self.stats.as_ref().err(), self.tasks.as_ref().err()]
            .into_iter()
            .flatten()
            .find(|err| err.is_auth_expired())
    }
}

#[derive(Debug, Clone)]
pub struct Controller<T, S> {
    api: ApiClient<T, S>,
}

impl<T: HttpTransport, S: SessionStorage> Controller<T, S> {
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    /// Dashboard when a token and profile are stored, restoring when only
    /// the token is, login otherwise. A corrupt profile is discarded.
    pub fn initial_state(&self) -> AppState {
        let session = self.api.session();
        let user = match session.get_user() {
            Ok(user) => user,
            Err(SessionError::CorruptUser(e)) => {
                log::warn!("Discarding corrupt cached user: {}", e);
                session.remove_user();
                None
            }
            Err(e) => {
                log::warn!("Could not read cached user: {}", e);
                None
            }
        };
        AppState::initial(session.is_authenticated(), user)
    }

    /// Fetch the profile for a stored token and cache it
    pub async fn restore_session(&self) -> ApiResult<User> {
        let user = self.api.auth().get_me().await?;
        self.api.session().set_user(&user)?;
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let payload = self.api.auth().login(&request).await?;
        self.api.session().begin(&payload.token, &payload.user)?;
        log::info!("Logged in as {}", payload.user.email);
        Ok(payload.user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        let payload = self.api.auth().register(request).await?;
        self.api.session().begin(&payload.token, &payload.user)?;
        log::info!("Registered {}", payload.user.email);
        Ok(payload.user)
    }

    pub async fn load_stats(&self) -> ApiResult<StatusSummary> {
        let stats = self.api.tasks().get_stats().await?;
        Ok(stats.summary())
    }

    pub async fn load_tasks(&self, filters: &TaskFilters) -> ApiResult<TaskListing> {
        let body = self.api.tasks().get_tasks(filters).await?;
        Ok(TaskListing {
            tasks: extract_tasks(&body),
            pagination: extract_pagination(&body),
        })
    }

    /// Issue the stats and list requests concurrently and wait for both
    pub async fn load_dashboard(&self, filters: &TaskFilters) -> DashboardSnapshot {
        let (stats, tasks) = join!(self.load_stats(), self.load_tasks(filters));
        if let Err(e) = &stats {
            log::error!("Failed to load stats: {}", e);
        }
        DashboardSnapshot { stats, tasks }
    }

    /// Task to prefill the edit modal with
    pub async fn fetch_task(&self, id: &str) -> ApiResult<Task> {
        self.api.tasks().get_task(id).await
    }

    /// Create, or update `editing` when set. Returns the success banner text.
    pub async fn save_task(&self, editing: Option<&Task>, form: &TaskForm) -> ApiResult<&'static str> {
        let input = form.to_input();
        match editing {
            Some(task) => {
                self.api.tasks().update_task(&task.id, &input).await?;
                Ok(TASK_UPDATED)
            }
            None => {
                self.api.tasks().create_task(&input).await?;
                Ok(TASK_CREATED)
            }
        }
    }

    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.api.tasks().delete_task(id).await
    }

    /// Local logout; no server call is made
    pub fn logout(&self) {
        self.api.session().logout();
    }
}
