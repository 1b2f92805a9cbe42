//! View Helpers
//!
//! Pure functions and constants the components render with.

use chrono::{NaiveDate, NaiveDateTime};

use crate::api::ApiError;
use crate::models::{Task, TaskInput, TaskPriority, TaskStatus};
use crate::state::TaskModal;

/// How long dashboard banners stay up
pub const BANNER_TIMEOUT_MS: u32 = 3000;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this task?";
pub const TASK_CREATED: &str = "Task created successfully";
pub const TASK_UPDATED: &str = "Task updated successfully";
pub const TASK_DELETED: &str = "Task deleted successfully";
pub const LOAD_TASKS_FAILED: &str = "Failed to load tasks";

pub fn delete_failed(err: &ApiError) -> String {
    format!("Failed to delete task: {}", err)
}

pub fn load_task_failed(err: &ApiError) -> String {
    format!("Failed to load task: {}", err)
}

/// Submit button text while idle and while its request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub busy: &'static str,
}

impl SubmitLabels {
    pub fn pick(&self, busy: bool) -> &'static str {
        if busy {
            self.busy
        } else {
            self.idle
        }
    }
}

pub const LOGIN_LABELS: SubmitLabels = SubmitLabels { idle: "Log In", busy: "Logging in..." };
pub const REGISTER_LABELS: SubmitLabels = SubmitLabels { idle: "Create Account", busy: "Registering..." };
pub const CREATE_TASK_LABELS: SubmitLabels = SubmitLabels { idle: "Create Task", busy: "Saving..." };
pub const UPDATE_TASK_LABELS: SubmitLabels = SubmitLabels { idle: "Update Task", busy: "Saving..." };

/// Date portion of an ISO datetime (`2024-03-01T23:59:59` → `2024-03-01`)
pub fn date_part(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Turn a date input value into the timestamp sent to the server.
///
/// Blank → None, `YYYY-MM-DD` → `YYYY-MM-DDT23:59:59`. Values that already
/// carry a time, or do not parse, are passed through for the server to judge.
pub fn normalize_due_date(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(end_of_day) = date.and_hms_opt(23, 59, 59) {
            return Some(end_of_day.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    }
    if NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S").is_err() {
        log::warn!("Unrecognized due date {:?}, sending as-is", input);
    }
    Some(input.to_string())
}

/// Values of the task create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// `YYYY-MM-DD` or empty
    pub due_date: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Low,
            due_date: String::new(),
        }
    }
}

impl TaskForm {
    /// Prefill from the task being edited; blank for create
    pub fn for_modal(modal: &TaskModal) -> Self {
        match modal {
            TaskModal::Create => Self::default(),
            TaskModal::Edit(task) => Self::from_task(task),
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date.as_deref().map(date_part).unwrap_or_default().to_string(),
        }
    }

    pub fn to_input(&self) -> TaskInput {
        TaskInput {
            title: self.title.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            status: self.status,
            priority: self.priority,
            due_date: normalize_due_date(&self.due_date),
        }
    }
}
