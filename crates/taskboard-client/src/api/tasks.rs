//! Task Endpoints

use serde_json::Value;

use super::client::{ApiClient, RequestOptions};
use super::error::ApiResult;
use super::query::QueryBuilder;
use super::transport::{HttpTransport, Method};
use crate::models::{Pagination, Task, TaskFilters, TaskInput, TaskStats};
use crate::session::SessionStorage;

pub struct TasksApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: HttpTransport, S: SessionStorage> TasksApi<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    /// `GET /tasks?status&priority&page&limit`; the body is returned as-is,
    /// see [`extract_tasks`]
    pub async fn get_tasks(&self, filters: &TaskFilters) -> ApiResult<Value> {
        self.client.call(&task_list_path(filters), RequestOptions::default()).await
    }

    /// `GET /tasks/{id}` → `{data:{task}}`
    pub async fn get_task(&self, id: &str) -> ApiResult<Task> {
        self.client
            .call_data(&format!("/tasks/{}", id), RequestOptions::default(), Some("task"))
            .await
    }

    pub async fn create_task(&self, input: &TaskInput) -> ApiResult<Task> {
        let options = RequestOptions::json(Method::Post, input)?;
        self.client.call_data("/tasks", options, Some("task")).await
    }

    pub async fn update_task(&self, id: &str, input: &TaskInput) -> ApiResult<Task> {
        let options = RequestOptions::json(Method::Put, input)?;
        self.client.call_data(&format!("/tasks/{}", id), options, Some("task")).await
    }

    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.client
            .call(&format!("/tasks/{}", id), RequestOptions::method(Method::Delete))
            .await
            .map(|_| ())
    }

    /// `GET /tasks/stats` → `{data:{total_tasks, by_status}}`
    pub async fn get_stats(&self) -> ApiResult<TaskStats> {
        self.client.call_data("/tasks/stats", RequestOptions::default(), None).await
    }
}

/// `/tasks` plus the present filters in fixed order: status, priority, page, limit
pub fn task_list_path(filters: &TaskFilters) -> String {
    QueryBuilder::new()
        .push("status", filters.status.map(|s| s.as_str()))
        .push("priority", filters.priority.map(|p| p.as_str()))
        .push("page", filters.page.filter(|page| *page > 0))
        .push("limit", filters.limit.filter(|limit| *limit > 0))
        .apply("/tasks")
}

/// Pull the task array out of a list response.
///
/// Canonical shape is `{data:{tasks:[...]}}`. `{tasks:[...]}` and
/// `{data:[...]}` are still accepted but logged as divergent. Anything else
/// yields an empty list.
pub fn extract_tasks(body: &Value) -> Vec<Task> {
    if let Some(tasks) = body.get("data").and_then(|data| data.get("tasks")).and_then(Value::as_array) {
        return decode_tasks(tasks);
    }
    if let Some(tasks) = body.get("tasks").and_then(Value::as_array) {
        log::warn!("Task list arrived as top-level `tasks`; expected `data.tasks`");
        return decode_tasks(tasks);
    }
    if let Some(tasks) = body.get("data").and_then(Value::as_array) {
        log::warn!("Task list arrived as bare `data` array; expected `data.tasks`");
        return decode_tasks(tasks);
    }
    log::warn!("Task list response had no recognizable task array");
    Vec::new()
}

/// `data.pagination`, when the server sent it
pub fn extract_pagination(body: &Value) -> Option<Pagination> {
    let raw = body.get("data")?.get("pagination")?;
    serde_json::from_value(raw.clone()).ok()
}

fn decode_tasks(raw: &[Value]) -> Vec<Task> {
    raw.iter()
        .filter_map(|entry| match serde_json::from_value::<Task>(entry.clone()) {
            Ok(task) => Some(task),
            Err(e) => {
                log::warn!("Skipping malformed task: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, TaskStatus};
    use crate::testing::{client_with, StubTransport};
    use serde_json::json;

    fn task_json(id: &str) -> Value {
        json!({"_id": id, "title": format!("Task {}", id), "status": "pending", "priority": "low"})
    }

    #[test]
    fn test_filter_query_order_and_omission() {
        let filters = TaskFilters {
            status: Some(TaskStatus::Pending),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(task_list_path(&filters), "/tasks?status=pending&page=2");
    }

    #[test]
    fn test_filter_query_all_keys() {
        let filters = TaskFilters {
            status: Some(TaskStatus::InProgress),
            priority: Some(TaskPriority::High),
            page: Some(1),
            limit: Some(20),
        };
        assert_eq!(
            task_list_path(&filters),
            "/tasks?status=in-progress&priority=high&page=1&limit=20"
        );
    }

    #[test]
    fn test_no_filters_no_query() {
        assert_eq!(task_list_path(&TaskFilters::default()), "/tasks");
    }

    #[test]
    fn test_extract_accepts_all_three_shapes() {
        let tasks = json!([task_json("1"), task_json("2")]);
        let nested = json!({"data": {"tasks": tasks.clone()}});
        let top_level = json!({"tasks": tasks.clone()});
        let bare = json!({"data": tasks});

        let expected = extract_tasks(&nested);
        assert_eq!(expected.len(), 2);
        assert_eq!(extract_tasks(&top_level), expected);
        assert_eq!(extract_tasks(&bare), expected);
    }

    #[test]
    fn test_extract_prefers_nested_tasks() {
        let body = json!({"data": {"tasks": [task_json("a")]}, "tasks": [task_json("b")]});
        assert_eq!(extract_tasks(&body)[0].id, "a");
    }

    #[test]
    fn test_extract_unknown_shape_is_empty() {
        assert!(extract_tasks(&json!({"data": {"items": []}})).is_empty());
        assert!(extract_tasks(&json!({"detail": "Server error occurred"})).is_empty());
    }

    #[test]
    fn test_extract_pagination() {
        let body = json!({"data": {"tasks": [], "pagination": {"current_page": 2, "total_pages": 3, "total_tasks": 25}}});
        let page = extract_pagination(&body).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 25);
    }

    #[tokio::test]
    async fn test_get_tasks_sends_filters() {
        let transport = StubTransport::new().route(Method::Get, "/tasks", 200, r#"{"data":{"tasks":[]}}"#);
        let (client, _) = client_with(transport.clone());

        let filters = TaskFilters { priority: Some(TaskPriority::Medium), ..Default::default() };
        client.tasks().get_tasks(&filters).await.unwrap();

        assert_eq!(
            transport.last_request().unwrap().url,
            "http://127.0.0.1:8000/api/v1/tasks?priority=medium"
        );
    }

    #[tokio::test]
    async fn test_update_uses_put_with_id() {
        let transport = StubTransport::new().route(
            Method::Put,
            "/tasks/abc",
            200,
            r#"{"data":{"task":{"_id":"abc","title":"Renamed","status":"completed","priority":"high"}}}"#,
        );
        let (client, _) = client_with(transport.clone());

        let input = TaskInput {
            title: "Renamed".into(),
            description: None,
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            due_date: None,
        };
        let task = client.tasks().update_task("abc", &input).await.unwrap();

        assert_eq!(task.title, "Renamed");
        assert_eq!(transport.last_request().unwrap().method, Method::Put);
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let transport = StubTransport::new().route(Method::Delete, "/tasks/abc", 200, r#"{"data":null}"#);
        let (client, _) = client_with(transport);

        assert!(client.tasks().delete_task("abc").await.is_ok());
    }
}
