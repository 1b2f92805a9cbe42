//! Task List Component
//!
//! Renders the loaded tasks as cards, or the loading / error / empty state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::models::Task;
use taskboard_client::state::{BannerKind, TaskModal};
use taskboard_client::view::{date_part, load_task_failed};

use super::Alert;
use crate::context::{controller, use_app};
use crate::store::DashboardStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app().dashboard;

    view! {
        <div id="tasksList">
            {move || {
                if store.loading().get() {
                    return view! { <div class="loading">"Loading tasks..."</div> }.into_any();
                }
                if let Some(err) = store.list_error().get() {
                    return view! { <Alert kind=BannerKind::Error message=err /> }.into_any();
                }
                let tasks = store.tasks().get();
                if tasks.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>"No tasks found"</h3>
                            <p>"Create your first task to get started!"</p>
                        </div>
                    }
                        .into_any();
                }
                let total = store.pagination().get().map(|p| {
                    view! { <p class="task-count">{format!("{} of {} tasks", tasks.len(), p.total)}</p> }
                });
                view! {
                    {total}
                    <div class="task-list">
                        {tasks.into_iter().map(|task| view! { <TaskCard task=task /> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_app();
    let edit_id = task.id.clone();
    let delete_id = task.id.clone();

    // Fetch the latest copy before opening the editor
    let on_edit = move |_| {
        let id = edit_id.clone();
        spawn_local(async move {
            match controller().fetch_task(&id).await {
                Ok(task) => ctx.state.update(|s| s.open_task_modal(TaskModal::Edit(task))),
                Err(e) => {
                    if !ctx.fail(&e) {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(&load_task_failed(&e));
                        }
                    }
                }
            }
        });
    };

    let on_delete = move |_| ctx.state.update(|s| s.confirm_delete(delete_id.clone()));

    let status_class = format!("status-badge status-{}", task.status.as_str());
    let priority_class = format!("status-badge priority-{}", task.priority.as_str());
    let due = task
        .due_date
        .as_deref()
        .map(|due| view! { <span class="task-due">"Due " {date_part(due).to_string()}</span> });
    let description = task
        .description
        .filter(|d| !d.is_empty())
        .map(|d| view! { <p class="task-description">{d}</p> });

    view! {
        <div class="task-card">
            <div class="task-header">
                <h4 class="task-title">{task.title}</h4>
                <div class="task-meta">
                    <span class=status_class>{task.status.as_str()}</span>
                    <span class=priority_class>{task.priority.as_str()}</span>
                    {due}
                </div>
            </div>
            {description}
            <div class="task-actions">
                <button class="btn btn-secondary btn-small" on:click=on_edit>"Edit"</button>
                <button class="btn btn-danger btn-small" on:click=on_delete>"Delete"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use reactive_stores::Store;
    use taskboard_client::models::{TaskPriority, TaskStatus};
    use taskboard_client::state::AppState;

    use crate::context::AppContext;
    use crate::store::DashboardState;

    fn render_card(task: Task) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppContext::new(
                RwSignal::new(AppState::default()),
                Store::new(DashboardState::default()),
            ));
            view! { <TaskCard task=task /> }.to_html()
        })
    }

    #[test]
    fn test_card_escapes_user_text() {
        let task = Task {
            id: "t1".to_string(),
            title: "<script>alert(1)</script>".to_string(),
            description: Some("<img src=x>".to_string()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            due_date: Some("2024-03-01T23:59:59".to_string()),
            user_id: None,
            created_at: None,
            updated_at: None,
        };

        let html = render_card(task);

        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains("status-in-progress"));
        assert!(html.contains("2024-03-01"));
        assert!(!html.contains("T23:59:59"));
    }
}
