//! Dashboard Component
//!
//! Stat cards, filters, the banner and the task list. Loads on mount and
//! whenever a filter changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::models::{TaskPriority, TaskStatus};
use taskboard_client::state::TaskModal;

use super::{Alert, StatsPanel, TaskList};
use crate::context::use_app;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.dashboard;

    // Stats and list on mount, list only on filter change
    Effect::new(move |mounted: Option<()>| {
        let _ = store.filters().get();
        // Filters are reset on logout; no load once the dashboard is gone
        if !ctx.state.with_untracked(|s| s.is_dashboard()) {
            return;
        }
        if mounted.is_none() {
            spawn_local(ctx.refresh());
        } else {
            spawn_local(ctx.reload_tasks());
        }
    });

    let banner = move || {
        ctx.state
            .with(|s| s.banner.clone())
            .map(|b| view! { <Alert kind=b.kind message=b.message /> })
    };

    view! {
        <section class="dashboard" id="dashboardSection">
            <div id="dashboardMessage">{banner}</div>
            <StatsPanel />
            <div class="task-controls">
                <div class="filters">
                    <select
                        id="statusFilter"
                        on:change=move |ev| {
                            let status = TaskStatus::parse(&event_target_value(&ev));
                            store.filters().write().status = status;
                        }
                    >
                        <option value="">"All Status"</option>
                        {TaskStatus::ALL
                            .iter()
                            .map(|status| {
                                let status = *status;
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || store.filters().with(|f| f.status == Some(status))
                                    >
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <select
                        id="priorityFilter"
                        on:change=move |ev| {
                            let priority = TaskPriority::parse(&event_target_value(&ev));
                            store.filters().write().priority = priority;
                        }
                    >
                        <option value="">"All Priority"</option>
                        {TaskPriority::ALL
                            .iter()
                            .map(|priority| {
                                let priority = *priority;
                                view! {
                                    <option
                                        value=priority.as_str()
                                        selected=move || store.filters().with(|f| f.priority == Some(priority))
                                    >
                                        {priority.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <button
                    class="btn btn-primary"
                    id="addTaskBtn"
                    on:click=move |_| ctx.state.update(|s| s.open_task_modal(TaskModal::Create))
                >
                    "+ Add New Task"
                </button>
            </div>
            <TaskList />
        </section>
    }
}
