//! Stats Panel Component

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_app().dashboard;
    let summary = move || store.summary().get();

    view! {
        <div class="stats-grid" id="stats">
            <div class="stat-card">
                <h3 id="totalTasks">{move || summary().total}</h3>
                <p>"Total Tasks"</p>
            </div>
            <div class="stat-card stat-pending">
                <h3 id="pendingTasks">{move || summary().pending}</h3>
                <p>"To Do"</p>
            </div>
            <div class="stat-card stat-in-progress">
                <h3 id="inProgressTasks">{move || summary().in_progress}</h3>
                <p>"In Progress"</p>
            </div>
            <div class="stat-card stat-completed">
                <h3 id="completedTasks">{move || summary().completed}</h3>
                <p>"Completed"</p>
            </div>
        </div>
    }
}
