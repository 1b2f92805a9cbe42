//! Dashboard Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! dashboard data (stats, task list, filters).

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_client::controller::{DashboardSnapshot, TaskListing};
use taskboard_client::models::{Pagination, StatusSummary, Task, TaskFilters};
use taskboard_client::state::Generation;
use taskboard_client::view::LOAD_TASKS_FAILED;
use taskboard_client::ApiResult;

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Tasks matching the current filters
    pub tasks: Vec<Task>,
    /// Numbers on the stat cards
    pub summary: StatusSummary,
    pub pagination: Option<Pagination>,
    /// Current filter-control values
    pub filters: TaskFilters,
    /// A list load is in flight
    pub loading: bool,
    pub list_error: Option<String>,
    /// Only the latest load may write `tasks` or `summary`
    pub list_generation: Generation,
}

pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================

/// Mark a load as started; returns its ticket
pub fn begin_task_load(store: &DashboardStore) -> u64 {
    let ticket = store.list_generation().write().next();
    store.loading().set(true);
    store.list_error().set(None);
    ticket
}

fn is_current(store: &DashboardStore, ticket: u64) -> bool {
    let current = store.list_generation().get_untracked().is_current(ticket);
    if !current {
        log::debug!("Dropping stale dashboard load (ticket {})", ticket);
    }
    current
}

/// Write a finished stats + list load if `ticket` is still the latest one
pub fn apply_snapshot(store: &DashboardStore, ticket: u64, snapshot: DashboardSnapshot) {
    if !is_current(store, ticket) {
        return;
    }
    if let Ok(summary) = snapshot.stats {
        store.summary().set(summary);
    }
    write_listing(store, snapshot.tasks);
}

/// Write a finished list-only load if `ticket` is still the latest one
pub fn apply_listing(store: &DashboardStore, ticket: u64, listing: ApiResult<TaskListing>) {
    if is_current(store, ticket) {
        write_listing(store, listing);
    }
}

fn write_listing(store: &DashboardStore, listing: ApiResult<TaskListing>) {
    store.loading().set(false);
    match listing {
        Ok(listing) => {
            store.tasks().set(listing.tasks);
            store.pagination().set(listing.pagination);
        }
        Err(e) => {
            log::error!("Load tasks error: {}", e);
            store.tasks().set(Vec::new());
            store.pagination().set(None);
            store.list_error().set(Some(LOAD_TASKS_FAILED.to_string()));
        }
    }
}

/// Clear the dashboard and supersede every in-flight load
pub fn reset(store: &DashboardStore) {
    store.list_generation().write().next();
    store.tasks().set(Vec::new());
    store.summary().set(StatusSummary::default());
    store.pagination().set(None);
    store.filters().set(TaskFilters::default());
    store.loading().set(false);
    store.list_error().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_client::models::{TaskPriority, TaskStatus};
    use taskboard_client::ApiError;

    fn task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: None,
            user_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn snapshot(total: u64, ids: &[&str]) -> DashboardSnapshot {
        DashboardSnapshot {
            stats: Ok(StatusSummary { total, ..StatusSummary::default() }),
            tasks: Ok(TaskListing {
                tasks: ids.iter().map(|id| task(id)).collect(),
                pagination: None,
            }),
        }
    }

    fn with_store(test: impl FnOnce(DashboardStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(DashboardState::default())));
    }

    fn task_ids(store: &DashboardStore) -> Vec<String> {
        store.tasks().get_untracked().into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_latest_load_is_applied() {
        with_store(|store| {
            let ticket = begin_task_load(&store);
            assert!(store.loading().get_untracked());

            apply_snapshot(&store, ticket, snapshot(2, &["a", "b"]));

            assert!(!store.loading().get_untracked());
            assert_eq!(store.summary().get_untracked().total, 2);
            assert_eq!(task_ids(&store), vec!["a", "b"]);
        });
    }

    #[test]
    fn test_stale_load_drops_list_and_stats() {
        with_store(|store| {
            let old = begin_task_load(&store);
            let new = begin_task_load(&store);

            apply_snapshot(&store, new, snapshot(1, &["fresh"]));
            apply_snapshot(&store, old, snapshot(9, &["stale"]));

            assert_eq!(store.summary().get_untracked().total, 1);
            assert_eq!(task_ids(&store), vec!["fresh"]);
        });
    }

    #[test]
    fn test_reset_supersedes_in_flight_load() {
        with_store(|store| {
            let ticket = begin_task_load(&store);
            reset(&store);

            apply_snapshot(&store, ticket, snapshot(9, &["private"]));
            apply_listing(
                &store,
                ticket,
                Ok(TaskListing { tasks: vec![task("private")], pagination: None }),
            );

            assert_eq!(store.summary().get_untracked().total, 0);
            assert!(task_ids(&store).is_empty());
            assert!(!store.loading().get_untracked());
        });
    }

    #[test]
    fn test_failed_list_shows_error() {
        with_store(|store| {
            let ticket = begin_task_load(&store);
            apply_listing(&store, ticket, Err(ApiError::Server));

            assert_eq!(store.list_error().get_untracked().as_deref(), Some("Failed to load tasks"));
            assert!(task_ids(&store).is_empty());
        });
    }
}
