//! Task Modal Component
//!
//! Create/edit form. Clicking the backdrop or Cancel closes it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::models::{TaskPriority, TaskStatus};
use taskboard_client::state::{BannerKind, TaskModal};
use taskboard_client::view::{TaskForm, CREATE_TASK_LABELS, UPDATE_TASK_LABELS};

use super::Alert;
use crate::context::{controller, use_app};

#[component]
pub fn TaskModalView(modal: TaskModal) -> impl IntoView {
    let ctx = use_app();
    let form = TaskForm::for_modal(&modal);
    let labels = if modal.is_edit() { UPDATE_TASK_LABELS } else { CREATE_TASK_LABELS };

    let (title, set_title) = signal(form.title);
    let (description, set_description) = signal(form.description);
    let (status, set_status) = signal(form.status);
    let (priority, set_priority) = signal(form.priority);
    let (due_date, set_due_date) = signal(form.due_date);
    let (busy, set_busy) = signal(false);
    let (message, set_message) = signal(None::<String>);

    // Dismissing is ignored while a save is in flight
    let close = move || {
        if !busy.get_untracked() {
            ctx.state.update(|s| s.close_overlay());
        }
    };
    let shown = modal.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = TaskForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
            priority: priority.get_untracked(),
            due_date: due_date.get_untracked(),
        };
        let editing = ctx.state.with_untracked(|s| s.editing_task().cloned());
        let shown = shown.clone();
        set_busy.set(true);
        set_message.set(None);

        spawn_local(async move {
            let result = controller().save_task(editing.as_ref(), &form).await;
            set_busy.set(false);
            match result {
                Ok(success) => {
                    ctx.state.update(|s| s.close_task_modal(&shown));
                    ctx.refresh().await;
                    ctx.flash(BannerKind::Success, success);
                }
                Err(e) => {
                    if !ctx.fail(&e) {
                        set_message.set(Some(e.to_string()));
                    }
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" id="taskModal" on:click=move |_| close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h3 id="modalTitle">{modal.title()}</h3>
                <div id="taskModalMessage">
                    {move || {
                        message.get().map(|m| view! { <Alert kind=BannerKind::Error message=m /> })
                    }}
                </div>
                <form id="taskForm" on:submit=on_submit>
                    <div class="form-group">
                        <label for="taskTitle">"Title"</label>
                        <input
                            type="text"
                            id="taskTitle"
                            required=true
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="taskDescription">"Description"</label>
                        <textarea
                            id="taskDescription"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="taskStatus">"Status"</label>
                            <select
                                id="taskStatus"
                                on:change=move |ev| {
                                    if let Some(s) = TaskStatus::parse(&event_target_value(&ev)) {
                                        set_status.set(s);
                                    }
                                }
                            >
                                {TaskStatus::ALL
                                    .iter()
                                    .map(|s| {
                                        let s = *s;
                                        view! {
                                            <option value=s.as_str() selected=move || status.get() == s>
                                                {s.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="taskPriority">"Priority"</label>
                            <select
                                id="taskPriority"
                                on:change=move |ev| {
                                    if let Some(p) = TaskPriority::parse(&event_target_value(&ev)) {
                                        set_priority.set(p);
                                    }
                                }
                            >
                                {TaskPriority::ALL
                                    .iter()
                                    .map(|p| {
                                        let p = *p;
                                        view! {
                                            <option value=p.as_str() selected=move || priority.get() == p>
                                                {p.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="taskDueDate">"Due Date"</label>
                        <input
                            type="date"
                            id="taskDueDate"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            id="taskSubmitBtn"
                            disabled=move || busy.get()
                        >
                            {move || labels.pick(busy.get())}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            disabled=move || busy.get()
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
