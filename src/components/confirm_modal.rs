//! Confirm Modal Component
//!
//! Delete confirmation. Only the Delete button performs the request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::state::BannerKind;
use taskboard_client::view::{delete_failed, TASK_DELETED};

use crate::context::{controller, use_app};

#[component]
pub fn ConfirmModal(task_id: String, message: String) -> impl IntoView {
    let ctx = use_app();
    let dismiss = move || ctx.state.update(|s| s.close_overlay());

    let on_confirm = move |_| {
        let id = task_id.clone();
        dismiss();
        spawn_local(async move {
            match controller().delete_task(&id).await {
                Ok(()) => {
                    ctx.refresh().await;
                    ctx.flash(BannerKind::Success, TASK_DELETED);
                }
                Err(e) => {
                    if !ctx.fail(&e) {
                        ctx.flash(BannerKind::Error, delete_failed(&e));
                    }
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" id="confirmModal" on:click=move |_| dismiss()>
            <div class="modal confirm-modal" on:click=|ev| ev.stop_propagation()>
                <h3>"Confirm Action"</h3>
                <p id="confirmMessage">{message}</p>
                <div class="modal-actions">
                    <button class="btn btn-danger" id="confirmYes" on:click=on_confirm>
                        "Delete"
                    </button>
                    <button class="btn btn-secondary" id="confirmNo" on:click=move |_| dismiss()>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
