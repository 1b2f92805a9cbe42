//! Taskboard Frontend App
//!
//! Root component: picks the screen from `AppState` and hosts the overlays.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use taskboard_client::state::{AuthView, Overlay, Screen};

use crate::components::{ConfirmModal, Dashboard, LoginForm, Navbar, RegisterForm, TaskModalView};
use crate::context::{controller, AppContext};
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(controller().initial_state());
    let dashboard = Store::new(DashboardState::default());
    provide_context(AppContext::new(state, dashboard));

    // Token without a cached profile: fetch the profile first
    if state.with_untracked(|s| s.screen == Screen::Restoring) {
        spawn_local(async move {
            match controller().restore_session().await {
                Ok(user) => state.update(|s| s.enter_dashboard(user)),
                Err(e) => {
                    log::warn!("Could not restore session: {}", e);
                    state.update(|s| {
                        if !s.absorb_error(&e) {
                            s.log_out();
                        }
                    });
                }
            }
        });
    }

    let screen = Memo::new(move |_| state.with(|s| s.screen));
    let overlay = Memo::new(move |_| state.with(|s| s.overlay.clone()));

    view! {
        <Navbar />
        <main class="container">
            {move || match screen.get() {
                Screen::LoggedOut(AuthView::Login) => view! { <LoginForm /> }.into_any(),
                Screen::LoggedOut(AuthView::Register) => view! { <RegisterForm /> }.into_any(),
                Screen::Restoring => view! { <div class="loading">"Loading..."</div> }.into_any(),
                Screen::Dashboard => view! { <Dashboard /> }.into_any(),
            }}
        </main>
        {move || match overlay.get() {
            Overlay::None => ().into_any(),
            Overlay::Task(modal) => view! { <TaskModalView modal=modal /> }.into_any(),
            Overlay::ConfirmDelete { task_id, message } => {
                view! { <ConfirmModal task_id=task_id message=message /> }.into_any()
            }
        }}
    }
}
