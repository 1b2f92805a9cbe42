//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::state::BannerKind;
use taskboard_client::view::LOGIN_LABELS;

use super::{Alert, PasswordField};
use crate::context::{controller, use_app};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    // Starts with the "session expired" notice after a forced logout
    let (message, set_message) = signal(ctx.state.with_untracked(|s| s.auth_notice.clone()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        set_busy.set(true);
        set_message.set(None);

        spawn_local(async move {
            let result = controller().login(&email, &password).await;
            set_busy.set(false);
            match result {
                Ok(user) => ctx.state.update(|s| s.enter_dashboard(user)),
                Err(e) => set_message.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="auth-container" id="loginSection">
            <div class="auth-box">
                <h2>"Welcome Back"</h2>
                <p class="auth-subtitle">"Log in to manage your tasks"</p>
                <div id="loginMessage">
                    {move || {
                        message.get().map(|m| view! { <Alert kind=BannerKind::Error message=m /> })
                    }}
                </div>
                <form id="loginForm" on:submit=on_submit>
                    <div class="form-group">
                        <label for="loginEmail">"Email"</label>
                        <input
                            type="email"
                            id="loginEmail"
                            required=true
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <PasswordField
                        id="loginPassword"
                        placeholder="Enter your password"
                        value=password
                        set_value=set_password
                    />
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        id="loginBtn"
                        disabled=move || busy.get()
                    >
                        {move || LOGIN_LABELS.pick(busy.get())}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.state.update(|s| s.show_register());
                    }>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
