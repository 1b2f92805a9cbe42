//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::models::{RegisterRequest, Role};
use taskboard_client::state::BannerKind;
use taskboard_client::view::REGISTER_LABELS;

use super::{Alert, PasswordField};
use crate::context::{controller, use_app};

const MIN_PASSWORD_LEN: u32 = 6;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::User);
    let (busy, set_busy) = signal(false);
    let (message, set_message) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        set_busy.set(true);
        set_message.set(None);

        spawn_local(async move {
            let result = controller().register(&request).await;
            set_busy.set(false);
            match result {
                Ok(user) => ctx.state.update(|s| s.enter_dashboard(user)),
                Err(e) => set_message.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="auth-container" id="registerSection">
            <div class="auth-box">
                <h2>"Create Account"</h2>
                <p class="auth-subtitle">"Join your team's task board"</p>
                <div id="registerMessage">
                    {move || {
                        message.get().map(|m| view! { <Alert kind=BannerKind::Error message=m /> })
                    }}
                </div>
                <form id="registerForm" on:submit=on_submit>
                    <div class="form-group">
                        <label for="registerName">"Full Name"</label>
                        <input
                            type="text"
                            id="registerName"
                            required=true
                            placeholder="Jane Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="registerEmail">"Email"</label>
                        <input
                            type="email"
                            id="registerEmail"
                            required=true
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <PasswordField
                        id="registerPassword"
                        placeholder="At least 6 characters"
                        value=password
                        set_value=set_password
                        min_length=MIN_PASSWORD_LEN
                    />
                    <div class="form-group">
                        <label for="registerRole">"Role"</label>
                        <select
                            id="registerRole"
                            on:change=move |ev| set_role.set(Role::parse(&event_target_value(&ev)))
                        >
                            <option value=Role::User.as_str() selected=move || role.get() == Role::User>
                                "Team Member"
                            </option>
                            <option value=Role::Admin.as_str() selected=move || role.get() == Role::Admin>
                                "Admin"
                            </option>
                        </select>
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        id="registerBtn"
                        disabled=move || busy.get()
                    >
                        {move || REGISTER_LABELS.pick(busy.get())}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.state.update(|s| s.show_login());
                    }>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
