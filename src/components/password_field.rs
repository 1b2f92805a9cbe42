//! Password Field Component
//!
//! Password input with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    /// Rendered as the `minlength` attribute when set
    #[prop(optional)]
    min_length: Option<u32>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="form-group password-group">
            <label for=id.clone()>"Password"</label>
            <div class="password-wrapper">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    id=id
                    required=true
                    placeholder=placeholder
                    minlength=min_length.map(|n| n.to_string())
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-toggle"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}
