//! Navbar Component
//!
//! Shown on the dashboard only: user name with role tooltip, logout.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app();
    let user = Memo::new(move |_| {
        ctx.state
            .with(|s| if s.is_dashboard() { s.user.clone() } else { None })
    });

    view! {
        {move || {
            user.get()
                .map(|user| {
                    view! {
                        <nav class="navbar" id="navbar">
                            <div class="nav-brand">"Taskboard"</div>
                            <div class="nav-user">
                                <span class="user-name" title=user.role.display_name()>
                                    {user.name.clone()}
                                </span>
                                <button
                                    class="btn btn-secondary btn-small"
                                    id="logoutBtn"
                                    on:click=move |_| ctx.logout()
                                >
                                    "Logout"
                                </button>
                            </div>
                        </nav>
                    }
                })
        }}
    }
}
