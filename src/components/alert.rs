//! Alert Component

use leptos::prelude::*;
use taskboard_client::state::BannerKind;

/// Success or error box. Text is rendered as text, never as markup.
#[component]
pub fn Alert(kind: BannerKind, #[prop(into)] message: String) -> impl IntoView {
    view! { <div class=kind.class()>{message}</div> }
}
