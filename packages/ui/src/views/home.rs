use dioxus::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn HomeView() -> Element {
    let state = use_app_state();
    let name = state
        .read()
        .session
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page home-page",
            h2 { "Dashboard" }
            p { "Welcome back, {name}." }
            p { class: "muted", "Use the menu to manage users and articles." }
        }
    }
}
