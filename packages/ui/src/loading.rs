use dioxus::prelude::*;
use store::LoadingScope;

use crate::state::use_app_state;

const LOADING_CSS: Asset = asset!("/assets/styling/loading.css");

#[component]
pub fn Spinner(#[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        document::Stylesheet { href: LOADING_CSS }
        div { class: "spinner {class}", role: "progressbar" }
    }
}

/// Full-page overlay shown while the page counter is busy.
#[component]
pub fn LoadingOverlay() -> Element {
    let busy = use_app_state().read().is_loading(LoadingScope::Page);

    if !busy {
        return rsx! {};
    }

    rsx! {
        div {
            class: "loading-overlay",
            Spinner {}
        }
    }
}
