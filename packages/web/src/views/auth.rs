//! Login and sign-up routes. Both bounce to the dashboard when a session
//! already exists.

use dioxus::prelude::*;
use ui::views::{LoginView, SignUpView};
use ui::use_app_state;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let state = use_app_state();
    let nav = use_navigator();

    if state.read().session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Home {});
            },
            on_sign_up: move |_| {
                nav.push(Route::SignUp {});
            },
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    let state = use_app_state();
    let nav = use_navigator();

    if state.read().session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        SignUpView {
            on_success: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
