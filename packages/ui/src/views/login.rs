use api::Credentials;
use dioxus::prelude::*;

use crate::state::{dispatcher, use_app_state, use_public_client};
use crate::NotificationHost;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Login form. `on_success` runs once the session is populated.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_sign_up: EventHandler<()>) -> Element {
    let state = use_app_state();
    let client = use_public_client();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if email().trim().is_empty() {
            error.set(Some("Please input your email"));
            return;
        }
        if password().is_empty() {
            error.set(Some("Please input your password"));
            return;
        }
        error.set(None);
        let client = client.clone();
        spawn(async move {
            submitting.set(true);
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            let mut dispatch = dispatcher(state);
            let ok = api::actions::login(&client, &credentials, &mut dispatch).await;
            submitting.set(false);
            if ok {
                on_success.call(());
            }
        });
    };

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        div {
            class: "auth-container",
            form {
                class: "auth-card",
                onsubmit: handle_submit,
                h1 { class: "auth-title", "Sign in" }

                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Login" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    a { onclick: move |_| on_sign_up.call(()), "Sign up" }
                }
            }
        }

        NotificationHost {}
    }
}
