use api::SignUp;
use dioxus::prelude::*;

use crate::state::{dispatcher, use_app_state, use_public_client};
use crate::NotificationHost;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

fn validate(form: &SignUp) -> Option<&'static str> {
    if form.username.trim().is_empty() {
        return Some("Please input your username");
    }
    let email = form.email.trim();
    if email.is_empty() {
        return Some("Please input your email");
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(user, host)| !user.is_empty() && host.contains('.') && !host.ends_with('.'));
    if !valid_email {
        return Some("The input is not valid E-mail!");
    }
    if form.password.is_empty() {
        return Some("Please input your password");
    }
    None
}

/// Registration form. `on_success` runs after the account is created; the
/// user still has to sign in.
#[component]
pub fn SignUpView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let state = use_app_state();
    let client = use_public_client();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = SignUp {
            username: username().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        if let Some(message) = validate(&form) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        let client = client.clone();
        spawn(async move {
            submitting.set(true);
            let mut dispatch = dispatcher(state);
            let ok = api::actions::sign_up(&client, &form, &mut dispatch).await;
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
                h1 { class: "auth-title", "Sign up" }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    autocomplete: "off",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    autocomplete: "off",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "off",
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
                    "Sign up"
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a { onclick: move |_| on_login.call(()), "Sign in" }
                }
            }
        }

        NotificationHost {}
    }
}
