use api::{avatar_data_url, ProfileUpdate, AVATAR_DEFAULT_URL};
use dioxus::prelude::*;
use store::{LoadingScope, User};

use crate::state::{dispatcher, use_api_client, use_app_state, use_cancel_token};

const PROFILE_CSS: Asset = asset!("/assets/styling/profile.css");

/// Profile form with avatar upload.
#[component]
pub fn ProfileView() -> Element {
    let state = use_app_state();
    let client = use_api_client();
    let cancel = use_cancel_token(LoadingScope::Page);

    let current = state.peek().session.user.clone().unwrap_or_default();
    let mut username = use_signal(|| current.username.clone());
    let mut email = use_signal(|| current.email.clone());
    let mut bio = use_signal(|| current.bio.clone().unwrap_or_default());
    let mut avatar = use_signal(|| current.avatar().unwrap_or(AVATAR_DEFAULT_URL).to_string());
    let mut saving = use_signal(|| false);

    let mut fill = move |user: &User| {
        username.set(user.username.clone());
        email.set(user.email.clone());
        bio.set(user.bio.clone().unwrap_or_default());
        avatar.set(user.avatar().unwrap_or(AVATAR_DEFAULT_URL).to_string());
    };

    use_future({
        let cancel = cancel.clone();
        move || {
            let cancel = cancel.clone();
            async move {
                let mut dispatch = dispatcher(state);
                if let Some(user) = api::actions::load_profile(&client(), &cancel, &mut dispatch).await {
                    fill(&user);
                }
            }
        }
    });

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => avatar.set(avatar_data_url(&file.name(), &bytes)),
            Err(e) => tracing::warn!("Failed to read avatar file: {}", e),
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let update = ProfileUpdate::new(
            username().trim().to_string(),
            email().trim().to_string(),
            bio(),
            &avatar(),
        );
        let cancel = cancel.clone();
        spawn(async move {
            saving.set(true);
            let mut dispatch = dispatcher(state);
            if let Some(user) = api::actions::save_profile(&client(), &update, &cancel, &mut dispatch).await {
                fill(&user);
            }
            saving.set(false);
        });
    };

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }

        div {
            class: "page profile-page",
            h2 { "My Profile" }
            div {
                class: "user-panel",
                div {
                    class: "avatar-column",
                    label {
                        class: "avatar-wrapper",
                        title: "Change avatar",
                        img { src: "{avatar}", alt: "user-avatar" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            class: "visually-hidden",
                            onchange: handle_file,
                        }
                    }
                }
                form {
                    class: "profile-form",
                    onsubmit: handle_submit,

                    label { r#for: "profile-username", "Username" }
                    input {
                        id: "profile-username",
                        r#type: "text",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    label { r#for: "profile-email", "Email" }
                    input {
                        id: "profile-email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "profile-bio", "Bio" }
                    input {
                        id: "profile-bio",
                        r#type: "text",
                        value: bio(),
                        oninput: move |evt: FormEvent| bio.set(evt.value()),
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
