use api::Message;
use dioxus::prelude::*;
use store::LoadingScope;

use crate::confirm::ConfirmDialog;
use crate::icons::FaTrashCan;
use crate::loading::Spinner;
use crate::state::{dispatcher, use_api_client, use_app_state, use_cancel_token};
use crate::Icon;

/// Users table with delete confirmation.
#[component]
pub fn UsersView() -> Element {
    let state = use_app_state();
    let client = use_api_client();
    let cancel = use_cancel_token(LoadingScope::Users);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    use_future({
        let cancel = cancel.clone();
        move || {
            let cancel = cancel.clone();
            async move {
                let mut dispatch = dispatcher(state);
                api::actions::load_users(&client(), &cancel, &mut dispatch).await;
            }
        }
    });

    let handle_delete = move |_| {
        let Some(email) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let cancel = cancel.clone();
        spawn(async move {
            let mut dispatch = dispatcher(state);
            api::actions::delete_user(&client(), &email, &cancel, &mut dispatch).await;
        });
    };

    let users = state.read().users.data.clone();
    let loading = state.read().is_loading(LoadingScope::Users);

    rsx! {
        div {
            class: "page users-page",
            h2 { "User List" }

            div {
                class: "table-wrapper",
                if loading {
                    div { class: "table-loading", Spinner {} }
                }
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "User" }
                            th { "Email" }
                            th { "Bio" }
                            th { class: "col-actions", "Operation" }
                        }
                    }
                    tbody {
                        if users.is_empty() && !loading {
                            tr {
                                td { colspan: "4", class: "empty", "No users" }
                            }
                        }
                        for user in users {
                            tr {
                                key: "{user.email}",
                                td {
                                    div {
                                        class: "user-cell",
                                        if let Some(src) = user.avatar() {
                                            img { class: "avatar-small", src: "{src}", alt: "user-avatar" }
                                        }
                                        span { "{user.username}" }
                                    }
                                }
                                td { "{user.email}" }
                                td { {user.bio.clone().unwrap_or_default()} }
                                td {
                                    class: "col-actions",
                                    button {
                                        class: "icon-button danger",
                                        title: "Delete",
                                        onclick: {
                                            let email = user.email.clone();
                                            move |_| pending_delete.set(Some(email.clone()))
                                        },
                                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                message: Message::DeleteConfirm.text(),
                on_confirm: handle_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
