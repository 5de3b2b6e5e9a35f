use api::ArticleDraft;
use dioxus::prelude::*;

use crate::markdown::parse_tags;

/// Title / description / body / tags form shared by the new and edit pages.
#[component]
pub fn ArticleForm(
    initial: ArticleDraft,
    #[props(default = "Save".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<ArticleDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut body = use_signal(|| initial.body.clone());
    let mut tags = use_signal(|| initial.tag_list.join(", "));
    let mut error = use_signal(|| Option::<&'static str>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if title().trim().is_empty() {
            error.set(Some("Please input a title"));
            return;
        }
        error.set(None);
        on_submit.call(ArticleDraft {
            title: title().trim().to_string(),
            description: description().trim().to_string(),
            body: body(),
            tag_list: parse_tags(&tags()),
        });
    };

    rsx! {
        form {
            class: "article-form",
            onsubmit: handle_submit,

            label { r#for: "article-title", "Title" }
            input {
                id: "article-title",
                r#type: "text",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            label { r#for: "article-description", "Description" }
            input {
                id: "article-description",
                r#type: "text",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }

            label { r#for: "article-body", "Body" }
            textarea {
                id: "article-body",
                rows: "12",
                placeholder: "Write in markdown...",
                value: body(),
                oninput: move |evt: FormEvent| body.set(evt.value()),
            }

            label { r#for: "article-tags", "Tags" }
            input {
                id: "article-tags",
                r#type: "text",
                placeholder: "comma, separated, tags",
                value: tags(),
                oninput: move |evt: FormEvent| tags.set(evt.value()),
            }

            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    "{submit_label}"
                }
            }
        }
    }
}
