use api::CancellationToken;
use dioxus::prelude::*;
use store::{Article, Comment, LoadingScope};

use crate::icons::FaTrashCan;
use crate::markdown::render_markdown;
use crate::state::{dispatcher, use_api_client, use_app_state, use_cancel_token};
use crate::Icon;

const ARTICLES_CSS: Asset = asset!("/assets/styling/articles.css");

/// Article body rendered as markdown, its comments and a comment box.
#[component]
pub fn ArticleDetailView(slug: String, on_edit: EventHandler<String>) -> Element {
    let state = use_app_state();
    let client = use_api_client();
    let cancel = use_cancel_token(LoadingScope::Page);
    let mut current_article = use_signal(|| Option::<Article>::None);
    let mut new_comment = use_signal(String::new);
    let mut posting = use_signal(|| false);

    let mut slug_signal = use_signal(|| slug.clone());
    if *slug_signal.peek() != slug {
        slug_signal.set(slug.clone());
    }

    let reload = move |cancel: CancellationToken| {
        let slug = slug_signal();
        spawn(async move {
            let mut dispatch = dispatcher(state);
            if let Some(loaded) = api::actions::load_article(&client(), &slug, &cancel, &mut dispatch).await {
                current_article.set(Some(loaded));
            }
        });
    };

    // Reload whenever the route slug changes
    use_effect({
        let cancel = cancel.clone();
        move || {
            slug_signal();
            reload(cancel.clone());
        }
    });

    let handle_delete_comment = use_callback({
        let cancel = cancel.clone();
        move |id: i64| {
            let slug = slug_signal();
            let cancel = cancel.clone();
            spawn(async move {
                let mut dispatch = dispatcher(state);
                if api::actions::delete_comment(&client(), &slug, id, &mut dispatch).await {
                    reload(cancel);
                }
            });
        }
    });

    let handle_add_comment = move |evt: FormEvent| {
        evt.prevent_default();
        let body = new_comment();
        let slug = slug_signal();
        let cancel = cancel.clone();
        spawn(async move {
            posting.set(true);
            let mut dispatch = dispatcher(state);
            if api::actions::add_comment(&client(), &slug, &body, &mut dispatch).await {
                new_comment.set(String::new());
                reload(cancel);
            }
            posting.set(false);
        });
    };

    let Some(current) = current_article() else {
        return rsx! {
            div { class: "page article-detail-page" }
        };
    };
    let published = current
        .updated
        .or(current.created)
        .map(|t| t.format_date())
        .unwrap_or_default();
    let body_html = render_markdown(&current.body);
    let comment_count = current.comments.len();

    rsx! {
        document::Stylesheet { href: ARTICLES_CSS }

        div {
            class: "page article-detail-page",
            div {
                class: "header-wrapper",
                h2 { class: "title", "{current.title}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_edit.call(slug_signal()),
                    "Edit"
                }
            }
            div {
                class: "info",
                div { class: "date-time", "Publish: {published}" }
                div { class: "separate" }
                div {
                    class: "tags",
                    for tag in current.tag_list.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
            if !current.description.is_empty() {
                p { class: "description", "{current.description}" }
            }
            article {
                class: "markdown-body",
                dangerous_inner_html: "{body_html}",
            }

            section {
                class: "comments",
                h3 { "Comments ({comment_count})" }
                for comment in current.comments.iter().cloned() {
                    CommentItem {
                        key: "{comment.id}",
                        comment,
                        on_delete: handle_delete_comment,
                    }
                }
                form {
                    class: "comment-form",
                    onsubmit: handle_add_comment,
                    textarea {
                        rows: "3",
                        placeholder: "Write a comment...",
                        value: new_comment(),
                        oninput: move |evt: FormEvent| new_comment.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: posting() || new_comment().trim().is_empty(),
                        "Add comment"
                    }
                }
            }
        }
    }
}

#[component]
fn CommentItem(comment: Comment, on_delete: EventHandler<i64>) -> Element {
    let author = comment
        .author
        .as_ref()
        .map(|a| a.username.clone())
        .unwrap_or_default();
    let avatar = comment
        .author
        .as_ref()
        .and_then(|a| a.avatar())
        .map(str::to_string);
    let date = comment.created.map(|t| t.format_date()).unwrap_or_default();
    let id = comment.id;

    rsx! {
        div {
            class: "comment",
            div {
                class: "comment-meta",
                if let Some(src) = avatar {
                    img { class: "avatar-small", src: "{src}", alt: "comment-author" }
                }
                span { class: "comment-author", "{author}" }
                span { class: "comment-date", "{date}" }
                button {
                    class: "icon-button danger",
                    title: "Delete comment",
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                }
            }
            p { class: "comment-body", "{comment.body}" }
        }
    }
}
