use api::CancellationToken;
use dioxus::prelude::*;
use store::{Article, LoadingScope};

use crate::loading::Spinner;
use crate::state::{dispatcher, use_api_client, use_app_state, use_cancel_token};

const ARTICLES_CSS: Asset = asset!("/assets/styling/articles.css");

/// Card list of all articles.
#[component]
pub fn ArticlesView(
    on_new: EventHandler<()>,
    on_edit: EventHandler<String>,
    on_detail: EventHandler<String>,
) -> Element {
    let state = use_app_state();
    let client = use_api_client();
    let cancel = use_cancel_token(LoadingScope::Articles);
    let mut articles = use_signal(Vec::<Article>::new);

    let reload = move |cancel: CancellationToken| {
        spawn(async move {
            let mut dispatch = dispatcher(state);
            if let Some(list) = api::actions::load_articles(&client(), &cancel, &mut dispatch).await {
                articles.set(list);
            }
        });
    };

    use_hook({
        let cancel = cancel.clone();
        move || reload(cancel)
    });

    let handle_delete = use_callback(move |slug: String| {
        let cancel = cancel.clone();
        spawn(async move {
            let mut dispatch = dispatcher(state);
            if api::actions::delete_article(&client(), &slug, &mut dispatch).await {
                reload(cancel);
            }
        });
    });

    let loading = state.read().is_loading(LoadingScope::Articles);

    rsx! {
        document::Stylesheet { href: ARTICLES_CSS }

        div {
            class: "page articles-page",
            div {
                class: "header-wrapper",
                h2 { "Article List" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_new.call(()),
                    "New article"
                }
            }

            if loading {
                Spinner {}
            }

            div {
                class: "article-scroll-wrapper",
                for article in articles() {
                    ArticleCard {
                        key: "{article.slug}",
                        article: article.clone(),
                        on_open: move |slug| on_detail.call(slug),
                        on_edit: move |slug| on_edit.call(slug),
                        on_delete: handle_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleCard(
    article: Article,
    on_open: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let slug = article.slug.clone();
    let date = article
        .updated
        .or(article.created)
        .map(|t| t.format_date())
        .unwrap_or_default();

    rsx! {
        div {
            class: "article-card",
            onclick: {
                let slug = slug.clone();
                move |_| on_open.call(slug.clone())
            },
            div { class: "title", "{article.title}" }
            div { class: "separate" }
            div { class: "description", "{article.description}" }
            div {
                class: "actions",
                button {
                    class: "btn btn-primary",
                    onclick: {
                        let slug = slug.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_edit.call(slug.clone());
                        }
                    },
                    "Edit"
                }
                button {
                    class: "btn btn-danger",
                    onclick: {
                        let slug = slug.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_delete.call(slug.clone());
                        }
                    },
                    "Delete"
                }
            }
            div {
                class: "more-info",
                div {
                    class: "tags",
                    for tag in article.tag_list.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
                div { class: "date-time", "{date}" }
            }
        }
    }
}
