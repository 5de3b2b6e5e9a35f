use api::ArticleDraft;
use dioxus::prelude::*;
use store::LoadingScope;

use super::ArticleForm;
use crate::state::{dispatcher, use_api_client, use_app_state, use_cancel_token};

const ARTICLES_CSS: Asset = asset!("/assets/styling/articles.css");

/// Edit form, filled from the backend copy of the article.
#[component]
pub fn ArticleEditView(
    slug: String,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let state = use_app_state();
    let client = use_api_client();
    let cancel = use_cancel_token(LoadingScope::Page);
    let mut saving = use_signal(|| false);

    // Track the slug in a signal so the resource re-runs on route param change
    let mut slug_signal = use_signal(|| slug.clone());
    if *slug_signal.peek() != slug {
        slug_signal.set(slug.clone());
    }

    let draft = use_resource(move || {
        let slug = slug_signal();
        let cancel = cancel.clone();
        async move {
            let mut dispatch = dispatcher(state);
            api::actions::load_article(&client(), &slug, &cancel, &mut dispatch)
                .await
                .map(|article| ArticleDraft::from(&article))
        }
    });

    let handle_submit = move |draft: ArticleDraft| {
        let slug = slug_signal();
        spawn(async move {
            saving.set(true);
            let mut dispatch = dispatcher(state);
            let ok = api::actions::update_article(&client(), &slug, &draft, &mut dispatch).await;
            saving.set(false);
            if ok {
                on_saved.call(());
            }
        });
    };

    rsx! {
        document::Stylesheet { href: ARTICLES_CSS }

        div {
            class: "page article-edit-page",
            h2 { class: "title", "Edit Article" }
            {match draft.cloned() {
                Some(Some(initial)) => rsx! {
                    ArticleForm {
                        key: "{slug_signal}",
                        initial,
                        busy: saving(),
                        on_submit: handle_submit,
                        on_cancel,
                    }
                },
                Some(None) => rsx! {
                    p { class: "muted", "This article could not be loaded." }
                },
                None => rsx! {},
            }}
        }
    }
}
