use api::ArticleDraft;
use dioxus::prelude::*;

use super::ArticleForm;
use crate::state::{dispatcher, use_api_client, use_app_state};

const ARTICLES_CSS: Asset = asset!("/assets/styling/articles.css");

#[component]
pub fn ArticleNewView(on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let state = use_app_state();
    let client = use_api_client();
    let mut saving = use_signal(|| false);

    let handle_submit = move |draft: ArticleDraft| {
        spawn(async move {
            saving.set(true);
            let mut dispatch = dispatcher(state);
            let ok = api::actions::create_article(&client(), &draft, &mut dispatch).await;
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
            h2 { class: "title", "New Article" }
            ArticleForm {
                initial: ArticleDraft::default(),
                submit_label: "Create",
                busy: saving(),
                on_submit: handle_submit,
                on_cancel,
            }
        }
    }
}
