//! Signed-in routes. Each one wraps the shared view and turns its callbacks
//! into navigation.

use dioxus::prelude::*;
use ui::views::{
    ArticleDetailView, ArticleEditView, ArticleNewView, ArticlesView, HomeView, ProfileView,
    UsersView,
};

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn Users() -> Element {
    rsx! { UsersView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
pub fn Articles() -> Element {
    let nav = use_navigator();

    rsx! {
        ArticlesView {
            on_new: move |_| {
                nav.push(Route::ArticleNew {});
            },
            on_edit: move |slug: String| {
                nav.push(Route::ArticleEdit { slug });
            },
            on_detail: move |slug: String| {
                nav.push(Route::ArticleDetail { slug });
            },
        }
    }
}

#[component]
pub fn ArticleNew() -> Element {
    let nav = use_navigator();

    rsx! {
        ArticleNewView {
            on_saved: move |_| {
                nav.push(Route::Articles {});
            },
            on_cancel: move |_| {
                nav.go_back();
            },
        }
    }
}

#[component]
pub fn ArticleEdit(slug: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ArticleEditView {
            slug,
            on_saved: move |_| {
                nav.push(Route::Articles {});
            },
            on_cancel: move |_| {
                nav.go_back();
            },
        }
    }
}

#[component]
pub fn ArticleDetail(slug: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ArticleDetailView {
            slug,
            on_edit: move |slug: String| {
                nav.push(Route::ArticleEdit { slug });
            },
        }
    }
}
