use dioxus::prelude::*;
use ui::{use_app_state, AdminLayout, AdminPage};

use crate::Route;

impl Route {
    fn admin_page(&self) -> AdminPage {
        match self {
            Route::Users {} => AdminPage::Users,
            Route::Profile {} => AdminPage::Profile,
            Route::Articles {} => AdminPage::Articles,
            Route::ArticleNew {} => AdminPage::ArticleNew,
            Route::ArticleEdit { slug } => AdminPage::ArticleEdit(slug.clone()),
            Route::ArticleDetail { slug } => AdminPage::ArticleDetail(slug.clone()),
            _ => AdminPage::Dashboard,
        }
    }
}

impl From<AdminPage> for Route {
    fn from(page: AdminPage) -> Self {
        match page {
            AdminPage::Dashboard => Route::Home {},
            AdminPage::Users => Route::Users {},
            AdminPage::Profile => Route::Profile {},
            AdminPage::Articles => Route::Articles {},
            AdminPage::ArticleNew => Route::ArticleNew {},
            AdminPage::ArticleEdit(slug) => Route::ArticleEdit { slug },
            AdminPage::ArticleDetail(slug) => Route::ArticleDetail { slug },
        }
    }
}

/// Layout for every signed-in route. Without a session it sends the visitor
/// to the login page.
#[component]
pub fn Admin() -> Element {
    let state = use_app_state();
    let nav = use_navigator();
    let route = use_route::<Route>();

    if !state.read().session.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        AdminLayout {
            page: route.admin_page(),
            on_navigate: move |page: AdminPage| {
                nav.push(Route::from(page));
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/home`
#[component]
pub fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}

/// Unknown paths land on the dashboard or the login page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let state = use_app_state();
    let nav = use_navigator();

    tracing::debug!("No route for /{}", segments.join("/"));
    if state.read().session.is_authenticated() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}
