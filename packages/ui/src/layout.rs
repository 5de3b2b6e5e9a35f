//! # Admin layout
//!
//! The chrome around every signed-in screen: the side menu, the current-user
//! dropdown, the breadcrumb, the page loading overlay and the notification
//! host. Platform packages map their routes onto [`AdminPage`] and pass the
//! router outlet as children.
//!
//! | Menu entry | Pages |
//! |------------|-------|
//! | Dashboard | [`AdminPage::Dashboard`] |
//! | User | [`AdminPage::Users`] |
//! | Article | [`AdminPage::Articles`], new, edit, detail |
//!
//! [`AdminPage::Profile`] is reached from the user dropdown and highlights no
//! menu entry.

use dioxus::prelude::*;
use store::Action;

use crate::icons::{FaHouse, FaNewspaper, FaUser};
use crate::loading::LoadingOverlay;
use crate::notifications::NotificationHost;
use crate::state::{dispatcher, use_app_state};
use crate::Icon;

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

#[derive(Clone, Debug, PartialEq)]
pub enum AdminPage {
    Dashboard,
    Users,
    Profile,
    Articles,
    ArticleNew,
    ArticleEdit(String),
    ArticleDetail(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Dashboard,
    Users,
    Articles,
}

impl MenuKey {
    pub const ALL: [MenuKey; 3] = [MenuKey::Dashboard, MenuKey::Users, MenuKey::Articles];

    pub fn label(self) -> &'static str {
        match self {
            MenuKey::Dashboard => "Dashboard",
            MenuKey::Users => "User",
            MenuKey::Articles => "Article",
        }
    }

    /// The page a menu click opens.
    pub fn page(self) -> AdminPage {
        match self {
            MenuKey::Dashboard => AdminPage::Dashboard,
            MenuKey::Users => AdminPage::Users,
            MenuKey::Articles => AdminPage::Articles,
        }
    }
}

/// One breadcrumb entry; `target` is `None` for the current page.
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub target: Option<AdminPage>,
}

impl Crumb {
    fn link(label: &str, target: AdminPage) -> Self {
        Self {
            label: label.to_string(),
            target: Some(target),
        }
    }

    fn current(label: &str) -> Self {
        Self {
            label: label.to_string(),
            target: None,
        }
    }
}

impl AdminPage {
    pub fn menu_key(&self) -> Option<MenuKey> {
        match self {
            AdminPage::Dashboard => Some(MenuKey::Dashboard),
            AdminPage::Users => Some(MenuKey::Users),
            AdminPage::Profile => None,
            AdminPage::Articles
            | AdminPage::ArticleNew
            | AdminPage::ArticleEdit(_)
            | AdminPage::ArticleDetail(_) => Some(MenuKey::Articles),
        }
    }

    pub fn breadcrumb(&self) -> Vec<Crumb> {
        let home = Crumb::link("Home", AdminPage::Dashboard);
        match self {
            AdminPage::Dashboard => vec![Crumb::current("Home")],
            AdminPage::Users => vec![home, Crumb::current("User")],
            AdminPage::Profile => vec![home, Crumb::current("Profile")],
            AdminPage::Articles => vec![home, Crumb::current("Article")],
            AdminPage::ArticleNew => vec![
                home,
                Crumb::link("Article", AdminPage::Articles),
                Crumb::current("New"),
            ],
            AdminPage::ArticleEdit(_) => vec![
                home,
                Crumb::link("Article", AdminPage::Articles),
                Crumb::current("Edit"),
            ],
            AdminPage::ArticleDetail(_) => vec![
                home,
                Crumb::link("Article", AdminPage::Articles),
                Crumb::current("Detail"),
            ],
        }
    }
}

#[component]
pub fn Breadcrumb(items: Vec<Crumb>, on_navigate: EventHandler<AdminPage>) -> Element {
    let last = items.len().saturating_sub(1);
    rsx! {
        nav {
            class: "breadcrumb",
            for (i, crumb) in items.into_iter().enumerate() {
                if let Some(target) = crumb.target {
                    a {
                        class: "breadcrumb-link",
                        onclick: move |_| on_navigate.call(target.clone()),
                        "{crumb.label}"
                    }
                } else {
                    span { class: "breadcrumb-current", "{crumb.label}" }
                }
                if i < last {
                    span { class: "breadcrumb-separator", "/" }
                }
            }
        }
    }
}

/// Shared admin layout.
///
/// `on_logout` is called after the session has been cleared.
#[component]
pub fn AdminLayout(
    page: AdminPage,
    on_navigate: EventHandler<AdminPage>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let state = use_app_state();
    let mut menu_open = use_signal(|| false);
    let username = state
        .read()
        .session
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let active = page.menu_key();

    let handle_logout = move |_| {
        menu_open.set(false);
        let mut dispatch = dispatcher(state);
        api::actions::logout(&mut dispatch);
        on_logout.call(());
    };

    rsx! {
        document::Stylesheet { href: LAYOUT_CSS }

        div {
            class: "admin-layout",
            aside {
                class: "admin-sider",
                ul {
                    class: "admin-menu",
                    for key in MenuKey::ALL {
                        li {
                            class: if active == Some(key) { "admin-menu-item active" } else { "admin-menu-item" },
                            onclick: move |_| on_navigate.call(key.page()),
                            {match key {
                                MenuKey::Dashboard => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
                                MenuKey::Users => rsx! { Icon { icon: FaUser, width: 14, height: 14 } },
                                MenuKey::Articles => rsx! { Icon { icon: FaNewspaper, width: 14, height: 14 } },
                            }}
                            span { {key.label()} }
                        }
                    }
                }
                div {
                    class: "user-actions",
                    if menu_open() {
                        div {
                            class: "user-dropdown",
                            button {
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_navigate.call(AdminPage::Profile);
                                },
                                "Profile"
                            }
                            button { onclick: handle_logout, "Logout" }
                        }
                    }
                    button {
                        class: "user-actions-trigger",
                        onclick: move |_| menu_open.toggle(),
                        span { class: "user-name", "{username}" }
                        Icon { icon: FaUser, width: 14, height: 14 }
                    }
                }
            }
            main {
                class: "admin-content",
                Breadcrumb { items: page.breadcrumb(), on_navigate }
                {children}
            }
        }

        LoadingOverlay {}
        NotificationHost {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_pages_highlight_article_menu() {
        for page in [
            AdminPage::Articles,
            AdminPage::ArticleNew,
            AdminPage::ArticleEdit("a".into()),
            AdminPage::ArticleDetail("a".into()),
        ] {
            assert_eq!(page.menu_key(), Some(MenuKey::Articles));
        }
        assert_eq!(AdminPage::Profile.menu_key(), None);
    }

    #[test]
    fn test_breadcrumb_links_back_to_list() {
        let crumbs = AdminPage::ArticleEdit("hello".into()).breadcrumb();
        let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Article", "Edit"]);
        assert_eq!(crumbs[1].target, Some(AdminPage::Articles));
        assert_eq!(crumbs[2].target, None);
    }

    #[test]
    fn test_dashboard_breadcrumb_is_single_entry() {
        assert_eq!(AdminPage::Dashboard.breadcrumb(), vec![Crumb::current("Home")]);
    }

    #[test]
    fn test_menu_page_round_trip() {
        for key in MenuKey::ALL {
            assert_eq!(key.page().menu_key(), Some(key));
        }
    }
}
