//! # Application state and its reducer
//!
//! [`AppState`] owns every piece of client state the screens share. It is
//! held in a single signal by the UI and changed only through
//! [`AppState::dispatch`], so each update is one [`Action`] applied by one
//! writer.
//!
//! | Slice | Contents |
//! |-------|----------|
//! | `session` | current user and token, persisted across reloads |
//! | `loading` | full-page overlay counter |
//! | `users` | users table counter and cached list |
//! | `articles` | articles list counter |
//! | `notifications` | transient messages |

use crate::loading::{LoadingCounter, LoadingScope};
use crate::models::{User, UserEntry};
use crate::notifications::{NoticeLevel, Notifications};
use crate::session::Session;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub loading: LoadingCounter,
    pub data: Vec<UserEntry>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArticlesState {
    pub loading: LoadingCounter,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Session,
    pub loading: LoadingCounter,
    pub users: UsersState,
    pub articles: ArticlesState,
    pub notifications: Notifications,
}

/// Every state transition the UI can request.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Login(User),
    Logout,
    UpdateUser(User),
    ShowLoading(LoadingScope),
    HideLoading(LoadingScope),
    ResetLoading(LoadingScope),
    SaveUsers(Vec<UserEntry>),
    /// Drop the users-list entry with this email.
    RemoveUser(String),
    Notify { level: NoticeLevel, message: String },
    Dismiss(u64),
}

impl Action {
    pub fn success(message: impl Into<String>) -> Self {
        Action::Notify {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Action::Notify {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Action::Notify {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl AppState {
    /// Start from a restored session with every other slice empty.
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Login(user) => self.session.login(user),
            Action::Logout => self.session.logout(),
            Action::UpdateUser(user) => self.session.update(user),
            Action::ShowLoading(scope) => self.counter_mut(scope).show(),
            Action::HideLoading(scope) => self.counter_mut(scope).hide(),
            Action::ResetLoading(scope) => self.counter_mut(scope).reset(),
            Action::SaveUsers(users) => self.users.data = users,
            Action::RemoveUser(email) => self.users.data.retain(|u| u.email != email),
            Action::Notify { level, message } => {
                self.notifications.push(level, message);
            }
            Action::Dismiss(id) => self.notifications.dismiss(id),
        }
    }

    pub fn counter(&self, scope: LoadingScope) -> &LoadingCounter {
        match scope {
            LoadingScope::Page => &self.loading,
            LoadingScope::Users => &self.users.loading,
            LoadingScope::Articles => &self.articles.loading,
        }
    }

    fn counter_mut(&mut self, scope: LoadingScope) -> &mut LoadingCounter {
        match scope {
            LoadingScope::Page => &mut self.loading,
            LoadingScope::Users => &mut self.users.loading,
            LoadingScope::Articles => &mut self.articles.loading,
        }
    }

    pub fn is_loading(&self, scope: LoadingScope) -> bool {
        self.counter(scope).is_busy()
    }
}
