//! The client-held session: who is logged in and with which token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// Path the catch-all route sends an authenticated visitor to.
pub const HOME_PATH: &str = "/home";
/// Path the catch-all route sends an anonymous visitor to.
pub const LOGIN_PATH: &str = "/login";

/// Current authenticated user, if any.
///
/// `id` is a client-side session id regenerated on every login or profile
/// refresh. It is not the backend's user id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    pub fn login(&mut self, user: User) {
        self.id = Some(Uuid::new_v4().to_string());
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        *self = Session::default();
    }

    /// Replace the user after a profile fetch. A payload without a token
    /// keeps the one already held.
    pub fn update(&mut self, mut user: User) {
        if user.token.is_none() {
            user.token = self.token().map(str::to_string);
        }
        self.login(user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.token.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Where an unknown path should land.
    pub fn landing_path(&self) -> &'static str {
        if self.is_authenticated() {
            HOME_PATH
        } else {
            LOGIN_PATH
        }
    }
}
