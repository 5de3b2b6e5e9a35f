//! Typed endpoint methods on [`crate::ApiClient`], one module per resource.

mod articles;
mod auth;
mod profile;
mod users;

pub const LOGIN_URL: &[&str] = &["api", "login"];
pub const REGISTER_URL: &[&str] = &["api", "users"];
pub const USER_PROFILE_URL: &[&str] = &["api", "user"];
pub const USERS_URL: &[&str] = &["api", "users"];
pub const ARTICLES_URL: &[&str] = &["api", "articles"];
