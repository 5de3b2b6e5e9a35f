//! # Screen operations
//!
//! Each function here is one thing a screen does: it issues the request,
//! drives the matching loading counter, and feeds the outcome into the app
//! state through `dispatch`. Views only decide what to do next (navigate,
//! refresh a local list) based on the return value.
//!
//! Conventions shared by every function:
//!
//! - Loading counters are balanced: a `ShowLoading` is always followed by its
//!   `HideLoading`, cancelled requests included.
//! - Failures become one error notification whose text comes from
//!   [`ApiError::user_message`](crate::ApiError::user_message).
//! - A cancelled request dispatches nothing else and notifies nothing.

mod articles;
mod auth;
mod profile;
mod users;

pub use articles::{
    add_comment, create_article, delete_article, delete_comment, load_article, load_articles,
    update_article,
};
pub use auth::{login, logout, sign_up};
pub use profile::{load_profile, save_profile};
pub use users::{delete_user, load_users};

use store::Action;

use crate::error::ApiError;
use crate::messages::Message;

/// Turn a failure into a notification (or nothing, for a cancellation).
fn report(dispatch: &mut impl FnMut(Action), what: &str, err: &ApiError, fallback: Message) {
    match err.user_message(fallback) {
        None => tracing::debug!("{} cancelled", what),
        Some(message) => {
            tracing::warn!("{} failed: {}", what, err);
            dispatch(Action::error(message));
        }
    }
}

/// Like [`report`], but shows `message` even when the backend sent its own text.
fn report_generic(dispatch: &mut impl FnMut(Action), what: &str, err: &ApiError, message: Message) {
    if err.is_cancelled() {
        tracing::debug!("{} cancelled", what);
        return;
    }
    tracing::warn!("{} failed: {}", what, err);
    dispatch(Action::error(message.text()));
}
