//! # API crate: backend access for the Inkdesk console
//!
//! Everything the UI needs to talk to the blog backend lives here: the
//! authenticated HTTP client, the request/response schema, the endpoint
//! wrappers, and the screen operations that tie a request to the app state.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: base URL, bearer injection, cancellation, status mapping |
//! | [`endpoints`] | One method per backend route (`login`, `list_users`, `get_article`, ...) |
//! | [`actions`] | Screen operations: loading counters, notifications, session updates |
//! | [`schema`] | Request bodies, response envelopes, backend error bodies |
//! | [`error`] | `ApiError` and how it turns into a user-facing message |
//! | [`messages`] | The fixed notification texts |
//!
//! Nothing in this crate depends on Dioxus. Operations report through a
//! `dispatch: impl FnMut(store::Action)` callback, which the UI wires to its
//! state signal and the tests wire to a plain `AppState`.

pub mod actions;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod messages;
pub mod schema;

pub use client::{cancellable, ApiClient};
pub use error::ApiError;
pub use messages::Message;
pub use schema::{
    avatar_data_url, ArticleDraft, Credentials, ErrorBody, NewComment, ProfileUpdate, SignUp,
    AVATAR_DEFAULT_URL,
};
pub use tokio_util::sync::CancellationToken;
