//! # Session persistence
//!
//! The session is the only slice that survives a page reload. It is written
//! as JSON under a single namespaced key ([`PERSIST_KEY`]) of a
//! [`KeyValueStorage`]: `window.localStorage` on the web
//! ([`crate::LocalStorage`]), an in-memory map elsewhere
//! ([`crate::MemoryStorage`]).
//!
//! Unreadable data is treated as "no session": a corrupted entry must never
//! stop the app from starting, it only means the user has to log in again.

use crate::session::Session;

/// Key under which the session JSON is stored.
pub const PERSIST_KEY: &str = "persist:root";

/// Synchronous string key/value storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Write the session, or clear the key when nobody is logged in.
pub fn save_session(storage: &impl KeyValueStorage, session: &Session) -> Result<(), serde_json::Error> {
    if !session.is_authenticated() {
        storage.remove_item(PERSIST_KEY);
        return Ok(());
    }
    let json = serde_json::to_string(session)?;
    storage.set_item(PERSIST_KEY, &json);
    Ok(())
}

/// Read the stored session, falling back to an empty one.
pub fn load_session(storage: &impl KeyValueStorage) -> Session {
    let Some(raw) = storage.get_item(PERSIST_KEY) else {
        return Session::default();
    };
    match serde_json::from_str(&raw) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Discarding unreadable stored session: {}", e);
            storage.remove_item(PERSIST_KEY);
            Session::default()
        }
    }
}
