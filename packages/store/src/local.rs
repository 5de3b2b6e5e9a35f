//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used on the web platform. It
//! looks up `window.localStorage` on every call instead of holding the JS
//! handle, so the struct itself is zero-sized and `Copy`.
//!
//! All methods swallow errors (private browsing, quota exceeded, storage
//! disabled): reads return `None` and writes are dropped, which degrades to
//! "session not remembered" instead of a crash.

use web_sys::Storage;

use crate::persist::KeyValueStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("localStorage write failed: {:?}", e);
            }
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
