pub mod config;
pub mod loading;
pub mod models;
pub mod notifications;
pub mod persist;
pub mod session;
pub mod state;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::AppConfig;
pub use loading::{LoadingCounter, LoadingScope};
pub use models::{Article, Comment, Timestamp, User, UserEntry};
pub use notifications::{NoticeLevel, Notification, Notifications};
pub use persist::{load_session, save_session, KeyValueStorage, PERSIST_KEY};
pub use session::Session;
pub use state::{Action, AppState};
