//! # Application configuration
//!
//! Settings the client needs before it can talk to anything: where the backend
//! lives and how long notifications stay on screen.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [notifications]
//! duration_ms = 3000
//! ```
//!
//! A WASM bundle has no filesystem or runtime environment, so the web binary
//! embeds its TOML file and [`AppConfig::load`] parses it, then applies the
//! compile-time `INKDESK_API_URL` override. All structs derive `Default` so a
//! missing section is equivalent to the default configuration.

use std::time::Duration;

use serde::Deserialize;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Origin (and optional path prefix) of the backend. Endpoint paths such
    /// as `api/login` are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays visible. 0 keeps it until dismissed.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    3_000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl NotificationConfig {
    /// Delay before a notification dismisses itself, `None` when it stays.
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (self.duration_ms > 0).then(|| Duration::from_millis(self.duration_ms))
    }
}

impl AppConfig {
    /// Config with the given backend URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            notifications: NotificationConfig::default(),
        }
    }

    /// Parse the embedded TOML and apply the environment override. A file
    /// that does not parse falls back to the defaults.
    pub fn load(toml_text: &str) -> Self {
        let config = match Self::from_toml(toml_text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid configuration: {}", e);
                Self::default()
            }
        };
        config.with_api_url(option_env!("INKDESK_API_URL"))
    }

    /// Replace the backend URL when `url` is set and not blank.
    pub fn with_api_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
