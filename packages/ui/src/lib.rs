//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

mod state;
pub use state::{
    dispatcher, use_api_client, use_app_config, use_app_state, use_cancel_token,
    use_public_client, AppStateProvider,
};

mod notifications;
pub use notifications::NotificationHost;

mod loading;
pub use loading::{LoadingOverlay, Spinner};

mod confirm;
pub use confirm::{ConfirmDialog, ModalOverlay};

mod layout;
pub use layout::{AdminLayout, AdminPage, Breadcrumb, Crumb, MenuKey};

pub mod markdown;
