//! Transient notifications rendered over the current screen.

use std::time::Duration;

use dioxus::prelude::*;
use store::{Action, NoticeLevel, Notification};

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaXmark};
use crate::state::{dispatcher, use_app_config, use_app_state};
use crate::Icon;

const NOTIFICATIONS_CSS: Asset = asset!("/assets/styling/notifications.css");

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notification success",
        NoticeLevel::Info => "notification info",
        NoticeLevel::Error => "notification error",
    }
}

/// Stack of the queued notifications, newest at the bottom.
#[component]
pub fn NotificationHost() -> Element {
    let state = use_app_state();
    let entries = state.read().notifications.entries().to_vec();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        div {
            class: "notification-host",
            for notification in entries {
                NotificationItem { key: "{notification.id}", notification }
            }
        }
    }
}

/// One notification. Dismisses itself after the configured duration, unless
/// that duration is zero.
#[component]
fn NotificationItem(notification: Notification) -> Element {
    let state = use_app_state();
    let delay = use_app_config().notifications.auto_dismiss();
    let id = notification.id;

    use_future(move || async move {
        let Some(delay) = delay else {
            return;
        };
        sleep(delay).await;
        let mut dispatch = dispatcher(state);
        dispatch(Action::Dismiss(id));
    });

    rsx! {
        div {
            class: level_class(notification.level),
            role: "status",
            {match notification.level {
                NoticeLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
                NoticeLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
                NoticeLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
            }}
            span { class: "notification-message", "{notification.message}" }
            button {
                class: "notification-close",
                title: "Dismiss",
                onclick: move |_| {
                    let mut dispatch = dispatcher(state);
                    dispatch(Action::Dismiss(id));
                },
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
