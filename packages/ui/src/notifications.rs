//! Toasts: a [`Notifier`] handle for raising them and the stack that shows them.

use catalog::{NotificationKind, Notifications};
use dioxus::prelude::*;

use crate::context::use_config;
use crate::timer::sleep_ms;

const NOTIFICATIONS_CSS: Asset = asset!("/assets/notifications.css");

/// Raises toasts that dismiss themselves after the configured TTL.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    list: Signal<Notifications>,
    ttl_ms: u64,
}

pub fn use_notifier() -> Notifier {
    let list = use_context::<Signal<Notifications>>();
    let ttl_ms = use_config().notifications.ttl_ms;
    Notifier { list, ttl_ms }
}

impl Notifier {
    pub fn notify(self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let mut list = self.list;
        let id = list.write().push(kind, message);
        let ttl_ms = self.ttl_ms;
        // Outlives the screen that raised it, so navigating away still expires it.
        spawn_forever(async move {
            sleep_ms(ttl_ms).await;
            list.write().dismiss(id);
        });
        id
    }

    pub fn success(self, message: impl Into<String>) -> u64 {
        self.notify(NotificationKind::Success, message)
    }

    pub fn error(self, message: impl Into<String>) -> u64 {
        self.notify(NotificationKind::Error, message)
    }

    pub fn info(self, message: impl Into<String>) -> u64 {
        self.notify(NotificationKind::Info, message)
    }
}

/// Fixed stack in the corner of the page. Clicking a toast dismisses it.
#[component]
pub fn NotificationStack() -> Element {
    let mut list = use_context::<Signal<Notifications>>();
    let entries: Vec<(u64, &'static str, String)> = list
        .read()
        .entries()
        .iter()
        .map(|n| (n.id, n.kind.css_class(), n.message.clone()))
        .collect();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        div {
            class: "notification-stack",
            role: "status",
            for (id, class, message) in entries {
                div {
                    key: "{id}",
                    class: "{class}",
                    onclick: move |_| {
                        list.write().dismiss(id);
                    },
                    span { "{message}" }
                    button {
                        class: "notification-close",
                        r#type: "button",
                        aria_label: "Dismiss",
                        "×"
                    }
                }
            }
        }
    }
}
