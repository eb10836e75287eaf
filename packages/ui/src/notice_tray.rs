use dioxus::prelude::*;

use crate::notice::{use_notices, NoticeLevel};

/// Stack of active notices, newest at the bottom. Click a notice to dismiss it.
#[component]
pub fn NoticeTray() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notice-tray",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: level_class(entry.level),
                    role: "status",
                    onclick: move |_| notices.write().dismiss(entry.id),
                    span { class: "notice-time", "{entry.timestamp}" }
                    span { " {entry.message}" }
                }
            }
        }
    }
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Error => "notice notice--error",
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Info => "notice notice--info",
    }
}
