//! Transient user notices (toasts).
//!
//! Every finished operation tells the user exactly one thing: a success line or
//! the failure's message. Notices live in a context signal; on web they dismiss
//! themselves after [`NOTICE_TTL_MS`].

use api::ClientError;
use dioxus::prelude::*;

/// How long a notice stays on screen on web.
pub const NOTICE_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Show a notice.
pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::warn!("{message}"),
        _ => tracing::info!("{message}"),
    }
    let id = notices.write().push(level, message);

    #[cfg(target_arch = "wasm32")]
    {
        let mut notices = *notices;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
            notices.write().dismiss(id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Show the failure of an operation.
pub fn notify_error(notices: &mut Signal<Notices>, error: &ClientError) {
    notify(notices, NoticeLevel::Error, &error.to_string());
}

/// Provides the notice signal to its children.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notices::default()));

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Success, "Note created successfully");
        let b = notices.push(NoticeLevel::Error, "Unable to save note");
        assert!(b > a);
        assert_eq!(notices.entries.len(), 2);
        assert_eq!(notices.entries[1].level, NoticeLevel::Error);
        assert_eq!(notices.entries[1].timestamp.len(), 8);
    }

    #[test]
    fn test_dismiss_only_removes_target() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Info, "a");
        let b = notices.push(NoticeLevel::Info, "b");
        notices.dismiss(a);
        assert_eq!(notices.entries.len(), 1);
        assert_eq!(notices.entries[0].id, b);

        // Unknown id is a no-op
        notices.dismiss(a);
        assert_eq!(notices.entries.len(), 1);
    }
}
