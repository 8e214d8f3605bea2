//! Toast notifications.
//!
//! [`Notices`] is provided as context by the app root; any component can
//! push a notice, and [`NoticeStack`] renders the live ones. Each notice
//! dismisses itself after [`NOTICE_TTL_MS`].

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::types::{Notice, NoticeLevel};
use crate::{MAX_NOTICES, NOTICE_TTL_MS};

/// Push `notice`, dropping the oldest entries beyond `max`.
pub fn push_capped(notices: &mut Vec<Notice>, notice: Notice, max: usize) {
    notices.push(notice);
    if notices.len() > max {
        let excess = notices.len() - max;
        notices.drain(..excess);
    }
}

/// Remove the notice with `id`. Returns whether one was found.
pub fn remove_notice(notices: &mut Vec<Notice>, id: u32) -> bool {
    let before = notices.len();
    notices.retain(|n| n.id != id);
    notices.len() != before
}

/// Handle to the notice list, shared through context.
#[derive(Clone, Copy)]
pub struct Notices {
    entries: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn entries(&self) -> ReadSignal<Vec<Notice>> {
        self.entries.read_only()
    }

    pub fn push(&self, level: NoticeLevel, title: &str, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        let notice = Notice {
            id,
            level,
            title: title.to_string(),
            description: description.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        };

        match level {
            NoticeLevel::Error => log::warn!("{} {}: {}", level.emoji(), notice.title, notice.description),
            _ => log::info!("{} {}: {}", level.emoji(), notice.title, notice.description),
        }

        self.entries.update(|list| push_capped(list, notice, MAX_NOTICES));

        let notices = *self;
        Timeout::new(NOTICE_TTL_MS, move || notices.dismiss(id)).forget();
    }

    pub fn info(&self, title: &str, description: impl Into<String>) {
        self.push(NoticeLevel::Info, title, description);
    }

    pub fn success(&self, title: &str, description: impl Into<String>) {
        self.push(NoticeLevel::Success, title, description);
    }

    pub fn error(&self, title: &str, description: impl Into<String>) {
        self.push(NoticeLevel::Error, title, description);
    }

    pub fn dismiss(&self, id: u32) {
        // The owner may be gone by the time a timer fires.
        let _ = self.entries.try_update(|list| remove_notice(list, id));
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

/// Notice handle provided by the app root.
pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}

/// Stack of live notices, pinned to the bottom-right corner.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=move || notices.entries().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice {}", notice.level.css_class())>
                            <div class="notice-body">
                                <div class="notice-title">
                                    {notice.level.emoji()} " " {notice.title.clone()}
                                </div>
                                <div class="notice-description">{notice.description.clone()}</div>
                                <span class="notice-time">{notice.timestamp.clone()}</span>
                            </div>
                            <button
                                class="notice-close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u32) -> Notice {
        Notice {
            id,
            level: NoticeLevel::Info,
            title: format!("Notice {}", id),
            description: String::new(),
            timestamp: "12:00:00".to_string(),
        }
    }

    #[test]
    fn test_push_capped_drops_oldest() {
        let mut list = Vec::new();
        for id in 0..7 {
            push_capped(&mut list, notice(id), 5);
        }
        let ids: Vec<u32> = list.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_remove_notice() {
        let mut list = vec![notice(1), notice(2)];
        assert!(remove_notice(&mut list, 1));
        assert!(!remove_notice(&mut list, 1));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 2);
    }
}
