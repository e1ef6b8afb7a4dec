//! User-visible Notices
//!
//! The success banner timer and the delete confirmation surface.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub const SUBMITTED_NOTICE: &str = "Form submitted successfully!";
pub const DELETED_NOTICE: &str = "Entry deleted successfully.";

/// Identifies one showing of the success banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(pub u64);

/// Surface for blocking acknowledgements
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert()`
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to show {:?}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// One-shot timer owned by the form. Arming again replaces (and cancels)
/// the pending timeout.
#[derive(Clone, Copy)]
pub struct NoticeTimer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl NoticeTimer {
    pub fn new() -> Self {
        Self {
            pending: StoredValue::new_local(None),
        }
    }

    pub fn arm(&self, millis: u32, on_elapsed: impl FnOnce() + 'static) {
        // dropping a gloo Timeout clears it
        self.pending.update_value(|slot| *slot = Some(Timeout::new(millis, on_elapsed)));
    }

    pub fn cancel(&self) {
        self.pending.update_value(|slot| *slot = None);
    }
}
