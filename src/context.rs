//! Form Actions Context
//!
//! Shared handle provided via Leptos Context API. Routes UI events into the
//! form controller and performs the side effects (timer, alert, logging).

use leptos::prelude::*;

use crate::form::SubmitOutcome;
use crate::models::RecordId;
use crate::notice::{BrowserAlert, NoticeTimer};
use crate::registry;
use crate::store::{AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct FormContext {
    store: AppStore,
    timer: NoticeTimer,
    notice_ms: u32,
}

impl FormContext {
    pub fn new(store: AppStore, notice_ms: u32) -> Self {
        Self {
            store,
            timer: NoticeTimer::new(),
            notice_ms,
        }
    }

    pub fn select_schema(&self, title: String) {
        self.timer.cancel();
        let active = self.store.form().write().select_schema(registry::builtin(), &title);
        if active {
            log::info!("selected form {:?}", title);
        } else {
            log::debug!("no form selected");
        }
    }

    pub fn set_field(&self, name: &str, value: String) {
        if let Err(e) = self.store.form().write().set_field(name, &value) {
            log::warn!("rejected input: {}", e);
        }
    }

    pub fn submit(&self) {
        let outcome = self.store.form().write().submit();
        match outcome {
            SubmitOutcome::Accepted { id, ticket } => {
                log::info!("record {} submitted", id);
                let store = self.store;
                self.timer.arm(self.notice_ms, move || {
                    if store.form().write().dismiss_notice(ticket) {
                        log::debug!("success notice dismissed");
                    }
                });
            }
            SubmitOutcome::Rejected { missing } => {
                log::info!("submit rejected, {} required field(s) missing", missing);
            }
            SubmitOutcome::Ignored => {}
        }
    }

    pub fn edit(&self, id: RecordId) {
        let form_field = self.store.form();
        let mut form = form_field.write();
        let before = form.selected().map(str::to_string);
        let Some(id) = form.load_for_edit(registry::builtin(), id) else {
            log::warn!("record {} not found for edit", id);
            return;
        };
        if form.selected() != before.as_deref() {
            self.timer.cancel();
            log::info!("editing record {} in {:?}", id, form.selected().unwrap_or_default());
        } else {
            log::info!("editing record {}", id);
        }
    }

    pub fn delete(&self, id: RecordId) {
        let removed = self.store.form().write().delete(id, &BrowserAlert);
        match removed {
            Some(record) => log::info!("deleted record {}", record.id),
            None => log::warn!("record {} not found for delete", id),
        }
    }

    /// Cancel pending timers when the form goes away
    pub fn teardown(&self) {
        self.timer.cancel();
    }
}

pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
