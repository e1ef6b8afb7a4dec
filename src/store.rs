//! Application State Store
//!
//! Uses Leptos reactive_stores so views re-render when the form changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::{FormController, ProgressMode};

/// UI state: the form controller is the single source of truth
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub form: FormController,
}

impl AppState {
    pub fn new(mode: ProgressMode) -> Self {
        Self {
            form: FormController::new(mode),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
