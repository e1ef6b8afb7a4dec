//! Dynamic Form App
//!
//! Main application component: selector, form, notice and records.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DynamicForm, RecordsTable, SchemaSelector};
use crate::context::FormContext;
use crate::notice::SUBMITTED_NOTICE;
use crate::settings;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let settings = settings::current();
    let store = Store::new(AppState::new(settings.progress_mode));
    let ctx = FormContext::new(store, settings.notice_duration_ms);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    on_cleanup(move || ctx.teardown());

    view! {
        <div class="dynamic-form">
            <header>
                <h1>"Dynamic Form Implementation"</h1>
            </header>

            <SchemaSelector />
            <DynamicForm />

            <Show when=move || store.form().read().notice_visible()>
                <div class="success-message">{SUBMITTED_NOTICE}</div>
            </Show>

            <RecordsTable />

            <footer>
                <p>"Dynamic Form Footer"</p>
            </footer>
        </div>
    }
}
