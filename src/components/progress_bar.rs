use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Completion bar for required fields
#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_app_store();
    let progress = move || store.form().read().progress();

    view! {
        <div class="progress-container">
            <div class="progress-bar" style:width=move || format!("{}%", progress())></div>
            <span>{move || format!("{}% Completed", store.form().read().progress_rounded())}</span>
        </div>
    }
}
