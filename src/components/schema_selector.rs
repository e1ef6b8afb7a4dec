//! Schema Selector Component
//!
//! Dropdown choosing which form to render.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::registry;
use crate::store::{use_app_store, AppStateStoreFields};

/// Placeholder label for "no form selected"
pub const NO_SELECTION: &str = "-- Select --";

#[component]
pub fn SchemaSelector() -> impl IntoView {
    let ctx = use_form_context();
    let store = use_app_store();
    let selected = move || store.form().read().selected().unwrap_or_default().to_string();

    view! {
        <div class="form-selection">
            <label for="formType">"Select Form Type: "</label>
            <select
                id="formType"
                prop:value=selected
                on:change=move |ev| ctx.select_schema(event_target_value(&ev))
            >
                <option value="">{NO_SELECTION}</option>
                {registry::builtin().titles().map(|title| {
                    view! { <option value=title>{title}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
