//! Dynamic Form Component
//!
//! Renders the active schema's fields, progress and submit button.

use leptos::prelude::*;

use crate::components::{FieldInput, ProgressBar};
use crate::context::use_form_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DynamicForm() -> impl IntoView {
    let ctx = use_form_context();
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <Show when=move || !store.form().read().fields().is_empty()>
            <form on:submit=on_submit>
                // Keyed so inputs keep focus while typing
                <For
                    each=move || store.form().read().fields().to_vec()
                    key=|field| field.name.clone()
                    children=move |field| view! { <FieldInput field=field /> }
                />
                <ProgressBar />
                <button type="submit">"Submit"</button>
            </form>
        </Show>
    }
}
