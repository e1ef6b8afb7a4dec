//! Records Table Component
//!
//! Lists submitted records with edit/delete actions.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::models::Record;
use crate::registry;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecordsTable() -> impl IntoView {
    let store = use_app_store();
    let has_records = move || !store.form().read().records().is_empty();

    view! {
        <Show when=has_records>
            <div class="submitted-data">
                <h2>"Submitted Data"</h2>
                <table>
                    <thead>
                        <tr>
                            <th>"Form"</th>
                            <th>"Values"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.form().read().records().all().to_vec()
                            key=|record| record.id
                            children=move |record| view! { <RecordRow record=record /> }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
fn RecordRow(record: Record) -> impl IntoView {
    let ctx = use_form_context();
    let id = record.id;
    let pairs = record.labelled_values(registry::builtin().lookup(&record.schema));

    view! {
        <tr>
            <td>{record.schema}</td>
            <td>
                {pairs.into_iter().map(|(label, value)| view! {
                    <div class="record-value">
                        <span class="record-label">{label} ": "</span>
                        {value}
                    </div>
                }).collect_view()}
            </td>
            <td>
                <button type="button" on:click=move |_| ctx.edit(id)>"Edit"</button>
                <button type="button" on:click=move |_| ctx.delete(id)>"Delete"</button>
            </td>
        </tr>
    }
}
