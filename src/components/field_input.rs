//! Field Input Component
//!
//! One labelled input bound to a form field, with its inline error.

use leptos::prelude::*;

use crate::components::schema_selector::NO_SELECTION;
use crate::context::use_form_context;
use crate::models::FieldDescriptor;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FieldInput(field: FieldDescriptor) -> impl IntoView {
    let ctx = use_form_context();
    let store = use_app_store();
    let FieldDescriptor { name, kind, label, .. } = field;

    let value = {
        let name = name.clone();
        move || store.form().read().value(&name).to_string()
    };
    let error = {
        let name = name.clone();
        move || store.form().read().error(&name)
    };
    let target = name.clone();
    let on_change = kind.commits_on_change();

    let control = match kind.input_type() {
        // Selection lives on each option: a fresh <select> gets its props
        // before its options exist
        None => view! {
            <select
                id=name.clone()
                name=name.clone()
                on:change=move |ev| ctx.set_field(&target, event_target_value(&ev))
            >
                <option value="" prop:selected={
                    let value = value.clone();
                    let kind = kind.clone();
                    move || kind.selected_option(&value()).is_none()
                }>{NO_SELECTION}</option>
                {kind.options().iter().map(|option| {
                    let option = option.clone();
                    let is_selected = {
                        let value = value.clone();
                        let option = option.clone();
                        move || value() == option
                    };
                    view! { <option value=option.clone() prop:selected=is_selected>{option.clone()}</option> }
                }).collect_view()}
            </select>
        }.into_any(),
        Some(input_type) if on_change => view! {
            <input
                id=name.clone()
                type=input_type
                name=name.clone()
                prop:value=value
                on:change=move |ev| ctx.set_field(&target, event_target_value(&ev))
            />
        }.into_any(),
        Some(input_type) => view! {
            <input
                id=name.clone()
                type=input_type
                name=name.clone()
                prop:value=value
                on:input=move |ev| ctx.set_field(&target, event_target_value(&ev))
            />
        }.into_any(),
    };

    view! {
        <div class="form-group">
            <label for=name>{label} ":"</label>
            {control}
            {move || error().map(|message| view! { <span class="error">{message}</span> })}
        </div>
    }
}
