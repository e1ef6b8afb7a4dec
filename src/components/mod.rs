//! UI Components
//!
//! Leptos components rendering the form controller.

mod schema_selector;
mod dynamic_form;
mod field_input;
mod progress_bar;
mod records_table;

pub use schema_selector::SchemaSelector;
pub use dynamic_form::DynamicForm;
pub use field_input::FieldInput;
pub use progress_bar::ProgressBar;
pub use records_table::RecordsTable;
