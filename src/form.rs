//! Form Controller
//!
//! Owns the active schema, input values, validation errors, progress, the
//! success notice and the record list. Every user action is one method;
//! nothing here touches the DOM, so the whole flow is testable natively.

use serde::{Deserialize, Serialize};

use crate::models::{
    ErrorMap, FieldDescriptor, FieldValueError, InputValues, Record, RecordId, ValidationError,
};
use crate::notice::{NoticeTicket, Notifier, DELETED_NOTICE};
use crate::records::RecordStore;
use crate::registry::SchemaRegistry;

/// How progress reacts to a field write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Count filled required fields as they were before the write
    #[default]
    Lagged,
    /// Count filled required fields including the write
    Live,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { id: RecordId, ticket: NoticeTicket },
    Rejected { missing: usize },
    /// No schema is active
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    mode: ProgressMode,
    selected: Option<String>,
    fields: Vec<FieldDescriptor>,
    values: InputValues,
    errors: ErrorMap,
    progress: f64,
    notice: Option<NoticeTicket>,
    tickets_issued: u64,
    records: RecordStore,
}

impl FormController {
    pub fn new(mode: ProgressMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    // ========================
    // Transitions
    // ========================

    /// Activate the schema named `title`. An unknown title (such as the
    /// placeholder entry) returns the form to its empty baseline.
    /// Records are kept either way. Returns whether a schema is now active.
    pub fn select_schema(&mut self, registry: &SchemaRegistry, title: &str) -> bool {
        self.values.clear();
        self.errors = ErrorMap::new();
        self.progress = 0.0;
        self.notice = None;
        match registry.lookup(title) {
            Some(schema) => {
                self.selected = Some(schema.title.clone());
                self.fields = schema.fields.clone();
                true
            }
            None => {
                self.selected = None;
                self.fields.clear();
                false
            }
        }
    }

    /// Store `value` for field `name` and recompute progress.
    /// Errors from the last submit are left in place.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldValueError> {
        let field = self
            .field(name)
            .ok_or_else(|| FieldValueError::UnknownField { name: name.to_string() })?;
        field.check(value)?;

        let before = self.filled_required();
        self.values.insert(name, value);
        let counted = match self.mode {
            ProgressMode::Lagged => before,
            ProgressMode::Live => self.filled_required(),
        };
        self.progress = percentage(counted, self.required_count());
        Ok(())
    }

    /// Validate, and on success move the current values into the record list
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(title) = self.selected.clone() else {
            return SubmitOutcome::Ignored;
        };
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected { missing: self.errors.len() };
        }

        let snapshot = std::mem::take(&mut self.values);
        let id = self.records.append(title, snapshot);
        self.progress = 0.0;
        self.tickets_issued += 1;
        let ticket = NoticeTicket(self.tickets_issued);
        self.notice = Some(ticket);
        SubmitOutcome::Accepted { id, ticket }
    }

    /// Hide the success notice if `ticket` is still the one showing
    pub fn dismiss_notice(&mut self, ticket: NoticeTicket) -> bool {
        if self.notice == Some(ticket) {
            self.notice = None;
            true
        } else {
            false
        }
    }

    /// Take record `id` out of the list and load it back into the form.
    /// A record from another schema activates that schema first.
    pub fn load_for_edit(&mut self, registry: &SchemaRegistry, id: RecordId) -> Option<RecordId> {
        let schema_title = self.records.get(id)?.schema.clone();
        if self.selected.as_deref() != Some(schema_title.as_str()) {
            let schema = registry.lookup(&schema_title)?;
            self.selected = Some(schema.title.clone());
            self.fields = schema.fields.clone();
            self.errors = ErrorMap::new();
            self.notice = None;
        }
        let record = self.records.remove(id)?;
        self.values = record.values;
        self.progress = 0.0;
        Some(id)
    }

    pub fn load_for_edit_at(&mut self, registry: &SchemaRegistry, position: usize) -> Option<RecordId> {
        let id = self.records.id_at(position)?;
        self.load_for_edit(registry, id)
    }

    /// Remove record `id` and acknowledge it through `notifier`
    pub fn delete(&mut self, id: RecordId, notifier: &impl Notifier) -> Option<Record> {
        let record = self.records.remove(id)?;
        notifier.notify(DELETED_NOTICE);
        Some(record)
    }

    pub fn delete_at(&mut self, position: usize, notifier: &impl Notifier) -> Option<Record> {
        let id = self.records.id_at(position)?;
        self.delete(id, notifier)
    }

    // ========================
    // Derived state
    // ========================

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn values(&self) -> &InputValues {
        &self.values
    }

    /// Current value of a field, empty when unset
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).unwrap_or("")
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.message(name)
    }

    /// Completion percentage in `[0, 100]`
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn progress_rounded(&self) -> u32 {
        self.progress.round() as u32
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.is_some()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in self.fields.iter().filter(|f| f.required) {
            if !self.values.is_filled(&field.name) {
                errors.push(ValidationError::new(field));
            }
        }
        errors
    }

    fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }

    fn filled_required(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.required && self.values.is_filled(&f.name))
            .count()
    }
}

/// A form with no required fields counts as complete
fn percentage(filled: usize, required: usize) -> f64 {
    if required == 0 {
        return 100.0;
    }
    filled as f64 / required as f64 * 100.0
}
