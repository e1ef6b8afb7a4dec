//! Form Models
//!
//! Schemas, field descriptors, input values and submitted records.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format accepted by date fields (what `<input type="date">` produces)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Input kind of a field; dropdowns carry their ordered choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Dropdown { options: Vec<String> },
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Password => "password",
            FieldKind::Dropdown { .. } => "dropdown",
        }
    }

    /// HTML `type` attribute for `<input>`; dropdowns render a `<select>` instead
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Dropdown { .. } => None,
            other => Some(other.as_str()),
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Dropdown { options } => options,
            _ => &[],
        }
    }

    /// The dropdown option matching `value`; `None` selects the placeholder
    pub fn selected_option(&self, value: &str) -> Option<&str> {
        self.options().iter().map(String::as_str).find(|o| *o == value)
    }

    /// Kinds whose browser value reads empty while partially typed are
    /// written on `change` instead of on every keystroke
    pub fn commits_on_change(&self) -> bool {
        matches!(self, FieldKind::Number | FieldKind::Date | FieldKind::Dropdown { .. })
    }

    /// Check a raw value against this kind. Empty values always pass.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match self {
            FieldKind::Text | FieldKind::Password => true,
            FieldKind::Number => value.trim().parse::<f64>().map(f64::is_finite).unwrap_or(false),
            FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok(),
            FieldKind::Dropdown { options } => options.iter().any(|o| o == value),
        }
    }
}

/// Metadata for one input of a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    /// Validate `value` for this field at write time
    pub fn check(&self, value: &str) -> Result<(), FieldValueError> {
        if self.kind.accepts(value) {
            return Ok(());
        }
        let label = self.label.clone();
        let value = value.to_string();
        Err(match self.kind {
            FieldKind::Number => FieldValueError::NotANumber { label, value },
            FieldKind::Date => FieldValueError::NotADate { label, value },
            _ => FieldValueError::UnknownOption { label, value },
        })
    }
}

/// A named, ordered list of fields defining one form variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// Current input values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputValues(BTreeMap<String, String>);

impl InputValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// True when the field has a non-empty value
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Stable record identifier, assigned when a record is appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    /// Title of the schema the record was submitted under
    pub schema: String,
    pub values: InputValues,
}

impl Record {
    /// `(label, value)` pairs in schema field order; fields unknown to the
    /// schema follow under their raw names.
    pub fn labelled_values(&self, schema: Option<&Schema>) -> Vec<(String, String)> {
        let Some(schema) = schema else {
            return self.values.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        };
        let mut pairs: Vec<(String, String)> = schema
            .fields
            .iter()
            .filter_map(|f| self.values.get(&f.name).map(|v| (f.label.clone(), v.to_string())))
            .collect();
        pairs.extend(
            self.values
                .iter()
                .filter(|(k, _)| schema.field(k).is_none())
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        pairs
    }
}

/// A required field left empty at submit time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} is required.")]
pub struct ValidationError {
    pub field: String,
    pub label: String,
}

impl ValidationError {
    pub fn new(field: &FieldDescriptor) -> Self {
        Self {
            field: field.name.clone(),
            label: field.label.clone(),
        }
    }
}

/// Validation errors in schema field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(Vec<ValidationError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Message for the given field, if any
    pub fn message(&self, field: &str) -> Option<String> {
        self.0.iter().find(|e| e.field == field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

/// Why a field write was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldValueError {
    #[error("no field named {name:?} in the active form")]
    UnknownField { name: String },
    #[error("{label} must be a number, got {value:?}")]
    NotANumber { label: String, value: String },
    #[error("{label} must be a date (YYYY-MM-DD), got {value:?}")]
    NotADate { label: String, value: String },
    #[error("{label} has no option {value:?}")]
    UnknownOption { label: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, kind: FieldKind, required: bool) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            kind,
            label: name.to_uppercase(),
            required,
        }
    }

    #[test]
    fn test_descriptor_deserialize() {
        let json = r#"{ "name": "state", "type": "dropdown", "label": "State", "options": ["Texas"], "required": true }"#;
        let f: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(f.kind, FieldKind::Dropdown { options: vec!["Texas".to_string()] });
        assert!(f.required);

        let json = r#"{ "name": "age", "type": "number", "label": "Age" }"#;
        let f: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(f.kind, FieldKind::Number);
        assert!(!f.required);
        assert_eq!(f.kind.input_type(), Some("number"));
    }

    #[test]
    fn test_kind_accepts() {
        assert!(FieldKind::Number.accepts("42"));
        assert!(FieldKind::Number.accepts("3.5"));
        assert!(!FieldKind::Number.accepts("abc"));
        assert!(!FieldKind::Number.accepts("NaN"));
        assert!(FieldKind::Date.accepts("2027-01-31"));
        assert!(!FieldKind::Date.accepts("31/01/2027"));
        assert!(FieldKind::Password.accepts("anything"));

        let dropdown = FieldKind::Dropdown { options: vec!["Texas".to_string()] };
        assert!(dropdown.accepts("Texas"));
        assert!(!dropdown.accepts("Ohio"));
        assert!(dropdown.accepts(""));
        assert_eq!(dropdown.input_type(), None);
    }

    #[test]
    fn test_selected_option() {
        let dropdown = FieldKind::Dropdown {
            options: vec!["California".to_string(), "Texas".to_string()],
        };
        assert_eq!(dropdown.selected_option("Texas"), Some("Texas"));
        assert_eq!(dropdown.selected_option(""), None);
        assert_eq!(dropdown.selected_option("Ohio"), None);
        assert_eq!(FieldKind::Text.selected_option("Texas"), None);
    }

    #[test]
    fn test_commits_on_change() {
        assert!(FieldKind::Number.commits_on_change());
        assert!(FieldKind::Date.commits_on_change());
        assert!(FieldKind::Dropdown { options: vec![] }.commits_on_change());
        assert!(!FieldKind::Text.commits_on_change());
        assert!(!FieldKind::Password.commits_on_change());
    }

    #[test]
    fn test_check_error_kinds() {
        let age = field("age", FieldKind::Number, false);
        assert!(matches!(age.check("x"), Err(FieldValueError::NotANumber { .. })));
        let due = field("due", FieldKind::Date, true);
        assert!(matches!(due.check("soon"), Err(FieldValueError::NotADate { .. })));
        let pick = field("pick", FieldKind::Dropdown { options: vec![] }, true);
        assert!(matches!(pick.check("a"), Err(FieldValueError::UnknownOption { .. })));
    }

    #[test]
    fn test_validation_error_message() {
        let f = FieldDescriptor {
            name: "firstName".to_string(),
            kind: FieldKind::Text,
            label: "First Name".to_string(),
            required: true,
        };
        let mut errors = ErrorMap::new();
        errors.push(ValidationError::new(&f));
        assert_eq!(errors.message("firstName").as_deref(), Some("First Name is required."));
        assert_eq!(errors.message("lastName"), None);
    }

    #[test]
    fn test_labelled_values_follow_schema_order() {
        let schema = Schema {
            title: "S".to_string(),
            fields: vec![field("b", FieldKind::Text, true), field("a", FieldKind::Text, false)],
        };
        let record = Record {
            id: RecordId(1),
            schema: "S".to_string(),
            values: [("a", "1"), ("b", "2"), ("zz", "3")].into_iter().collect(),
        };
        let pairs = record.labelled_values(Some(&schema));
        assert_eq!(
            pairs,
            vec![
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "1".to_string()),
                ("zz".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(record.labelled_values(None).len(), 3);
    }
}
