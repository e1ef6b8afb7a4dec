//! Schema Registry
//!
//! Fixed mapping from form title to its field list. The builtin registry is
//! parsed once from an embedded JSON document standing in for an API response.

use std::collections::HashSet;
use std::sync::OnceLock;

use thiserror::Error;

use crate::models::Schema;

const BUILTIN_SCHEMAS: &str = include_str!("../assets/schemas.json");

static BUILTIN: OnceLock<SchemaRegistry> = OnceLock::new();

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed schema document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate schema title {0:?}")]
    DuplicateTitle(String),
    #[error("duplicate field {field:?} in schema {title:?}")]
    DuplicateField { title: String, field: String },
}

/// Ordered, read-only set of schemas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaRegistry {
    schemas: Vec<Schema>,
}

impl SchemaRegistry {
    pub fn new(schemas: Vec<Schema>) -> Result<Self, RegistryError> {
        let mut titles = HashSet::new();
        for schema in &schemas {
            if !titles.insert(schema.title.as_str()) {
                return Err(RegistryError::DuplicateTitle(schema.title.clone()));
            }
            let mut names = HashSet::new();
            for field in &schema.fields {
                if !names.insert(field.name.as_str()) {
                    return Err(RegistryError::DuplicateField {
                        title: schema.title.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }
        Ok(Self { schemas })
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn lookup(&self, title: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.title == title)
    }

    /// Titles in declaration order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|s| s.title.as_str())
    }
}

/// The process-wide registry of builtin schemas
pub fn builtin() -> &'static SchemaRegistry {
    BUILTIN.get_or_init(|| {
        SchemaRegistry::from_json(BUILTIN_SCHEMAS).unwrap_or_else(|e| {
            log::error!("failed to load builtin schemas: {}", e);
            SchemaRegistry::default()
        })
    })
}
