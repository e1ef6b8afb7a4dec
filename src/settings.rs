//! Form Settings
//!
//! Loaded once from the embedded `assets/settings.json`; every key is optional.

use std::str::FromStr;
use std::sync::OnceLock;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::form::ProgressMode;

const EMBEDDED_SETTINGS: &str = include_str!("../assets/settings.json");

static CURRENT: OnceLock<FormSettings> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// How long the success notice stays up
    pub notice_duration_ms: u32,
    pub progress_mode: ProgressMode,
    pub log_level: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            notice_duration_ms: 2000,
            progress_mode: ProgressMode::Lagged,
            log_level: "info".to_string(),
        }
    }
}

impl FormSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Settings for this process
pub fn current() -> &'static FormSettings {
    CURRENT.get_or_init(|| {
        FormSettings::from_json(EMBEDDED_SETTINGS).unwrap_or_else(|e| {
            log::warn!("invalid settings, using defaults: {}", e);
            FormSettings::default()
        })
    })
}
