//! Configuration types for the salary department.
//!
//! This module contains the settings structure deserialized from the YAML
//! configuration file.

use std::path::PathBuf;

use serde::Deserialize;

fn default_data_file() -> PathBuf {
    PathBuf::from("salary_data.txt")
}

fn default_currency() -> String {
    "руб.".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Application settings.
///
/// Every field is optional in the YAML file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// The work type file used when no other is given.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// The currency label printed after amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// The tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            currency: default_currency(),
            log_filter: default_log_filter(),
        }
    }
}
