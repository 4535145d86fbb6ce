//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading application
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{DepartmentError, DepartmentResult};

use super::types::AppConfig;

/// Loads and provides access to application settings.
///
/// # File Format
///
/// ```text
/// data_file: ./salary_data.txt
/// currency: руб.
/// log_filter: info
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_department::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./salary.yaml")?;
/// println!("Data file: {}", loader.config().data_file.display());
/// # Ok::<(), salary_department::error::DepartmentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads settings from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read (`FileRead`)
    /// - The file is not valid YAML for [`AppConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> DepartmentResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| DepartmentError::FileRead {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Loads settings from `path` if one is given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> DepartmentResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn from_yaml(content: &str, path_str: &str) -> DepartmentResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(content).map_err(|e| DepartmentError::ConfigParseError {
            path: path_str.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Returns the loaded settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader and returns the settings.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
