//! Configuration loading for the salary department.
//!
//! This module provides functionality to load application settings from a
//! YAML file: the default data file, the currency label, and the log filter.
//!
//! # Example
//!
//! ```no_run
//! use salary_department::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./salary.yaml").unwrap();
//! println!("Currency: {}", config.config().currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::AppConfig;
