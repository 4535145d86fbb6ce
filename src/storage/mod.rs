//! Flat-file persistence for the department.
//!
//! This module provides the text codec for the `name|kind|baseRate|bonusPercent`
//! format and the file adapters built on top of it. Loads are all-or-nothing.
//!
//! # Example
//!
//! ```no_run
//! use salary_department::storage::{load_department, save_department};
//!
//! let department = load_department("salary_data.txt")?;
//! save_department(&department, "backup.txt")?;
//! # Ok::<(), salary_department::error::DepartmentError>(())
//! ```

mod codec;
mod file;

pub use codec::{FIELD_COUNT, FIELD_SEPARATOR, decode, encode, encode_record};
pub use file::{load_department, load_into, save_department};
