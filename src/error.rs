//! Error types for the salary department.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while building pay strategies, editing
//! the department, or moving it to and from disk.

use thiserror::Error;

/// The main error type for the salary department.
///
/// Every fallible operation in the crate returns this error type. None of
/// the variants are fatal: the department stays usable after any of them.
///
/// # Example
///
/// ```
/// use salary_department::error::DepartmentError;
///
/// let error = DepartmentError::DuplicateName {
///     name: "Testing".to_string(),
/// };
/// assert_eq!(error.to_string(), "work type 'Testing' already exists");
/// ```
#[derive(Debug, Error)]
pub enum DepartmentError {
    /// A base rate was zero or negative.
    #[error("base rate must be positive")]
    NonPositiveBaseRate,

    /// A base rate reached the upper limit.
    #[error("base rate must be below 10,000,000")]
    BaseRateTooLarge,

    /// A bonus percent fell outside the open interval (0, 100).
    #[error("bonus percent must be > 0 and < 100")]
    BonusPercentOutOfRange,

    /// A work type name was empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// A work type with the same trimmed name is already registered.
    #[error("work type '{name}' already exists")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// A work type name cannot be stored because it contains the field
    /// separator or a line break.
    #[error("work type name '{name}' must not contain '|' or line breaks")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// An aggregate was requested from an empty department.
    #[error("no data to compute average")]
    NoData,

    /// User-entered text could not be read as a number.
    #[error("invalid number in {field}: '{value}'")]
    InvalidNumber {
        /// The input field the text came from.
        field: String,
        /// The raw text as entered.
        value: String,
    },

    /// A stored record did not have exactly four fields.
    #[error("invalid format on line {line}: expected 4 fields, got {count}")]
    FieldCount {
        /// The 1-based line number.
        line: usize,
        /// The number of fields found.
        count: usize,
    },

    /// A stored record carried a rate or percent that is not a number.
    #[error("invalid number on line {line}")]
    InvalidNumberOnLine {
        /// The 1-based line number.
        line: usize,
    },

    /// A stored record named a pay kind other than `base` or `bonus`.
    #[error("unknown work kind on line {line}: '{kind}'")]
    UnknownKind {
        /// The 1-based line number.
        line: usize,
        /// The offending kind value.
        kind: String,
    },

    /// A stored record parsed but was rejected by validation.
    #[error("invalid record on line {line}: {source}")]
    InvalidRecord {
        /// The 1-based line number.
        line: usize,
        /// The validation failure.
        #[source]
        source: Box<DepartmentError>,
    },

    /// A file could not be read.
    #[error("failed to read '{path}': {message}")]
    FileRead {
        /// The path that was read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// A file could not be written.
    #[error("failed to write '{path}': {message}")]
    FileWrite {
        /// The path that was written.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// Coarse classification of a [`DepartmentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A business rule rejected the input; the operation had no effect.
    Validation,
    /// A stored record was malformed; the load was abandoned.
    Format,
    /// The filesystem refused a read or write.
    Io,
    /// The application settings could not be used.
    Config,
}

impl DepartmentError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DepartmentError::NonPositiveBaseRate
            | DepartmentError::BaseRateTooLarge
            | DepartmentError::BonusPercentOutOfRange
            | DepartmentError::EmptyName
            | DepartmentError::DuplicateName { .. }
            | DepartmentError::InvalidName { .. }
            | DepartmentError::NoData
            | DepartmentError::InvalidNumber { .. } => ErrorKind::Validation,
            DepartmentError::FieldCount { .. }
            | DepartmentError::InvalidNumberOnLine { .. }
            | DepartmentError::UnknownKind { .. }
            | DepartmentError::InvalidRecord { .. } => ErrorKind::Format,
            DepartmentError::FileRead { .. } | DepartmentError::FileWrite { .. } => ErrorKind::Io,
            DepartmentError::ConfigParseError { .. } => ErrorKind::Config,
        }
    }
}

/// A type alias for Results that return DepartmentError.
pub type DepartmentResult<T> = Result<T, DepartmentError>;
