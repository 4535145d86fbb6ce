//! The in-memory registry of work types.
//!
//! # Example
//!
//! ```
//! use salary_department::department::Department;
//! use salary_department::models::PayStrategy;
//! use rust_decimal::Decimal;
//!
//! let mut department = Department::new();
//! department.add("X", PayStrategy::flat(Decimal::new(100, 0)).unwrap()).unwrap();
//! assert!(department.add("X", PayStrategy::flat(Decimal::new(200, 0)).unwrap()).is_err());
//! assert_eq!(department.len(), 1);
//! ```

mod registry;

pub use registry::Department;
