//! Salary department: work types and their pay rules.
//!
//! This crate tracks named work types paid either a flat rate or a rate plus
//! a bonus percent, keeps them in a registry with unique names, computes the
//! average pay, and stores the registry in a line-oriented text file.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod department;
pub mod error;
pub mod input;
pub mod models;
pub mod storage;
