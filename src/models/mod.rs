//! Core data models for the salary department.
//!
//! This module contains the pay strategies and the work type record.

mod pay_strategy;
mod work_type;

pub use pay_strategy::{BonusPay, FlatPay, PayKind, PayStrategy, max_base_rate, round_whole};
pub use work_type::WorkType;
