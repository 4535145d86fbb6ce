//! Normalization of user-entered numbers.
//!
//! Rates and percents typed by a user may carry surrounding whitespace or a
//! decimal comma. They are cleaned up, parsed, and rounded to whole numbers
//! before a [`PayStrategy`] is built from them.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{DepartmentError, DepartmentResult};
use crate::models::{PayStrategy, round_whole};
use crate::storage::FIELD_SEPARATOR;

/// Parses a user-entered amount.
///
/// Whitespace is trimmed, `,` is treated as the decimal separator, and the
/// value is rounded to the nearest whole number.
///
/// # Examples
///
/// ```
/// use salary_department::input::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("rate", " 1000,50 ").unwrap(), Decimal::new(1001, 0));
/// assert!(parse_amount("rate", "abc").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> DepartmentResult<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized)
        .map(round_whole)
        .map_err(|_| DepartmentError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Checks that a user-entered name can be written to the data file.
///
/// Names holding the field separator or a line break would save as a
/// record that no longer loads, so they are refused before reaching the
/// department.
///
/// # Examples
///
/// ```
/// use salary_department::input::check_name;
///
/// assert!(check_name("Testing").is_ok());
/// assert!(check_name("R|D").is_err());
/// ```
pub fn check_name(name: &str) -> DepartmentResult<()> {
    if name.contains([FIELD_SEPARATOR, '\n', '\r']) {
        return Err(DepartmentError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Builds a strategy from raw form input.
///
/// A bonus percent selects bonus pay; without one the strategy is flat.
pub fn strategy_from_input(rate: &str, bonus: Option<&str>) -> DepartmentResult<PayStrategy> {
    let base_rate = parse_amount("rate", rate)?;
    match bonus {
        Some(raw) => PayStrategy::bonus(base_rate, parse_amount("bonus", raw)?),
        None => PayStrategy::flat(base_rate),
    }
}
