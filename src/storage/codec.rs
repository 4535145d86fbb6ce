//! The line-oriented text format.
//!
//! Each work type is one line of four `|`-separated fields:
//!
//! ```text
//! name|kind|baseRate|bonusPercent
//! ```
//!
//! `kind` is `base` or `bonus`. Flat work types always carry `0` as the
//! bonus percent. Numbers are written rounded to whole values and read back
//! as decimals.

use rust_decimal::Decimal;

use crate::department::Department;
use crate::error::{DepartmentError, DepartmentResult};
use crate::models::{PayKind, PayStrategy, WorkType, round_whole};

/// Number of fields in a stored record.
pub const FIELD_COUNT: usize = 4;

/// Field separator in a stored record.
pub const FIELD_SEPARATOR: char = '|';

/// Formats one work type as a stored record, without a line terminator.
///
/// # Examples
///
/// ```
/// use salary_department::department::Department;
/// use salary_department::models::PayStrategy;
/// use salary_department::storage::encode_record;
/// use rust_decimal::Decimal;
///
/// let mut department = Department::new();
/// department.add("Analysis", PayStrategy::bonus(Decimal::new(4000, 0), Decimal::new(15, 0))?)?;
/// let work = department.find("Analysis").unwrap();
/// assert_eq!(encode_record(work), "Analysis|bonus|4000|15");
/// # Ok::<(), salary_department::error::DepartmentError>(())
/// ```
pub fn encode_record(work: &WorkType) -> String {
    let strategy = work.strategy();
    let bonus_percent = match strategy {
        PayStrategy::Flat(_) => Decimal::ZERO,
        PayStrategy::Bonus(bonus) => round_whole(bonus.bonus_percent()),
    };
    format!(
        "{}{sep}{}{sep}{}{sep}{}",
        work.name(),
        strategy.kind(),
        round_whole(strategy.base_rate()),
        bonus_percent,
        sep = FIELD_SEPARATOR
    )
}

/// Formats the whole department, one record per line, ordered by name.
///
/// Rates and percents are rounded to whole numbers, so a value that only
/// rounds into range is not preserved: a bonus of `0.3` is written as `0`,
/// a rate of `0.4` as `0` and a rate of `9999999.6` as `10000000`, and
/// [`decode`] rejects those records. Values entered through
/// [`input`](crate::input) are already whole and always reload.
pub fn encode(department: &Department) -> String {
    let mut out = String::new();
    for work in department.sorted_by_name() {
        out.push_str(&encode_record(&work));
        out.push('\n');
    }
    out
}

/// Splits a record the way the stored files have always been split:
/// trailing empty fields are dropped before counting.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

fn parse_number(field: &str, line: usize) -> DepartmentResult<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .map_err(|_| DepartmentError::InvalidNumberOnLine { line })
}

/// Parses stored text into a fresh department.
///
/// Blank lines are skipped and every line is trimmed before splitting. The
/// first malformed or invalid record aborts the whole decode; nothing
/// partially decoded is returned.
///
/// # Errors
///
/// - `FieldCount` if a line does not have exactly four fields
/// - `InvalidNumberOnLine` if the rate or percent is not a number
/// - `UnknownKind` if the kind is neither `base` nor `bonus`
/// - `InvalidRecord` if the strategy or name is rejected by validation
pub fn decode(text: &str) -> DepartmentResult<Department> {
    let mut department = Department::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }

        let fields = split_fields(record);
        if fields.len() != FIELD_COUNT {
            return Err(DepartmentError::FieldCount {
                line,
                count: fields.len(),
            });
        }

        let name = fields[0];
        let base_rate = parse_number(fields[2], line)?;
        let bonus_percent = parse_number(fields[3], line)?;

        let kind = fields[1]
            .parse::<PayKind>()
            .map_err(|kind| DepartmentError::UnknownKind { line, kind })?;

        let strategy = match kind {
            PayKind::Base => PayStrategy::flat(base_rate),
            PayKind::Bonus => PayStrategy::bonus(base_rate, bonus_percent),
        };

        strategy
            .and_then(|strategy| department.add(name, strategy))
            .map_err(|source| DepartmentError::InvalidRecord {
                line,
                source: Box::new(source),
            })?;
    }

    Ok(department)
}
