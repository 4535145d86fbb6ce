//! The work type record.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::pay_strategy::{PayStrategy, round_whole};

/// A named kind of work and the strategy it is paid by.
///
/// Work types are created by the [`Department`](crate::department::Department),
/// which trims and deduplicates the name. A work type owns its strategy and
/// never changes; replacing either part means building a new work type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkType {
    name: String,
    strategy: PayStrategy,
}

impl WorkType {
    pub(crate) fn new(name: String, strategy: PayStrategy) -> Self {
        Self { name, strategy }
    }

    /// Returns the trimmed, unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pay strategy.
    pub fn strategy(&self) -> &PayStrategy {
        &self.strategy
    }

    /// Returns the pay for this work type.
    pub fn pay(&self) -> Decimal {
        self.strategy.compute_pay()
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Work: {}, Pay: {}", self.name, round_whole(self.pay()))?;
        let bonus = self.strategy.bonus_descriptor();
        if !bonus.is_empty() {
            write!(f, " (bonus {})", bonus)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pay_delegates_to_strategy() {
        let work = WorkType::new(
            "Analysis".to_string(),
            PayStrategy::bonus(dec("4000"), dec("15")).unwrap(),
        );
        assert_eq!(work.pay(), dec("4600"));
        assert_eq!(work.name(), "Analysis");
    }

    #[test]
    fn test_display_flat_work_type() {
        let work = WorkType::new(
            "Testing".to_string(),
            PayStrategy::flat(dec("2500.4")).unwrap(),
        );
        assert_eq!(work.to_string(), "Work: Testing, Pay: 2500");
    }

    #[test]
    fn test_display_bonus_work_type() {
        let work = WorkType::new(
            "Analysis".to_string(),
            PayStrategy::bonus(dec("4000"), dec("15")).unwrap(),
        );
        assert_eq!(work.to_string(), "Work: Analysis, Pay: 4600 (bonus +15%)");
    }

    #[test]
    fn test_serialize_work_type() {
        let work = WorkType::new(
            "Testing".to_string(),
            PayStrategy::flat(dec("2500")).unwrap(),
        );
        let json = serde_json::to_value(&work).unwrap();
        assert_eq!(json["name"], "Testing");
        assert_eq!(json["strategy"]["kind"], "base");
        assert_eq!(json["strategy"]["base_rate"], "2500");
    }
}
