//! Pay strategies and their validation rules.
//!
//! A [`PayStrategy`] is either a flat rate or a rate with a bonus percent.
//! Both variants are validated when they are built and cannot be changed
//! afterwards, so a strategy in hand always computes a pay amount.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::{DepartmentError, DepartmentResult};

/// Returns the exclusive upper bound for a base rate (10,000,000).
pub fn max_base_rate() -> Decimal {
    Decimal::new(10_000_000, 0)
}

/// Rounds an amount to the nearest whole number, halves away from zero.
///
/// This is the rounding used for display and for the stored text format.
///
/// # Examples
///
/// ```
/// use salary_department::models::round_whole;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_whole(Decimal::new(25, 1)), Decimal::new(3, 0));
/// assert_eq!(round_whole(Decimal::new(4600, 2)).to_string(), "46");
/// ```
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_base_rate(base_rate: Decimal) -> DepartmentResult<()> {
    if base_rate <= Decimal::ZERO {
        return Err(DepartmentError::NonPositiveBaseRate);
    }
    if base_rate >= max_base_rate() {
        return Err(DepartmentError::BaseRateTooLarge);
    }
    Ok(())
}

/// The name of a pay strategy variant, as written in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayKind {
    /// Flat pay, written as `base`.
    Base,
    /// Pay with a bonus percent, written as `bonus`.
    Bonus,
}

impl PayKind {
    /// Returns the stored spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayKind::Base => "base",
            PayKind::Bonus => "bonus",
        }
    }
}

impl fmt::Display for PayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(PayKind::Base),
            "bonus" => Ok(PayKind::Bonus),
            other => Err(other.to_string()),
        }
    }
}

/// Flat pay: the pay is the base rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatPay {
    base_rate: Decimal,
}

impl FlatPay {
    /// Builds a flat strategy, rejecting base rates outside (0, 10,000,000).
    pub fn new(base_rate: Decimal) -> DepartmentResult<Self> {
        validate_base_rate(base_rate)?;
        Ok(Self { base_rate })
    }

    /// Returns the base rate.
    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }
}

/// Bonus pay: the base rate scaled by `1 + bonus_percent / 100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusPay {
    base_rate: Decimal,
    bonus_percent: Decimal,
}

impl BonusPay {
    /// Builds a bonus strategy.
    ///
    /// The base rate follows the same bounds as [`FlatPay::new`]; the bonus
    /// percent must lie strictly between 0 and 100.
    pub fn new(base_rate: Decimal, bonus_percent: Decimal) -> DepartmentResult<Self> {
        validate_base_rate(base_rate)?;
        if bonus_percent <= Decimal::ZERO || bonus_percent >= Decimal::ONE_HUNDRED {
            return Err(DepartmentError::BonusPercentOutOfRange);
        }
        Ok(Self {
            base_rate,
            bonus_percent,
        })
    }

    /// Returns the base rate.
    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// Returns the bonus percent.
    pub fn bonus_percent(&self) -> Decimal {
        self.bonus_percent
    }
}

/// How a work type is paid.
///
/// # Examples
///
/// ```
/// use salary_department::models::PayStrategy;
/// use rust_decimal::Decimal;
///
/// let bonus = PayStrategy::bonus(Decimal::new(4000, 0), Decimal::new(15, 0)).unwrap();
/// assert_eq!(bonus.compute_pay(), Decimal::new(4600, 0));
/// assert_eq!(bonus.bonus_descriptor(), "+15%");
///
/// assert!(PayStrategy::flat(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum PayStrategy {
    /// Flat rate.
    #[serde(rename = "base")]
    Flat(FlatPay),
    /// Rate plus bonus percent.
    #[serde(rename = "bonus")]
    Bonus(BonusPay),
}

impl PayStrategy {
    /// Builds a validated flat strategy.
    pub fn flat(base_rate: Decimal) -> DepartmentResult<Self> {
        FlatPay::new(base_rate).map(PayStrategy::Flat)
    }

    /// Builds a validated bonus strategy.
    pub fn bonus(base_rate: Decimal, bonus_percent: Decimal) -> DepartmentResult<Self> {
        BonusPay::new(base_rate, bonus_percent).map(PayStrategy::Bonus)
    }

    /// Computes the pay amount.
    pub fn compute_pay(&self) -> Decimal {
        match self {
            PayStrategy::Flat(flat) => flat.base_rate,
            PayStrategy::Bonus(bonus) => {
                bonus.base_rate * (Decimal::ONE + bonus.bonus_percent / Decimal::ONE_HUNDRED)
            }
        }
    }

    /// Returns `"+N%"` for bonus pay, N rounded to a whole number, and an
    /// empty string for flat pay.
    pub fn bonus_descriptor(&self) -> String {
        match self {
            PayStrategy::Flat(_) => String::new(),
            PayStrategy::Bonus(bonus) => format!("+{}%", round_whole(bonus.bonus_percent)),
        }
    }

    /// Returns the variant name.
    pub fn kind(&self) -> PayKind {
        match self {
            PayStrategy::Flat(_) => PayKind::Base,
            PayStrategy::Bonus(_) => PayKind::Bonus,
        }
    }

    /// Returns the base rate of either variant.
    pub fn base_rate(&self) -> Decimal {
        match self {
            PayStrategy::Flat(flat) => flat.base_rate,
            PayStrategy::Bonus(bonus) => bonus.base_rate,
        }
    }

    /// Returns the bonus percent, or zero for flat pay.
    pub fn bonus_percent(&self) -> Decimal {
        match self {
            PayStrategy::Flat(_) => Decimal::ZERO,
            PayStrategy::Bonus(bonus) => bonus.bonus_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_flat_pay_equals_base_rate() {
        let strategy = PayStrategy::flat(dec("2500")).unwrap();
        assert_eq!(strategy.compute_pay(), dec("2500"));
        assert_eq!(strategy.bonus_descriptor(), "");
        assert_eq!(strategy.kind(), PayKind::Base);
        assert_eq!(strategy.bonus_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_bonus_pay_scales_base_rate() {
        let strategy = PayStrategy::bonus(dec("4000"), dec("15")).unwrap();
        assert_eq!(strategy.compute_pay(), dec("4600"));
        assert_eq!(strategy.kind(), PayKind::Bonus);
    }

    #[test]
    fn test_bonus_pay_with_fractional_percent() {
        let strategy = PayStrategy::bonus(dec("1000"), dec("12.5")).unwrap();
        assert_eq!(strategy.compute_pay(), dec("1125"));
        assert_eq!(strategy.bonus_descriptor(), "+13%");
    }

    #[test]
    fn test_zero_base_rate_rejected() {
        let result = PayStrategy::flat(Decimal::ZERO);
        assert!(matches!(result, Err(DepartmentError::NonPositiveBaseRate)));
    }

    #[test]
    fn test_negative_base_rate_rejected() {
        let result = PayStrategy::bonus(dec("-1"), dec("10"));
        assert!(matches!(result, Err(DepartmentError::NonPositiveBaseRate)));
    }

    #[test]
    fn test_base_rate_at_limit_rejected() {
        let result = PayStrategy::flat(dec("10000000"));
        assert!(matches!(result, Err(DepartmentError::BaseRateTooLarge)));
    }

    #[test]
    fn test_base_rate_just_below_limit_accepted() {
        let strategy = PayStrategy::flat(dec("9999999.99")).unwrap();
        assert_eq!(strategy.compute_pay(), dec("9999999.99"));
    }

    #[test]
    fn test_bonus_percent_bounds_are_exclusive() {
        for percent in ["0", "100", "-5", "150"] {
            let result = PayStrategy::bonus(dec("1000"), dec(percent));
            assert!(
                matches!(result, Err(DepartmentError::BonusPercentOutOfRange)),
                "percent {} should be rejected",
                percent
            );
        }
        assert!(PayStrategy::bonus(dec("1000"), dec("0.01")).is_ok());
        assert!(PayStrategy::bonus(dec("1000"), dec("99.99")).is_ok());
    }

    #[test]
    fn test_base_rate_checked_before_bonus_percent() {
        let result = PayStrategy::bonus(Decimal::ZERO, Decimal::ZERO);
        assert!(matches!(result, Err(DepartmentError::NonPositiveBaseRate)));
    }

    #[test]
    fn test_pay_kind_parses_stored_spelling() {
        assert_eq!("base".parse::<PayKind>(), Ok(PayKind::Base));
        assert_eq!("bonus".parse::<PayKind>(), Ok(PayKind::Bonus));
        assert_eq!("Bonus".parse::<PayKind>(), Err("Bonus".to_string()));
        assert_eq!(PayKind::Bonus.to_string(), "bonus");
    }

    #[test]
    fn test_strategy_serializes_with_kind_tag() {
        let strategy = PayStrategy::bonus(dec("500"), dec("20")).unwrap();
        let json = serde_json::to_value(&strategy).unwrap();
        assert_eq!(json["kind"], "bonus");
        assert_eq!(json["base_rate"], "500");
        assert_eq!(json["bonus_percent"], "20");
    }

    #[test]
    fn test_round_whole_rounds_half_away_from_zero() {
        assert_eq!(round_whole(dec("2.5")), dec("3"));
        assert_eq!(round_whole(dec("2.49")), dec("2"));
        assert_eq!(round_whole(dec("-2.5")), dec("-3"));
    }
}
