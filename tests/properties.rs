//! Property tests for pay rules and the department.

use proptest::prelude::*;
use rust_decimal::Decimal;

use salary_department::department::Department;
use salary_department::error::DepartmentError;
use salary_department::models::PayStrategy;
use salary_department::storage::{decode, encode};

/// Valid base rates in cents: (0, 10,000,000).
fn valid_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Valid bonus percents in hundredths: (0, 100).
fn valid_percent() -> impl Strategy<Value = Decimal> {
    (1i64..10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

proptest! {
    #[test]
    fn flat_pay_equals_base_rate(rate in valid_rate()) {
        let strategy = PayStrategy::flat(rate).unwrap();
        prop_assert_eq!(strategy.compute_pay(), rate);
    }

    #[test]
    fn bonus_pay_scales_base_rate(rate in valid_rate(), percent in valid_percent()) {
        let strategy = PayStrategy::bonus(rate, percent).unwrap();
        let expected = rate * (Decimal::ONE + percent / Decimal::ONE_HUNDRED);
        prop_assert_eq!(strategy.compute_pay(), expected);
    }

    #[test]
    fn non_positive_rate_rejected(cents in -1_000_000_000i64..=0) {
        let rate = Decimal::new(cents, 2);
        prop_assert!(matches!(PayStrategy::flat(rate), Err(DepartmentError::NonPositiveBaseRate)));
        prop_assert!(matches!(
            PayStrategy::bonus(rate, Decimal::TEN),
            Err(DepartmentError::NonPositiveBaseRate)
        ));
    }

    #[test]
    fn oversized_rate_rejected(units in 10_000_000i64..1_000_000_000) {
        let rate = Decimal::new(units, 0);
        prop_assert!(matches!(PayStrategy::flat(rate), Err(DepartmentError::BaseRateTooLarge)));
    }

    #[test]
    fn out_of_range_percent_rejected(
        rate in valid_rate(),
        percent in prop_oneof![-10_000i64..=0, 100i64..10_000],
    ) {
        let result = PayStrategy::bonus(rate, Decimal::new(percent, 0));
        prop_assert!(matches!(result, Err(DepartmentError::BonusPercentOutOfRange)));
    }

    #[test]
    fn names_stay_unique(names in prop::collection::vec("[a-c]{1,2}", 1..20)) {
        let mut department = Department::new();
        for name in &names {
            let before = department.len();
            let existed = department.contains(name);
            let result = department.add(name, PayStrategy::flat(Decimal::ONE).unwrap());
            prop_assert_eq!(result.is_err(), existed);
            prop_assert_eq!(department.len(), if existed { before } else { before + 1 });
        }

        let mut seen = std::collections::HashSet::new();
        for work in department.list() {
            prop_assert!(seen.insert(work.name().to_string()));
        }
    }

    #[test]
    fn average_is_sum_over_count(rates in prop::collection::vec(1i64..1_000_000, 1..30)) {
        let mut department = Department::new();
        for (i, units) in rates.iter().enumerate() {
            department
                .add(&format!("work_{}", i), PayStrategy::flat(Decimal::new(*units, 0)).unwrap())
                .unwrap();
        }

        let sum: i64 = rates.iter().sum();
        let expected = Decimal::new(sum, 0) / Decimal::from(rates.len());
        prop_assert_eq!(department.average_pay().unwrap(), expected);
    }

    #[test]
    fn whole_number_departments_round_trip(
        entries in prop::collection::btree_map(
            "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]",
            (1i64..9_999_999, prop::option::of(1i64..100)),
            0..15,
        )
    ) {
        let mut department = Department::new();
        for (name, (rate, percent)) in &entries {
            let strategy = match percent {
                Some(p) => PayStrategy::bonus(Decimal::new(*rate, 0), Decimal::new(*p, 0)),
                None => PayStrategy::flat(Decimal::new(*rate, 0)),
            }
            .unwrap();
            department.add(name, strategy).unwrap();
        }

        let decoded = decode(&encode(&department)).unwrap();
        prop_assert_eq!(decoded.sorted_by_name(), department.sorted_by_name());
    }
}
