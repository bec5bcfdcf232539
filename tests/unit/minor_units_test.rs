// Property-based tests for the minor-unit amount conversion used by
// the bearer-token gateways (amount × 100 as an integer).

use proptest::prelude::*;
use rust_decimal::Decimal;

use pixgate::modules::providers::services::adapter::to_minor_units;

proptest! {
    #[test]
    fn test_cent_amounts_round_trip(cents in 0i64..1_000_000_000_000i64) {
        // A major-unit amount with two decimal places maps back to its
        // exact cent count
        let amount = Decimal::new(cents, 2);
        prop_assert_eq!(to_minor_units(amount).unwrap(), cents);
    }

    #[test]
    fn test_whole_amounts_scale_by_hundred(units in 0i64..10_000_000_000i64) {
        let amount = Decimal::from(units);
        prop_assert_eq!(to_minor_units(amount).unwrap(), units * 100);
    }

    #[test]
    fn test_conversion_is_deterministic(cents in 0i64..1_000_000_000_000i64) {
        let amount = Decimal::new(cents, 2);
        prop_assert_eq!(
            to_minor_units(amount).unwrap(),
            to_minor_units(amount).unwrap()
        );
    }

    #[test]
    fn test_conversion_is_monotonic(a in 0i64..1_000_000_000i64, b in 0i64..1_000_000_000i64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            to_minor_units(Decimal::new(lo, 2)).unwrap()
                <= to_minor_units(Decimal::new(hi, 2)).unwrap()
        );
    }
}
