//! Property tests for `add` and `divide`.

use calculator::{add, divide, Error};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_add_is_commutative(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn test_add_float_is_commutative(a in -1e12f64..1e12, b in -1e12f64..1e12) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn test_add_zero_is_identity(a in any::<i64>()) {
        prop_assert_eq!(add(a, 0), a);
    }

    #[test]
    fn test_divide_then_multiply(a in -1_000_000i64..1_000_000, b in -1_000i64..1_000) {
        prop_assume!(b != 0);
        let quotient = divide(a, b).unwrap();
        let restored = quotient * b as f64;
        prop_assert!((restored - a as f64).abs() <= 1e-9 * (a as f64).abs().max(1.0));
    }

    #[test]
    fn test_divide_exact_multiples(q in -10_000i32..10_000, b in 1i32..10_000) {
        prop_assert_eq!(divide(q * b, b), Ok(q as f64));
    }

    #[test]
    fn test_divide_by_zero_is_rejected(a in any::<i64>()) {
        prop_assert_eq!(divide(a, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_divide_float_by_zero_is_rejected(a in -1e12f64..1e12) {
        prop_assert_eq!(divide(a, 0.0), Err(Error::DivisionByZero));
    }
}
