//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers stored as decimal limbs, with
//!   truncating division, explicit overflow and division-by-zero detection.
//! - [`BigIntError`]: the error every fallible `BigInt` operation reports.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;

pub use big_int::BigInt;
pub use big_num_constants::{LIMB_DIGITS, MAX_DIGITS, RADIX};
pub use error::{BigIntError, Result};

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigInt, BigIntError};

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn any_big_int(max_digits: usize) -> impl Strategy<Value = BigInt> {
        proptest::string::string_regex(&format!("[+-]?[0-9]{{1,{}}}", max_digits))
            .unwrap()
            .prop_map(|s| s.parse::<BigInt>().unwrap())
    }

    #[test]
    fn it_works() {
        let a = big("123456789012345678901234567890");
        assert_eq!(&a + &BigInt::from(1), big("123456789012345678901234567891"));

        assert_eq!(BigInt::from(7) * BigInt::from(-6), BigInt::from(-42));

        assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
        assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(-1));

        assert_eq!(big("1000"), BigInt::from(1000));
        assert_eq!(BigInt::from(0).to_string(), "0");

        let huge = big(&format!("9{}", "0".repeat(16000)));
        assert_eq!(huge.checked_mul(&huge), Err(BigIntError::Overflow));

        let mut five = BigInt::from(5);
        let prev = five.post_inc().unwrap();
        assert_eq!(prev, BigInt::from(5));
        assert_eq!(five, BigInt::from(6));
    }

    proptest! {
        #[test]
        fn prop_round_trip(s in "[+-]?[0-9]{1,80}") {
            let val: BigInt = s.parse().unwrap();
            let rendered = val.to_string();
            prop_assert_eq!(rendered.parse::<BigInt>().unwrap(), val.clone());
            prop_assert_ne!(rendered.as_str(), "-0");

            let digits = s.trim_start_matches(['+', '-']).trim_start_matches('0');
            let expected = match (digits.is_empty(), s.starts_with('-')) {
                (true, _) => String::from("0"),
                (false, true) => format!("-{}", digits),
                (false, false) => digits.to_string(),
            };
            prop_assert_eq!(rendered, expected);
        }

        #[test]
        fn prop_additive_identity(a in any_big_int(60)) {
            prop_assert_eq!(&a + &BigInt::ZERO, a.clone());
            let zero = &a + &(-&a);
            prop_assert!(zero.is_zero());
            prop_assert!(!zero.is_negative());
        }

        #[test]
        fn prop_commutative_associative(a in any_big_int(40), b in any_big_int(40), c in any_big_int(40)) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn prop_div_rem_law(a in any_big_int(60), b in any_big_int(30)) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
            prop_assert_eq!(&a / &b, q);
            prop_assert_eq!(&a % &b, r);
        }

        #[test]
        fn prop_div_by_zero(a in any_big_int(40)) {
            prop_assert_eq!(a.checked_div(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
            prop_assert_eq!(a.checked_rem(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
        }

        #[test]
        fn prop_order_consistency(a in any_big_int(30), b in any_big_int(30)) {
            let holds = [a < b, a == b, a > b];
            prop_assert_eq!(holds.iter().filter(|&&x| x).count(), 1);
            prop_assert_eq!(a < b, (&a - &b) < BigInt::ZERO);
        }

        #[test]
        fn prop_matches_machine_integers(x in any::<i64>(), y in any::<i64>()) {
            let (a, b) = (BigInt::from(x), BigInt::from(y));
            let (wx, wy) = (x as i128, y as i128);
            prop_assert_eq!(&a + &b, BigInt::from(wx + wy));
            prop_assert_eq!(&a - &b, BigInt::from(wx - wy));
            prop_assert_eq!(&a * &b, BigInt::from(wx * wy));
            prop_assert_eq!(a.cmp(&b), x.cmp(&y));
            if y != 0 {
                prop_assert_eq!(&a / &b, BigInt::from(wx / wy));
                prop_assert_eq!(&a % &b, BigInt::from(wx % wy));
            }
            prop_assert_eq!(i64::try_from(&a), Ok(x));
        }
    }
}
