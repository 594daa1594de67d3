//! Property-based tests for decimal big integer arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{factorial, nth_catalan, nth_fibonacci, sqrt, ArithmeticError, DecInt};

    // Strategy for decimal digit strings without leading zeros
    fn digit_string() -> impl Strategy<Value = String> {
        "[1-9][0-9]{0,80}"
    }

    proptest! {
        #[test]
        fn add_commutative(a in any::<u64>(), b in any::<u64>()) {
            let a = DecInt::from(a);
            let b = DecInt::from(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let sum = DecInt::from(a) + DecInt::from(b);
            prop_assert_eq!(sum.to_string(), (a as u128 + b as u128).to_string());
        }

        #[test]
        fn mul_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let product = DecInt::from(a) * DecInt::from(b);
            prop_assert_eq!(product.to_string(), (a as u128 * b as u128).to_string());
        }

        #[test]
        fn add_sub_roundtrip(a in digit_string(), b in digit_string()) {
            let a: DecInt = a.parse().unwrap();
            let b: DecInt = b.parse().unwrap();
            let sum = &a + &b;
            prop_assert_eq!(sum.try_sub(&b).unwrap(), a);
        }

        #[test]
        fn sub_add_roundtrip(a in digit_string(), b in digit_string()) {
            let a: DecInt = a.parse().unwrap();
            let b: DecInt = b.parse().unwrap();
            let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
            let diff = hi.try_sub(&lo).unwrap();
            prop_assert_eq!(diff + lo, hi);
        }

        #[test]
        fn sub_below_zero_underflows(a in digit_string()) {
            let a: DecInt = a.parse().unwrap();
            let mut larger = a.clone();
            larger.incr();
            prop_assert_eq!(a.try_sub(&larger), Err(ArithmeticError::Underflow));
        }

        #[test]
        fn division_identity(a in digit_string(), b in digit_string()) {
            let a: DecInt = a.parse().unwrap();
            let b: DecInt = b.parse().unwrap();
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r < b);
            prop_assert_eq!(q * b + r, a);
        }

        #[test]
        fn display_parse_roundtrip(a in digit_string()) {
            let v: DecInt = a.parse().unwrap();
            let back: DecInt = v.to_string().parse().unwrap();
            prop_assert_eq!(&back, &v);
            prop_assert_eq!(v.to_string(), a);
        }

        #[test]
        fn incr_decr_roundtrip(a in digit_string()) {
            let original: DecInt = a.parse().unwrap();
            let mut v = original.clone();
            v.incr();
            v.try_decr().unwrap();
            prop_assert_eq!(v, original);
        }

        #[test]
        fn is_zero_matches_zero_equality(a in 0u64..32) {
            let v = DecInt::from(a);
            prop_assert_eq!(v.is_zero(), v == DecInt::from(0u32));
        }

        #[test]
        fn mul_by_zero_is_zero(a in digit_string()) {
            let v: DecInt = a.parse().unwrap();
            prop_assert!((v * DecInt::zero()).is_zero());
        }

        // large random operands keep the product normalized, exercising the
        // in-buffer carry propagation
        #[test]
        fn mul_stays_normalized(a in "[1-9][0-9]{60,200}", b in "[1-9][0-9]{60,200}") {
            let x: DecInt = a.parse().unwrap();
            let y: DecInt = b.parse().unwrap();
            let product = &x * &y;
            let count = product.digit_count();
            prop_assert!(count == a.len() + b.len() || count == a.len() + b.len() - 1);
            prop_assert!(!product.to_string().starts_with('0'));
        }

        #[test]
        fn pow_matches_repeated_mul(base in 0u64..50, exp in 0u32..12) {
            let b = DecInt::from(base);
            let mut expected = DecInt::one();
            for _ in 0..exp {
                expected *= &b;
            }
            prop_assert_eq!(b.pow(&DecInt::from(exp)), expected);
        }

        #[test]
        fn sqrt_is_floor(a in digit_string()) {
            let v: DecInt = a.parse().unwrap();
            let root = sqrt(&v);
            prop_assert!(root.square() <= v);
            let mut next = root;
            next.incr();
            prop_assert!(next.square() > v);
        }

        // the interleaved multiply-then-divide recurrence must stay exact
        #[test]
        fn catalan_matches_binomial_formula(n in 0u32..40) {
            let c = nth_catalan(n);
            let num = factorial(2 * n);
            let den = factorial(n).square() * DecInt::from(n + 1);
            prop_assert_eq!(c, num.try_div(&den).unwrap());
        }

        #[test]
        fn fibonacci_recurrence(n in 0u32..200) {
            let sum = nth_fibonacci(n) + nth_fibonacci(n + 1);
            prop_assert_eq!(sum, nth_fibonacci(n + 2));
        }
    }
}
