//! Special functions producing [`DecInt`] values: integer square root,
//! factorial, Fibonacci and Catalan numbers.

use crate::DecInt;

/// Integer floor square root: the largest value whose square does not
/// exceed `a`, found by binary search over `[0, a]`.
pub fn sqrt(a: &DecInt) -> DecInt {
    let one = DecInt::one();
    let mut low = DecInt::zero();
    let mut high = a.clone();
    let mut result = DecInt::zero();
    while low <= high {
        let mut mid = &low + &high;
        mid.halve();
        if mid.square() <= *a {
            // keep the candidate and search upward for a larger one
            result = mid.clone();
            low = &mid + &one;
        } else {
            // mid * mid > a implies mid >= 1, so the step down is safe
            high = &mid - &one;
        }
    }
    result
}

/// Iterative factorial; `factorial(0)` and `factorial(1)` are both 1.
pub fn factorial(n: u32) -> DecInt {
    let mut result = DecInt::one();
    for i in 2..=n {
        result *= DecInt::from(i);
    }
    result
}

/// `n`-th Fibonacci number, iterative, with `F(0) = 0` and `F(1) = 1`.
pub fn nth_fibonacci(n: u32) -> DecInt {
    if n == 0 {
        return DecInt::zero();
    }
    let mut a = DecInt::zero();
    let mut b = DecInt::one();
    for _ in 2..=n {
        let c = &a + &b;
        a = b;
        b = c;
    }
    b
}

/// `n`-th Catalan number via `C(i+1) = C(i) * (4i + 2) / (i + 2)`. Every
/// interleaved division is exact by the recurrence identity.
pub fn nth_catalan(n: u32) -> DecInt {
    let mut result = DecInt::one();
    for i in 0..u64::from(n) {
        result *= DecInt::from(4 * i + 2);
        result /= DecInt::from(i + 2);
    }
    result
}

#[test]
fn test_sqrt() {
    assert!(sqrt(&DecInt::zero()).is_zero());
    assert_eq!(sqrt(&DecInt::one()), DecInt::one());
    assert_eq!(sqrt(&DecInt::from(3u32)), DecInt::one());
    assert_eq!(sqrt(&DecInt::from(4u32)).to_string(), "2");
    assert_eq!(sqrt(&DecInt::from(99u32)).to_string(), "9");
    assert_eq!(sqrt(&DecInt::from(100u32)).to_string(), "10");
    assert_eq!(sqrt(&DecInt::from(99980001u32)).to_string(), "9999");

    let a: DecInt = "10000000000000000000000000000000000000000".into();
    assert_eq!(sqrt(&a).to_string(), "100000000000000000000");

    let a: DecInt = "2000000000000000000".into();
    assert_eq!(sqrt(&a).to_string(), "1414213562");
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), DecInt::one());
    assert_eq!(factorial(1), DecInt::one());
    assert_eq!(factorial(5).to_string(), "120");
    assert_eq!(factorial(10).to_string(), "3628800");
    assert_eq!(factorial(20).to_string(), "2432902008176640000");
    assert_eq!(
        factorial(50).to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
}

#[test]
fn test_fibonacci() {
    assert!(nth_fibonacci(0).is_zero());
    assert_eq!(nth_fibonacci(1), DecInt::one());
    assert_eq!(nth_fibonacci(2), DecInt::one());
    assert_eq!(nth_fibonacci(10).to_string(), "55");
    assert_eq!(nth_fibonacci(20).to_string(), "6765");
    assert_eq!(nth_fibonacci(50).to_string(), "12586269025");
    assert_eq!(nth_fibonacci(100).to_string(), "354224848179261915075");
}

#[test]
fn test_catalan() {
    let expected = [1u32, 1, 2, 5, 14, 42, 132];
    for (n, &c) in expected.iter().enumerate() {
        assert_eq!(nth_catalan(n as u32), DecInt::from(c));
    }
    assert_eq!(nth_catalan(10).to_string(), "16796");
    assert_eq!(nth_catalan(15).to_string(), "9694845");
    assert_eq!(nth_catalan(30).to_string(), "3814986502092304");
}
