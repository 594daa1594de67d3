//! # DecInt
//! Arbitrary-precision non-negative integers stored as decimal digits,
//! least-significant digit first. All arithmetic is schoolbook: digit-wise
//! carry/borrow chains, convolution multiplication and long division by
//! repeated subtraction.
//! # Example
//! ```
//! use dec_num::DecInt;
//!
//! let a: DecInt = "10000000000000".parse().unwrap();
//! let b: DecInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```
//!

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
};
use std::str::FromStr;

use crate::dec_num_cache::*;
use crate::dec_num_constants::*;
use crate::error::{ArithmeticError, Result};

macro_rules! trim_leading_zeros {
    ($digits: expr) => {
        while $digits.len() > 1 && $digits.last() == Some(&0) {
            $digits.pop();
        }
    };
}

/// A non-negative integer of unbounded magnitude.
///
/// The canonical representation never stores leading zero digits; zero
/// itself is the single digit `[0]`. Clones are deep, so no two values ever
/// share digit storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecInt {
    digits: Vec<u8>,
}

// 杂项辅助函数
impl DecInt {
    /// True iff the value is the canonical zero.
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Number of stored decimal digits (at least 1).
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Decimal digit at `index`, counting from the least significant digit.
    ///
    /// # Errors
    /// [`ArithmeticError::IndexOutOfRange`] if `index` is past the most
    /// significant digit.
    pub fn digit(&self, index: usize) -> Result<u8> {
        self.digits
            .get(index)
            .copied()
            .ok_or(ArithmeticError::IndexOutOfRange(index))
    }

    /// Narrows to `u64`, or `None` if the value does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        let mut val: u64 = 0;
        for &d in self.digits.iter().rev() {
            val = val.checked_mul(10)?.checked_add(u64::from(d))?;
        }
        Some(val)
    }

    /// remainder * 10 + digit, without going through general multiplication
    fn shift_push(&mut self, digit: u8) {
        if self.is_zero() {
            self.digits[0] = digit;
        } else {
            self.digits.insert(0, digit);
        }
    }
}

// 实现构造
impl DecInt {
    pub fn zero() -> DecInt {
        DecInt::from_raw(vec![0])
    }

    pub fn one() -> DecInt {
        DecInt::from_raw(vec![1])
    }

    /// `digits` must already be canonical: least-significant first, every
    /// element in [0,9], no leading zeros, never empty.
    pub(crate) fn from_raw(digits: Vec<u8>) -> DecInt {
        DecInt { digits }
    }

    fn value_of(mut val: u64) -> DecInt {
        if val <= MAX_CONSTANT as u64 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut digits = Vec::new();
        while val != 0 {
            digits.push((val % 10) as u8);
            val /= 10;
        }
        DecInt { digits }
    }
}

macro_rules! impl_unsigned_to_dec_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for DecInt {
        fn from(val: $u) -> Self {
            DecInt::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_dec_num!(u8, u16, u32, usize, u64);

impl From<&str> for DecInt {
    /// # Panics
    /// Panics on anything but a non-empty run of ASCII decimal digits; use
    /// [`str::parse`] for the checked form.
    fn from(val: &str) -> Self {
        match val.parse() {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Default for DecInt {
    fn default() -> Self {
        DecInt::zero()
    }
}

// 实现打印
impl Display for DecInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::with_capacity(self.digits.len());
        for &d in self.digits.iter().rev() {
            s.push(DIGITS[d as usize]);
        }
        f.write_str(&s)
    }
}

// 实现解析
impl FromStr for DecInt {
    type Err = ArithmeticError;

    /// Parses a most-significant-first run of ASCII decimal digits. The
    /// empty string is rejected with the same error as a malformed digit.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ArithmeticError::InvalidDigit);
        }
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars().rev() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(ArithmeticError::InvalidDigit),
            }
        }
        trim_leading_zeros!(digits);
        Ok(DecInt { digits })
    }
}

// 实现大小比较
impl DecInt {
    fn cmp_digits(&self, other: &DecInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            // both operands are normalized, so more digits means larger
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl Ord for DecInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_digits(other)
    }
}

impl PartialOrd for DecInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 实现自增自减
impl DecInt {
    /// Adds one in place, extending the carry chain with a new most
    /// significant digit when every stored digit is 9.
    pub fn incr(&mut self) {
        for d in self.digits.iter_mut() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                return;
            }
        }
        self.digits.push(1);
    }

    /// Subtracts one in place.
    ///
    /// # Errors
    /// [`ArithmeticError::Underflow`] if the value is zero; the value is
    /// left unchanged in that case.
    pub fn try_decr(&mut self) -> Result<()> {
        if self.is_zero() {
            return Err(ArithmeticError::Underflow);
        }
        for d in self.digits.iter_mut() {
            if *d == 0 {
                *d = 9;
            } else {
                *d -= 1;
                break;
            }
        }
        trim_leading_zeros!(self.digits);
        Ok(())
    }
}

// 实现加法
impl DecInt {
    fn add_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
        let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let mut result = Vec::with_capacity(longer.len() + 1);
        let mut carry = 0u8;
        for (i, &d) in longer.iter().enumerate() {
            let mut sum = d + carry;
            if i < shorter.len() {
                sum += shorter[i];
            }
            carry = sum / 10;
            result.push(sum % 10);
        }
        if carry != 0 {
            result.push(carry);
        }
        result
    }
}

impl Add for DecInt {
    type Output = DecInt;

    fn add(self, rhs: Self) -> Self::Output {
        DecInt { digits: DecInt::add_digits(&self.digits, &rhs.digits) }
    }
}

impl Add for &DecInt {
    type Output = DecInt;

    fn add(self, rhs: Self) -> Self::Output {
        DecInt { digits: DecInt::add_digits(&self.digits, &rhs.digits) }
    }
}

impl AddAssign for DecInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl AddAssign<&DecInt> for DecInt {
    fn add_assign(&mut self, rhs: &DecInt) {
        *self = &*self + rhs;
    }
}

// 实现减法
impl DecInt {
    /// Difference `self - rhs`.
    ///
    /// # Errors
    /// [`ArithmeticError::Underflow`] when `rhs > self`; no negative value
    /// is representable.
    pub fn try_sub(&self, rhs: &DecInt) -> Result<DecInt> {
        if self < rhs {
            return Err(ArithmeticError::Underflow);
        }
        Ok(DecInt { digits: DecInt::sub_digits(&self.digits, &rhs.digits) })
    }

    /// caller guarantees a >= b
    fn sub_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(a.len());
        let mut borrow = 0i8;
        for (i, &d) in a.iter().enumerate() {
            let mut diff = d as i8 - borrow;
            if i < b.len() {
                diff -= b[i] as i8;
            }
            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }
        trim_leading_zeros!(result);
        result
    }
}

impl Sub for DecInt {
    type Output = DecInt;

    /// # Panics
    /// Panics when `rhs > self`; see [`DecInt::try_sub`] for the checked
    /// form.
    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Sub for &DecInt {
    type Output = DecInt;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl SubAssign for DecInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl SubAssign<&DecInt> for DecInt {
    fn sub_assign(&mut self, rhs: &DecInt) {
        *self = &*self - rhs;
    }
}

// 实现乘法
impl DecInt {
    fn mul_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                // the carry is folded as soon as a cell exceeds 9, so a
                // cell is at most 18 + 81 = 99 when accumulated and u8
                // cells cannot overflow
                buf[i + j] += x * y;
                if buf[i + j] >= 10 {
                    let carry = buf[i + j] / 10;
                    buf[i + j] %= 10;
                    buf[i + j + 1] += carry;
                }
            }
        }
        trim_leading_zeros!(buf);
        buf
    }

    /// `self * self`, schoolbook.
    pub fn square(&self) -> DecInt {
        self * self
    }
}

impl Mul for &DecInt {
    type Output = DecInt;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return DecInt::zero();
        }
        DecInt { digits: DecInt::mul_digits(&self.digits, &rhs.digits) }
    }
}

impl Mul for DecInt {
    type Output = DecInt;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign for DecInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&DecInt> for DecInt {
    fn mul_assign(&mut self, rhs: &DecInt) {
        *self = &*self * rhs;
    }
}

// 实现除法
impl DecInt {
    /// Quotient and remainder in one pass of long division by repeated
    /// subtraction.
    ///
    /// When the dividend is smaller than the divisor the remainder is the
    /// dividend itself, the mathematical modulo.
    ///
    /// # Errors
    /// [`ArithmeticError::DivideByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &DecInt) -> Result<(DecInt, DecInt)> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        match self.cmp(rhs) {
            Ordering::Less => return Ok((DecInt::zero(), self.clone())),
            Ordering::Equal => return Ok((DecInt::one(), DecInt::zero())),
            Ordering::Greater => {}
        }

        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut remainder = DecInt::zero();
        for &d in self.digits.iter().rev() {
            remainder.shift_push(d);
            let mut count = 0u8;
            while remainder >= *rhs {
                // remainder >= rhs, so the borrow chain cannot underflow
                remainder = DecInt {
                    digits: DecInt::sub_digits(&remainder.digits, &rhs.digits),
                };
                count += 1;
            }
            quotient.push(count);
        }
        quotient.reverse();
        trim_leading_zeros!(quotient);
        Ok((DecInt { digits: quotient }, remainder))
    }

    /// Truncating quotient `self / rhs`.
    ///
    /// # Errors
    /// [`ArithmeticError::DivideByZero`] when `rhs` is zero.
    pub fn try_div(&self, rhs: &DecInt) -> Result<DecInt> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Remainder `self % rhs`.
    ///
    /// # Errors
    /// [`ArithmeticError::DivideByZero`] when `rhs` is zero.
    pub fn try_rem(&self, rhs: &DecInt) -> Result<DecInt> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
}

impl Div for DecInt {
    type Output = DecInt;

    /// # Panics
    /// Panics when `rhs` is zero; see [`DecInt::try_div`] for the checked
    /// form.
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(&rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Div for &DecInt {
    type Output = DecInt;

    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl DivAssign for DecInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl DivAssign<&DecInt> for DecInt {
    fn div_assign(&mut self, rhs: &DecInt) {
        *self = &*self / rhs;
    }
}

// 实现求余
impl Rem for DecInt {
    type Output = DecInt;

    /// # Panics
    /// Panics when `rhs` is zero; see [`DecInt::try_rem`] for the checked
    /// form.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.try_rem(&rhs) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Rem for &DecInt {
    type Output = DecInt;

    fn rem(self, rhs: Self) -> Self::Output {
        match self.try_rem(rhs) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl RemAssign for DecInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.clone() % rhs;
    }
}

impl RemAssign<&DecInt> for DecInt {
    fn rem_assign(&mut self, rhs: &DecInt) {
        *self = &*self % rhs;
    }
}

// 实现幂运算
impl DecInt {
    /// `self` raised to `exponent` by binary exponentiation. The exponent
    /// is halved digit-wise rather than through general division.
    /// `x.pow(&zero)` is one for every `x`, including zero.
    pub fn pow(&self, exponent: &DecInt) -> DecInt {
        let mut result = DecInt::one();
        let mut base = self.clone();
        let mut exp = exponent.clone();
        while !exp.is_zero() {
            if exp.digits[0] % 2 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp.halve();
        }
        result
    }

    /// Halves in place: most-significant-first, carrying `current % 2` one
    /// decimal position down.
    pub(crate) fn halve(&mut self) {
        let mut carry = 0u8;
        for d in self.digits.iter_mut().rev() {
            let current = carry * 10 + *d;
            *d = current / 2;
            carry = current % 2;
        }
        trim_leading_zeros!(self.digits);
    }
}

#[test]
fn test_from() {
    let a = DecInt::from(0u32);
    assert!(a.is_zero());
    assert_eq!(a.to_string(), "0");

    let a = DecInt::from(7u8);
    assert_eq!(a.to_string(), "7");

    let a = DecInt::from(90712usize);
    assert_eq!(a.to_string(), "90712");

    let a = DecInt::from(u64::MAX);
    assert_eq!(a.to_string(), "18446744073709551615");
}

#[test]
fn test_parse() {
    let a: DecInt = "12345678901234567890".parse().unwrap();
    assert_eq!(a.to_string(), "12345678901234567890");

    let a: DecInt = "0".parse().unwrap();
    assert!(a.is_zero());

    // leading zeros are normalized away
    let a: DecInt = "000123".parse().unwrap();
    assert_eq!(a.to_string(), "123");
    let a: DecInt = "0000".parse().unwrap();
    assert!(a.is_zero());

    assert_eq!("12a3".parse::<DecInt>(), Err(ArithmeticError::InvalidDigit));
    assert_eq!("-5".parse::<DecInt>(), Err(ArithmeticError::InvalidDigit));
    assert_eq!("+5".parse::<DecInt>(), Err(ArithmeticError::InvalidDigit));
    assert_eq!(" 5".parse::<DecInt>(), Err(ArithmeticError::InvalidDigit));
    assert_eq!("".parse::<DecInt>(), Err(ArithmeticError::InvalidDigit));
}

#[test]
fn test_cmp() {
    let a: DecInt = "123".into();
    let b: DecInt = "124".into();
    let c: DecInt = "1230".into();
    assert!(a < b);
    assert!(b < c);
    assert!(c > a);
    assert!(a <= a);
    assert_eq!(a, DecInt::from(123u32));
    assert_ne!(a, b);
    assert!(DecInt::zero() < DecInt::one());
}

#[test]
fn test_incr() {
    let mut a: DecInt = "999".into();
    a.incr();
    assert_eq!(a.to_string(), "1000");

    let mut a: DecInt = "19".into();
    a.incr();
    assert_eq!(a.to_string(), "20");

    let mut a: DecInt = "10".into();
    a.incr();
    assert_eq!(a.to_string(), "11");

    let mut a = DecInt::zero();
    a.incr();
    assert_eq!(a, DecInt::one());
}

#[test]
fn test_decr() {
    let mut a: DecInt = "1000".into();
    a.try_decr().unwrap();
    assert_eq!(a.to_string(), "999");

    let mut a = DecInt::one();
    a.try_decr().unwrap();
    assert!(a.is_zero());

    let mut zero = DecInt::zero();
    assert_eq!(zero.try_decr(), Err(ArithmeticError::Underflow));
    assert!(zero.is_zero());
}

#[test]
fn test_incr_decr_roundtrip() {
    let original: DecInt = "99999999999999999999".into();
    let mut a = original.clone();
    a.incr();
    assert_eq!(a.to_string(), "100000000000000000000");
    a.try_decr().unwrap();
    assert_eq!(a, original);
}

#[test]
fn test_add() {
    let a: DecInt = "12345678901234567890".into();
    let b: DecInt = "98765432109876543210".into();
    assert_eq!((&a + &b).to_string(), "111111111011111111100");
    assert_eq!(&a + &b, &b + &a);

    // carry past the most significant digit
    let a: DecInt = "999999".into();
    assert_eq!((a + DecInt::one()).to_string(), "1000000");

    let mut a: DecInt = "55".into();
    a += DecInt::from(45u32);
    assert_eq!(a.to_string(), "100");
    a += &DecInt::one();
    assert_eq!(a.to_string(), "101");
}

#[test]
fn test_sub() {
    let a: DecInt = "10000".into();
    assert_eq!((&a - &DecInt::one()).to_string(), "9999");

    let a: DecInt = "12345678901234567890".into();
    assert!(a.try_sub(&a).unwrap().is_zero());

    let small: DecInt = "5".into();
    let big: DecInt = "6".into();
    assert_eq!(small.try_sub(&big), Err(ArithmeticError::Underflow));

    let sum: DecInt = "111111111011111111100".into();
    let b: DecInt = "98765432109876543210".into();
    let diff = sum.try_sub(&b).unwrap();
    assert_eq!(diff.to_string(), "12345678901234567890");
    assert_eq!(diff + b, sum);
}

#[test]
fn test_mul() {
    let a: DecInt = "10000000000000000".into();
    let b: DecInt = "3001".into();
    let result: DecInt = "30010000000000000000".into();
    assert_eq!(result, &a * &b);
    assert_eq!(result, &b * &a);

    let a: DecInt = "123456789".into();
    let b: DecInt = "987654321".into();
    assert_eq!((&a * &b).to_string(), "121932631112635269");

    let zero = DecInt::zero();
    assert!((&a * &zero).is_zero());
    assert!((zero * a).is_zero());

    let mut a: DecInt = "12".into();
    a *= DecInt::from(12u32);
    assert_eq!(a.to_string(), "144");
}

#[test]
fn test_square() {
    // every digit 9 exercises the in-buffer carry chain
    let a: DecInt = "99999999999999999999".into();
    let expected = concat!("99999999999999999998", "00000000000000000001");
    assert_eq!(a.square().to_string(), expected);

    assert!(DecInt::zero().square().is_zero());
    assert_eq!(DecInt::from(12u32).square().to_string(), "144");
}

#[test]
fn test_div() {
    let a: DecInt = "120".into();
    let b: DecInt = "13".into();
    assert_eq!((&a / &b).to_string(), "9");

    // dividend smaller than divisor
    let a: DecInt = "5".into();
    let b: DecInt = "100".into();
    assert!((&a / &b).is_zero());

    // equal operands
    let a: DecInt = "123456".into();
    assert_eq!((&a / &a).to_string(), "1");

    let five: DecInt = "5".into();
    assert_eq!(five.try_div(&DecInt::zero()), Err(ArithmeticError::DivideByZero));

    let a: DecInt = concat!(
        "1248712878947821648762389057105328957928307412789503279510743095710237597120",
        "8749210959128709478021974721456787654324567897654789765436754356765467898765",
        "4321456789087654325678908765432567890876543245678908765432567890876543876543",
        "245678907654356789"
    ).into();
    let b: DecInt = concat!(
        "56789876546789765435876546789765467890876578765456789765432567897654324567892",
        "34567890854376"
    ).into();
    let q: DecInt = concat!(
        "2198830064226313680004856612680547604070329562534575633658570404422278162115",
        "8596876349726562910906651562104831721609088222205401883168960593370061500432",
        "215"
    ).into();
    assert_eq!(a.try_div(&b).unwrap(), q);
    let r = a.try_rem(&b).unwrap();
    assert_eq!(q * b + r, a);
}

#[test]
fn test_rem() {
    let a: DecInt = "12".into();
    let b: DecInt = "8".into();
    assert_eq!((&a % &b).to_string(), "4");

    let a: DecInt = "10000000000000000".into();
    let b: DecInt = "10".into();
    assert!((&a % &b).is_zero());

    // smaller modulo larger keeps the dividend
    let a: DecInt = "7".into();
    let b: DecInt = "100".into();
    assert_eq!(&a % &b, a);

    let five: DecInt = "5".into();
    assert_eq!(five.try_rem(&DecInt::zero()), Err(ArithmeticError::DivideByZero));

    let a: DecInt = concat!(
        "2345678987362534875960709876543234567890987632534654654345645357343483906346",
        "4369876543245"
    ).into();
    let b: DecInt = "526738495607659438721653478560954837265378495607".into();
    let r: DecInt = "393707270751296419349581795408095683999332705291".into();
    assert_eq!(a.try_rem(&b).unwrap(), r);
}

#[test]
fn test_div_rem() {
    let a: DecInt = "98765432109876543210987654321".into();
    let b: DecInt = "12345678987654321".into();
    let (q, r) = a.div_rem(&b).unwrap();
    assert!(r < b);
    assert_eq!(q * b + r, a);

    let mut a: DecInt = "144".into();
    a /= DecInt::from(12u32);
    assert_eq!(a.to_string(), "12");
    let mut a: DecInt = "145".into();
    a %= DecInt::from(12u32);
    assert_eq!(a.to_string(), "1");
}

#[test]
fn test_pow() {
    let two: DecInt = "2".into();
    assert_eq!(two.pow(&DecInt::from(10u32)).to_string(), "1024");
    assert_eq!(two.pow(&DecInt::from(64u32)).to_string(), "18446744073709551616");

    let three: DecInt = "3".into();
    assert_eq!(three.pow(&DecInt::from(27u32)).to_string(), "7625597484987");

    // anything to the zeroth power is one
    let big: DecInt = "987654321987654321".into();
    assert_eq!(big.pow(&DecInt::zero()), DecInt::one());
    assert_eq!(DecInt::zero().pow(&DecInt::zero()), DecInt::one());

    assert!(DecInt::zero().pow(&DecInt::from(5u32)).is_zero());
    assert_eq!(DecInt::one().pow(&DecInt::from(1000u32)), DecInt::one());
}

#[test]
fn test_digit() {
    let a: DecInt = "905".into();
    assert_eq!(a.digit(0), Ok(5));
    assert_eq!(a.digit(1), Ok(0));
    assert_eq!(a.digit(2), Ok(9));
    assert_eq!(a.digit(3), Err(ArithmeticError::IndexOutOfRange(3)));
    assert_eq!(a.digit_count(), 3);
    assert_eq!(DecInt::zero().digit_count(), 1);
}

#[test]
fn test_to_u64() {
    let a: DecInt = "18446744073709551615".into();
    assert_eq!(a.to_u64(), Some(u64::MAX));

    let mut b = a.clone();
    b.incr();
    assert_eq!(b.to_u64(), None);

    assert_eq!(DecInt::zero().to_u64(), Some(0));
    assert_eq!(DecInt::from(90712u32).to_u64(), Some(90712));
}

#[test]
fn test_display_roundtrip() {
    let s = "432109876543210987654321098765432109876543210";
    let a: DecInt = s.parse().unwrap();
    assert_eq!(a.to_string(), s);
}

#[test]
fn test_value_semantics() {
    let a: DecInt = "123".into();
    let mut b = a.clone();
    b.incr();
    assert_eq!(a.to_string(), "123");
    assert_eq!(b.to_string(), "124");
}
