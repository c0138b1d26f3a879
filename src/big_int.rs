//! # BigInt
//! Arbitrary-precision signed integers. The magnitude is kept as base `10^4` limbs,
//! least significant first, and the sign is stored apart from it. Zero is never negative.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(-7);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```
//!
//! Every operator has a fallible twin (`checked_*`, `try_*_assign`) that reports
//! [`BigIntError`] instead of panicking.

use std::fmt::{self, Display};
use std::io::{self, BufRead};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::big_num_constants::*;
use crate::big_num_cache::*;
use crate::error::{BigIntError, Result};

const WIDE_RADIX: i64 = RADIX as i64;

macro_rules! trim_zero_limbs {
    ($vec: expr) => {
        while $vec.last() == Some(&0) {
            $vec.pop();
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    limbs: Vec<u32>,
}

// 杂项辅助函数
fn check_limb(value: i64) -> Result<u32> {
    if (0..WIDE_RADIX).contains(&value) {
        Ok(value as u32)
    } else {
        tracing::debug!(value, radix = RADIX, "limb left its radix range");
        Err(BigIntError::Overflow)
    }
}

impl BigInt {
    /// Strips the most significant zero limbs and clears the sign of a zero magnitude.
    fn normalize(&mut self) {
        trim_zero_limbs!(self.limbs);
        if self.limbs.is_empty() {
            self.negative = false;
        }
    }

    /// Number of decimal digits of the magnitude, `1` for zero.
    pub fn digit_count(&self) -> usize {
        match self.limbs.last() {
            None => 1,
            Some(&top) => (self.limbs.len() - 1) * LIMB_DIGITS + top.ilog10() as usize + 1,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

// 实现构造
impl BigInt {
    pub const ZERO: BigInt = BigInt { negative: false, limbs: Vec::new() };

    pub(crate) fn from_limbs(limbs: Vec<u32>, negative: bool) -> Self {
        let mut val = BigInt { negative, limbs };
        val.normalize();
        val
    }

    fn value_of(mut mag: u128, negative: bool) -> BigInt {
        if mag <= MAX_CONSTANT as u128 {
            return if negative {
                NEG_CACHE[mag as usize].clone()
            } else {
                POS_CACHE[mag as usize].clone()
            };
        }
        let mut limbs = Vec::with_capacity(10);
        while mag > 0 {
            limbs.push((mag % RADIX as u128) as u32);
            mag /= RADIX as u128;
        }
        BigInt { negative, limbs }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            // unsigned_abs keeps MIN representable
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<i64> {
        let mut mag: i128 = 0;
        for &limb in val.limbs.iter().rev() {
            mag = mag
                .checked_mul(RADIX as i128)
                .and_then(|m| m.checked_add(limb as i128))
                .ok_or(BigIntError::Overflow)?;
        }
        let signed = if val.negative { -mag } else { mag };
        i64::try_from(signed).map_err(|_| BigIntError::Overflow)
    }
}

impl From<&BigInt> for bool {
    fn from(val: &BigInt) -> bool {
        !val.is_zero()
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses `[+-]?[0-9]+`. Digits are grouped into limbs from the least significant end.
    fn from_str(val: &str) -> Result<Self> {
        let (negative, digits) = match val.as_bytes().first() {
            Some(b'-') => (true, &val[1..]),
            Some(b'+') => (false, &val[1..]),
            Some(_) => (false, val),
            None => return Err(BigIntError::invalid_format(val, "empty literal")),
        };
        if digits.is_empty() {
            return Err(BigIntError::invalid_format(val, "missing digits after sign"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntError::invalid_format(val, "unexpected character"));
        }

        let mut limbs = Vec::with_capacity(digits.len() / LIMB_DIGITS + 1);
        for group in digits.as_bytes().rchunks(LIMB_DIGITS) {
            let mut limb: i64 = 0;
            for &b in group {
                limb = check_limb(limb * 10 + (b - b'0') as i64)? as i64;
            }
            limbs.push(limb as u32);
        }
        Ok(BigInt::from_limbs(limbs, negative))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self> {
        val.parse()
    }
}

impl TryFrom<String> for BigInt {
    type Error = BigIntError;

    fn try_from(val: String) -> Result<Self> {
        val.parse()
    }
}

impl BigInt {
    /// Reads one whitespace-delimited token from `reader` and parses it.
    ///
    /// The delimiter after the token is left in the reader. A malformed token is
    /// reported as [`io::ErrorKind::InvalidData`], a missing one as
    /// [`io::ErrorKind::UnexpectedEof`].
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<BigInt> {
        let mut token = Vec::new();
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
                used += 1;
            }
            reader.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no BigInt token in input"));
        }
        let token = String::from_utf8(token)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        token
            .parse()
            .map_err(|err: BigIntError| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_to_string())
    }
}

impl BigInt {
    fn magnitude_to_string(&self) -> String {
        let mut limbs = self.limbs.iter().rev();
        let mut s = String::with_capacity(self.limbs.len() * LIMB_DIGITS);
        match limbs.next() {
            None => s.push('0'),
            Some(top) => {
                s.push_str(&top.to_string());
                for limb in limbs {
                    s.push_str(&format!("{:0width$}", limb, width = LIMB_DIGITS));
                }
            }
        }
        s
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(a: &[u32], b: &[u32]) -> Ordering {
        if a.len() != b.len() {
            return a.len().cmp(&b.len());
        }
        for (x, y) in a.iter().rev().zip(b.iter().rev()) {
            if x != y {
                return x.cmp(y);
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => BigInt::compare_mag(&self.limbs, &other.limbs),
            (true, true) => BigInt::compare_mag(&self.limbs, &other.limbs).reverse(),
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, limbs: self.limbs.clone() }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative;
        self.normalize();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加减法
impl BigInt {
    /// `acc += other` on magnitudes.
    fn add_mag(acc: &mut Vec<u32>, other: &[u32]) -> Result<()> {
        let required = acc.len().max(other.len()) + 1;
        acc.resize(required, 0);

        let mut carry = 0;
        let mut i = 0;
        while i < acc.len() || carry != 0 {
            if i == acc.len() {
                acc.push(0);
            }
            let mut sum = acc[i] as i64 + carry + other.get(i).map_or(0, |&x| x as i64);
            carry = (sum >= WIDE_RADIX) as i64;
            sum -= carry * WIDE_RADIX;
            acc[i] = check_limb(sum)?;
            i += 1;
        }
        Ok(())
    }

    /// `acc -= other` on magnitudes, requires `acc >= other`.
    fn sub_mag(acc: &mut [u32], other: &[u32]) -> Result<()> {
        let mut borrow = 0;
        let mut i = 0;
        while i < other.len() || borrow != 0 {
            let Some(limb) = acc.get_mut(i) else {
                return Err(BigIntError::Overflow);
            };
            let mut diff = *limb as i64 - borrow - other.get(i).map_or(0, |&x| x as i64);
            borrow = (diff < 0) as i64;
            diff += borrow * WIDE_RADIX;
            *limb = check_limb(diff)?;
            i += 1;
        }
        Ok(())
    }

    fn add_signed(&mut self, limbs: &[u32], negative: bool) -> Result<()> {
        if self.negative == negative {
            BigInt::add_mag(&mut self.limbs, limbs)?;
        } else {
            // a + b == a - (-b)
            self.sub_signed(limbs, !negative)?;
        }
        self.normalize();
        Ok(())
    }

    fn sub_signed(&mut self, limbs: &[u32], negative: bool) -> Result<()> {
        if self.negative == negative {
            if BigInt::compare_mag(&self.limbs, limbs) != Ordering::Less {
                BigInt::sub_mag(&mut self.limbs, limbs)?;
            } else {
                // a - b == -(b - a)
                let mut diff = limbs.to_vec();
                BigInt::sub_mag(&mut diff, &self.limbs)?;
                self.limbs = diff;
                self.negative = !self.negative;
            }
        } else {
            self.add_signed(limbs, !negative)?;
        }
        self.normalize();
        Ok(())
    }

    pub fn checked_add(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut sum = self.clone();
        sum.add_signed(&rhs.limbs, rhs.negative)?;
        Ok(sum)
    }

    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut diff = self.clone();
        diff.sub_signed(&rhs.limbs, rhs.negative)?;
        Ok(diff)
    }

    /// `self += rhs`. On error `self` keeps its previous value.
    pub fn try_add_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// `self -= rhs`. On error `self` keeps its previous value.
    pub fn try_sub_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }
}

// 实现自增自减
impl BigInt {
    /// Prefix increment, `++x`.
    pub fn inc(&mut self) -> Result<&mut Self> {
        self.try_add_assign(&POS_CACHE[1])?;
        Ok(self)
    }

    /// Prefix decrement, `--x`.
    pub fn dec(&mut self) -> Result<&mut Self> {
        self.try_sub_assign(&POS_CACHE[1])?;
        Ok(self)
    }

    /// Postfix increment, `x++`. Returns the value before the increment.
    pub fn post_inc(&mut self) -> Result<BigInt> {
        let prev = self.clone();
        self.inc()?;
        Ok(prev)
    }

    /// Postfix decrement, `x--`. Returns the value before the decrement.
    pub fn post_dec(&mut self) -> Result<BigInt> {
        let prev = self.clone();
        self.dec()?;
        Ok(prev)
    }
}

// 实现乘法
impl BigInt {
    /// Schoolbook product of two magnitudes.
    fn mul_mag(x: &[u32], y: &[u32]) -> Result<Vec<u32>> {
        let mut z = vec![0u32; x.len() + y.len()];
        for (i, &x_val) in x.iter().enumerate() {
            let mut carry: i64 = 0;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                // len(x) + len(y) limbs always hold the product; this only guards against a bad carry
                let Some(slot) = z.get_mut(i + j) else {
                    return Err(BigIntError::Overflow);
                };
                let product = x_val as i64 * y.get(j).map_or(0, |&v| v as i64) + carry + *slot as i64;
                *slot = check_limb(product % WIDE_RADIX)?;
                carry = product / WIDE_RADIX;
                j += 1;
            }
        }
        trim_zero_limbs!(z);
        Ok(z)
    }

    /// Magnitude times a small factor in `[0, RADIX]`.
    fn scale_mag(mag: &[u32], factor: i64) -> Result<Vec<u32>> {
        let mut out = Vec::with_capacity(mag.len() + 1);
        let mut carry: i64 = 0;
        for &limb in mag {
            let product = limb as i64 * factor + carry;
            out.push(check_limb(product % WIDE_RADIX)?);
            carry = product / WIDE_RADIX;
        }
        while carry > 0 {
            out.push(check_limb(carry % WIDE_RADIX)?);
            carry /= WIDE_RADIX;
        }
        trim_zero_limbs!(out);
        Ok(out)
    }

    /// Product of `self` and `rhs`, failing with `Overflow` past `MAX_DIGITS` digits.
    pub fn checked_mul(&self, rhs: &BigInt) -> Result<BigInt> {
        let limbs = BigInt::mul_mag(&self.limbs, &rhs.limbs)?;
        let product = BigInt::from_limbs(limbs, self.negative != rhs.negative);

        let digits = product.digit_count();
        if digits > MAX_DIGITS {
            tracing::debug!(digits, limit = MAX_DIGITS, "product exceeds digit ceiling");
            return Err(BigIntError::Overflow);
        }
        Ok(product)
    }

    /// `self *= rhs`. On error `self` keeps its previous value.
    pub fn try_mul_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }
}

// 实现除法与求余
impl BigInt {
    /// Truncating division. Returns `(quotient, remainder)` with
    /// `self == divisor * quotient + remainder`, `|remainder| < |divisor|`
    /// and the remainder carrying the dividend's sign.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            tracing::debug!(dividend_digits = self.digit_count(), "division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        let _span = tracing::trace_span!(
            "div_rem",
            dividend_limbs = self.limbs.len(),
            divisor_limbs = divisor.limbs.len()
        )
        .entered();

        let mut quotient = vec![0u32; self.limbs.len()];
        let mut remainder: Vec<u32> = Vec::with_capacity(divisor.limbs.len() + 1);

        for i in (0..self.limbs.len()).rev() {
            remainder.insert(0, self.limbs[i]);
            trim_zero_limbs!(remainder);

            let digit = BigInt::quotient_digit(&divisor.limbs, &remainder)?;
            quotient[i] = check_limb(digit)?;
            let scaled = BigInt::scale_mag(&divisor.limbs, digit)?;
            BigInt::sub_mag(&mut remainder, &scaled)?;
            trim_zero_limbs!(remainder);
        }

        let quotient = BigInt::from_limbs(quotient, self.negative != divisor.negative);
        let remainder = BigInt::from_limbs(remainder, self.negative);
        Ok((quotient, remainder))
    }

    /// Largest `d` in `[0, RADIX]` with `divisor * d <= remainder`, by binary search.
    fn quotient_digit(divisor: &[u32], remainder: &[u32]) -> Result<i64> {
        let mut left: i64 = 0;
        let mut right: i64 = WIDE_RADIX;
        let mut digit = 0;
        while left <= right {
            let mid = (left + right) / 2;
            let product = BigInt::scale_mag(divisor, mid)?;
            if BigInt::compare_mag(&product, remainder) != Ordering::Greater {
                digit = mid;
                left = mid + 1;
            } else {
                right = mid - 1;
            }
        }
        Ok(digit)
    }

    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// `self /= rhs`. On error `self` keeps its previous value.
    pub fn try_div_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// `self %= rhs`. On error `self` keeps its previous value.
    pub fn try_rem_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_rem(rhs)?;
        Ok(())
    }
}

// 实现运算符
// These panic with the `BigIntError` message, the way primitive integers panic on `/ 0`.
macro_rules! impl_bin_op {
    ($($op: ident, $method: ident, $checked: ident, $assign_op: ident, $assign_method: ident, $try_assign: ident;)*) => {
    $(
    impl $op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            match self.$checked(rhs) {
                Ok(val) => val,
                Err(err) => panic!("{}", err),
            }
        }
    }

    impl $op for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: BigInt) -> Self::Output {
            $assign_op::$assign_method(&mut self, &rhs);
            self
        }
    }

    impl $op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> Self::Output {
            $assign_op::$assign_method(&mut self, rhs);
            self
        }
    }

    impl $op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $op::$method(self, &rhs)
        }
    }

    impl $assign_op<&BigInt> for BigInt {
        fn $assign_method(&mut self, rhs: &BigInt) {
            if let Err(err) = self.$try_assign(rhs) {
                panic!("{}", err);
            }
        }
    }

    impl $assign_op for BigInt {
        fn $assign_method(&mut self, rhs: BigInt) {
            $assign_op::$assign_method(self, &rhs);
        }
    }
    )*
    };
}

impl_bin_op! {
    Add, add, checked_add, AddAssign, add_assign, try_add_assign;
    Sub, sub, checked_sub, SubAssign, sub_assign, try_sub_assign;
    Mul, mul, checked_mul, MulAssign, mul_assign, try_mul_assign;
    Div, div, checked_div, DivAssign, div_assign, try_div_assign;
    Rem, rem, checked_rem, RemAssign, rem_assign, try_rem_assign;
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let a = BigInt::from(12_i8);
    assert_eq!(a.limbs, vec![12]);
    assert!(!a.negative);

    let a = BigInt::from(-100_000_i32);
    assert_eq!(a.limbs, vec![0, 10]);
    assert!(a.negative);

    let a = BigInt::from(0_i64);
    assert!(a.limbs.is_empty());
    assert!(!a.negative);

    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(i32::MIN).to_string(), "-2147483648");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(-16_isize), NEG_CACHE[16]);
    assert_eq!(BigInt::from(17_u8).limbs, vec![17]);
}

#[test]
fn test_parse() {
    let a = big("123456789");
    assert_eq!(a.limbs, vec![6789, 2345, 1]);

    let a = big("+00012");
    assert_eq!(a.limbs, vec![12]);
    assert!(!a.negative);

    let a = big("-0000");
    assert!(a.limbs.is_empty());
    assert!(!a.negative);
    assert_eq!(a.to_string(), "0");

    assert_eq!(big("-10000").limbs, vec![0, 1]);
    assert_eq!(BigInt::try_from("42").unwrap(), BigInt::from(42));
    assert_eq!(BigInt::try_from(String::from("-42")).unwrap(), BigInt::from(-42));
}

#[test]
fn test_parse_invalid() {
    for literal in ["", "-", "+", "12a", " 1", "1 ", "--1", "+-1", "1_000", "١٢"] {
        match literal.parse::<BigInt>() {
            Err(BigIntError::InvalidFormat { literal: l, .. }) => assert_eq!(l, literal),
            other => panic!("{:?} parsed as {:?}", literal, other),
        }
    }
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::ZERO.to_string(), "0");
    assert_eq!(big("100000001").to_string(), "100000001");
    assert_eq!(big("-1000200030004").to_string(), "-1000200030004");

    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(s).to_string(), s);

    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInt::from(5)), "+5");
    assert_eq!(format!("{:05}", BigInt::from(-7)), "-0007");
}

#[test]
fn test_digit_count() {
    assert_eq!(BigInt::ZERO.digit_count(), 1);
    assert_eq!(BigInt::from(9).digit_count(), 1);
    assert_eq!(BigInt::from(-10000).digit_count(), 5);
    assert_eq!(big("99999999").digit_count(), 8);
}

#[test]
fn test_compare() {
    let ordered = ["-100000", "-10000", "-9999", "-2", "0", "3", "9999", "10000", "123456789"];
    for (i, a) in ordered.iter().enumerate() {
        for (j, b) in ordered.iter().enumerate() {
            assert_eq!(big(a).cmp(&big(b)), i.cmp(&j), "{} vs {}", a, b);
        }
    }
    assert_eq!(big("-0"), big("0"));
    assert!(big("1000") == BigInt::from(1000));
}

#[test]
fn test_add() {
    assert_eq!(big("9999") + big("1"), big("10000"));
    assert_eq!(big("99999999") + big("1"), big("100000000"));
    assert_eq!(big("-5") + big("3"), big("-2"));
    assert_eq!(big("5") + big("-8"), big("-3"));
    assert_eq!(big("-5") + big("-8"), big("-13"));

    let zero = big("-123456789") + big("123456789");
    assert!(zero.is_zero());
    assert!(!zero.negative);
}

#[test]
fn test_sub() {
    assert_eq!(big("10000") - big("1"), big("9999"));
    assert_eq!(big("100000000") - big("1"), big("99999999"));
    assert_eq!(big("3") - big("5"), big("-2"));
    assert_eq!(big("-3") - big("-5"), big("2"));
    assert_eq!(big("-5") - big("-3"), big("-2"));
    assert_eq!(big("-3") - big("5"), big("-8"));
    assert_eq!(big("0") - big("7"), big("-7"));

    let zero = big("-77") - big("-77");
    assert!(zero.is_zero());
    assert!(!zero.negative);
}

#[test]
fn test_mul() {
    assert_eq!(big("9999") * big("9999"), big("99980001"));
    assert_eq!(big("99999999") * big("99999999"), big("9999999800000001"));
    assert_eq!(BigInt::from(7) * BigInt::from(-6), BigInt::from(-42));
    assert_eq!(big("-3") * big("-4"), big("12"));

    let zero = big("-123") * big("0");
    assert!(zero.is_zero());
    assert!(!zero.negative);

    let a = big("12345678909876523784950683472613487560983287654321");
    assert_eq!(
        &a * &a,
        big("152415787745769992691973303051542696987637119428742148696015028011178471253645882104660094389971041")
    );
    assert_eq!(
        &a * &big("-98765432109876543210"),
        big("-1219326312223744460476762913289657788284789467582457947709860899710410")
    );
}

#[test]
fn test_mul_overflow() {
    let under = big(&format!("1{}", "0".repeat(15004)));
    let square = under.checked_mul(&under).unwrap();
    assert_eq!(square.digit_count(), MAX_DIGITS);

    let mut over = big(&format!("1{}", "0".repeat(15005)));
    let copy = over.clone();
    assert_eq!(over.checked_mul(&copy), Err(BigIntError::Overflow));
    assert_eq!(over.try_mul_assign(&copy), Err(BigIntError::Overflow));
    assert_eq!(over, copy);
}

#[test]
#[should_panic(expected = "BigInt overflow")]
fn test_mul_overflow_panics() {
    let a = big(&format!("1{}", "0".repeat(20000)));
    let _ = &a * &a;
}

#[test]
fn test_div() {
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
    assert_eq!(BigInt::from(7) / BigInt::from(-2), BigInt::from(-3));
    assert_eq!(BigInt::from(-7) / BigInt::from(-2), BigInt::from(3));
    assert_eq!(big("3") / big("5"), big("0"));
    assert_eq!(big("99990000") / big("9999"), big("10000"));

    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    assert_eq!(a / b, big("10000000000000000000000000000000"));

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215"));
    assert_eq!(r, big("1193100845153944161348506284633422837373178517256300220003478173303874237852253838030233949"));
}

#[test]
fn test_rem() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(-1));
    assert_eq!(BigInt::from(7) % BigInt::from(-2), BigInt::from(1));
    assert_eq!(BigInt::from(-7) % BigInt::from(-2), BigInt::from(-1));

    let r = big("10000000000000000") % big("10");
    assert!(r.is_zero());
    assert!(!r.negative);

    let r = big("-10000000000000000") % big("10");
    assert!(!r.negative);

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    assert_eq!(&a % &b, big("393707270751296419349581795408095683999332705291"));
    assert_eq!(&a / &b, big("44532135147185277413589594536286141607822"));
}

#[test]
fn test_operand_forms() {
    let a = big("-123456789012345678");
    let b = big("9876543210");
    let cases = [
        (&a + &b, big("-123456779135802468")),
        (&a - &b, big("-123456798888888888")),
        (&a * &b, big("-1219326311248285312223746380")),
        (&a / &b, big("-12499999")),
        (&a % &b, big("-8763888888")),
    ];
    for (borrowed, expected) in cases {
        assert_eq!(borrowed, expected);
    }

    assert_eq!(a.clone() + b.clone(), &a + &b);
    assert_eq!(a.clone() - &b, &a - &b);
    assert_eq!(&a * b.clone(), &a * &b);
    assert_eq!(a.clone() / b.clone(), &a / &b);
    assert_eq!(a.clone() % &b, &a % &b);

    let mut c = a.clone();
    c *= b.clone();
    c /= &b;
    assert_eq!(c, a);
}

#[test]
#[should_panic(expected = "Division by zero")]
fn test_owned_div_by_zero_panics() {
    let _ = BigInt::from(9) / BigInt::ZERO;
}

#[test]
fn test_div_by_zero() {
    let mut a = big("123456789");
    assert_eq!(a.checked_div(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
    assert_eq!(a.checked_rem(&big("-0")), Err(BigIntError::DivisionByZero));
    assert_eq!(a.try_div_assign(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
    assert_eq!(a, big("123456789"));
    assert_eq!(BigInt::ZERO.div_rem(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
}

#[test]
#[should_panic(expected = "Division by zero")]
fn test_rem_by_zero_panics() {
    let mut a = BigInt::from(5);
    a %= BigInt::ZERO;
}

#[test]
fn test_inc_dec() {
    let mut a = BigInt::from(5);
    let prev = a.post_inc().unwrap();
    assert_eq!(prev, BigInt::from(5));
    assert_eq!(a, BigInt::from(6));

    a.inc().unwrap().inc().unwrap();
    assert_eq!(a, BigInt::from(8));

    let mut b = BigInt::ZERO;
    assert_eq!(b.post_dec().unwrap(), BigInt::ZERO);
    assert_eq!(b, BigInt::from(-1));
    b.inc().unwrap();
    assert!(b.is_zero());
    assert!(!b.negative);

    let mut c = big("10000");
    c.dec().unwrap();
    assert_eq!(c.limbs, vec![9999]);
}

#[test]
fn test_neg_abs() {
    assert_eq!(-BigInt::from(3), BigInt::from(-3));
    assert_eq!(-&BigInt::from(-3), BigInt::from(3));
    assert!(!(-BigInt::ZERO).negative);
    assert_eq!(BigInt::from(-12345).abs(), BigInt::from(12345));
    assert!(BigInt::from(-1).is_negative());
}

#[test]
fn test_to_bool() {
    assert!(!bool::from(&BigInt::ZERO));
    assert!(bool::from(&BigInt::from(-1)));
    assert!(bool::from(&big("100000000")));
}

#[test]
fn test_to_i64() {
    assert_eq!(i64::try_from(&BigInt::from(i64::MAX)), Ok(i64::MAX));
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(i64::try_from(&BigInt::ZERO), Ok(0));
    assert_eq!(i64::try_from(&(BigInt::from(i64::MAX) + BigInt::from(1))), Err(BigIntError::Overflow));
    assert_eq!(i64::try_from(&big(&"9".repeat(60))), Err(BigIntError::Overflow));
}

#[test]
fn test_read_from() {
    let mut input = io::Cursor::new("  123 -45\n\t+0006  x1\n");
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(123));
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(-45));
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(6));
    assert_eq!(BigInt::read_from(&mut input).unwrap_err().kind(), io::ErrorKind::InvalidData);
    assert_eq!(BigInt::read_from(&mut input).unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_read_from_small_buffer() {
    let text = "98765432109876543210 7";
    let mut input = io::BufReader::with_capacity(3, text.as_bytes());
    assert_eq!(BigInt::read_from(&mut input).unwrap(), big("98765432109876543210"));
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(7));
}
