//! The `FixedPoint` value type: storage, conversions, rounding and operators.

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

use crate::error::{MathError, ParseFixedError};

/// π scaled by 2^61 (the largest power of two that keeps it inside `i64`).
const PI_Q61: i64 = 7_244_019_458_077_122_842;

/// Binary fixed-point number with `F` fractional bits.
///
/// The value is `raw / 2^F`. `F` must be in `1..=32`; other widths fail to
/// compile as soon as a value is constructed.
///
/// Equality and ordering compare `raw` exactly, there is no epsilon.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPoint<const F: u32> {
    raw: i64,
}

impl<const F: u32> FixedPoint<F> {
    const VALID_BITS: () = assert!(F >= 1 && F <= 32, "FixedPoint supports 1..=32 fractional bits");

    pub const FRACTION_BITS: u32 = F;
    /// `2^F`, the raw value of one.
    pub const SCALE: i64 = 1 << F;
    pub(crate) const FRACTION_MASK: i64 = (1 << F) - 1;

    pub const ZERO: Self = Self::from_raw(0);
    pub const ONE: Self = Self::from_raw(1 << F);
    pub const HALF: Self = Self::from_raw(1 << (F - 1));
    /// Smallest positive value (`raw == 1`).
    pub const EPSILON: Self = Self::from_raw(1);
    pub const PI: Self = Self::from_raw(PI_Q61 >> (61 - F));
    pub const HALF_PI: Self = Self::from_raw(PI_Q61 >> (62 - F));
    pub const TAU: Self = Self::from_raw((PI_Q61 >> (61 - F)) * 2);

    pub const fn from_raw(raw: i64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_BITS;
        Self { raw }
    }

    pub const fn from_int(value: i64) -> Self {
        Self::from_raw(value << F)
    }

    /// Scale by `2^F` and truncate toward zero. Out-of-range values saturate
    /// and NaN becomes zero.
    pub fn from_f64(value: f64) -> Self {
        Self::from_raw((value * Self::SCALE as f64) as i64)
    }

    pub const fn raw(self) -> i64 {
        self.raw
    }

    pub fn to_f64(self) -> f64 {
        self.raw as f64 / Self::SCALE as f64
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn to_int(self) -> i64 {
        self.raw >> F
    }

    /// Raw fraction bits, always in `0..2^F`.
    pub const fn frac_raw(self) -> i64 {
        self.raw & Self::FRACTION_MASK
    }

    pub const fn is_integer(self) -> bool {
        self.frac_raw() == 0
    }

    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    pub const fn floor(self) -> Self {
        Self::from_raw((self.raw >> F) << F)
    }

    pub const fn ceil(self) -> Self {
        Self::from_raw((self.raw.wrapping_add(Self::FRACTION_MASK) >> F) << F)
    }

    /// Add one half, then floor. Ties round up (toward positive infinity).
    pub const fn round(self) -> Self {
        Self::from_raw(self.raw.wrapping_add(1 << (F - 1))).floor()
    }

    pub const fn abs(self) -> Self {
        if self.raw < 0 {
            Self::from_raw(self.raw.wrapping_neg())
        } else {
            self
        }
    }

    pub fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Self, MathError> {
        if rhs.raw == 0 {
            return Err(MathError::DivisionByZero { op: "div" });
        }
        Ok(self / rhs)
    }

    #[cfg(not(feature = "fast-ops"))]
    fn mul_raw(a: i64, b: i64) -> i64 {
        let (int_a, frac_a) = (a >> F, a & Self::FRACTION_MASK);
        let (int_b, frac_b) = (b >> F, b & Self::FRACTION_MASK);
        // Both fractions are below 2^F <= 2^32, so the product fits in u64.
        let frac_frac = ((frac_a as u64 * frac_b as u64) >> F) as i64;
        (int_a.wrapping_mul(int_b) << F)
            .wrapping_add(int_a.wrapping_mul(frac_b))
            .wrapping_add(frac_a.wrapping_mul(int_b))
            .wrapping_add(frac_frac)
    }

    #[cfg(feature = "fast-ops")]
    fn mul_raw(a: i64, b: i64) -> i64 {
        ((a as i128 * b as i128) >> F) as i64
    }

    /// `recip` holds `1 / (2 * divisor)`; the final shift restores the factor two.
    #[cfg(not(feature = "fast-ops"))]
    fn div_raw(a: i64, b: i64) -> i64 {
        let recip = ((1u64 << (2 * F - 1)) / b.unsigned_abs()) as i64;
        let recip = if b < 0 { recip.wrapping_neg() } else { recip };
        Self::mul_raw(recip, a) << 1
    }

    #[cfg(feature = "fast-ops")]
    fn div_raw(a: i64, b: i64) -> i64 {
        (((a as i128) << F) / b as i128) as i64
    }
}

impl<const F: u32> fmt::Debug for FixedPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint<{}>({} raw={})", F, self.to_f64(), self.raw)
    }
}

impl<const F: u32> fmt::Display for FixedPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl<const F: u32> FromStr for FixedPoint<F> {
    type Err = ParseFixedError;

    /// Parse as `f64`, then convert (truncating).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| ParseFixedError::new(s))?;
        if !value.is_finite() {
            return Err(ParseFixedError::new(s));
        }
        Ok(Self::from_f64(value))
    }
}

impl<const F: u32> From<i32> for FixedPoint<F> {
    fn from(value: i32) -> Self {
        Self::from_int(value as i64)
    }
}

impl<const F: u32> From<i64> for FixedPoint<F> {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl<const F: u32> From<f64> for FixedPoint<F> {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl<const F: u32> From<FixedPoint<F>> for f64 {
    fn from(value: FixedPoint<F>) -> Self {
        value.to_f64()
    }
}

impl<const F: u32> Add for FixedPoint<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(rhs.raw))
    }
}

impl<const F: u32> Sub for FixedPoint<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(rhs.raw))
    }
}

impl<const F: u32> Mul for FixedPoint<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(Self::mul_raw(self.raw, rhs.raw))
    }
}

impl<const F: u32> Div for FixedPoint<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self {
        Self::from_raw(Self::div_raw(self.raw, rhs.raw))
    }
}

/// Exact remainder on raw values; the sign follows the dividend.
impl<const F: u32> Rem for FixedPoint<F> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self::from_raw(self.raw % rhs.raw)
    }
}

/// Scaling by an integer is exact on `raw`.
impl<const F: u32> Mul<i64> for FixedPoint<F> {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::from_raw(self.raw.wrapping_mul(rhs))
    }
}

/// Integer division of `raw`, truncating toward zero.
impl<const F: u32> Div<i64> for FixedPoint<F> {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        Self::from_raw(self.raw / rhs)
    }
}

impl<const F: u32> Neg for FixedPoint<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }
}

macro_rules! assign_ops {
    ($($trait:ident :: $method:ident => $op:tt, $rhs:ty;)*) => {
        $(
            impl<const F: u32> $trait<$rhs> for FixedPoint<F> {
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

assign_ops! {
    AddAssign::add_assign => +, Self;
    SubAssign::sub_assign => -, Self;
    MulAssign::mul_assign => *, Self;
    DivAssign::div_assign => /, Self;
    RemAssign::rem_assign => %, Self;
    MulAssign::mul_assign => *, i64;
    DivAssign::div_assign => /, i64;
}

impl<const F: u32> Sum for FixedPoint<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
