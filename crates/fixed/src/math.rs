//! Transcendental approximations on `FixedPoint`.
//!
//! Every function here is a truncated series or a bounded iteration. Results
//! are deterministic for a given raw input but only accurate inside the
//! documented domain; tests should use tolerances that reflect truncation
//! error, not libm precision.

use crate::error::MathError;
use crate::fixed_point::FixedPoint;

const fn factorial(n: u32) -> i64 {
    let mut acc = 1i64;
    let mut i = 2;
    while i <= n {
        acc *= i as i64;
        i += 1;
    }
    acc
}

/// `0!` through `14!`; `14!` is the last term of `exp`.
const FACTORIALS: [i64; 15] = {
    let mut table = [0i64; 15];
    let mut n = 0;
    while n < 15 {
        table[n] = factorial(n as u32);
        n += 1;
    }
    table
};

const EXP_TERMS: u32 = 14;
const SQRT_MAX_ITERATIONS: usize = 10;
const SQRT_TOLERANCE: f64 = 0.001;

impl<const F: u32> FixedPoint<F> {
    /// `self` raised to a non-negative integer power by repeated multiplication.
    pub fn pow(self, n: u32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        let mut acc = self;
        for _ in 1..n {
            acc *= self;
        }
        acc
    }

    pub fn in_trig_domain(self) -> bool {
        -Self::PI <= self && self <= Self::PI
    }

    /// Reduce any angle into `[-π, π]`.
    ///
    /// The remainder by `TAU` is exact on raw values, so repeated wrapping
    /// never drifts.
    pub fn wrap_angle(self) -> Self {
        if self.in_trig_domain() {
            return self;
        }
        let mut angle = self % Self::TAU;
        if angle > Self::PI {
            angle -= Self::TAU;
        } else if angle < -Self::PI {
            angle += Self::TAU;
        }
        angle
    }

    /// `x - x³/3! + x⁵/5! - x⁷/7! + x⁹/9!`, for `x` in `[-π, π]`.
    pub fn sin(self) -> Self {
        debug_assert!(self.in_trig_domain(), "sin({}) outside [-pi, pi]", self);
        self - self.pow(3) / FACTORIALS[3] + self.pow(5) / FACTORIALS[5]
            - self.pow(7) / FACTORIALS[7]
            + self.pow(9) / FACTORIALS[9]
    }

    /// `1 - x²/2! + x⁴/4! - x⁶/6! + x⁸/8!`, for `x` in `[-π, π]`.
    pub fn cos(self) -> Self {
        debug_assert!(self.in_trig_domain(), "cos({}) outside [-pi, pi]", self);
        Self::ONE - self.pow(2) / FACTORIALS[2] + self.pow(4) / FACTORIALS[4]
            - self.pow(6) / FACTORIALS[6]
            + self.pow(8) / FACTORIALS[8]
    }

    /// `sin / cos`. Panics where `cos` is exactly zero.
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// `Σ xⁱ/i!` for `i` in `0..=14`. Intended for small `|x|`; large powers
    /// overflow silently.
    pub fn exp(self) -> Self {
        (1..=EXP_TERMS).fold(Self::ONE, |acc, i| {
            acc + self.pow(i) / FACTORIALS[i as usize]
        })
    }

    /// `x + x³/3 + x⁵/5 + x⁷/7 + x⁹/9`, for `|x| < 1`.
    pub fn artanh(self) -> Self {
        debug_assert!(self.abs() < Self::ONE, "artanh({}) outside (-1, 1)", self);
        self + self.pow(3) / 3 + self.pow(5) / 5 + self.pow(7) / 7 + self.pow(9) / 9
    }

    /// Natural logarithm as `2·artanh((x-1)/(x+1))`, for `x > 0`.
    ///
    /// Most accurate near one; the truncated series loses precision as `x`
    /// moves away from it.
    pub fn ln(self) -> Self {
        debug_assert!(self > Self::ZERO, "ln({}) needs a positive argument", self);
        ((self - Self::ONE) / (self + Self::ONE)).artanh() * 2
    }

    /// Babylonian iteration from 1: at most 10 steps, stopping once
    /// `|r² - x| < 0.001`.
    pub fn sqrt(self) -> Self {
        debug_assert!(self >= Self::ZERO, "sqrt({}) needs a non-negative argument", self);
        let tolerance = Self::from_f64(SQRT_TOLERANCE);
        let mut root = Self::ONE;
        for _ in 0..SQRT_MAX_ITERATIONS {
            if (root * root - self).abs() < tolerance {
                break;
            }
            root = Self::HALF * (root + self / root);
        }
        root
    }

    pub fn checked_sin(self) -> Result<Self, MathError> {
        self.require(self.in_trig_domain(), "sin")?;
        Ok(self.sin())
    }

    pub fn checked_cos(self) -> Result<Self, MathError> {
        self.require(self.in_trig_domain(), "cos")?;
        Ok(self.cos())
    }

    pub fn checked_tan(self) -> Result<Self, MathError> {
        self.require(self.in_trig_domain(), "tan")?;
        let cos = self.cos();
        if cos == Self::ZERO {
            return Err(MathError::DivisionByZero { op: "tan" });
        }
        Ok(self.sin() / cos)
    }

    pub fn checked_artanh(self) -> Result<Self, MathError> {
        self.require(self.abs() < Self::ONE, "artanh")?;
        Ok(self.artanh())
    }

    pub fn checked_ln(self) -> Result<Self, MathError> {
        self.require(self > Self::ZERO, "ln")?;
        Ok(self.ln())
    }

    pub fn checked_sqrt(self) -> Result<Self, MathError> {
        self.require(self >= Self::ZERO, "sqrt")?;
        Ok(self.sqrt())
    }

    fn require(self, ok: bool, op: &'static str) -> Result<(), MathError> {
        if ok {
            Ok(())
        } else {
            Err(MathError::Domain {
                op,
                value: self.to_f64(),
            })
        }
    }
}
