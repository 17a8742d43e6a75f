//! Fixed-point numeric core - deterministic, integer-only arithmetic
//!
//! [`FixedPoint<F>`] stores a signed 64-bit `raw` integer whose real value is
//! `raw / 2^F`. All arithmetic works on `raw`, so results are bit-for-bit
//! reproducible on every platform.
//!
//! # Arithmetic
//!
//! - **Add/Sub**: raw wrapping add/sub. Exact; overflows silently at extreme
//!   magnitudes.
//! - **Mul**: the operands are split into integer and fraction parts and
//!   recombined, so no 128-bit intermediate is needed as long as the integer
//!   part of the product fits in 63 bits.
//! - **Div**: multiplies by a scaled reciprocal of the divisor. This is an
//!   approximation, not exact integer division. Dividing by zero panics; use
//!   [`FixedPoint::checked_div`] to get [`MathError::DivisionByZero`] instead.
//! - The `fast-ops` feature switches Mul/Div to an `i128` intermediate.
//!
//! # Transcendentals
//!
//! `sin`, `cos`, `tan`, `exp`, `artanh`, `ln` and `sqrt` are truncated series
//! or short iterations. They are accurate only inside their documented domain
//! (`[-π, π]` for the trig functions); the `checked_*` variants report
//! [`MathError::Domain`] instead of returning garbage.
//!
//! # Example
//!
//! ```
//! use tui_wireframe_fixed::Q32;
//!
//! let a = Q32::from_f64(1.5);
//! let b = Q32::from_int(2);
//! assert_eq!((a * b).to_f64(), 3.0);
//! assert_eq!(Q32::from_f64(2.5).round(), Q32::from_int(3));
//!
//! let s = Q32::HALF_PI.sin();
//! assert!((s.to_f64() - 1.0).abs() < 1e-3);
//! ```

mod error;
mod fixed_point;
mod math;

pub use error::{MathError, ParseFixedError};
pub use fixed_point::FixedPoint;

/// 16 fractional bits.
pub type Q16 = FixedPoint<16>;

/// 32 fractional bits (the render path default).
pub type Q32 = FixedPoint<32>;
