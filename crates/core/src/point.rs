//! 3D points and axis-aligned rotation.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::fixed::FixedPoint;

/// Rotation axis (right-handed coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point (or vector) with three fixed-point coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point3<const F: u32> {
    pub x: FixedPoint<F>,
    pub y: FixedPoint<F>,
    pub z: FixedPoint<F>,
}

impl<const F: u32> Point3<F> {
    pub const ORIGIN: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ZERO);

    pub const fn new(x: FixedPoint<F>, y: FixedPoint<F>, z: FixedPoint<F>) -> Self {
        Self { x, y, z }
    }

    pub const fn from_int(x: i64, y: i64, z: i64) -> Self {
        Self::new(
            FixedPoint::from_int(x),
            FixedPoint::from_int(y),
            FixedPoint::from_int(z),
        )
    }

    pub fn from_f64(x: f64, y: f64, z: f64) -> Self {
        Self::new(
            FixedPoint::from_f64(x),
            FixedPoint::from_f64(y),
            FixedPoint::from_f64(z),
        )
    }

    /// Component-wise product, used to apply per-axis zoom factors.
    pub fn element_mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }

    pub fn dot(self, rhs: Self) -> FixedPoint<F> {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Rotate in place. The angle may be any value; it is wrapped into
    /// `[-π, π]` before the series are evaluated.
    pub fn rotate_around(&mut self, axis: Axis, angle: FixedPoint<F>) {
        Rotation::new(axis, angle).apply(self);
    }

    pub fn rotated_around(mut self, axis: Axis, angle: FixedPoint<F>) -> Self {
        self.rotate_around(axis, angle);
        self
    }

    pub fn rotate_around_x(&mut self, angle: FixedPoint<F>) {
        self.rotate_around(Axis::X, angle);
    }

    pub fn rotate_around_y(&mut self, angle: FixedPoint<F>) {
        self.rotate_around(Axis::Y, angle);
    }

    pub fn rotate_around_z(&mut self, angle: FixedPoint<F>) {
        self.rotate_around(Axis::Z, angle);
    }

    pub fn rotated_around_x(self, angle: FixedPoint<F>) -> Self {
        self.rotated_around(Axis::X, angle)
    }

    pub fn rotated_around_y(self, angle: FixedPoint<F>) -> Self {
        self.rotated_around(Axis::Y, angle)
    }

    pub fn rotated_around_z(self, angle: FixedPoint<F>) -> Self {
        self.rotated_around(Axis::Z, angle)
    }
}

impl<const F: u32> fmt::Display for Point3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<const F: u32> Add for Point3<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<const F: u32> AddAssign for Point3<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const F: u32> Sub for Point3<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<const F: u32> SubAssign for Point3<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const F: u32> Mul<FixedPoint<F>> for Point3<F> {
    type Output = Self;

    fn mul(self, rhs: FixedPoint<F>) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<const F: u32> Neg for Point3<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A rotation about one axis with its sine and cosine evaluated once.
///
/// Rotating many points by the same angle (every vertex of a shape, every
/// shape of a scene) should build one `Rotation` and apply it repeatedly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation<const F: u32> {
    axis: Axis,
    sin: FixedPoint<F>,
    cos: FixedPoint<F>,
}

impl<const F: u32> Rotation<F> {
    pub fn new(axis: Axis, angle: FixedPoint<F>) -> Self {
        let angle = angle.wrap_angle();
        Self {
            axis,
            sin: angle.sin(),
            cos: angle.cos(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn sin(&self) -> FixedPoint<F> {
        self.sin
    }

    pub fn cos(&self) -> FixedPoint<F> {
        self.cos
    }

    /// Only the two coordinates orthogonal to the axis change.
    pub fn apply(&self, p: &mut Point3<F>) {
        let (s, c) = (self.sin, self.cos);
        match self.axis {
            Axis::X => {
                let (y, z) = (p.y, p.z);
                p.y = y * c - z * s;
                p.z = y * s + z * c;
            }
            Axis::Y => {
                let (x, z) = (p.x, p.z);
                p.x = x * c + z * s;
                p.z = z * c - x * s;
            }
            Axis::Z => {
                let (x, y) = (p.x, p.y);
                p.x = x * c - y * s;
                p.y = x * s + y * c;
            }
        }
    }
}
