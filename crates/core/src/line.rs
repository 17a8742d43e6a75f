//! Line segments between two 3D points.

use std::fmt;

use crate::fixed::FixedPoint;
use crate::point::{Axis, Point3, Rotation};

/// A segment with endpoints `a` and `b`. Plain value, no identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Line<const F: u32> {
    pub a: Point3<F>,
    pub b: Point3<F>,
}

impl<const F: u32> Line<F> {
    pub const fn new(a: Point3<F>, b: Point3<F>) -> Self {
        Self { a, b }
    }

    pub fn rotate_around(&mut self, axis: Axis, angle: FixedPoint<F>) {
        self.apply(&Rotation::new(axis, angle));
    }

    pub fn rotated_around(mut self, axis: Axis, angle: FixedPoint<F>) -> Self {
        self.rotate_around(axis, angle);
        self
    }

    pub fn apply(&mut self, rotation: &Rotation<F>) {
        rotation.apply(&mut self.a);
        rotation.apply(&mut self.b);
    }

    /// Translate both endpoints by `offset`.
    pub fn translated(self, offset: Point3<F>) -> Self {
        Self::new(self.a + offset, self.b + offset)
    }

    /// Scale both endpoints about the origin.
    pub fn scaled(self, factor: FixedPoint<F>) -> Self {
        Self::new(self.a * factor, self.b * factor)
    }
}

impl<const F: u32> fmt::Display for Line<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} - {}>", self.a, self.b)
    }
}

/// Rotate every line in `lines` by the same angle, evaluating sin/cos once.
pub fn rotate_lines<const F: u32>(lines: &mut [Line<F>], axis: Axis, angle: FixedPoint<F>) {
    let rotation = Rotation::new(axis, angle);
    for line in lines {
        line.apply(&rotation);
    }
}
