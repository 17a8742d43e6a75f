//! Ordered collection of polyhedra rotated as one.

use crate::fixed::FixedPoint;
use crate::line::Line;
use crate::point::{Axis, Rotation};
use crate::polyhedron::Polyhedron;

/// Shapes in insertion order.
///
/// The scene owns its polyhedra. Line enumeration visits shapes in the order
/// they were pushed, and each shape's edges in their stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene<const F: u32> {
    shapes: Vec<Polyhedron<F>>,
}

impl<const F: u32> Scene<F> {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add a shape and return its position.
    pub fn push(&mut self, shape: Polyhedron<F>) -> usize {
        self.shapes.push(shape);
        let index = self.shapes.len() - 1;
        tracing::debug!(
            index,
            vertices = self.shapes[index].vertex_count(),
            edges = self.shapes[index].edge_count(),
            "shape added"
        );
        index
    }

    /// Remove the shape at `index`, shifting later shapes down.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Polyhedron<F>> {
        if index >= self.shapes.len() {
            tracing::debug!(index, len = self.shapes.len(), "remove ignored: no such shape");
            return None;
        }
        let shape = self.shapes.remove(index);
        tracing::debug!(index, remaining = self.shapes.len(), "shape removed");
        Some(shape)
    }

    pub fn get(&self, index: usize) -> Option<&Polyhedron<F>> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Polyhedron<F>> {
        self.shapes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polyhedron<F>> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Polyhedron<F>> {
        self.shapes.iter_mut()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Rotate every shape about `axis`. Sine and cosine are evaluated once.
    pub fn rotate_all(&mut self, axis: Axis, angle: FixedPoint<F>) {
        let rotation = Rotation::new(axis, angle);
        for shape in &mut self.shapes {
            shape.apply(&rotation);
        }
    }

    pub fn rotate_all_x(&mut self, angle: FixedPoint<F>) {
        self.rotate_all(Axis::X, angle);
    }

    pub fn rotate_all_y(&mut self, angle: FixedPoint<F>) {
        self.rotate_all(Axis::Y, angle);
    }

    pub fn rotate_all_z(&mut self, angle: FixedPoint<F>) {
        self.rotate_all(Axis::Z, angle);
    }

    /// Every line of every shape, shape by shape.
    pub fn lines(&self) -> impl Iterator<Item = Line<F>> + '_ {
        self.shapes.iter().flat_map(Polyhedron::lines)
    }

    pub fn line_count(&self) -> usize {
        self.shapes.iter().map(Polyhedron::edge_count).sum()
    }
}

impl<const F: u32> FromIterator<Polyhedron<F>> for Scene<F> {
    fn from_iter<I: IntoIterator<Item = Polyhedron<F>>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl<'a, const F: u32> IntoIterator for &'a Scene<F> {
    type Item = &'a Polyhedron<F>;
    type IntoIter = std::slice::Iter<'a, Polyhedron<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3;
    use crate::shapes;

    type Q = FixedPoint<32>;

    fn segment(x: i64) -> Polyhedron<32> {
        Polyhedron::new(
            vec![Point3::from_int(x, 0, 0), Point3::from_int(x, 1, 0)],
            vec![(0, 1)],
        )
        .unwrap()
    }

    #[test]
    fn push_returns_positions_in_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.push(segment(0)), 0);
        assert_eq!(scene.push(segment(1)), 1);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(1), Some(&segment(1)));
        assert!(scene.get(2).is_none());
    }

    #[test]
    fn lines_follow_insertion_order() {
        let scene: Scene<32> = [segment(3), segment(7)].into_iter().collect();
        let xs: Vec<i64> = scene.lines().map(|l| l.a.x.to_int()).collect();
        assert_eq!(xs, vec![3, 7]);
        assert_eq!(scene.line_count(), 2);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut scene = Scene::new();
        scene.push(segment(0));
        scene.push(segment(1));
        assert!(scene.remove(5).is_none());
        assert_eq!(scene.remove(0), Some(segment(0)));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(0), Some(&segment(1)));
    }

    #[test]
    fn rotate_all_matches_rotating_each_shape() {
        let mut scene = Scene::new();
        scene.push(shapes::pyramid());
        scene.push(shapes::cube());
        let angle = Q::from_f64(0.03);
        scene.rotate_all_x(angle);
        scene.rotate_all_y(angle);
        scene.rotate_all_z(angle);

        let mut cube = shapes::cube::<32>();
        cube.rotate_around_x(angle);
        cube.rotate_around_y(angle);
        cube.rotate_around_z(angle);
        assert_eq!(scene.get(1), Some(&cube));
    }

    #[test]
    fn get_mut_and_clear() {
        let mut scene = Scene::new();
        scene.push(segment(0));
        if let Some(shape) = scene.get_mut(0) {
            shape.rotate_around_z(Q::HALF_PI);
        }
        assert_ne!(scene.get(0), Some(&segment(0)));
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.lines().count(), 0);
    }
}
