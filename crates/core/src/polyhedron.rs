//! Indexed polyhedron: a vertex arena plus edges as index pairs.

use std::iter::FusedIterator;
use std::slice;

use crate::error::ShapeError;
use crate::fixed::FixedPoint;
use crate::line::Line;
use crate::point::{Axis, Point3, Rotation};

/// Two positions in a polyhedron's vertex buffer.
pub type Edge = (usize, usize);

/// A wireframe shape.
///
/// Vertices are stored once; edges refer to them by index. Rotation touches
/// each vertex exactly once regardless of how many edges share it, and every
/// [`Line`] produced by [`Polyhedron::lines`] reads the current vertex state.
///
/// Every edge index is `< vertex_count`. Constructors and [`push_edge`]
/// enforce this, so resolving an edge never goes out of bounds.
///
/// [`push_edge`]: Polyhedron::push_edge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polyhedron<const F: u32> {
    vertices: Vec<Point3<F>>,
    edges: Vec<Edge>,
}

impl<const F: u32> Polyhedron<F> {
    pub fn new(vertices: Vec<Point3<F>>, edges: Vec<Edge>) -> Result<Self, ShapeError> {
        let vertex_count = vertices.len();
        for (i, &edge) in edges.iter().enumerate() {
            check_edge(i, edge, vertex_count)?;
        }
        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Point3<F>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, vertex: Point3<F>) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn push_edge(&mut self, edge: Edge) -> Result<(), ShapeError> {
        check_edge(self.edges.len(), edge, self.vertices.len())?;
        self.edges.push(edge);
        Ok(())
    }

    pub fn rotate_around(&mut self, axis: Axis, angle: FixedPoint<F>) {
        self.apply(&Rotation::new(axis, angle));
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

    /// Apply a precomputed rotation to every vertex.
    pub fn apply(&mut self, rotation: &Rotation<F>) {
        for vertex in &mut self.vertices {
            rotation.apply(vertex);
        }
    }

    /// The segment for edge `index`, if it exists.
    pub fn line(&self, index: usize) -> Option<Line<F>> {
        self.edges
            .get(index)
            .map(|&(a, b)| Line::new(self.vertices[a], self.vertices[b]))
    }

    /// Lazily resolve every edge against the current vertices.
    ///
    /// Each call starts a fresh pass.
    pub fn lines(&self) -> Lines<'_, F> {
        Lines {
            vertices: &self.vertices,
            edges: self.edges.iter(),
        }
    }
}

impl<'a, const F: u32> IntoIterator for &'a Polyhedron<F> {
    type Item = Line<F>;
    type IntoIter = Lines<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

fn check_edge(edge_index: usize, (a, b): Edge, vertex_count: usize) -> Result<(), ShapeError> {
    for index in [a, b] {
        if index >= vertex_count {
            return Err(ShapeError::IndexOutOfRange {
                edge: edge_index,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Iterator over the lines of a [`Polyhedron`].
#[derive(Debug, Clone)]
pub struct Lines<'a, const F: u32> {
    vertices: &'a [Point3<F>],
    edges: slice::Iter<'a, Edge>,
}

impl<const F: u32> Iterator for Lines<'_, F> {
    type Item = Line<F>;

    fn next(&mut self) -> Option<Self::Item> {
        let &(a, b) = self.edges.next()?;
        Some(Line::new(self.vertices[a], self.vertices[b]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<const F: u32> ExactSizeIterator for Lines<'_, F> {}

impl<const F: u32> FusedIterator for Lines<'_, F> {}

#[cfg(test)]
mod tests {
    use super::*;

    type P = Point3<32>;
    type Q = FixedPoint<32>;

    fn triangle() -> Polyhedron<32> {
        Polyhedron::new(
            vec![P::from_int(1, 0, 0), P::from_int(0, 1, 0), P::from_int(0, 0, 1)],
            vec![(0, 1), (1, 2), (2, 0)],
        )
        .unwrap()
    }

    #[test]
    fn rejects_out_of_range_edges() {
        let err = Polyhedron::<32>::new(vec![P::ORIGIN, P::ORIGIN], vec![(0, 1), (1, 2)]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::IndexOutOfRange {
                edge: 1,
                index: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn push_edge_validates_against_current_vertices() {
        let mut shape = Polyhedron::<32>::default();
        assert!(shape.push_edge((0, 0)).is_err());
        let a = shape.push_vertex(P::ORIGIN);
        let b = shape.push_vertex(P::from_int(1, 1, 1));
        assert_eq!((a, b), (0, 1));
        shape.push_edge((a, b)).unwrap();
        assert_eq!(shape.edge_count(), 1);
        assert_eq!(shape.line(0), Some(Line::new(P::ORIGIN, P::from_int(1, 1, 1))));
        assert_eq!(shape.line(1), None);
    }

    #[test]
    fn lines_resolve_indices_in_edge_order() {
        let shape = triangle();
        let lines: Vec<_> = shape.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Line::new(P::from_int(1, 0, 0), P::from_int(0, 1, 0)));
        assert_eq!(lines[2], Line::new(P::from_int(0, 0, 1), P::from_int(1, 0, 0)));
        assert_eq!(shape.lines().len(), 3);
    }

    #[test]
    fn lines_are_restartable() {
        let shape = triangle();
        let first: Vec<_> = shape.lines().collect();
        let second: Vec<_> = (&shape).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn lines_reflect_rotation_after_construction() {
        let mut shape = triangle();
        let angle = Q::from_f64(0.5);
        shape.rotate_around_z(angle);

        let expected_a = P::from_int(1, 0, 0).rotated_around_z(angle);
        let line = shape.lines().next().unwrap();
        assert_eq!(line.a, expected_a);
        // Vertex 0 is shared by edges 0 and 2 and must agree in both.
        assert_eq!(shape.lines().nth(2).unwrap().b, expected_a);
    }

    #[test]
    fn rotation_visits_each_vertex_once() {
        // Many edges sharing one vertex must not rotate it more than once.
        let mut shape = Polyhedron::<32>::new(
            vec![P::from_int(1, 0, 0), P::from_int(0, 1, 0)],
            vec![(0, 1), (0, 1), (1, 0), (0, 0)],
        )
        .unwrap();
        let angle = Q::from_f64(0.25);
        shape.rotate_around_x(angle);
        shape.rotate_around_y(angle);
        let expected = P::from_int(1, 0, 0)
            .rotated_around_x(angle)
            .rotated_around_y(angle);
        assert_eq!(shape.vertices()[0], expected);
    }
}
