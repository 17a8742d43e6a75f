use std::fmt;

/// Invalid polyhedron structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// An edge references a vertex that does not exist.
    IndexOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::IndexOutOfRange {
                edge,
                index,
                vertex_count,
            } => write!(
                f,
                "edge {edge} references vertex {index} but the shape has {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}
