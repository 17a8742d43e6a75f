//! Geometry core - points, lines and indexed polyhedra on fixed-point numbers
//!
//! Everything in this crate is pure and deterministic: no terminal, no I/O,
//! no floating point in the hot path.
//!
//! # Module Structure
//!
//! - [`point`]: [`Point3`], [`Axis`] and the precomputed [`Rotation`]
//! - [`line`]: [`Line`] segments and batch rotation
//! - [`polyhedron`]: vertex arena plus edge index pairs
//! - [`scene`]: ordered collection of polyhedra rotated together
//! - [`shapes`]: the cube and square pyramid fixtures
//!
//! # Indexed edges
//!
//! A [`Polyhedron`] stores each vertex once and each edge as a pair of indices
//! into that vertex buffer. Rotating the shape rotates the vertex buffer once;
//! the lines produced afterwards read the rotated vertices, so no edge ever
//! holds a stale copy of an endpoint.
//!
//! # Example
//!
//! ```
//! use tui_wireframe_core::{shapes, Axis, Scene};
//! use tui_wireframe_core::fixed::Q32;
//!
//! let mut scene: Scene<32> = Scene::new();
//! scene.push(shapes::cube());
//! scene.push(shapes::pyramid());
//!
//! scene.rotate_all(Axis::Y, Q32::from_f64(0.03));
//! assert_eq!(scene.lines().count(), 12 + 8);
//! ```

pub mod error;
pub mod line;
pub mod point;
pub mod polyhedron;
pub mod scene;
pub mod shapes;

pub use tui_wireframe_fixed as fixed;
pub use tui_wireframe_types as types;

pub use error::ShapeError;
pub use line::{rotate_lines, Line};
pub use point::{Axis, Point3, Rotation};
pub use polyhedron::{Edge, Lines, Polyhedron};
pub use scene::Scene;
