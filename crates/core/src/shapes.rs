//! Built-in wireframes: a 2×2×2 cube and a square pyramid, both centered on
//! the origin.

use crate::error::ShapeError;
use crate::point::Point3;
use crate::polyhedron::{Edge, Polyhedron};
use crate::scene::Scene;
use crate::types::ShapeSet;

const CUBE_VERTICES: [[i64; 3]; 8] = [
    [1, 1, -1],
    [-1, 1, -1],
    [-1, -1, -1],
    [1, -1, -1],
    [1, 1, 1],
    [-1, 1, 1],
    [-1, -1, 1],
    [1, -1, 1],
];

const CUBE_EDGES: [Edge; 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

const PYRAMID_VERTICES: [[i64; 3]; 5] = [
    [1, 1, -1],
    [-1, 1, -1],
    [-1, -1, -1],
    [1, -1, -1],
    [0, 0, 1],
];

const PYRAMID_EDGES: [Edge; 8] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (0, 4),
    (1, 4),
    (2, 4),
    (3, 4),
];

/// Cube with corners at (±1, ±1, ±1): 8 vertices, 12 edges.
pub fn cube<const F: u32>() -> Polyhedron<F> {
    from_int_table(&CUBE_VERTICES, &CUBE_EDGES)
}

/// Square base at z = -1 with its apex at (0, 0, 1): 5 vertices, 8 edges.
pub fn pyramid<const F: u32>() -> Polyhedron<F> {
    from_int_table(&PYRAMID_VERTICES, &PYRAMID_EDGES)
}

/// Build a polyhedron from floating-point coordinates.
pub fn from_coords<const F: u32>(
    coords: &[[f64; 3]],
    edges: &[Edge],
) -> Result<Polyhedron<F>, ShapeError> {
    let vertices = coords
        .iter()
        .map(|&[x, y, z]| Point3::from_f64(x, y, z))
        .collect();
    Polyhedron::new(vertices, edges.to_vec())
}

/// The starting scene for a shape selection. With both shapes, the pyramid
/// is drawn first and the cube second.
pub fn scene_for<const F: u32>(set: ShapeSet) -> Scene<F> {
    let mut scene = Scene::new();
    match set {
        ShapeSet::Cube => {
            scene.push(cube());
        }
        ShapeSet::Pyramid => {
            scene.push(pyramid());
        }
        ShapeSet::Both => {
            scene.push(pyramid());
            scene.push(cube());
        }
    }
    scene
}

fn from_int_table<const F: u32>(vertices: &[[i64; 3]], edges: &[Edge]) -> Polyhedron<F> {
    let vertices = vertices
        .iter()
        .map(|&[x, y, z]| Point3::from_int(x, y, z))
        .collect();
    Polyhedron::new(vertices, edges.to_vec()).expect("built-in shape table has an invalid edge")
}
