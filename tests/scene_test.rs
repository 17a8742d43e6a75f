//! Scene assembly and polyhedron validation through the facade

use tui_wireframe::core::fixed::Q32;
use tui_wireframe::core::{shapes, Polyhedron, Point3, Scene, ShapeError};
use tui_wireframe::types::ShapeSet;

#[test]
fn both_shapes_enumerate_twenty_lines_pyramid_first() {
    let scene = shapes::scene_for::<32>(ShapeSet::Both);
    let lines: Vec<_> = scene.lines().collect();
    assert_eq!(lines.len(), 20);
    // Pyramid edges 4..8 all end at the apex.
    for line in &lines[4..8] {
        assert_eq!(line.b, Point3::from_int(0, 0, 1));
    }
    // Cube's first edge follows.
    assert_eq!(lines[8].a, Point3::from_int(1, 1, -1));
    assert_eq!(lines[8].b, Point3::from_int(-1, 1, -1));
}

#[test]
fn invalid_edge_is_reported_with_context() {
    let err = shapes::from_coords::<32>(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]], &[(0, 1), (1, 5)])
        .unwrap_err();
    assert_eq!(
        err,
        ShapeError::IndexOutOfRange {
            edge: 1,
            index: 5,
            vertex_count: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "edge 1 references vertex 5 but the shape has 2 vertices"
    );
}

#[test]
fn removing_a_shape_keeps_the_rest_in_order() {
    let mut scene = shapes::scene_for::<32>(ShapeSet::Both);
    let pyramid = scene.remove(0).expect("pyramid present");
    assert_eq!(pyramid.edge_count(), 8);
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.line_count(), 12);
    assert!(scene.remove(1).is_none());
}

#[test]
fn shapes_built_by_hand_render_like_fixtures() {
    let mut triangle = Polyhedron::<32>::default();
    let a = triangle.push_vertex(Point3::from_int(0, 0, 0));
    let b = triangle.push_vertex(Point3::from_int(1, 0, 0));
    let c = triangle.push_vertex(Point3::from_int(0, 1, 0));
    for edge in [(a, b), (b, c), (c, a)] {
        triangle.push_edge(edge).unwrap();
    }

    let mut scene = Scene::new();
    scene.push(triangle);
    scene.push(shapes::cube());
    scene.rotate_all_z(Q32::from_f64(0.1));
    assert_eq!(scene.line_count(), 15);
    assert_eq!(scene.iter().map(Polyhedron::vertex_count).sum::<usize>(), 11);
}
