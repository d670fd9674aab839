// Host-side tests for polygon geometry.
// The main crate is wasm-only, so these exercise polygon-core directly.

use polygon_core::{build_regular_polygon, fan_indices, POLYGON_RADIUS, POLYGON_SIDES};

#[test]
fn pentagon_has_five_points_on_the_circle() {
    for r in [0.5_f32, 1.0, 2.75] {
        let verts = build_regular_polygon(5, r).unwrap();
        assert_eq!(verts.len(), 5);
        for v in &verts {
            let p = v.position();
            assert!((p.length() - r).abs() < 1e-5);
            assert_eq!(p.z, 0.0);
        }
    }
}

#[test]
fn first_vertex_is_at_twelve_o_clock() {
    let verts = build_regular_polygon(5, 2.0).unwrap();
    let first = verts[0].position();
    assert!(first.x.abs() < 1e-6);
    assert!((first.y - 2.0).abs() < 1e-6);
    assert_eq!(first.z, 0.0);
}

#[test]
fn vertices_are_equally_spaced() {
    let verts = build_regular_polygon(5, 1.0).unwrap();
    let edge = |i: usize| (verts[(i + 1) % 5].position() - verts[i].position()).length();
    let first = edge(0);
    for i in 1..5 {
        assert!((edge(i) - first).abs() < 1e-5);
    }
}

#[test]
fn second_vertex_follows_counter_clockwise() {
    // CCW from the top moves toward -X.
    let verts = build_regular_polygon(5, 1.0).unwrap();
    assert!(verts[1].position().x < 0.0);
}

#[test]
fn default_polygon_is_a_pentagon() {
    let verts = build_regular_polygon(POLYGON_SIDES, POLYGON_RADIUS).unwrap();
    assert_eq!(verts.len(), 5);
}

#[test]
fn fan_covers_every_vertex_from_the_apex() {
    let verts = build_regular_polygon(5, 1.0).unwrap();
    let indices = fan_indices(verts.len()).unwrap();
    assert_eq!(indices.len(), 3 * (verts.len() - 2));
    for tri in indices.chunks(3) {
        assert_eq!(tri[0], 0);
        assert_eq!(tri[2], tri[1] + 1);
    }
    for i in 0..verts.len() as u16 {
        assert!(indices.contains(&i));
    }
}

#[test]
fn fan_triangles_keep_polygon_winding() {
    let verts = build_regular_polygon(5, 1.0).unwrap();
    for tri in fan_indices(verts.len()).unwrap().chunks(3) {
        let a = verts[tri[0] as usize].position();
        let b = verts[tri[1] as usize].position();
        let c = verts[tri[2] as usize].position();
        assert!((b - a).cross(c - a).z > 0.0);
    }
}
