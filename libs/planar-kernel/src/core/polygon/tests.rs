use super::*;
use approx::assert_relative_eq;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

fn square(size: f64) -> Polygon {
    Polygon::new(vec![
        v(0.0, 0.0),
        v(size, 0.0),
        v(size, size),
        v(0.0, size),
    ])
}

// =============================================================================
// CONSTRUCTION & CACHE
// =============================================================================

#[test]
fn test_validity() {
    assert!(!Polygon::empty().is_valid());
    assert!(!Polygon::new(vec![v(0.0, 0.0), v(1.0, 0.0)]).is_valid());
    assert!(square(1.0).is_valid());
}

#[test]
fn test_bounds_cached_and_invalidated() {
    let mut poly = square(4.0);
    let bounds = poly.bounds().unwrap();
    assert_eq!(bounds.min, v(0.0, 0.0));
    assert_eq!(bounds.max, v(4.0, 4.0));

    poly.push(v(10.0, 2.0));
    assert_eq!(poly.bounds().unwrap().max, v(10.0, 4.0));

    poly.set_vertices(vec![v(-1.0, -1.0), v(1.0, -1.0), v(0.0, 1.0)]);
    assert_eq!(poly.bounds().unwrap().min, v(-1.0, -1.0));
}

#[test]
fn test_empty_has_no_bounds() {
    assert!(Polygon::empty().bounds().is_none());
}

#[test]
fn test_winding_and_area() {
    let ccw = square(4.0);
    assert_eq!(ccw.winding(), Winding::CounterClockwise);
    assert_relative_eq!(ccw.signed_area(), 16.0);

    let mut cw = ccw.clone();
    cw.reverse();
    assert_eq!(cw.winding(), Winding::Clockwise);
    assert_relative_eq!(cw.area(), 16.0);
    assert_eq!(cw.to_counter_clockwise(), ccw);

    let flat = Polygon::new(vec![v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)]);
    assert_eq!(flat.winding(), Winding::Degenerate);
}

#[test]
fn test_tiny_loop_keeps_winding() {
    let mut tiny = square(1e-6);
    tiny.reverse();
    assert_eq!(tiny.winding(), Winding::Clockwise);

    let ccw = tiny.to_counter_clockwise();
    assert_eq!(ccw.winding(), Winding::CounterClockwise);
    assert_eq!(ccw, square(1e-6));
}

#[test]
fn test_triangles_iterator() {
    let mut tris = Polygon::empty();
    tris.push_triangle(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0));
    tris.push_triangle(v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0));
    let collected: Vec<[Vec2; 3]> = tris.triangles().collect();
    assert_eq!(collected.len(), 2);
    assert_eq!(collected[1][1], v(1.0, 1.0));
}

#[test]
fn test_from_iterator() {
    let poly: Polygon = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)].into_iter().collect();
    assert_eq!(poly.len(), 3);
}

// =============================================================================
// SEGMENT CAST
// =============================================================================

#[test]
fn test_segment_cast_through_has_two_hits() {
    let cfg = KernelConfig::default();
    let hits = square(4.0).segment_cast(v(-1.0, 2.0), v(5.0, 2.0), &cfg);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].point, v(0.0, 2.0));
    assert_eq!((hits[0].index_a, hits[0].index_b), (3, 0));
    assert_eq!(hits[1].point, v(4.0, 2.0));
    assert_eq!((hits[1].index_a, hits[1].index_b), (1, 2));
}

#[test]
fn test_segment_cast_half_in_has_one_hit() {
    let cfg = KernelConfig::default();
    let hits = square(4.0).segment_cast(v(2.0, 2.0), v(6.0, 2.0), &cfg);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].point, v(4.0, 2.0));
}

#[test]
fn test_segment_cast_misses() {
    let cfg = KernelConfig::default();
    assert!(square(4.0)
        .segment_cast(v(5.0, 0.0), v(5.0, 4.0), &cfg)
        .is_empty());
}

#[test]
fn test_segment_cast_corner_reported_once() {
    let cfg = KernelConfig::default();
    let hits = square(4.0).segment_cast(v(-1.0, -1.0), v(5.0, 5.0), &cfg);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].point, v(0.0, 0.0));
    // Equal incidence: the first edge found keeps the slot
    assert_eq!(hits[0].index_a, 0);
    assert_eq!(hits[1].point, v(4.0, 4.0));
}

#[test]
fn test_segment_cast_corner_prefers_higher_incidence() {
    let cfg = KernelConfig::default();
    let tri = Polygon::new(vec![v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)]);
    let hits = tri.segment_cast(v(-1.0, -2.0), v(1.0, 2.0), &cfg);

    assert_eq!(hits.len(), 1);
    // The vertical edge is closer to the query direction than the bottom one
    assert_eq!((hits[0].index_a, hits[0].index_b), (2, 0));
    assert_relative_eq!(hits[0].incidence, 2.0 / 5f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_corner_touching_line_does_not_cross() {
    let cfg = KernelConfig::default();
    let tri = Polygon::new(vec![v(6.0, 2.0), v(8.0, 1.0), v(8.0, 3.0)]);
    let (a, b) = (v(6.0, 0.0), v(6.0, 4.0));

    let hits = tri.segment_cast(a, b, &cfg);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].point, v(6.0, 2.0));
    assert!(!tri.crosses(&hits[0], a, b, &cfg));
}

#[test]
fn test_corner_and_edge_hits_cross() {
    let cfg = KernelConfig::default();
    let poly = square(4.0);

    let (a, b) = (v(-1.0, -1.0), v(5.0, 5.0));
    let corner = poly.segment_cast(a, b, &cfg);
    assert!(corner.iter().all(|hit| poly.crosses(hit, a, b, &cfg)));

    let (a, b) = (v(-1.0, 2.0), v(5.0, 2.0));
    let through = poly.segment_cast(a, b, &cfg);
    assert_eq!(through.len(), 2);
    assert!(through.iter().all(|hit| poly.crosses(hit, a, b, &cfg)));
}

#[test]
fn test_segment_cast_degenerate_query() {
    let cfg = KernelConfig::default();
    let hits = square(4.0).segment_cast(v(2.0, 2.0), v(2.0, 2.0), &cfg);
    assert!(hits.is_empty());
}

// =============================================================================
// CONTAINMENT
// =============================================================================

#[test]
fn test_point_is_inside() {
    let cfg = KernelConfig::default();
    let poly = square(4.0);
    assert!(poly.point_is_inside(v(1.0, 3.0), &cfg));
    assert!(poly.point_is_inside(v(0.5, 0.5), &cfg));
    assert!(!poly.point_is_inside(v(-0.5, 2.0), &cfg));
}

#[test]
fn test_outside_bounds_is_outside() {
    let cfg = KernelConfig::default();
    let poly = square(4.0);
    for p in [v(5.0, 3.0), v(-3.0, -3.0), v(2.0, 100.0)] {
        let c = poly.containment(p, &cfg);
        assert!(!c.inside);
        assert!(c.nearest_hit_distance.is_none());
    }
}

#[test]
fn test_center_falls_back_to_x_axis() {
    let cfg = KernelConfig::default();
    let c = square(4.0).containment(v(2.0, 2.0), &cfg);
    assert!(c.inside);
    assert_relative_eq!(c.nearest_hit_distance.unwrap(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_concave_containment() {
    let cfg = KernelConfig::default();
    let l_shape = Polygon::new(vec![
        v(0.0, 0.0),
        v(4.0, 0.0),
        v(4.0, 2.0),
        v(2.0, 2.0),
        v(2.0, 4.0),
        v(0.0, 4.0),
    ]);
    assert!(l_shape.point_is_inside(v(1.0, 3.0), &cfg));
    assert!(l_shape.point_is_inside(v(3.0, 1.0), &cfg));
    assert!(!l_shape.point_is_inside(v(3.0, 3.0), &cfg));
}

#[test]
fn test_empty_polygon_contains_nothing() {
    let cfg = KernelConfig::default();
    assert!(!Polygon::empty().point_is_inside(Vec2::ZERO, &cfg));
}

#[test]
fn test_containment_independent_of_winding() {
    let cfg = KernelConfig::default();
    let mut cw = square(4.0);
    cw.reverse();
    assert!(cw.point_is_inside(v(1.0, 1.5), &cfg));
    assert!(!cw.point_is_inside(v(4.5, 1.5), &cfg));
}

// =============================================================================
// TRAITS
// =============================================================================

#[test]
fn test_serde_round_trip_skips_cache() {
    let poly = square(2.0);
    let _ = poly.bounds();
    let json = serde_json::to_string(&poly).unwrap();
    assert!(json.contains("vertices"));
    assert!(!json.contains("bounds"));

    let back: Polygon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, poly);
    assert_eq!(back.bounds(), poly.bounds());
}

#[test]
fn test_polygon_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Polygon>();
    assert_send_sync::<RaycastHit>();
}
