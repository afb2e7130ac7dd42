use super::*;
use crate::core::polygon::Winding;
use approx::assert_relative_eq;
use std::f64::consts::TAU;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

fn pentagon() -> Polygon {
    (0..5)
        .map(|i| {
            let t = TAU * i as f64 / 5.0;
            v(t.cos(), t.sin())
        })
        .collect()
}

fn l_shape() -> Polygon {
    Polygon::new(vec![
        v(0.0, 0.0),
        v(4.0, 0.0),
        v(4.0, 2.0),
        v(2.0, 2.0),
        v(2.0, 4.0),
        v(0.0, 4.0),
    ])
}

#[test]
fn test_convex_pentagon() {
    let cfg = KernelConfig::default();
    let poly = pentagon();
    let result = triangulate(&poly, &cfg).unwrap();

    assert_eq!(result.triangle_count(), 3);
    assert_eq!(result.passes, 3);
    assert!(result.converged);
    assert_relative_eq!(result.area(), poly.area(), epsilon = 1e-12);
}

#[test]
fn test_concave_area_conserved() {
    let cfg = KernelConfig::default();
    let result = triangulate(&l_shape(), &cfg).unwrap();

    assert_eq!(result.triangle_count(), 4);
    assert!(result.converged);
    assert_relative_eq!(result.area(), 12.0, epsilon = 1e-12);
}

#[test]
fn test_concave_skips_reflex_ear() {
    let cfg = KernelConfig::default();
    let result = triangulate(&l_shape(), &cfg).unwrap();

    // The first corner's triangle would contain the reflex vertex (2, 2)
    let first = result.triangles.triangles().next().unwrap();
    assert_eq!(first, [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 2.0)]);
}

#[test]
fn test_triangles_are_counter_clockwise() {
    let cfg = KernelConfig::default();
    let mut poly = l_shape();
    poly.reverse();

    let result = triangulate(&poly, &cfg).unwrap();
    assert_relative_eq!(result.area(), 12.0, epsilon = 1e-12);
    for tri in result.triangles.triangles() {
        assert_eq!(
            Polygon::new(tri.to_vec()).winding(),
            Winding::CounterClockwise
        );
    }
}

#[test]
fn test_pass_cap_reports_non_convergence() {
    let _ = env_logger::builder().is_test(true).try_init();
    let cfg = KernelConfig::default()
        .with_max_triangulation_passes(1)
        .unwrap();

    let result = triangulate(&pentagon(), &cfg).unwrap();
    assert_eq!(result.triangle_count(), 1);
    assert_eq!(result.passes, 1);
    assert!(!result.converged);
}

#[test]
fn test_collinear_triple_yields_flat_triangle() {
    let cfg = KernelConfig::default();
    let flat = Polygon::new(vec![v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)]);

    let result = triangulate(&flat, &cfg).unwrap();
    assert_eq!(result.triangle_count(), 1);
    assert_eq!(result.area(), 0.0);
    assert!(result.converged);
}

#[test]
fn test_too_few_vertices() {
    let cfg = KernelConfig::default();
    let err = triangulate(&Polygon::new(vec![v(0.0, 0.0), v(1.0, 1.0)]), &cfg).unwrap_err();
    assert_eq!(
        err,
        GeometryError::NotEnoughVertices {
            operation: "triangulate",
            required: 3,
            actual: 2,
        }
    );
}
