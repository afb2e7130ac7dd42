use super::*;
use approx::assert_relative_eq;

#[test]
fn test_from_points_empty() {
    assert!(Bounds2::from_points(std::iter::empty()).is_none());
}

#[test]
fn test_single_point_box() {
    let p = Vec2::new(3.0, -1.0);
    let b = Bounds2::from_points([p]).unwrap();
    assert_eq!(b.min, p);
    assert_eq!(b.max, p);
    assert_eq!(b.diagonal_length(), 0.0);
}

#[test]
fn test_measures() {
    let b = Bounds2::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 3.0));
    assert_eq!(b.size(), Vec2::new(4.0, 3.0));
    assert_eq!(b.center(), Vec2::new(2.0, 1.5));
    assert_relative_eq!(b.diagonal_length(), 5.0);
}

#[test]
fn test_contains_is_boundary_inclusive() {
    let b = Bounds2::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 3.0));
    assert!(b.contains(Vec2::new(2.0, 1.0)));
    assert!(b.contains(Vec2::new(4.0, 3.0)));
    assert!(!b.contains(Vec2::new(4.1, 1.0)));
    assert!(!b.contains(Vec2::new(2.0, -0.1)));
}
