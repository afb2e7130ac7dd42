use super::*;

#[test]
fn test_key_welds_rounding_noise() {
    let exact = PointKey::new(Vec2::new(4.0, 2.0), 1e-8);
    let noisy = PointKey::new(Vec2::new(4.0, 2.0 - 4.0e-16), 1e-8);
    assert_eq!(exact, noisy);
}

#[test]
fn test_key_separates_distinct_points() {
    let a = PointKey::new(Vec2::new(0.0, 0.0), 1e-8);
    let b = PointKey::new(Vec2::new(1e-6, 0.0), 1e-8);
    assert_ne!(a, b);
}

#[test]
fn test_key_follows_tolerance() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(0.004, 0.0);
    assert_ne!(PointKey::new(a, 1e-8), PointKey::new(b, 1e-8));
    assert_eq!(PointKey::new(a, 0.01), PointKey::new(b, 0.01));
}

#[test]
fn test_key_negative_coordinates() {
    let a = PointKey::new(Vec2::new(-3.5, -0.25), 1e-8);
    let b = PointKey::new(Vec2::new(-3.5, -0.25), 1e-8);
    assert_eq!(a, b);
    assert_ne!(a, PointKey::new(Vec2::new(3.5, 0.25), 1e-8));
}
