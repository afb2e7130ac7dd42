//! # Geometry Predicates
//!
//! Stateless numeric building blocks shared by every polygon algorithm.
//!
//! ## Contents
//!
//! - **Sidedness**: `edge_sign`, `orient2d`, `is_point_in_triangle`
//! - **Intersection**: `segment_intersect`, `line_intersection`
//! - **Pair search**: `closest_pair`, `farthest_pair`
//! - **Measures**: `signed_angle`, `signed_area`, `triangle_area`
//!
//! Segment intersection is exact: a determinant of exactly zero
//! means parallel, anything else is solved. Vertex identity tolerance is
//! applied by callers through `PointKey`, never here.

use robust::{orient2d as robust_orient2d, Coord};

use crate::core::vec2::Vec2;

// =============================================================================
// SIDEDNESS
// =============================================================================

/// Signed area term telling which side of the line `v2 → v1` point `p` is on.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::core::predicates::edge_sign;
/// use planar_kernel::Vec2;
///
/// let s = edge_sign(Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0));
/// assert!(s < 0.0);
/// ```
#[inline]
pub fn edge_sign(p: Vec2, v1: Vec2, v2: Vec2) -> f64 {
    (p.x - v2.x) * (v1.y - v2.y) - (v1.x - v2.x) * (p.y - v2.y)
}

/// Boundary-inclusive point-in-triangle test, independent of triangle winding.
///
/// True when the three edge signs are not mixed.
pub fn is_point_in_triangle(p: Vec2, v1: Vec2, v2: Vec2, v3: Vec2) -> bool {
    let d1 = edge_sign(p, v1, v2);
    let d2 = edge_sign(p, v2, v3);
    let d3 = edge_sign(p, v3, v1);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn.
    CounterClockwise,
    /// Right turn.
    Clockwise,
    /// The three points are on one line.
    Collinear,
}

/// Orientation of `c` relative to the directed line `a → b`.
///
/// Uses Shewchuk's adaptive-precision predicate, so near-collinear triples
/// are classified correctly.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::core::predicates::{orient2d, Orientation};
/// use planar_kernel::Vec2;
///
/// let o = orient2d(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0));
/// assert_eq!(o, Orientation::CounterClockwise);
/// ```
#[inline]
pub fn orient2d(a: Vec2, b: Vec2, c: Vec2) -> Orientation {
    let det = robust_orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    );

    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

// =============================================================================
// INTERSECTION
// =============================================================================

/// Solves for the parameter of the crossing along `b1 → b2`.
///
/// `None` when the lines are parallel (determinant exactly zero).
#[inline]
fn crossing_parameter(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<f64> {
    let det = (b2.x - b1.x) * (a2.y - a1.y) - (b2.y - b1.y) * (a2.x - a1.x);
    if det == 0.0 {
        return None;
    }
    Some(((a1.x - b1.x) * (a2.y - a1.y) - (a1.y - b1.y) * (a2.x - a1.x)) / det)
}

/// Intersection of the infinite lines through `a1, a2` and `b1, b2`.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::core::predicates::line_intersection;
/// use planar_kernel::Vec2;
///
/// let p = line_intersection(
///     Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0),
///     Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0),
/// );
/// assert_eq!(p, Some(Vec2::new(5.0, 0.0)));
/// ```
pub fn line_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let mu = crossing_parameter(a1, a2, b1, b2)?;
    Some(b1 + (b2 - b1) * mu)
}

/// Intersection point of the finite segments `a1 → a2` and `b1 → b2`.
///
/// The candidate from the line solve is accepted only if it passes both the
/// direction check (non-negative dot product along each segment) and the
/// length check (no farther from each start than that segment's length).
/// Endpoints count as intersections.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::core::predicates::segment_intersect;
/// use planar_kernel::Vec2;
///
/// let hit = segment_intersect(
///     Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0),
///     Vec2::new(0.0, 2.0), Vec2::new(2.0, 0.0),
/// );
/// assert_eq!(hit, Some(Vec2::new(1.0, 1.0)));
/// ```
pub fn segment_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let point = line_intersection(a1, a2, b1, b2)?;

    let directional = (a2 - a1).dot(point - a1) >= 0.0 && (b2 - b1).dot(point - b1) >= 0.0;
    let within_length =
        a1.distance(a2) >= a1.distance(point) && b1.distance(b2) >= b1.distance(point);

    (directional && within_length).then_some(point)
}

// =============================================================================
// PAIR SEARCH
// =============================================================================

/// Scans every pair and keeps the first one for which `better` holds against
/// the best distance so far.
fn scan_pairs(
    from: &[Vec2],
    to: &[Vec2],
    better: impl Fn(f64, f64) -> bool,
) -> Option<(usize, usize)> {
    let first = from.first()?.distance(*to.first()?);

    let mut best = (0, 0);
    let mut best_distance = first;
    for (i, a) in from.iter().enumerate() {
        for (j, b) in to.iter().enumerate() {
            let distance = a.distance(*b);
            if better(distance, best_distance) {
                best = (i, j);
                best_distance = distance;
            }
        }
    }
    Some(best)
}

/// Indices `(i, j)` of the closest pair between `from[i]` and `to[j]`.
///
/// Brute force; ties go to the first pair in row-major scan order. `None` if
/// either set is empty.
pub fn closest_pair(from: &[Vec2], to: &[Vec2]) -> Option<(usize, usize)> {
    scan_pairs(from, to, |distance, best| distance < best)
}

/// Indices `(i, j)` of the farthest pair between `from[i]` and `to[j]`.
///
/// Same scan and tie rule as [`closest_pair`].
pub fn farthest_pair(from: &[Vec2], to: &[Vec2]) -> Option<(usize, usize)> {
    scan_pairs(from, to, |distance, best| distance > best)
}

// =============================================================================
// MEASURES
// =============================================================================

/// Signed angle in radians that rotates `from` onto `to`, in `[-π, π]`.
///
/// Counter-clockwise is positive. A zero cross product counts as positive, so
/// a full reversal yields `+π`. Returns `0.0` if either vector has no length.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::core::predicates::signed_angle;
/// use planar_kernel::Vec2;
///
/// let left = signed_angle(Vec2::X, Vec2::Y);
/// assert!((left - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn signed_angle(from: Vec2, to: Vec2) -> f64 {
    let lengths = from.length() * to.length();
    if lengths == 0.0 {
        return 0.0;
    }

    let unsigned = (from.dot(to) / lengths).clamp(-1.0, 1.0).acos();
    if from.perp_dot(to) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Shoelace signed area; positive for counter-clockwise loops.
pub fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice / 2.0
}

/// Unsigned area of triangle `a, b, c`.
#[inline]
pub fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    ((b - a).perp_dot(c - a) / 2.0).abs()
}
