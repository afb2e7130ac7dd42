//! # Hole Bridging
//!
//! Merges a hole into its enclosing loop by a zero-width bridge between the
//! closest pair of vertices, producing one simple loop that downstream code
//! (triangulation, containment) can treat like any other polygon.

use crate::core::polygon::Polygon;
use crate::core::predicates::closest_pair;
use crate::error::{GeometryError, GeometryResult};

/// Bridges `hole` into `outer`.
///
/// Both loops are normalized to counter-clockwise first, so the hole is
/// traversed clockwise inside the result. With `(h, o)` the closest vertex
/// pair, the sequence `hole[h], hole[h-1], …, hole[h+1], hole[h], outer[o]`
/// is inserted after `outer[o]`. The result has `|outer| + |hole| + 2`
/// vertices.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::{cut_hole, KernelConfig, Polygon, Vec2};
///
/// let outer = Polygon::new(vec![
///     Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0),
///     Vec2::new(4.0, 4.0), Vec2::new(0.0, 4.0),
/// ]);
/// let hole = Polygon::new(vec![
///     Vec2::new(1.0, 1.0), Vec2::new(1.0, 3.0),
///     Vec2::new(3.0, 3.0), Vec2::new(3.0, 1.0),
/// ]);
/// let cfg = KernelConfig::default();
/// let bridged = cut_hole(&hole, &outer).unwrap();
/// assert_eq!(bridged.len(), 10);
/// assert!(!bridged.point_is_inside(Vec2::new(2.0, 2.0), &cfg));
/// assert!(bridged.point_is_inside(Vec2::new(0.5, 0.5), &cfg));
/// ```
pub fn cut_hole(hole: &Polygon, outer: &Polygon) -> GeometryResult<Polygon> {
    GeometryError::require_vertices("cut_hole", 1, hole.len())?;
    GeometryError::require_vertices("cut_hole", 1, outer.len())?;

    let hole = hole.to_counter_clockwise();
    let outer = outer.to_counter_clockwise();
    let (hole, outer) = (hole.vertices(), outer.vertices());

    let Some((h, o)) = closest_pair(hole, outer) else {
        return Ok(Polygon::new(outer.to_vec()));
    };

    let n = hole.len();
    let mut vertices = Vec::with_capacity(outer.len() + n + 2);
    vertices.extend_from_slice(&outer[..=o]);
    vertices.extend((0..n).map(|i| hole[(h + n - i) % n]));
    vertices.push(hole[h]);
    vertices.push(outer[o]);
    vertices.extend_from_slice(&outer[o + 1..]);

    log::debug!(
        "cut_hole: bridged hole vertex {h} to outer vertex {o}, {} vertices",
        vertices.len()
    );
    Ok(Polygon::new(vertices))
}
