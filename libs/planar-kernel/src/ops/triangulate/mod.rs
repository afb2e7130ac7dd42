//! # Triangulation
//!
//! Ear clipping for simple polygons.
//!
//! ## Algorithm
//!
//! ```text
//! while ≥ 3 vertices remain and the pass cap is not reached:
//!     scan b over the loop with a = prev(b), c = next(b)
//!     ear: a → b → c does not turn clockwise and no other remaining vertex
//!          lies in the triangle (welded copies of a, b, c excepted)
//!     emit (a, b, c), remove b, start the next pass
//! ```
//!
//! Every pass counts against the cap, including one that finds no ear. When
//! the cap is reached the triangles gathered so far are returned and the
//! result is flagged as not converged.
//!
//! ## Complexity
//!
//! - Time: O(n³) worst case for n vertices
//! - Space: O(n)

use crate::config::KernelConfig;
use crate::core::polygon::Polygon;
use crate::core::predicates::{is_point_in_triangle, orient2d, triangle_area, Orientation};
use crate::core::vec2::{PointKey, Vec2};
use crate::error::{GeometryError, GeometryResult};

/// Output of [`triangulate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    /// Vertex triples, one per triangle, all wound counter-clockwise or
    /// degenerate.
    pub triangles: Polygon,
    /// Ear-clipping passes used.
    pub passes: usize,
    /// False when the pass cap stopped clipping early.
    pub converged: bool,
}

impl Triangulation {
    /// Number of emitted triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Sum of the triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles
            .triangles()
            .map(|[a, b, c]| triangle_area(a, b, c))
            .sum()
    }
}

/// True if no vertex other than `ear` (by index or welded position) lies in
/// the triangle.
fn is_ear(ring: &[Vec2], ear: [usize; 3], cfg: &KernelConfig) -> bool {
    let [a, b, c] = ear.map(|i| ring[i]);
    if orient2d(a, b, c) == Orientation::Clockwise {
        return false;
    }

    let corners = [a, b, c].map(|p| PointKey::new(p, cfg.weld_tolerance));
    ring.iter().enumerate().all(|(i, &p)| {
        ear.contains(&i)
            || corners.contains(&PointKey::new(p, cfg.weld_tolerance))
            || !is_point_in_triangle(p, a, b, c)
    })
}

/// Triangulates `polygon` by ear clipping.
///
/// The input is copied and normalized to counter-clockwise winding first.
///
/// ## Errors
///
/// [`GeometryError::NotEnoughVertices`] for fewer than three vertices.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::{triangulate, KernelConfig, Polygon, Vec2};
///
/// let square = Polygon::new(vec![
///     Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0),
/// ]);
/// let result = triangulate(&square, &KernelConfig::default()).unwrap();
/// assert_eq!(result.triangle_count(), 2);
/// assert!(result.converged);
/// ```
pub fn triangulate(polygon: &Polygon, cfg: &KernelConfig) -> GeometryResult<Triangulation> {
    GeometryError::require_vertices("triangulate", 3, polygon.len())?;

    let mut remaining = polygon.to_counter_clockwise().into_vertices();
    let mut triangles = Polygon::empty();
    let mut passes = 0;
    let mut converged = true;

    while remaining.len() >= 3 {
        if passes >= cfg.max_triangulation_passes {
            log::warn!(
                "triangulation stopped after {passes} passes with {} vertices left",
                remaining.len()
            );
            converged = false;
            break;
        }
        passes += 1;

        let n = remaining.len();
        let ear = (0..n)
            .map(|b| [(b + n - 1) % n, b, (b + 1) % n])
            .find(|&ear| is_ear(&remaining, ear, cfg));

        if let Some([a, b, c]) = ear {
            triangles.push_triangle(remaining[a], remaining[b], remaining[c]);
            remaining.remove(b);
        }
    }

    log::debug!(
        "triangulated {} vertices into {} triangles in {passes} passes",
        polygon.len(),
        triangles.len() / 3
    );
    Ok(Triangulation {
        triangles,
        passes,
        converged,
    })
}

#[cfg(test)]
mod tests;
