//! 2D point definitions for the geometry kernel.
//!
//! Provides the type alias for `glam::DVec2` and `PointKey`, the quantized
//! identity used wherever two computed points must be recognized as the same
//! vertex.

pub use glam::DVec2 as Vec2;

/// Grid cell of a point, used as a hash key for vertex identity.
///
/// Coordinates are divided by the weld tolerance and rounded, so points that
/// fall in the same cell compare equal. Intersection points that different
/// edge pairs compute for the same crossing differ by a few ulps and land in
/// the same cell.
///
/// # Examples
/// ```
/// use planar_kernel::core::vec2::{PointKey, Vec2};
///
/// let a = PointKey::new(Vec2::new(2.0, 2.0), 1e-8);
/// let b = PointKey::new(Vec2::new(2.0000000000000004, 2.0), 1e-8);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: i64,
    y: i64,
}

impl PointKey {
    /// Quantizes `point` onto a grid with pitch `tolerance`.
    ///
    /// Coordinates outside the `i64` range saturate.
    #[inline]
    pub fn new(point: Vec2, tolerance: f64) -> Self {
        Self {
            x: (point.x / tolerance).round() as i64,
            y: (point.y / tolerance).round() as i64,
        }
    }
}

#[cfg(test)]
mod tests;
