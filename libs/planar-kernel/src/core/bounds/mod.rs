//! Axis-aligned bounding box used by polygon containment queries.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;

/// A 2D axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    /// Smallest x and y.
    pub min: Vec2,
    /// Largest x and y.
    pub max: Vec2,
}

impl Bounds2 {
    /// Creates a box from its corners without validating `min <= max`.
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point; `None` for an empty iterator.
    ///
    /// # Examples
    /// ```
    /// use planar_kernel::core::bounds::Bounds2;
    /// use planar_kernel::Vec2;
    ///
    /// let b = Bounds2::from_points([Vec2::new(1.0, 5.0), Vec2::new(-2.0, 3.0)]).unwrap();
    /// assert_eq!(b.min, Vec2::new(-2.0, 3.0));
    /// assert_eq!(b.max, Vec2::new(1.0, 5.0));
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| {
            Self::new(b.min.min(p), b.max.max(p))
        }))
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Midpoint of the box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Length of the diagonal; any point offset from inside the box by this
    /// distance lies outside it.
    #[inline]
    pub fn diagonal_length(&self) -> f64 {
        self.size().length()
    }

    /// Boundary-inclusive containment.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests;
