//! # Polygon
//!
//! Ordered vertex loop with a lazily cached bounding box, plus the two queries
//! every other algorithm is built on.
//!
//! ## Queries
//!
//! - `segment_cast`: all crossings between a finite segment and the polygon's
//!   edges, deduplicated by welded position and sorted by distance
//! - `containment` / `point_is_inside`: even-odd parity of a segment cast from
//!   a point outside the bounds
//!
//! ## Winding
//!
//! The type does not normalize winding. Queries are winding-agnostic; the
//! operations in `ops` normalize to counter-clockwise at their entry points.

use std::collections::HashMap;
use std::sync::OnceLock;

use config::constants::approx_zero;
use serde::{Deserialize, Serialize};

use crate::config::KernelConfig;
use crate::core::bounds::Bounds2;
use crate::core::predicates::{orient2d, segment_intersect, signed_area, Orientation};
use crate::core::vec2::{PointKey, Vec2};

// =============================================================================
// HIT / CONTAINMENT RECORDS
// =============================================================================

/// One crossing between a query segment and a polygon edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaycastHit {
    /// Index of the edge's first vertex.
    pub index_a: usize,
    /// Index of the edge's second vertex, `(index_a + 1) % len`.
    pub index_b: usize,
    /// Crossing position.
    pub point: Vec2,
    /// `|dot|` of the normalized edge and query directions.
    ///
    /// Only a tie-break between edges that report the same crossing, not an
    /// angle.
    pub incidence: f64,
}

/// Outcome of a containment query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Containment {
    /// Odd number of boundary crossings.
    pub inside: bool,
    /// Distance from the query point to the nearest crossing on the probe
    /// segment, if there was one.
    pub nearest_hit_distance: Option<f64>,
}

impl Containment {
    const OUTSIDE: Self = Self {
        inside: false,
        nearest_hit_distance: None,
    };
}

/// Rotational order of a loop, derived from its signed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// No measurable area (fewer than three vertices or collinear).
    Degenerate,
}

// =============================================================================
// POLYGON
// =============================================================================

/// A simple polygon stored as an ordered vertex loop.
///
/// Vertex `i` connects to vertex `(i + 1) % len`. The polygon is valid only
/// with three or more vertices; empty polygons are meaningful results
/// (see `Composition::Covered`).
///
/// ## Example
///
/// ```rust
/// use planar_kernel::{KernelConfig, Polygon, Vec2};
///
/// let square = Polygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(4.0, 0.0),
///     Vec2::new(4.0, 4.0),
///     Vec2::new(0.0, 4.0),
/// ]);
/// let cfg = KernelConfig::default();
/// assert!(square.point_is_inside(Vec2::new(1.0, 3.0), &cfg));
/// assert!(!square.point_is_inside(Vec2::new(5.0, 3.0), &cfg));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    #[serde(skip)]
    bounds: OnceLock<Bounds2>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex loop.
    #[must_use]
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self {
            vertices,
            bounds: OnceLock::new(),
        }
    }

    /// Creates a polygon with no vertices.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The vertex loop.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_vertices(self) -> Vec<Vec2> {
        self.vertices
    }

    /// Vertex count.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when there are no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A loop needs at least three vertices to enclose anything.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Appends a vertex, dropping cached bounds.
    pub fn push(&mut self, vertex: Vec2) {
        self.vertices.push(vertex);
        self.bounds = OnceLock::new();
    }

    /// Appends a triangle's three vertices, dropping cached bounds.
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.extend([a, b, c]);
    }

    /// Appends several vertices, dropping cached bounds.
    pub fn extend<I: IntoIterator<Item = Vec2>>(&mut self, vertices: I) {
        self.vertices.extend(vertices);
        self.bounds = OnceLock::new();
    }

    /// Replaces the whole loop, dropping cached bounds.
    pub fn set_vertices(&mut self, vertices: Vec<Vec2>) {
        self.vertices = vertices;
        self.bounds = OnceLock::new();
    }

    /// Reverses the loop in place (flips winding). The box is unchanged, so
    /// the cache survives.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Bounding box, computed on first use and cached until the next mutation.
    ///
    /// `None` for an empty polygon.
    pub fn bounds(&self) -> Option<Bounds2> {
        if let Some(bounds) = self.bounds.get() {
            return Some(*bounds);
        }
        let bounds = Bounds2::from_points(self.vertices.iter().copied())?;
        Some(*self.bounds.get_or_init(|| bounds))
    }

    /// Shoelace signed area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Enclosed area regardless of winding.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding direction of the loop.
    ///
    /// The area is compared against the squared bounds diagonal, so a tiny
    /// but well-formed loop keeps its direction.
    pub fn winding(&self) -> Winding {
        let Some(bounds) = self.bounds() else {
            return Winding::Degenerate;
        };
        let scale = bounds.diagonal_length();
        let area = self.signed_area();
        if scale == 0.0 || approx_zero(area / (scale * scale)) {
            Winding::Degenerate
        } else if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Copy of this polygon wound counter-clockwise.
    ///
    /// Clockwise loops are reversed; degenerate loops are copied as they are.
    #[must_use]
    pub fn to_counter_clockwise(&self) -> Polygon {
        let mut polygon = self.clone();
        if self.winding() == Winding::Clockwise {
            polygon.reverse();
        }
        polygon
    }

    /// Iterates over consecutive vertex triples, as produced by triangulation.
    ///
    /// Trailing vertices that do not fill a triple are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Intersects the segment `a → b` with every edge.
    ///
    /// Crossings at the same welded position (a corner, or the two sides of a
    /// hole bridge) are reported once, keeping the edge with the larger
    /// incidence. Hits are sorted by ascending distance from `a`.
    pub fn segment_cast(&self, a: Vec2, b: Vec2, cfg: &KernelConfig) -> Vec<RaycastHit> {
        let n = self.vertices.len();
        let query = (b - a).normalize_or_zero();

        let mut hits: Vec<RaycastHit> = Vec::new();
        let mut by_point: HashMap<PointKey, usize> = HashMap::new();

        for index_a in 0..n {
            let index_b = (index_a + 1) % n;
            let edge_a = self.vertices[index_a];
            let edge_b = self.vertices[index_b];

            let Some(point) = segment_intersect(a, b, edge_a, edge_b) else {
                continue;
            };

            let hit = RaycastHit {
                index_a,
                index_b,
                point,
                incidence: (edge_b - edge_a).normalize_or_zero().dot(query).abs(),
            };

            let key = PointKey::new(point, cfg.weld_tolerance);
            match by_point.get(&key) {
                Some(&slot) => {
                    if hit.incidence > hits[slot].incidence {
                        hits[slot] = hit;
                    }
                }
                None => {
                    by_point.insert(key, hits.len());
                    hits.push(hit);
                }
            }
        }

        hits.sort_by(|l, r| a.distance(l.point).total_cmp(&a.distance(r.point)));

        log::trace!(
            "segment cast ({}, {}) -> ({}, {}) against {} edges: {} hits",
            a.x,
            a.y,
            b.x,
            b.y,
            n,
            hits.len()
        );
        hits
    }

    /// Even-odd containment of `point`.
    ///
    /// The probe segment starts at `point + dir * diagonal`, where `dir` points
    /// from the bounds center to `point` (or `+X` when they coincide), so it
    /// always begins outside the bounds.
    pub fn containment(&self, point: Vec2, cfg: &KernelConfig) -> Containment {
        let Some(bounds) = self.bounds() else {
            return Containment::OUTSIDE;
        };
        if !bounds.contains(point) {
            return Containment::OUTSIDE;
        }

        let direction = (point - bounds.center()).try_normalize().unwrap_or(Vec2::X);
        let anchor = point + direction * bounds.diagonal_length();
        let hits = self.segment_cast(anchor, point, cfg);

        Containment {
            inside: hits.len() % 2 == 1,
            nearest_hit_distance: hits
                .iter()
                .map(|hit| hit.point.distance(point))
                .min_by(f64::total_cmp),
        }
    }

    /// True if the boundary passes from one side of the line `a → b` to the
    /// other at `hit`.
    ///
    /// A hit in the middle of an edge always crosses. A hit on a vertex only
    /// crosses when the two neighbouring vertices lie on different sides; a
    /// corner that merely touches the line does not.
    pub fn crosses(&self, hit: &RaycastHit, a: Vec2, b: Vec2, cfg: &KernelConfig) -> bool {
        let n = self.vertices.len();
        let key = PointKey::new(hit.point, cfg.weld_tolerance);
        let corner = [hit.index_a, hit.index_b]
            .into_iter()
            .find(|&i| PointKey::new(self.vertices[i], cfg.weld_tolerance) == key);
        let Some(corner) = corner else {
            return true;
        };

        let prev = orient2d(a, b, self.vertices[(corner + n - 1) % n]);
        let next = orient2d(a, b, self.vertices[(corner + 1) % n]);
        !(prev == next && prev != Orientation::Collinear)
    }

    /// True if `point` is inside under the even-odd rule.
    #[inline]
    pub fn point_is_inside(&self, point: Vec2, cfg: &KernelConfig) -> bool {
        self.containment(point, cfg).inside
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Vec2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests;
