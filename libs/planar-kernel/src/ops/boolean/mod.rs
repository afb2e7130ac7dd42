//! # Boolean Composition
//!
//! Resolves the overlap between two polygons: the result is the part of
//! `below` that `above` does not cover.
//!
//! ## Relationships
//!
//! | Situation | Result |
//! |-----------|--------|
//! | `below` entirely inside `above` | `Composition::Covered` |
//! | `above` entirely inside `below` | `Composition::Holed` (bridged loop) |
//! | no contact, or corners touching without crossing | `Composition::Separate` |
//! | boundaries cross | `Composition::Pieces` |
//!
//! ## Algorithm
//!
//! ```text
//! 1. Normalize both loops to counter-clockwise
//! 2. Classify vertices, cast every `below` edge against `above`, seed leads
//! 3. Pick the relationship; for crossings:
//!    a. Boundary walk records the uncovered boundary in a connection graph
//!    b. Face shatter splits the graph into polygons
//! ```
//!
//! ## Module Structure
//!
//! - `mod.rs` - Public API (this file)
//! - `graph.rs` - Connection graph arena
//! - `walk.rs` - Boundary walk
//! - `shatter.rs` - Face tracing
//! - `hole.rs` - Hole bridging
//! - `tests.rs` - Unit tests

// =============================================================================
// SUBMODULES
// =============================================================================

mod graph;
mod hole;
mod shatter;
mod walk;


// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use graph::{ConnectionGraph, GraphNode};
pub use hole::cut_hole;
pub use shatter::shatter;
pub use walk::{walk, Lead};

// =============================================================================
// PUBLIC API
// =============================================================================

use std::collections::VecDeque;

use crate::config::KernelConfig;
use crate::core::polygon::Polygon;
use crate::core::vec2::PointKey;
use crate::error::{GeometryError, GeometryResult};

/// Outcome of [`compose`].
#[derive(Debug, Clone, PartialEq)]
pub enum Composition {
    /// The polygons do not touch; `below` stays as it is.
    Separate,
    /// `above` covers all of `below`; nothing remains.
    Covered,
    /// `above` lies inside `below` and was bridged in as a hole.
    Holed(Polygon),
    /// The uncovered parts of `below` after the boundaries crossed.
    Pieces(Vec<Polygon>),
}

impl Composition {
    /// Flattens into a polygon list.
    ///
    /// `Separate` is `None`; `Covered` is a list holding one empty polygon.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use planar_kernel::Composition;
    ///
    /// assert!(Composition::Separate.into_polygons().is_none());
    /// let covered = Composition::Covered.into_polygons().unwrap();
    /// assert_eq!(covered.len(), 1);
    /// assert!(covered[0].is_empty());
    /// ```
    pub fn into_polygons(self) -> Option<Vec<Polygon>> {
        match self {
            Composition::Separate => None,
            Composition::Covered => Some(vec![Polygon::empty()]),
            Composition::Holed(polygon) => Some(vec![polygon]),
            Composition::Pieces(pieces) => Some(pieces),
        }
    }

    /// True for [`Composition::Separate`].
    pub fn is_separate(&self) -> bool {
        matches!(self, Composition::Separate)
    }
}

/// Subtracts `above` from `below`.
///
/// ## Parameters
///
/// - `above`: The covering polygon
/// - `below`: The polygon being cut
/// - `cfg`: Weld tolerance for vertex identity
///
/// ## Errors
///
/// - [`GeometryError::NotEnoughVertices`] if either loop has fewer than three
///   vertices
/// - [`GeometryError::WalkDidNotClose`] if crossing points fail to weld and
///   the boundary walk runs away
///
/// ## Example
///
/// ```rust
/// use planar_kernel::{compose, Composition, KernelConfig, Polygon, Vec2};
///
/// let square = |x: f64, y: f64, s: f64| Polygon::new(vec![
///     Vec2::new(x, y), Vec2::new(x + s, y),
///     Vec2::new(x + s, y + s), Vec2::new(x, y + s),
/// ]);
/// let cfg = KernelConfig::default();
///
/// let result = compose(&square(2.0, 2.0, 4.0), &square(0.0, 0.0, 4.0), &cfg).unwrap();
/// match result {
///     Composition::Pieces(pieces) => {
///         assert_eq!(pieces.len(), 1);
///         assert!((pieces[0].area() - 12.0).abs() < 1e-9);
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub fn compose(
    above: &Polygon,
    below: &Polygon,
    cfg: &KernelConfig,
) -> GeometryResult<Composition> {
    GeometryError::require_vertices("compose", 3, above.len())?;
    GeometryError::require_vertices("compose", 3, below.len())?;

    let above = above.to_counter_clockwise();
    let below = below.to_counter_clockwise();

    // Vertices of `above` lying on the boundary of `below` decide nothing.
    let mut above_inside = 0;
    let mut above_outside = 0;
    for &p in above.vertices() {
        let containment = below.containment(p, cfg);
        if containment
            .nearest_hit_distance
            .is_some_and(|d| d <= cfg.weld_tolerance)
        {
            continue;
        }
        if containment.inside {
            above_inside += 1;
        } else {
            above_outside += 1;
        }
    }

    let key = |p| PointKey::new(p, cfg.weld_tolerance);
    let n = below.len();
    let mut below_outside = 0;
    let mut contains_intersections = false;
    let mut leads = VecDeque::new();

    for (i, &start) in below.vertices().iter().enumerate() {
        let end = below.vertices()[(i + 1) % n];

        let offset = if !above.point_is_inside(start, cfg) {
            below_outside += 1;
            leads.push_back(Lead::new(start, i));
            1
        } else {
            0
        };

        let endpoints = [key(start), key(end)];
        let crossings = above
            .segment_cast(start, end, cfg)
            .into_iter()
            .filter(|hit| above.crosses(hit, start, end, cfg));
        for (k, hit) in crossings.enumerate() {
            if endpoints.contains(&key(hit.point)) {
                continue;
            }
            contains_intersections = true;
            if (k + offset) % 2 == 0 {
                leads.push_back(Lead::new(hit.point, i));
            }
        }
    }

    if below_outside == 0 {
        log::debug!("compose: below is covered by above");
        return Ok(Composition::Covered);
    }

    if below_outside == n && !contains_intersections {
        if above_inside > 0 && above_outside == 0 {
            log::debug!("compose: above lies inside below, bridging as hole");
            return Ok(Composition::Holed(cut_hole(&above, &below)?));
        }
        if above_outside > 0 && above_inside == 0 {
            log::debug!("compose: polygons are separate");
            return Ok(Composition::Separate);
        }
    }

    log::debug!(
        "compose: boundaries cross, walking from {} leads",
        leads.len()
    );
    let graph = walk(&below, &above, leads, cfg)?;
    let pieces: Vec<Polygon> = shatter(&graph)
        .into_iter()
        .filter(Polygon::is_valid)
        .collect();

    if pieces.is_empty() {
        log::debug!("compose: walk left no faces, below is covered");
        return Ok(Composition::Covered);
    }
    Ok(Composition::Pieces(pieces))
}
