//! # Batch Operations
//!
//! Runs independent compositions or triangulations on the rayon thread pool.
//! Output order matches input order; one failing item does not affect the
//! others.

use rayon::prelude::*;

use crate::config::KernelConfig;
use crate::core::polygon::Polygon;
use crate::error::GeometryResult;
use crate::ops::boolean::{compose, Composition};
use crate::ops::triangulate::{triangulate, Triangulation};

/// Composes every `(above, below)` pair in parallel.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::{compose_all, Composition, KernelConfig, Polygon, Vec2};
///
/// let unit = |x: f64| Polygon::new(vec![
///     Vec2::new(x, 0.0), Vec2::new(x + 1.0, 0.0),
///     Vec2::new(x + 1.0, 1.0), Vec2::new(x, 1.0),
/// ]);
/// let pairs = vec![(unit(5.0), unit(0.0)), (unit(0.0), unit(0.0))];
/// let results = compose_all(&pairs, &KernelConfig::default());
/// assert_eq!(results[0], Ok(Composition::Separate));
/// ```
pub fn compose_all(
    pairs: &[(Polygon, Polygon)],
    cfg: &KernelConfig,
) -> Vec<GeometryResult<Composition>> {
    log::debug!("composing {} polygon pairs", pairs.len());
    pairs
        .par_iter()
        .map(|(above, below)| compose(above, below, cfg))
        .collect()
}

/// Triangulates every polygon in parallel.
pub fn triangulate_all(
    polygons: &[Polygon],
    cfg: &KernelConfig,
) -> Vec<GeometryResult<Triangulation>> {
    log::debug!("triangulating {} polygons", polygons.len());
    polygons
        .par_iter()
        .map(|polygon| triangulate(polygon, cfg))
        .collect()
}
