//! Polygon operations built on the core queries.
//!
//! - `boolean`: composition of two polygons, hole bridging
//! - `triangulate`: ear clipping
//! - `batch`: rayon-parallel entry points for both

pub mod batch;
pub mod boolean;
pub mod triangulate;
