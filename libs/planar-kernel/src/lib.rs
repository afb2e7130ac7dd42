//! Planar geometry kernel for building and terrain outlines.
//!
//! This crate works on simple polygons stored as ordered vertex loops: point
//! containment, segment casting, composition of overlapping outlines (the part
//! of one polygon another does not cover) and ear-clipping triangulation.
//!
//! ## Layout
//!
//! - `core`: points, predicates, bounds and the `Polygon` type
//! - `ops`: composition, hole bridging, triangulation, batch helpers
//! - `config` / `error`: explicit configuration and error types
//!
//! Vertex identity is decided by a weld grid (`PointKey`) rather than exact
//! float equality; the pitch comes from [`KernelConfig`].
//!
//! ## Example
//!
//! ```rust
//! use planar_kernel::{compose, triangulate, KernelConfig, Polygon, Vec2};
//!
//! let rect = |x0: f64, y0: f64, x1: f64, y1: f64| Polygon::new(vec![
//!     Vec2::new(x0, y0), Vec2::new(x1, y0), Vec2::new(x1, y1), Vec2::new(x0, y1),
//! ]);
//! let cfg = KernelConfig::default();
//!
//! let floor = rect(0.0, 0.0, 6.0, 2.0);
//! let wall = rect(2.0, -1.0, 4.0, 3.0);
//! let pieces = compose(&wall, &floor, &cfg).unwrap().into_polygons().unwrap();
//! assert_eq!(pieces.len(), 2);
//!
//! let mesh = triangulate(&pieces[0], &cfg).unwrap();
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod ops;

pub use crate::config::KernelConfig;
pub use crate::core::bounds::Bounds2;
pub use crate::core::polygon::{Containment, Polygon, RaycastHit, Winding};
pub use crate::core::vec2::{PointKey, Vec2};
pub use crate::error::{GeometryError, GeometryResult};
pub use crate::ops::batch::{compose_all, triangulate_all};
pub use crate::ops::boolean::{compose, cut_hole, Composition};
pub use crate::ops::triangulate::{triangulate, Triangulation};
