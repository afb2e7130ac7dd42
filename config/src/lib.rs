//! # Config Crate
//!
//! Centralized configuration constants for the planar geometry kernel.
//! All tolerances and iteration limits are defined here so the kernel never
//! scatters literals through its algorithms.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, MAX_TRIANGULATION_PASSES, VERTEX_WELD_TOLERANCE};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.weld_tolerance, VERTEX_WELD_TOLERANCE);
//! assert_eq!(cfg.max_triangulation_passes, MAX_TRIANGULATION_PASSES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Safe to depend on from any crate in the workspace
//! - **Validated Snapshots**: `GlobalConfig::new` rejects unusable values

pub mod constants;
