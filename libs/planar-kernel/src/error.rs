//! # Error Types
//!
//! Error types for kernel operations.
//!
//! ## Error Policy
//!
//! - Expected geometric degeneracies are data, not errors: parallel segments
//!   report no hit, disjoint or nested polygons produce a `Composition`
//!   variant, a triangulation that hits its pass cap is flagged as not
//!   converged.
//! - Inputs that cannot form the polygon an operation requires, and walks
//!   that fail to close, are reported explicitly.

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during kernel operations.
///
/// ## Example
///
/// ```rust
/// use planar_kernel::{triangulate, GeometryError, KernelConfig, Polygon, Vec2};
///
/// let segment = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
/// match triangulate(&segment, &KernelConfig::default()) {
///     Err(GeometryError::NotEnoughVertices { actual, .. }) => assert_eq!(actual, 2),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An operation received a loop with too few vertices.
    #[error("{operation} needs at least {required} vertices, got {actual}")]
    NotEnoughVertices {
        /// Name of the operation that rejected the input.
        operation: &'static str,
        /// Minimum vertex count the operation accepts.
        required: usize,
        /// Vertex count that was supplied.
        actual: usize,
    },

    /// The boundary walk exceeded its step budget without closing.
    ///
    /// Usually a sign that crossing points failed to weld into shared nodes.
    #[error("boundary walk did not close after {steps} steps")]
    WalkDidNotClose {
        /// Steps taken before giving up.
        steps: usize,
    },

    /// Invalid kernel configuration.
    #[error("invalid kernel configuration: {0}")]
    Config(#[from] ConfigError),
}

impl GeometryError {
    /// Checks `actual >= required`, otherwise builds a `NotEnoughVertices` error.
    pub(crate) fn require_vertices(
        operation: &'static str,
        required: usize,
        actual: usize,
    ) -> GeometryResult<()> {
        if actual < required {
            return Err(GeometryError::NotEnoughVertices {
                operation,
                required,
                actual,
            });
        }
        Ok(())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
