//! Centralized configuration values shared across the planar kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison and vertex weld tolerances
//! - **Limits**: Iteration caps for algorithms without a termination proof

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used where a value only needs to be "zero enough", for example when
/// classifying a polygon with no signed area as degenerate.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((1.0_f64 - (1.0 + 1e-11)).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Grid pitch under which two points are the same vertex.
///
/// Intersection points computed from different edge pairs rarely agree to the
/// last bit. Points are quantized onto a grid with this pitch before they are
/// used as graph keys, so such near-duplicates collapse into one node.
///
/// # Examples
/// ```
/// use config::constants::VERTEX_WELD_TOLERANCE;
/// let key = |v: f64| (v / VERTEX_WELD_TOLERANCE).round() as i64;
/// assert_eq!(key(2.0), key(2.0000000000000004));
/// ```
pub const VERTEX_WELD_TOLERANCE: f64 = 1e-8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of ear-clipping passes before triangulation gives up.
///
/// Each pass either clips one ear or finds none; the triangles gathered so far
/// are returned and the result is flagged as not converged.
///
/// # Examples
/// ```
/// use config::constants::MAX_TRIANGULATION_PASSES;
/// assert_eq!(MAX_TRIANGULATION_PASSES, 100);
/// ```
pub const MAX_TRIANGULATION_PASSES: usize = 100;

/// Multiplier for the boundary walk step budget.
///
/// The walk may take at most `WALK_STEP_FACTOR * (n + m + n * m) + 16` steps
/// for inputs with `n` and `m` vertices, which bounds every directed segment
/// between vertices and pairwise edge crossings.
///
/// # Examples
/// ```
/// use config::constants::WALK_STEP_FACTOR;
/// let budget = WALK_STEP_FACTOR * (4 + 4 + 16) + 16;
/// assert!(budget > 8);
/// ```
pub const WALK_STEP_FACTOR: usize = 4;

// =============================================================================
// HELPERS
// =============================================================================

/// Checks if a f64 value is approximately zero within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.weld_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Grid pitch used to decide vertex identity.
    pub weld_tolerance: f64,
    /// Ear-clipping pass cap.
    pub max_triangulation_passes: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and pass limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 250).expect("valid config");
    /// assert_eq!(cfg.max_triangulation_passes, 250);
    /// ```
    pub fn new(weld_tolerance: f64, max_triangulation_passes: usize) -> Result<Self, ConfigError> {
        if !weld_tolerance.is_finite() || weld_tolerance <= 0.0 {
            return Err(ConfigError::InvalidWeldTolerance(weld_tolerance));
        }
        if max_triangulation_passes == 0 {
            return Err(ConfigError::InvalidPassLimit(max_triangulation_passes));
        }
        Ok(Self {
            weld_tolerance,
            max_triangulation_passes,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            weld_tolerance: VERTEX_WELD_TOLERANCE,
            max_triangulation_passes: MAX_TRIANGULATION_PASSES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld tolerance is zero, negative or not finite.
    InvalidWeldTolerance(f64),
    /// Raised when the triangulation pass cap is zero.
    InvalidPassLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeldTolerance(value) => {
                write!(f, "weld_tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidPassLimit(value) => {
                write!(f, "max_triangulation_passes must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
