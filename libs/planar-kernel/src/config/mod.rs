//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! Every operation takes a `&KernelConfig` so that tolerances and caps are
//! passed explicitly instead of living in process-wide state.

use config::constants::{GlobalConfig, MAX_TRIANGULATION_PASSES, VERTEX_WELD_TOLERANCE};

use crate::error::GeometryResult;

/// Geometry kernel configuration wrapper.
///
/// # Examples
/// ```
/// use planar_kernel::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.weld_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Grid pitch under which two points are the same vertex.
    pub weld_tolerance: f64,
    /// Ear-clipping pass cap before triangulation reports non-convergence.
    pub max_triangulation_passes: usize,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use planar_kernel::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-6, 500).unwrap();
    /// assert_eq!(cfg.max_triangulation_passes, 500);
    /// ```
    pub fn new(weld_tolerance: f64, max_triangulation_passes: usize) -> GeometryResult<Self> {
        let cfg = GlobalConfig::new(weld_tolerance, max_triangulation_passes)?;
        Ok(Self::from(cfg))
    }

    /// Returns a copy with a different triangulation pass cap.
    ///
    /// # Examples
    /// ```
    /// use planar_kernel::config::KernelConfig;
    /// let cfg = KernelConfig::default().with_max_triangulation_passes(3).unwrap();
    /// assert_eq!(cfg.max_triangulation_passes, 3);
    /// ```
    pub fn with_max_triangulation_passes(self, passes: usize) -> GeometryResult<Self> {
        Self::new(self.weld_tolerance, passes)
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            weld_tolerance: cfg.weld_tolerance,
            max_triangulation_passes: cfg.max_triangulation_passes,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            weld_tolerance: VERTEX_WELD_TOLERANCE,
            max_triangulation_passes: MAX_TRIANGULATION_PASSES,
        }
    }
}

#[cfg(test)]
mod tests;
