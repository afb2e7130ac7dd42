//! Tests covering kernel configuration behavior.

use super::*;
use crate::error::GeometryError;
use config::constants::ConfigError;

#[test]
fn default_matches_constants() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.weld_tolerance, VERTEX_WELD_TOLERANCE);
    assert_eq!(cfg.max_triangulation_passes, MAX_TRIANGULATION_PASSES);
}

#[test]
fn default_matches_global_default() {
    assert_eq!(KernelConfig::default(), KernelConfig::from(GlobalConfig::default()));
}

#[test]
fn builder_validates_input() {
    let err = KernelConfig::new(0.0, 24).unwrap_err();
    assert_eq!(err, GeometryError::Config(ConfigError::InvalidWeldTolerance(0.0)));
}

#[test]
fn pass_cap_override_keeps_tolerance() {
    let cfg = KernelConfig::new(1.0e-6, 100)
        .unwrap()
        .with_max_triangulation_passes(7)
        .unwrap();
    assert_eq!(cfg.weld_tolerance, 1.0e-6);
    assert_eq!(cfg.max_triangulation_passes, 7);
    assert!(KernelConfig::default().with_max_triangulation_passes(0).is_err());
}
