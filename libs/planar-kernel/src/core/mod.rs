//! Core data structures and predicates for the planar kernel.
//!
//! Includes the point alias (`Vec2`), the weld key used for vertex identity,
//! numeric predicates, bounding boxes and the `Polygon` entity.

pub mod bounds;
pub mod polygon;
pub mod predicates;
pub mod vec2;
