//! Proptest strategies generating valid planar geometries: points, segments, boxes, polylines,
//! contours (convex, concave, star shaped), polygons with holes, multi-geometries and mixes.
//!
//! Every generated value satisfies the structural invariants of its kind (simple, strict,
//! correctly oriented, disjoint where required), checked with exact predicates for integer
//! coordinates. Strategies are built from a coordinate [strategy::Domain] and size bounds, see
//! [planar] for the available constructors.
extern crate static_aabb2d_index;

pub mod config;
pub mod construct;
pub mod core;
mod error;
pub mod geometry;
pub mod planar;
pub mod strategy;

pub use error::ConfigError;
pub use static_aabb2d_index::AABB;
