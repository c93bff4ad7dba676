//! Core math functions: exact orientation, angular ordering, segment relations and point location.
mod angular;
mod base_math;
mod point_location;
mod segment_relation;

pub use angular::angle_cmp;
pub use base_math::*;
pub use point_location::{locate_in_polygon, locate_in_ring, Location};
pub use segment_relation::{segment_boxes_overlap, segment_relation, SegmentRelation};
