//! Generated geometry value types and their validity predicates.
mod contour;
mod internal;
mod mix;
mod multi;
mod point;
mod polygon;
mod segment;
pub mod validation;

pub use contour::Contour;
pub(crate) use contour::{ring_edges, ring_orientation};
pub use mix::{Discrete, Empty, Linear, Mix, Shaped};
pub use multi::{Multicontour, Multipoint, Multipolygon, Multisegment};
pub use point::Point;
pub use polygon::{Polygon, Polyline};
pub use segment::Segment;
pub use static_aabb2d_index::AABB;
