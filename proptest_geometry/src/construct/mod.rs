//! Deterministic construction routines turning drawn raw material (points, coordinates, picks)
//! into candidate geometries.
//!
//! Routines here never validate their complete output, the strategies in [crate::planar] do.
mod hull;
mod indent;
mod partition;
mod shapes;
mod star;
mod valtr;

pub use hull::{select_vertices, strict_convex_hull, strictly_inside_convex};
pub use indent::{indent_contour, try_indent};
pub use partition::{shuffle_with, sort_along, split_into_slabs, Axis};
pub use shapes::{contour_from_points, polygon_from_points, PolygonPlan};
pub use star::{compress_collinear, star_vertices};
pub use valtr::valtr_convex_polygon;
