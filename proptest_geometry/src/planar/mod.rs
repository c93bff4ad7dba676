//! Public generation API: one strategy constructor per geometry kind.
//!
//! Constructors validate their configuration up front and return a [ConfigError] when no draw
//! could ever satisfy it. Generated values are built from raw draws by the routines in
//! [crate::construct] and only yielded once they pass the predicates in
//! [crate::geometry::validation].
//!
//! # Examples
//!
//! ```
//! use proptest::prelude::*;
//! use proptest_geometry::{
//!     geometry::validation::is_valid_contour,
//!     planar::contours,
//!     strategy::{Coordinates, Domain, Sizes},
//! };
//!
//! let domain = Domain::square(Coordinates::range(-100, 100).unwrap());
//! let strategy = contours(&domain, Sizes::between(5, 10)).unwrap();
//! proptest!(|(contour in strategy)| {
//!     prop_assert!((5..=10).contains(&contour.vertex_count()));
//!     prop_assert!(is_valid_contour(&contour));
//! });
//! ```
mod contours;
mod mix;
mod multi;
mod points;
mod polygons;

pub use contours::{
    concave_contours, contours, convex_contours, polylines, rectangular_contours, star_contours,
    triangular_contours,
};
pub use mix::mixes;
pub use multi::{multicontours, multipoints, multipolygons, multisegments};
pub use points::{boxes, empty_geometries, points, segments};
pub use polygons::polygons;

use proptest::{arbitrary::any, collection::vec, strategy::Strategy};

use crate::config::INDENT_PICKS;

/// Drawn edge picks used by indentation.
pub(crate) fn picks() -> impl Strategy<Value = Vec<usize>> {
    vec(any::<usize>(), INDENT_PICKS)
}

