use super::{Contour, Point, Polygon, Segment};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collection of distinct points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multipoint<T = f64> {
    pub points: Vec<Point<T>>,
}

/// Collection of non-degenerate segments, no two of which cross or overlap (touching at a single
/// point is allowed).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multisegment<T = f64> {
    pub segments: Vec<Segment<T>>,
}

/// Collection of strict simple contours that share no points and are not nested.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multicontour<T = f64> {
    pub contours: Vec<Contour<T>>,
}

/// Collection of valid polygons that share no points and are not nested.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multipolygon<T = f64> {
    pub polygons: Vec<Polygon<T>>,
}

impl<T> Multipoint<T> {
    #[inline]
    pub fn new(points: Vec<Point<T>>) -> Self {
        Multipoint { points }
    }
}

impl<T> Multisegment<T> {
    #[inline]
    pub fn new(segments: Vec<Segment<T>>) -> Self {
        Multisegment { segments }
    }
}

impl<T> Multicontour<T> {
    #[inline]
    pub fn new(contours: Vec<Contour<T>>) -> Self {
        Multicontour { contours }
    }
}

impl<T> Multipolygon<T> {
    #[inline]
    pub fn new(polygons: Vec<Polygon<T>>) -> Self {
        Multipolygon { polygons }
    }
}
