use super::{Contour, Point, Segment};
use crate::core::traits::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Open chain of vertices, every vertex distinct.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T = f64> {
    pub vertices: Vec<Point<T>>,
}

impl<T> Polyline<T>
where
    T: Scalar,
{
    #[inline]
    pub fn new(vertices: Vec<Point<T>>) -> Self {
        Polyline { vertices }
    }

    /// Iterate the edges between consecutive vertices (no closing edge).
    pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }
}

/// Polygon with an outer border and zero or more holes.
///
/// Generated borders are counterclockwise, holes are clockwise, lie strictly inside the border and
/// are pairwise disjoint (no shared points, not nested).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    pub border: Contour<T>,
    pub holes: Vec<Contour<T>>,
}

impl<T> Polygon<T>
where
    T: Scalar,
{
    #[inline]
    pub fn new(border: Contour<T>, holes: Vec<Contour<T>>) -> Self {
        Polygon { border, holes }
    }

    /// Polygon with no holes.
    #[inline]
    pub fn from_border(border: Contour<T>) -> Self {
        Polygon {
            border,
            holes: Vec::new(),
        }
    }

    /// Iterate the border followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &Contour<T>> + '_ {
        std::iter::once(&self.border).chain(self.holes.iter())
    }
}
