use super::{Contour, Multipoint, Multipolygon, Multisegment, Polygon, Segment};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry with no points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Empty;

/// Zero dimensional part of a [Mix].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Discrete<T = f64> {
    Empty(Empty),
    Multipoint(Multipoint<T>),
}

/// One dimensional part of a [Mix].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Linear<T = f64> {
    Empty(Empty),
    Segment(Segment<T>),
    Contour(Contour<T>),
    Multisegment(Multisegment<T>),
}

/// Two dimensional part of a [Mix].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Shaped<T = f64> {
    Empty(Empty),
    Polygon(Polygon<T>),
    Multipolygon(Multipolygon<T>),
}

/// Heterogeneous geometry made of a discrete, a linear and a shaped part that are pairwise
/// disjoint in the plane.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Mix<T = f64> {
    pub discrete: Discrete<T>,
    pub linear: Linear<T>,
    pub shaped: Shaped<T>,
}

impl<T> Discrete<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Discrete::Empty(_))
    }
}

impl<T> Linear<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Linear::Empty(_))
    }
}

impl<T> Shaped<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Shaped::Empty(_))
    }

    /// Polygons making up the shaped part (none if empty).
    pub fn polygons(&self) -> &[Polygon<T>] {
        match self {
            Shaped::Empty(_) => &[],
            Shaped::Polygon(polygon) => std::slice::from_ref(polygon),
            Shaped::Multipolygon(multipolygon) => &multipolygon.polygons,
        }
    }
}

impl<T> Mix<T> {
    /// Number of non-empty parts.
    pub fn part_count(&self) -> usize {
        [
            !self.discrete.is_empty(),
            !self.linear.is_empty(),
            !self.shaped.is_empty(),
        ]
        .into_iter()
        .filter(|&present| present)
        .count()
    }
}
