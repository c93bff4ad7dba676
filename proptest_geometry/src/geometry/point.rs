use std::cmp::Ordering;

use crate::core::traits::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point in the plane.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Scalar,
{
    /// Create a new point with the coordinates given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use proptest_geometry::geometry::*;
    /// let p = Point::new(3, -4);
    /// assert_eq!(p.x, 3);
    /// assert_eq!(p.y, -4);
    /// ```
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Lexicographic comparison by `x` then `y`.
    #[inline]
    pub fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        self.x
            .scalar_cmp(&other.x)
            .then_with(|| self.y.scalar_cmp(&other.y))
    }

    /// Lexicographic comparison by `y` then `x`.
    #[inline]
    pub fn transposed_cmp(&self, other: &Self) -> Ordering {
        self.y
            .scalar_cmp(&other.y)
            .then_with(|| self.x.scalar_cmp(&other.x))
    }

    /// Vector from `self` to `other`.
    ///
    /// ```
    /// # use proptest_geometry::geometry::Point;
    /// assert_eq!(Point::new(1, 2).vector_to(&Point::new(4, 0)), Point::new(3, -2));
    /// ```
    #[inline]
    pub fn vector_to(&self, other: &Self) -> Self {
        Point::new(other.x - self.x, other.y - self.y)
    }

    #[inline]
    pub(crate) fn as_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }
}
