use super::Point;
use crate::core::traits::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight line segment between two points.
///
/// Generated segments are never degenerate (`start != end`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment<T = f64> {
    pub start: Point<T>,
    pub end: Point<T>,
}

impl<T> Segment<T>
where
    T: Scalar,
{
    #[inline]
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Segment { start, end }
    }

    /// Returns true if start and end coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Same segment with start and end swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Segment::new(self.end, self.start)
    }

    /// Endpoints ordered lexicographically.
    #[inline]
    pub fn sorted_endpoints(&self) -> (Point<T>, Point<T>) {
        if self.start.lexicographic_cmp(&self.end).is_le() {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}
