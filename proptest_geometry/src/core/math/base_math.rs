use std::cmp::Ordering;

use crate::{core::traits::Scalar, geometry::Point};

/// Orientation of a turn through three points (or of a closed contour).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// Returns the opposite orientation ([Orientation::Collinear] stays collinear).
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Orientation of the turn `a -> b -> c`.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::core::math::*;
/// # use proptest_geometry::geometry::Point;
/// let a = Point::new(0, 0);
/// let b = Point::new(4, 0);
/// assert_eq!(orientation(a, b, Point::new(2, 3)), Orientation::CounterClockwise);
/// assert_eq!(orientation(a, b, Point::new(2, -3)), Orientation::Clockwise);
/// assert_eq!(orientation(a, b, Point::new(8, 0)), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation<T>(a: Point<T>, b: Point<T>, c: Point<T>) -> Orientation
where
    T: Scalar,
{
    match T::cross_sign(a.as_tuple(), b.as_tuple(), c.as_tuple()) {
        Ordering::Greater => Orientation::CounterClockwise,
        Ordering::Equal => Orientation::Collinear,
        Ordering::Less => Orientation::Clockwise,
    }
}

/// Returns true if `p` lies on the closed segment `start -> end`.
#[inline]
pub fn point_on_segment<T>(p: Point<T>, start: Point<T>, end: Point<T>) -> bool
where
    T: Scalar,
{
    if orientation(start, end, p) != Orientation::Collinear {
        return false;
    }

    let (min_x, max_x) = min_max(start.x, end.x);
    let (min_y, max_y) = min_max(start.y, end.y);
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Clamps `value` into `[min, max]`.
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Sorts `points` lexicographically and removes duplicates.
pub fn sort_dedup_points<T>(points: &mut Vec<Point<T>>)
where
    T: Scalar,
{
    points.sort_by(|a, b| a.lexicographic_cmp(b));
    points.dedup();
}
