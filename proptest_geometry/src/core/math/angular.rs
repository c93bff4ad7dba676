use std::cmp::Ordering;

use crate::{core::traits::Scalar, geometry::Point};

/// 0 for vectors in the half-open upper half plane `[0, PI)`, 1 for `[PI, 2PI)`.
#[inline]
fn half_plane<T>(v: Point<T>) -> u8
where
    T: Scalar,
{
    let zero = T::zero();
    if v.y > zero || (v.y == zero && v.x > zero) {
        0
    } else {
        1
    }
}

/// Compares the polar angles (in `[0, 2PI)`, measured counterclockwise from the positive x axis) of
/// the vectors `u` and `v` without evaluating any trigonometric function.
///
/// The zero vector sorts before everything else.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::core::math::*;
/// # use proptest_geometry::geometry::Point;
/// # use std::cmp::Ordering;
/// assert_eq!(angle_cmp(Point::new(1, 0), Point::new(0, 1)), Ordering::Less);
/// assert_eq!(angle_cmp(Point::new(0, -1), Point::new(-1, 1)), Ordering::Greater);
/// assert_eq!(angle_cmp(Point::new(2, 2), Point::new(1, 1)), Ordering::Equal);
/// ```
pub fn angle_cmp<T>(u: Point<T>, v: Point<T>) -> Ordering
where
    T: Scalar,
{
    let zero = T::zero();
    let origin = (zero, zero);
    let u_zero = u.x == zero && u.y == zero;
    let v_zero = v.x == zero && v.y == zero;
    match (u_zero, v_zero) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    half_plane(u).cmp(&half_plane(v)).then_with(|| {
        // within one half plane v is counterclockwise of u exactly when u comes first
        T::cross_sign(origin, u.as_tuple(), v.as_tuple()).reverse()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_full_turn() {
        let mut vectors = vec![
            Point::new(1, -1),
            Point::new(-1, 0),
            Point::new(0, 1),
            Point::new(1, 0),
            Point::new(-1, -1),
            Point::new(1, 1),
            Point::new(0, -1),
            Point::new(-1, 1),
        ];
        vectors.sort_by(|&u, &v| angle_cmp(u, v));
        assert_eq!(
            vectors,
            vec![
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(0, 1),
                Point::new(-1, 1),
                Point::new(-1, 0),
                Point::new(-1, -1),
                Point::new(0, -1),
                Point::new(1, -1),
            ]
        );
    }
}
