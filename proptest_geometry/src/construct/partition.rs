use std::cmp::Ordering;

use crate::{core::traits::Scalar, geometry::Point};

/// Axis points are sorted and split along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Axis::Y
        } else {
            Axis::X
        }
    }

    #[inline]
    fn key<T>(self, p: &Point<T>) -> T
    where
        T: Scalar,
    {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    /// Lexicographic order with this axis as the primary key.
    #[inline]
    pub fn cmp<T>(self, a: &Point<T>, b: &Point<T>) -> Ordering
    where
        T: Scalar,
    {
        match self {
            Axis::X => a.lexicographic_cmp(b),
            Axis::Y => a.transposed_cmp(b),
        }
    }
}

#[inline]
pub fn sort_along<T>(points: &mut [Point<T>], axis: Axis)
where
    T: Scalar,
{
    points.sort_by(|a, b| axis.cmp(a, b));
}

/// Splits `sorted` (sorted with [sort_along]) into consecutive groups of the given `sizes` that are
/// strictly separated along `axis`: every key of a group is less than every key of the following
/// groups. Points sharing the last key of a group are skipped.
///
/// Returns `None` if there are not enough points.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::construct::*;
/// # use proptest_geometry::geometry::Point;
/// let points: Vec<_> = [(0, 0), (1, 5), (1, 6), (2, 0), (3, 3)]
///     .iter()
///     .map(|&(x, y)| Point::new(x, y))
///     .collect();
/// let slabs = split_into_slabs(&points, &[2, 2], Axis::X).unwrap();
/// // (1, 6) shares x with the end of the first slab
/// assert_eq!(slabs[0], vec![Point::new(0, 0), Point::new(1, 5)]);
/// assert_eq!(slabs[1], vec![Point::new(2, 0), Point::new(3, 3)]);
/// assert!(split_into_slabs(&points, &[2, 3], Axis::X).is_none());
/// ```
pub fn split_into_slabs<T>(
    sorted: &[Point<T>],
    sizes: &[usize],
    axis: Axis,
) -> Option<Vec<Vec<Point<T>>>>
where
    T: Scalar,
{
    let mut slabs = Vec::with_capacity(sizes.len());
    let mut cursor = 0;
    for &size in sizes.iter() {
        if cursor + size > sorted.len() {
            return None;
        }

        let slab = sorted[cursor..cursor + size].to_vec();
        cursor += size;
        if let Some(last) = slab.last() {
            let boundary = axis.key(last);
            while cursor < sorted.len() && axis.key(&sorted[cursor]) == boundary {
                cursor += 1;
            }
        }
        slabs.push(slab);
    }

    Some(slabs)
}

/// Fisher-Yates shuffle driven by drawn `picks` (missing picks count as 0).
pub fn shuffle_with<V>(values: &mut [V], picks: &[usize]) {
    for i in (1..values.len()).rev() {
        let pick = picks.get(i).copied().unwrap_or(0) % (i + 1);
        values.swap(i, pick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slabs_are_separated_along_y() {
        let mut points: Vec<_> = [(5, 0), (0, 1), (9, 1), (3, 2), (1, 2), (4, 7)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        sort_along(&mut points, Axis::Y);
        let slabs = split_into_slabs(&points, &[2, 0, 2], Axis::Y).unwrap();
        assert_eq!(slabs[0], vec![Point::new(5, 0), Point::new(0, 1)]);
        assert!(slabs[1].is_empty());
        assert_eq!(slabs[2], vec![Point::new(1, 2), Point::new(3, 2)]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut values = [0, 1, 2, 3, 4];
        shuffle_with(&mut values, &[9, 4, 7, 1, 3]);
        let mut sorted = values;
        sorted.sort();
        assert_eq!(sorted, [0, 1, 2, 3, 4]);
        assert_eq!(values, [2, 0, 4, 1, 3]);
    }
}
