use crate::{
    core::{
        math::{orientation, sort_dedup_points, Orientation},
        traits::Scalar,
    },
    geometry::Point,
};

/// Strict convex hull of `points` in counterclockwise order, starting at the lexicographically
/// smallest point.
///
/// Collinear points on the hull boundary are dropped, so the result has no three collinear
/// consecutive vertices. Fewer than 3 vertices are returned when all points are collinear.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::construct::*;
/// # use proptest_geometry::geometry::Point;
/// let points = vec![
///     Point::new(0, 0),
///     Point::new(2, 0),
///     Point::new(4, 0),
///     Point::new(1, 1),
///     Point::new(4, 4),
///     Point::new(0, 4),
/// ];
/// assert_eq!(
///     strict_convex_hull(&points),
///     vec![Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)]
/// );
/// ```
pub fn strict_convex_hull<T>(points: &[Point<T>]) -> Vec<Point<T>>
where
    T: Scalar,
{
    let mut sorted = points.to_vec();
    sort_dedup_points(&mut sorted);
    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point<T>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter() {
        while lower.len() >= 2
            && orientation(lower[lower.len() - 2], lower[lower.len() - 1], p)
                != Orientation::CounterClockwise
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point<T>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && orientation(upper[upper.len() - 2], upper[upper.len() - 1], p)
                != Orientation::CounterClockwise
        {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Picks `count` vertices of the convex `hull` spread evenly around it, starting at vertex
/// `offset % hull.len()`, keeping the cyclic order.
///
/// A subset of the vertices of a strict convex polygon is again a strict convex polygon.
pub fn select_vertices<T>(hull: &[Point<T>], count: usize, offset: usize) -> Vec<Point<T>>
where
    T: Scalar,
{
    let n = hull.len();
    if count >= n {
        return hull.to_vec();
    }
    if count == 0 {
        return Vec::new();
    }

    let start = offset % n;
    (0..count)
        .map(|i| hull[(start + i * n / count) % n])
        .collect()
}

/// Returns true if `p` lies strictly inside the counterclockwise convex polygon `hull`.
pub fn strictly_inside_convex<T>(p: Point<T>, hull: &[Point<T>]) -> bool
where
    T: Scalar,
{
    let n = hull.len();
    n >= 3
        && (0..n).all(|i| {
            orientation(hull[i], hull[(i + 1) % n], p) == Orientation::CounterClockwise
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::validation::{is_convex_contour, ring_turns};
    use crate::geometry::Contour;
    use proptest::prelude::*;

    #[test]
    fn collinear_points_have_no_hull() {
        let points: Vec<_> = (0..5).map(|i| Point::new(i, 2 * i)).collect();
        let hull = strict_convex_hull(&points);
        assert_eq!(hull, vec![Point::new(0, 0), Point::new(4, 8)]);
    }

    #[test]
    fn selection_keeps_cyclic_order() {
        let hull: Vec<_> = [(0, 0), (4, 0), (6, 2), (6, 6), (2, 6), (0, 4)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        let picked = select_vertices(&hull, 3, 6);
        assert_eq!(picked, vec![hull[0], hull[2], hull[4]]);
        assert!(is_convex_contour(&Contour::new(picked)));
    }

    proptest! {
        #[test]
        fn hull_encloses_all_points(points in prop::collection::vec((-20i32..20, -20i32..20), 3..40)) {
            let points: Vec<_> = points.into_iter().map(|(x, y)| Point::new(x, y)).collect();
            let hull = strict_convex_hull(&points);
            prop_assume!(hull.len() >= 3);
            prop_assert!(ring_turns(&hull).all(|t| t == Orientation::CounterClockwise));
            for &p in points.iter() {
                let enclosed = hull.iter().enumerate().all(|(i, &a)| {
                    orientation(a, hull[(i + 1) % hull.len()], p) != Orientation::Clockwise
                });
                prop_assert!(enclosed);
            }
        }
    }
}
