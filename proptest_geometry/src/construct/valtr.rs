use super::{shuffle_with, strict_convex_hull};
use crate::{
    core::{
        math::{angle_cmp, clamp},
        traits::Scalar,
    },
    geometry::Point,
};

/// Splits the sorted `coordinates` into two chains running from the minimum to the maximum and
/// returns the signed differences along both chains (they sum to zero).
///
/// `sides[i]` decides which chain interior coordinate `i + 1` joins.
fn to_vectors<T>(coordinates: &[T], sides: &[bool]) -> Vec<T>
where
    T: Scalar,
{
    let n = coordinates.len();
    let min = coordinates[0];
    let max = coordinates[n - 1];
    let mut last_min = min;
    let mut last_max = min;
    let mut result = Vec::with_capacity(n);
    for (i, &c) in coordinates[1..n - 1].iter().enumerate() {
        if sides.get(i).copied().unwrap_or(i % 2 == 0) {
            result.push(c - last_min);
            last_min = c;
        } else {
            result.push(last_max - c);
            last_max = c;
        }
    }

    result.push(max - last_min);
    result.push(last_max - max);
    result
}

/// Random convex polygon after Pavel Valtr's construction: the drawn `xs` and `ys` are split into
/// two chains each, turned into edge vectors that are paired up by `permutation`, sorted by angle
/// and laid end to end. The result is shifted (and clamped) back inside the bounds of the drawn
/// coordinates and reduced to its strict convex hull, so it may have fewer vertices than drawn.
///
/// `xs` and `ys` must have the same length, at least 3.
pub fn valtr_convex_polygon<T>(
    xs: &[T],
    ys: &[T],
    x_sides: &[bool],
    y_sides: &[bool],
    permutation: &[usize],
) -> Vec<Point<T>>
where
    T: Scalar,
{
    let n = xs.len().min(ys.len());
    if n < 3 {
        return Vec::new();
    }

    let mut xs = xs[..n].to_vec();
    let mut ys = ys[..n].to_vec();
    xs.sort_by(|a, b| a.scalar_cmp(b));
    ys.sort_by(|a, b| a.scalar_cmp(b));
    let (min_x, max_x) = (xs[0], xs[n - 1]);
    let (min_y, max_y) = (ys[0], ys[n - 1]);

    let x_vectors = to_vectors(&xs, x_sides);
    let mut y_vectors = to_vectors(&ys, y_sides);
    shuffle_with(&mut y_vectors, permutation);

    let mut vectors: Vec<_> = x_vectors
        .into_iter()
        .zip(y_vectors)
        .map(|(x, y)| Point::new(x, y))
        .collect();
    vectors.sort_by(|&u, &v| angle_cmp(u, v));

    let mut points = Vec::with_capacity(n);
    let mut position = Point::new(T::zero(), T::zero());
    let (mut polygon_min_x, mut polygon_min_y) = (position.x, position.y);
    for v in vectors.iter() {
        points.push(position);
        if position.x < polygon_min_x {
            polygon_min_x = position.x;
        }
        if position.y < polygon_min_y {
            polygon_min_y = position.y;
        }
        position = Point::new(position.x + v.x, position.y + v.y);
    }

    let shift_x = min_x - polygon_min_x;
    let shift_y = min_y - polygon_min_y;
    let shifted: Vec<_> = points
        .iter()
        .map(|p| {
            Point::new(
                clamp(p.x + shift_x, min_x, max_x),
                clamp(p.y + shift_y, min_y, max_y),
            )
        })
        .collect();

    strict_convex_hull(&shifted)
}
