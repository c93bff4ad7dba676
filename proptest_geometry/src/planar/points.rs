use proptest::strategy::{BoxedStrategy, Just, Strategy};

use crate::{
    core::{math::min_max, traits::Scalar},
    geometry::{Empty, Point, Segment, AABB},
    strategy::{Domain, Retry},
    ConfigError,
};

/// Points of the domain.
pub fn points<T>(domain: &Domain<T>) -> BoxedStrategy<Point<T>>
where
    T: Scalar,
{
    domain.points()
}

/// Non-degenerate segments, endpoints kept in drawn order.
pub fn segments<T>(domain: &Domain<T>) -> Result<BoxedStrategy<Segment<T>>, ConfigError>
where
    T: Scalar,
{
    domain.require_points("segment", 2)?;
    let source = (domain.points(), domain.points());
    Ok(Retry::new("segment", source, |(start, end)| {
        (start != end).then(|| Segment::new(start, end))
    })
    .boxed())
}

/// Boxes with `min_x < max_x` and `min_y < max_y`.
pub fn boxes<T>(domain: &Domain<T>) -> Result<BoxedStrategy<AABB<T>>, ConfigError>
where
    T: Scalar,
{
    domain.require_axis_values("box", 2)?;
    let xs = domain.xs().strategy();
    let ys = domain.ys().strategy();
    let source = (xs.clone(), xs, ys.clone(), ys);
    Ok(Retry::new("box", source, |(x1, x2, y1, y2)| {
        if x1 == x2 || y1 == y2 {
            return None;
        }

        let (min_x, max_x) = min_max(x1, x2);
        let (min_y, max_y) = min_max(y1, y2);
        Some(AABB {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    })
    .boxed())
}

/// Always [Empty].
pub fn empty_geometries() -> BoxedStrategy<Empty> {
    Just(Empty).boxed()
}
