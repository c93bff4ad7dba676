use proptest::{
    arbitrary::any,
    collection::vec,
    strategy::{BoxedStrategy, Strategy},
};

use super::picks;
use crate::{
    construct::{polygon_from_points, Axis, PolygonPlan},
    core::traits::Scalar,
    geometry::{validation::is_valid_polygon, Polygon},
    strategy::{distinct_prefix, Domain, PolygonSizes, Retry},
    ConfigError,
};

/// Strategy drawing the sizes and picks a polygon is built with.
pub(crate) fn polygon_plans(sizes: PolygonSizes) -> impl Strategy<Value = PolygonPlan> {
    let (_, max_holes) = sizes.holes.resolved();
    (
        sizes.border.range(),
        sizes.holes.range(),
        vec(sizes.hole.range(), max_holes),
        any::<bool>(),
        any::<usize>(),
        picks(),
    )
        .prop_map(
            |(border_size, hole_count, mut hole_sizes, axis, offset, picks)| {
                hole_sizes.truncate(hole_count);
                PolygonPlan {
                    border_size,
                    hole_sizes,
                    axis: Axis::from_flag(axis),
                    offset,
                    picks,
                }
            },
        )
}

/// Returns true if `polygon` is valid and its border, hole count and holes are within `sizes`.
pub(crate) fn polygon_fits<T>(polygon: &Polygon<T>, sizes: &PolygonSizes) -> bool
where
    T: Scalar,
{
    sizes.border.contains(polygon.border.vertex_count())
        && sizes.holes.contains(polygon.holes.len())
        && polygon
            .holes
            .iter()
            .all(|hole| sizes.hole.contains(hole.vertex_count()))
        && is_valid_polygon(polygon)
}

/// Polygons with a counterclockwise border and clockwise holes strictly inside it, holes pairwise
/// disjoint.
pub fn polygons<T>(
    domain: &Domain<T>,
    sizes: PolygonSizes,
) -> Result<BoxedStrategy<Polygon<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate()?;
    let source = (
        polygon_plans(sizes),
        domain.point_pool(sizes.max_point_count()),
    );
    Ok(Retry::new("polygon", source, move |(plan, candidates)| {
        let points = distinct_prefix(&candidates, plan.point_count());
        let polygon = polygon_from_points(&points, &plan)?;
        polygon_fits(&polygon, &sizes).then_some(polygon)
    })
    .boxed())
}
