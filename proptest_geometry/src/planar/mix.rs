use proptest::{
    arbitrary::any,
    collection::vec,
    strategy::{BoxedStrategy, Strategy},
};

use super::{
    picks,
    polygons::{polygon_fits, polygon_plans},
};
use crate::{
    config::MIN_CONTOUR_SIZE,
    construct::{
        contour_from_points, polygon_from_points, shuffle_with, sort_along, split_into_slabs, Axis,
        PolygonPlan,
    },
    core::traits::Scalar,
    geometry::{
        validation::{is_valid_mix, linear_edges},
        Contour, Discrete, Empty, Linear, Mix, Multipoint, Multipolygon, Multisegment, Point,
        Segment, Shaped,
    },
    strategy::{distinct_prefix, Domain, MixSizes, Retry},
    ConfigError,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Part {
    Discrete,
    Linear,
    Shaped,
}

fn build_linear<T>(
    points: &[Point<T>],
    segment_count: usize,
    as_contour: bool,
    offset: usize,
    picks: &[usize],
) -> Option<Linear<T>>
where
    T: Scalar,
{
    let linear = match segment_count {
        0 => Linear::Empty(Empty),
        n if as_contour && n >= MIN_CONTOUR_SIZE => {
            let vertices = contour_from_points(points, n, n, offset, picks)?;
            Linear::Contour(Contour::new(vertices))
        }
        1 => Linear::Segment(Segment::new(points[0], points[1])),
        // consecutive points along the slab order give pairwise disjoint segments
        _ => Linear::Multisegment(Multisegment::new(
            points
                .chunks_exact(2)
                .map(|pair| Segment::new(pair[0], pair[1]))
                .collect(),
        )),
    };

    Some(linear)
}

fn build_shaped<T>(slabs: &[Vec<Point<T>>], plans: &[PolygonPlan]) -> Option<Shaped<T>>
where
    T: Scalar,
{
    let mut polygons = slabs
        .iter()
        .zip(plans.iter())
        .map(|(slab, plan)| polygon_from_points(slab, plan))
        .collect::<Option<Vec<_>>>()?;

    let shaped = match polygons.len() {
        0 => Shaped::Empty(Empty),
        1 => Shaped::Polygon(polygons.remove(0)),
        _ => Shaped::Multipolygon(Multipolygon::new(polygons)),
    };

    Some(shaped)
}

/// Mixes of a discrete, a linear and a shaped part, pairwise disjoint in the plane.
///
/// The parts are built in strictly separated slabs of one drawn point pool, in a drawn order along
/// a drawn axis, then checked with the full mix validity predicate. The linear part is empty for 0
/// segments, a segment for 1, and a multisegment or (for 3 or more, by a drawn choice) a contour
/// otherwise. The shaped part is empty for 0 polygons, a polygon for 1 and a multipolygon
/// otherwise.
pub fn mixes<T>(domain: &Domain<T>, sizes: MixSizes) -> Result<BoxedStrategy<Mix<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate()?;
    let (_, max_points) = sizes.points.resolved();
    let (_, max_segments) = sizes.segments.resolved();
    let (_, max_polygons) = sizes.polygons.resolved();
    let pool_size =
        max_points + 2 * max_segments + max_polygons * sizes.polygon.max_point_count();
    let source = (
        (sizes.points.range(), sizes.segments.range(), sizes.polygons.range()),
        vec(polygon_plans(sizes.polygon), max_polygons),
        (any::<bool>(), any::<bool>(), vec(any::<usize>(), 3)),
        (any::<usize>(), picks()),
        domain.point_pool(pool_size),
    );

    Ok(Retry::new("mix", source, move |draw| {
        let (
            (point_count, segment_count, polygon_count),
            mut plans,
            (as_contour, axis, order),
            (offset, picks),
            candidates,
        ) = draw;
        plans.truncate(polygon_count);
        let axis = Axis::from_flag(axis);

        let mut parts = [Part::Discrete, Part::Linear, Part::Shaped];
        shuffle_with(&mut parts, &order);

        let mut slab_sizes = Vec::with_capacity(2 + plans.len());
        for part in parts.iter() {
            match part {
                Part::Discrete => slab_sizes.push(point_count),
                Part::Linear => slab_sizes.push(2 * segment_count),
                Part::Shaped => slab_sizes.extend(plans.iter().map(|plan| plan.point_count())),
            }
        }

        let mut points = distinct_prefix(&candidates, slab_sizes.iter().sum());
        sort_along(&mut points, axis);
        let mut slabs = split_into_slabs(&points, &slab_sizes, axis)?.into_iter();

        let mut discrete = Discrete::Empty(Empty);
        let mut linear = Linear::Empty(Empty);
        let mut shaped = Shaped::Empty(Empty);
        for part in parts.iter() {
            match part {
                Part::Discrete => {
                    let slab = slabs.next()?;
                    if !slab.is_empty() {
                        discrete = Discrete::Multipoint(Multipoint::new(slab));
                    }
                }
                Part::Linear => {
                    let slab = slabs.next()?;
                    linear = build_linear(&slab, segment_count, as_contour, offset, &picks)?;
                }
                Part::Shaped => {
                    let shaped_slabs: Vec<_> = slabs.by_ref().take(plans.len()).collect();
                    shaped = build_shaped(&shaped_slabs, &plans)?;
                }
            }
        }

        let linear_count = linear_edges(&linear).len();
        let polygons_fit = shaped
            .polygons()
            .iter()
            .all(|polygon| polygon_fits(polygon, &sizes.polygon));
        let mix = Mix {
            discrete,
            linear,
            shaped,
        };
        (sizes.segments.contains(linear_count)
            && sizes.polygons.contains(mix.shaped.polygons().len())
            && polygons_fit
            && is_valid_mix(&mix))
        .then_some(mix)
    })
    .boxed())
}
