use proptest::{
    arbitrary::any,
    collection::vec,
    strategy::{BoxedStrategy, Strategy, Union},
};

use super::{
    picks,
    polygons::{polygon_fits, polygon_plans},
};
use crate::{
    config::{MIN_CONTOUR_SIZE, MIN_MULTI_SIZE},
    construct::{contour_from_points, polygon_from_points, sort_along, split_into_slabs, Axis},
    core::{
        math::{segment_relation, SegmentRelation},
        traits::Scalar,
    },
    geometry::{
        ring_edges,
        validation::{is_valid_multicontour, is_valid_multipolygon, is_valid_multisegment},
        Contour, Multicontour, Multipoint, Multipolygon, Multisegment, Point, Segment,
    },
    strategy::{candidate_count, distinct_prefix, take_distinct, Domain, PolygonSizes, Retry, Sizes},
    ConfigError,
};

/// Collections of pairwise distinct points.
pub fn multipoints<T>(
    domain: &Domain<T>,
    sizes: Sizes,
) -> Result<BoxedStrategy<Multipoint<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("multipoint", MIN_MULTI_SIZE)?;
    domain.require_points("multipoint", sizes.min)?;
    let counts = domain.distinct_counts(&sizes);
    let source = (domain.point_pool(*counts.end()), counts);
    Ok(Retry::new("multipoint", source, |(candidates, count)| {
        take_distinct(&candidates, count).map(Multipoint::new)
    })
    .boxed())
}

fn accept_multisegment<T>(segments: Vec<Segment<T>>, sizes: &Sizes) -> Option<Multisegment<T>>
where
    T: Scalar,
{
    let multisegment = Multisegment::new(segments);
    (sizes.contains(multisegment.segments.len()) && is_valid_multisegment(&multisegment))
        .then_some(multisegment)
}

/// Chains of axis aligned segments sharing a coordinate, consecutive segments touching.
fn axis_chains<T>(domain: &Domain<T>, sizes: Sizes) -> BoxedStrategy<Multisegment<T>>
where
    T: Scalar,
{
    let (_, max) = sizes.resolved();
    let source = (
        any::<bool>(),
        domain.xs().strategy(),
        domain.ys().strategy(),
        vec(domain.xs().strategy(), candidate_count(max + 1)),
        vec(domain.ys().strategy(), candidate_count(max + 1)),
        sizes.range(),
    );
    Retry::new(
        "multisegment chain",
        source,
        move |(vertical, x, y, xs, ys, count)| {
            let segments = if count == 0 {
                Vec::new()
            } else {
                let axis_values = if vertical { &ys } else { &xs };
                let mut values = take_distinct(axis_values, count + 1)?;
                values.sort_by(|a, b| a.scalar_cmp(b));
                let point = |v: T| {
                    if vertical {
                        Point::new(x, v)
                    } else {
                        Point::new(v, y)
                    }
                };
                values
                    .windows(2)
                    .map(|pair| Segment::new(point(pair[0]), point(pair[1])))
                    .collect()
            };
            accept_multisegment(segments, &sizes)
        },
    )
    .boxed()
}

/// Runs of consecutive edges of a strict simple contour.
fn contour_edge_runs<T>(domain: &Domain<T>, sizes: Sizes) -> BoxedStrategy<Multisegment<T>>
where
    T: Scalar,
{
    let (_, max) = sizes.resolved();
    let source = (
        domain.point_pool(2 * max.max(MIN_CONTOUR_SIZE)),
        sizes.range(),
        any::<usize>(),
        picks(),
    );
    Retry::new(
        "multisegment contour edges",
        source,
        move |(candidates, count, offset, picks)| {
            let segments = if count == 0 {
                Vec::new()
            } else {
                let target = count.max(MIN_CONTOUR_SIZE);
                let points = distinct_prefix(&candidates, 2 * target);
                let vertices = contour_from_points(&points, target, target, offset, &picks)?;
                let edges: Vec<_> = ring_edges(&vertices).collect();
                if edges.len() < count {
                    return None;
                }
                let start = offset % edges.len();
                (0..count)
                    .map(|i| edges[(start + i) % edges.len()])
                    .collect()
            };
            accept_multisegment(segments, &sizes)
        },
    )
    .boxed()
}

/// Random segments accepted one by one when they neither cross nor overlap the accepted ones.
fn incremental_segments<T>(domain: &Domain<T>, sizes: Sizes) -> BoxedStrategy<Multisegment<T>>
where
    T: Scalar,
{
    let (_, max) = sizes.resolved();
    let source = (
        vec((domain.points(), domain.points()), candidate_count(max)),
        sizes.range(),
    );
    Retry::new(
        "multisegment incremental",
        source,
        move |(candidates, count)| {
            let mut accepted: Vec<Segment<T>> = Vec::with_capacity(count);
            for &(start, end) in candidates.iter() {
                if accepted.len() == count {
                    break;
                }
                if start == end {
                    continue;
                }

                let segment = Segment::new(start, end);
                let conflicts = accepted.iter().any(|other| {
                    matches!(
                        segment_relation(other, &segment),
                        SegmentRelation::Cross | SegmentRelation::Overlap
                    )
                });
                if !conflicts {
                    accepted.push(segment);
                }
            }
            accept_multisegment(accepted, &sizes)
        },
    )
    .boxed()
}

/// Collections of non-degenerate segments, no two crossing or overlapping (touching at a point is
/// allowed).
pub fn multisegments<T>(
    domain: &Domain<T>,
    sizes: Sizes,
) -> Result<BoxedStrategy<Multisegment<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("multisegment", MIN_MULTI_SIZE)?;
    if sizes.min > 0 {
        domain.require_points("multisegment", 2)?;
    }

    let chain_values = sizes.min as u128 + 1;
    let chains_fit = [domain.xs().cardinality(), domain.ys().cardinality()]
        .iter()
        .any(|c| c.map_or(true, |c| c >= chain_values));

    let mut variants = vec![
        contour_edge_runs(domain, sizes),
        incremental_segments(domain, sizes),
    ];
    if chains_fit {
        variants.push(axis_chains(domain, sizes));
    }

    Ok(Union::new(variants).boxed())
}

/// Collections of strict simple contours, pairwise disjoint and not nested.
///
/// Each contour is built from its own slab of points strictly separated from the others along a
/// drawn axis.
pub fn multicontours<T>(
    domain: &Domain<T>,
    sizes: Sizes,
    contour_sizes: Sizes,
) -> Result<BoxedStrategy<Multicontour<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("multicontour", MIN_MULTI_SIZE)?;
    let contour_sizes = contour_sizes.validate("multicontour contour", MIN_CONTOUR_SIZE)?;
    let (_, max_count) = sizes.resolved();
    let (_, max_size) = contour_sizes.resolved();
    let source = (
        sizes.range(),
        vec(contour_sizes.range(), max_count),
        any::<bool>(),
        any::<usize>(),
        picks(),
        domain.point_pool(2 * max_count * max_size),
    );
    Ok(Retry::new(
        "multicontour",
        source,
        move |(count, mut targets, axis, offset, picks, candidates)| {
            targets.truncate(count);
            let axis = Axis::from_flag(axis);
            let slab_sizes: Vec<_> = targets.iter().map(|t| 2 * t).collect();
            let mut points = distinct_prefix(&candidates, slab_sizes.iter().sum());
            sort_along(&mut points, axis);
            let slabs = split_into_slabs(&points, &slab_sizes, axis)?;

            let mut contours = Vec::with_capacity(count);
            for (slab, &target) in slabs.iter().zip(targets.iter()) {
                let vertices = contour_from_points(slab, target, target, offset, &picks)?;
                contours.push(Contour::new(vertices));
            }

            let multicontour = Multicontour::new(contours);
            let sizes_fit = multicontour
                .contours
                .iter()
                .all(|c| contour_sizes.contains(c.vertex_count()));
            (sizes_fit && is_valid_multicontour(&multicontour)).then_some(multicontour)
        },
    )
    .boxed())
}

/// Collections of polygons, pairwise disjoint and not nested.
///
/// Each polygon is built from its own slab of points strictly separated from the others along a
/// drawn axis.
pub fn multipolygons<T>(
    domain: &Domain<T>,
    sizes: Sizes,
    polygon_sizes: PolygonSizes,
) -> Result<BoxedStrategy<Multipolygon<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("multipolygon", MIN_MULTI_SIZE)?;
    let polygon_sizes = polygon_sizes.validate()?;
    let (_, max_count) = sizes.resolved();
    let source = (
        sizes.range(),
        vec(polygon_plans(polygon_sizes), max_count),
        any::<bool>(),
        domain.point_pool(max_count * polygon_sizes.max_point_count()),
    );
    Ok(Retry::new(
        "multipolygon",
        source,
        move |(count, mut plans, axis, candidates)| {
            plans.truncate(count);
            let axis = Axis::from_flag(axis);
            let slab_sizes: Vec<_> = plans.iter().map(|plan| plan.point_count()).collect();
            let mut points = distinct_prefix(&candidates, slab_sizes.iter().sum());
            sort_along(&mut points, axis);
            let slabs = split_into_slabs(&points, &slab_sizes, axis)?;

            let mut polygons = Vec::with_capacity(count);
            for (slab, plan) in slabs.iter().zip(plans.iter()) {
                let polygon = polygon_from_points(slab, plan)?;
                if !polygon_fits(&polygon, &polygon_sizes) {
                    return None;
                }
                polygons.push(polygon);
            }

            let multipolygon = Multipolygon::new(polygons);
            is_valid_multipolygon(&multipolygon).then_some(multipolygon)
        },
    )
    .boxed())
}
