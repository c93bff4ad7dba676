use proptest::{
    arbitrary::any,
    collection::vec,
    strategy::{BoxedStrategy, Strategy, Union},
};

use super::picks;
use crate::{
    config::{
        MIN_CONCAVE_CONTOUR_SIZE, MIN_CONTOUR_SIZE, MIN_POLYLINE_SIZE, RECTANGULAR_CONTOUR_SIZE,
        TRIANGULAR_CONTOUR_SIZE,
    },
    construct::{contour_from_points, star_vertices, valtr_convex_polygon},
    core::{
        math::{min_max, orientation, Orientation},
        traits::Scalar,
    },
    geometry::{
        validation::{is_concave_contour, is_convex_contour, is_valid_contour},
        Contour, Point, Polyline,
    },
    strategy::{distinct_prefix, take_distinct, Domain, Retry, Sizes},
    ConfigError,
};

/// Open polylines of pairwise distinct vertices (self intersections allowed).
pub fn polylines<T>(domain: &Domain<T>, sizes: Sizes) -> Result<BoxedStrategy<Polyline<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("polyline", MIN_POLYLINE_SIZE)?;
    domain.require_points("polyline", sizes.min)?;
    let counts = domain.distinct_counts(&sizes);
    let source = (domain.point_pool(*counts.end()), counts);
    Ok(Retry::new("polyline", source, |(candidates, count)| {
        take_distinct(&candidates, count).map(Polyline::new)
    })
    .boxed())
}

/// Counterclockwise triangles.
pub fn triangular_contours<T>(domain: &Domain<T>) -> BoxedStrategy<Contour<T>>
where
    T: Scalar,
{
    let source = (domain.points(), domain.points(), domain.points());
    Retry::new("triangular contour", source, |(a, b, c)| {
        match orientation(a, b, c) {
            Orientation::CounterClockwise => Some(Contour::new(vec![a, b, c])),
            Orientation::Clockwise => Some(Contour::new(vec![a, c, b])),
            Orientation::Collinear => None,
        }
    })
    .boxed()
}

/// Counterclockwise axis aligned rectangles.
pub fn rectangular_contours<T>(domain: &Domain<T>) -> BoxedStrategy<Contour<T>>
where
    T: Scalar,
{
    let xs = domain.xs().strategy();
    let ys = domain.ys().strategy();
    let source = (xs.clone(), xs, ys.clone(), ys);
    Retry::new("rectangular contour", source, |(x1, x2, y1, y2)| {
        if x1 == x2 || y1 == y2 {
            return None;
        }

        let (min_x, max_x) = min_max(x1, x2);
        let (min_y, max_y) = min_max(y1, y2);
        Some(Contour::new(vec![
            Point::new(min_x, min_y),
            Point::new(max_x, min_y),
            Point::new(max_x, max_y),
            Point::new(min_x, max_y),
        ]))
    })
    .boxed()
}

fn valtr_contours<T>(domain: &Domain<T>, sizes: Sizes) -> BoxedStrategy<Contour<T>>
where
    T: Scalar,
{
    let (_, max) = sizes.resolved();
    let source = (
        vec(domain.xs().strategy(), max),
        vec(domain.ys().strategy(), max),
        sizes.range(),
        vec(any::<bool>(), max),
        vec(any::<bool>(), max),
        vec(any::<usize>(), max),
    );
    Retry::new(
        "convex contour",
        source,
        move |(xs, ys, count, x_sides, y_sides, permutation)| {
            let vertices = valtr_convex_polygon(
                &xs[..count],
                &ys[..count],
                &x_sides,
                &y_sides,
                &permutation,
            );
            let contour = Contour::new(vertices);
            (sizes.contains(contour.vertex_count()) && is_convex_contour(&contour))
                .then_some(contour)
        },
    )
    .boxed()
}

/// Counterclockwise convex contours: triangles, rectangles and random convex polygons.
pub fn convex_contours<T>(
    domain: &Domain<T>,
    sizes: Sizes,
) -> Result<BoxedStrategy<Contour<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("convex contour", MIN_CONTOUR_SIZE)?;
    let mut variants = vec![valtr_contours(domain, sizes)];
    if sizes.contains(TRIANGULAR_CONTOUR_SIZE) {
        variants.push(triangular_contours(domain));
    }
    if sizes.contains(RECTANGULAR_CONTOUR_SIZE) {
        variants.push(rectangular_contours(domain));
    }

    Ok(Union::new(variants).boxed())
}

/// Counterclockwise contours with at least one reflex vertex: the strict convex hull of a point
/// pool, reduced below the drawn size, indented with the points inside it.
pub fn concave_contours<T>(
    domain: &Domain<T>,
    sizes: Sizes,
) -> Result<BoxedStrategy<Contour<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("concave contour", MIN_CONCAVE_CONTOUR_SIZE)?;
    let (_, max) = sizes.resolved();
    let source = (domain.point_pool(2 * max), sizes.range(), any::<usize>(), picks());
    Ok(Retry::new(
        "concave contour",
        source,
        move |(candidates, target, offset, picks)| {
            let points = distinct_prefix(&candidates, 2 * target);
            let vertices = contour_from_points(&points, target, target - 1, offset, &picks)?;
            let contour = Contour::new(vertices);
            (sizes.contains(contour.vertex_count()) && is_concave_contour(&contour))
                .then_some(contour)
        },
    )
    .boxed())
}

/// Counterclockwise contours whose vertices are ordered by angle around their centroid.
pub fn star_contours<T>(
    domain: &Domain<T>,
    sizes: Sizes,
) -> Result<BoxedStrategy<Contour<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("star contour", MIN_CONTOUR_SIZE)?;
    let (_, max) = sizes.resolved();
    let source = (domain.point_pool(max), sizes.range());
    Ok(Retry::new("star contour", source, move |(candidates, count)| {
        let points = take_distinct(&candidates, count)?;
        let mut contour = Contour::new(star_vertices(&points));
        if !sizes.contains(contour.vertex_count()) || !is_valid_contour(&contour) {
            return None;
        }
        if contour.orientation() == Orientation::Clockwise {
            contour = contour.reversed();
        }
        Some(contour)
    })
    .boxed())
}

/// Strict simple counterclockwise contours of any shape: convex, concave (when the sizes allow
/// 4 or more vertices) and star shaped.
pub fn contours<T>(domain: &Domain<T>, sizes: Sizes) -> Result<BoxedStrategy<Contour<T>>, ConfigError>
where
    T: Scalar,
{
    let sizes = sizes.validate("contour", MIN_CONTOUR_SIZE)?;
    let mut variants = vec![convex_contours(domain, sizes)?, star_contours(domain, sizes)?];
    if let Some(concave_sizes) = sizes.raised_to(MIN_CONCAVE_CONTOUR_SIZE) {
        variants.push(concave_contours(domain, concave_sizes)?);
    }

    Ok(Union::new(variants).boxed())
}
