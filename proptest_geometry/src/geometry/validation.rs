//! Validity predicates for every generated geometry kind.
//!
//! All predicates are exact for integer coordinates and best effort for floats.
use super::{
    internal::EdgeIndex, ring_edges, ring_orientation, Contour, Discrete, Linear, Mix, Multicontour,
    Multipoint, Multipolygon, Multisegment, Point, Polygon, Polyline, Segment, Shaped,
};
use crate::core::{
    math::{
        locate_in_polygon, locate_in_ring, orientation, point_on_segment, segment_relation,
        Location, Orientation, SegmentRelation,
    },
    traits::Scalar,
};

/// Orientation of every turn of the closed ring, starting with the turn at `vertices[0]`.
pub fn ring_turns<T>(vertices: &[Point<T>]) -> impl Iterator<Item = Orientation> + '_
where
    T: Scalar,
{
    let n = vertices.len();
    (0..n).map(move |i| orientation(vertices[(i + n - 1) % n], vertices[i], vertices[(i + 1) % n]))
}

/// Returns true if the ring has at least 3 vertices and no three consecutive vertices are collinear
/// (which also rules out repeated consecutive vertices).
pub fn is_strict_ring<T>(vertices: &[Point<T>]) -> bool
where
    T: Scalar,
{
    vertices.len() >= 3 && ring_turns(vertices).all(|turn| turn != Orientation::Collinear)
}

/// Returns true if no two edges of the ring have a point in common other than the vertex shared by
/// adjacent edges.
pub fn is_simple_ring<T>(vertices: &[Point<T>]) -> bool
where
    T: Scalar,
{
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let edges: Vec<_> = ring_edges(vertices).collect();
    if edges.iter().any(|e| e.is_degenerate()) {
        return false;
    }

    let index = EdgeIndex::new(&edges);
    let found_violation = index.any_pair(|i, j| {
        let adjacent = j == i + 1 || (i == 0 && j == n - 1);
        let relation = segment_relation(&edges[i], &edges[j]);
        if adjacent {
            relation != SegmentRelation::Touch
        } else {
            relation != SegmentRelation::Disjoint
        }
    });

    !found_violation
}

/// Strict and simple.
#[inline]
pub fn is_valid_contour<T>(contour: &Contour<T>) -> bool
where
    T: Scalar,
{
    is_strict_ring(&contour.vertices) && is_simple_ring(&contour.vertices)
}

/// Valid contour whose turns all have the same orientation.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::geometry::{*, validation::*};
/// let square = Contour::new(vec![
///     Point::new(0, 0),
///     Point::new(2, 0),
///     Point::new(2, 2),
///     Point::new(0, 2),
/// ]);
/// assert!(is_convex_contour(&square));
/// let arrow = Contour::new(vec![
///     Point::new(0, 0),
///     Point::new(2, 1),
///     Point::new(4, 0),
///     Point::new(2, 4),
/// ]);
/// assert!(is_concave_contour(&arrow));
/// ```
pub fn is_convex_contour<T>(contour: &Contour<T>) -> bool
where
    T: Scalar,
{
    if !is_valid_contour(contour) {
        return false;
    }

    let expected = contour.orientation();
    ring_turns(&contour.vertices).all(|turn| turn == expected)
}

/// Valid contour with at least one reflex vertex.
#[inline]
pub fn is_concave_contour<T>(contour: &Contour<T>) -> bool
where
    T: Scalar,
{
    is_valid_contour(contour) && !is_convex_contour(contour)
}

fn all_distinct<T>(points: &[Point<T>]) -> bool
where
    T: Scalar,
{
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.lexicographic_cmp(b));
    sorted.windows(2).all(|pair| pair[0] != pair[1])
}

/// At least 2 vertices, all distinct.
pub fn is_valid_polyline<T>(polyline: &Polyline<T>) -> bool
where
    T: Scalar,
{
    polyline.vertices.len() >= 2 && all_distinct(&polyline.vertices)
}

/// All points distinct.
#[inline]
pub fn is_valid_multipoint<T>(multipoint: &Multipoint<T>) -> bool
where
    T: Scalar,
{
    all_distinct(&multipoint.points)
}

/// Non-degenerate segments with no two crossing or overlapping (touching is allowed).
pub fn is_valid_multisegment<T>(multisegment: &Multisegment<T>) -> bool
where
    T: Scalar,
{
    let segments = &multisegment.segments;
    if segments.iter().any(|s| s.is_degenerate()) {
        return false;
    }

    let index = EdgeIndex::new(segments);
    !index.any_pair(|i, j| {
        matches!(
            segment_relation(&segments[i], &segments[j]),
            SegmentRelation::Cross | SegmentRelation::Overlap
        )
    })
}

/// Returns true if the closed rings share no point and none lies inside another.
pub fn are_rings_disjoint<T>(rings: &[&[Point<T>]]) -> bool
where
    T: Scalar,
{
    let mut edges = Vec::new();
    let mut owners = Vec::new();
    for (ring_index, ring) in rings.iter().enumerate() {
        for edge in ring_edges(ring) {
            edges.push(edge);
            owners.push(ring_index);
        }
    }

    let index = EdgeIndex::new(&edges);
    let edges_meet = index.any_pair(|i, j| {
        owners[i] != owners[j] && segment_relation(&edges[i], &edges[j]) != SegmentRelation::Disjoint
    });
    if edges_meet {
        return false;
    }

    // with no boundary contact one vertex per ring decides nesting
    for (i, inner) in rings.iter().enumerate() {
        for (j, outer) in rings.iter().enumerate() {
            if i == j {
                continue;
            }
            if let Some(&first) = inner.first() {
                if locate_in_ring(first, outer) != Location::Exterior {
                    return false;
                }
            }
        }
    }

    true
}

/// Valid contours, pairwise disjoint and not nested.
pub fn is_valid_multicontour<T>(multicontour: &Multicontour<T>) -> bool
where
    T: Scalar,
{
    if !multicontour.contours.iter().all(is_valid_contour) {
        return false;
    }

    let rings: Vec<_> = multicontour
        .contours
        .iter()
        .map(|c| c.vertices.as_slice())
        .collect();
    are_rings_disjoint(&rings)
}

/// Counterclockwise valid border, clockwise valid holes strictly inside the border, holes pairwise
/// disjoint and not nested.
pub fn is_valid_polygon<T>(polygon: &Polygon<T>) -> bool
where
    T: Scalar,
{
    let border = &polygon.border;
    if !is_valid_contour(border) || ring_orientation(&border.vertices) != Orientation::CounterClockwise
    {
        return false;
    }

    if polygon.holes.iter().any(|hole| {
        !is_valid_contour(hole) || ring_orientation(&hole.vertices) != Orientation::Clockwise
    }) {
        return false;
    }

    let mut edges = Vec::new();
    let mut owners = Vec::new();
    for (ring_index, ring) in polygon.rings().enumerate() {
        for edge in ring.edges() {
            edges.push(edge);
            owners.push(ring_index);
        }
    }

    let index = EdgeIndex::new(&edges);
    let rings_meet = index.any_pair(|i, j| {
        owners[i] != owners[j] && segment_relation(&edges[i], &edges[j]) != SegmentRelation::Disjoint
    });
    if rings_meet {
        return false;
    }

    let holes_inside = polygon
        .holes
        .iter()
        .all(|hole| locate_in_ring(hole.vertices[0], &border.vertices) == Location::Interior);
    if !holes_inside {
        return false;
    }

    for (i, inner) in polygon.holes.iter().enumerate() {
        for (j, outer) in polygon.holes.iter().enumerate() {
            if i != j && locate_in_ring(inner.vertices[0], &outer.vertices) != Location::Exterior {
                return false;
            }
        }
    }

    true
}

/// Valid polygons, pairwise disjoint and not nested.
pub fn is_valid_multipolygon<T>(multipolygon: &Multipolygon<T>) -> bool
where
    T: Scalar,
{
    if !multipolygon.polygons.iter().all(is_valid_polygon) {
        return false;
    }

    let borders: Vec<_> = multipolygon
        .polygons
        .iter()
        .map(|p| p.border.vertices.as_slice())
        .collect();
    are_rings_disjoint(&borders)
}

/// Segments making up a linear geometry.
pub fn linear_edges<T>(linear: &Linear<T>) -> Vec<Segment<T>>
where
    T: Scalar,
{
    match linear {
        Linear::Empty(_) => Vec::new(),
        Linear::Segment(segment) => vec![*segment],
        Linear::Contour(contour) => contour.edges().collect(),
        Linear::Multisegment(multisegment) => multisegment.segments.clone(),
    }
}

fn is_valid_linear<T>(linear: &Linear<T>) -> bool
where
    T: Scalar,
{
    match linear {
        Linear::Empty(_) => true,
        Linear::Segment(segment) => !segment.is_degenerate(),
        Linear::Contour(contour) => is_valid_contour(contour),
        Linear::Multisegment(multisegment) => is_valid_multisegment(multisegment),
    }
}

fn is_valid_shaped<T>(shaped: &Shaped<T>) -> bool
where
    T: Scalar,
{
    match shaped {
        Shaped::Empty(_) => true,
        Shaped::Polygon(polygon) => is_valid_polygon(polygon),
        Shaped::Multipolygon(multipolygon) => is_valid_multipolygon(multipolygon),
    }
}

/// Each part valid on its own and the three parts pairwise disjoint in the plane.
pub fn is_valid_mix<T>(mix: &Mix<T>) -> bool
where
    T: Scalar,
{
    let points: &[Point<T>] = match &mix.discrete {
        Discrete::Empty(_) => &[],
        Discrete::Multipoint(multipoint) => {
            if !is_valid_multipoint(multipoint) {
                return false;
            }
            &multipoint.points
        }
    };

    if !is_valid_linear(&mix.linear) || !is_valid_shaped(&mix.shaped) {
        return false;
    }

    let linear = linear_edges(&mix.linear);
    let polygons = mix.shaped.polygons();

    let point_touches_linear = points
        .iter()
        .any(|&p| linear.iter().any(|s| point_on_segment(p, s.start, s.end)));
    if point_touches_linear {
        return false;
    }

    let outside_shapes = |p: Point<T>| {
        polygons
            .iter()
            .all(|polygon| locate_in_polygon(p, polygon) == Location::Exterior)
    };

    if !points.iter().all(|&p| outside_shapes(p)) {
        return false;
    }

    let shape_edges: Vec<_> = polygons
        .iter()
        .flat_map(|polygon| polygon.rings().flat_map(|ring| ring.edges()))
        .collect();
    let index = EdgeIndex::new(&shape_edges);
    let linear_meets_shapes = linear.iter().any(|segment| {
        index.any_near(segment, |i| {
            segment_relation(segment, &shape_edges[i]) != SegmentRelation::Disjoint
        })
    });
    if linear_meets_shapes {
        return false;
    }

    // no boundary contact left, so each segment is either fully inside or fully outside
    linear.iter().all(|segment| outside_shapes(segment.start))
}
