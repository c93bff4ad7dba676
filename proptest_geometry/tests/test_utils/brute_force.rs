//! Quadratic reference checks that do not go through the spatial index.
use proptest_geometry::{
    core::math::{
        locate_in_ring, orientation, segment_relation, Location, Orientation, SegmentRelation,
    },
    geometry::{Contour, Point, Segment},
};

pub fn edges(vertices: &[Point<i32>]) -> Vec<Segment<i32>> {
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

pub fn turns(vertices: &[Point<i32>]) -> Vec<Orientation> {
    let n = vertices.len();
    (0..n)
        .map(|i| orientation(vertices[(i + n - 1) % n], vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// Twice the signed area of the ring, positive for counterclockwise rings.
pub fn doubled_area(vertices: &[Point<i32>]) -> i64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

pub fn is_strict(vertices: &[Point<i32>]) -> bool {
    vertices.len() >= 3 && turns(vertices).iter().all(|&t| t != Orientation::Collinear)
}

pub fn is_simple(vertices: &[Point<i32>]) -> bool {
    let edges = edges(vertices);
    let n = edges.len();
    for i in 0..n {
        for j in i + 1..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            let relation = segment_relation(&edges[i], &edges[j]);
            if adjacent && relation != SegmentRelation::Touch {
                return false;
            }
            if !adjacent && relation != SegmentRelation::Disjoint {
                return false;
            }
        }
    }
    true
}

pub fn is_counterclockwise(contour: &Contour<i32>) -> bool {
    doubled_area(&contour.vertices) > 0
}

/// Rings share no point and neither lies inside the other.
pub fn rings_apart(a: &[Point<i32>], b: &[Point<i32>]) -> bool {
    let edges_apart = edges(a).iter().all(|e1| {
        edges(b)
            .iter()
            .all(|e2| segment_relation(e1, e2) == SegmentRelation::Disjoint)
    });
    edges_apart
        && a.iter().all(|&p| locate_in_ring(p, b) == Location::Exterior)
        && b.iter().all(|&p| locate_in_ring(p, a) == Location::Exterior)
}

/// `inner` lies strictly inside `outer`.
pub fn ring_inside(inner: &[Point<i32>], outer: &[Point<i32>]) -> bool {
    let edges_apart = edges(inner).iter().all(|e1| {
        edges(outer)
            .iter()
            .all(|e2| segment_relation(e1, e2) == SegmentRelation::Disjoint)
    });
    edges_apart && inner.iter().all(|&p| locate_in_ring(p, outer) == Location::Interior)
}
