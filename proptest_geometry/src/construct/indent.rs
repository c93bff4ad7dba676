use crate::{
    core::{
        math::{locate_in_ring, orientation, segment_relation, Location, Orientation, SegmentRelation},
        traits::Scalar,
    },
    geometry::{
        ring_edges,
        validation::{is_simple_ring, is_strict_ring},
        Point, Segment,
    },
};

/// Returns true if the new edges `start -> point -> end` keep clear of every obstacle ring and the
/// obstacles stay inside `vertices`.
fn clears_obstacles<T>(
    vertices: &[Point<T>],
    new_edges: &[Segment<T>; 2],
    obstacles: &[&[Point<T>]],
) -> bool
where
    T: Scalar,
{
    obstacles.iter().all(|obstacle| {
        let edges_clear = ring_edges(obstacle).all(|edge| {
            new_edges
                .iter()
                .all(|e| segment_relation(e, &edge) == SegmentRelation::Disjoint)
        });
        edges_clear
            && obstacle
                .first()
                .map_or(true, |&p| locate_in_ring(p, vertices) == Location::Interior)
    })
}

/// Tries to insert `point` between vertex `edge` and its successor of the counterclockwise
/// contour `vertices`, returning true on success.
///
/// The insertion is kept only if the contour stays strict and simple and clear of `obstacles`.
pub fn try_indent<T>(
    vertices: &mut Vec<Point<T>>,
    point: Point<T>,
    edge: usize,
    obstacles: &[&[Point<T>]],
) -> bool
where
    T: Scalar,
{
    let n = vertices.len();
    let start = vertices[edge % n];
    let end = vertices[(edge + 1) % n];
    if orientation(start, end, point) != Orientation::CounterClockwise {
        return false;
    }

    let mut candidate = Vec::with_capacity(n + 1);
    candidate.extend_from_slice(&vertices[..edge % n + 1]);
    candidate.push(point);
    candidate.extend_from_slice(&vertices[edge % n + 1..]);

    if !is_strict_ring(&candidate) || !is_simple_ring(&candidate) {
        return false;
    }

    let new_edges = [Segment::new(start, point), Segment::new(point, end)];
    if !clears_obstacles(&candidate, &new_edges, obstacles) {
        return false;
    }

    *vertices = candidate;
    true
}

/// Grows the counterclockwise contour `vertices` towards `target` vertices by indenting it with
/// `candidates` in order.
///
/// Candidates outside of the contour are skipped. For each candidate the edges are tried starting
/// at the one chosen by the next of `picks`.
pub fn indent_contour<T>(
    vertices: &mut Vec<Point<T>>,
    candidates: &[Point<T>],
    target: usize,
    picks: &[usize],
    obstacles: &[&[Point<T>]],
) where
    T: Scalar,
{
    let mut pick = picks.iter().copied().cycle();
    for &point in candidates.iter() {
        if vertices.len() >= target {
            break;
        }

        if locate_in_ring(point, vertices) != Location::Interior {
            continue;
        }

        let n = vertices.len();
        let first = pick.next().unwrap_or(0) % n;
        for step in 0..n {
            if try_indent(vertices, point, (first + step) % n, obstacles) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{validation::is_concave_contour, Contour};

    fn square() -> Vec<Point<i32>> {
        vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ]
    }

    #[test]
    fn indent_creates_reflex_vertex() {
        let mut vertices = square();
        assert!(try_indent(&mut vertices, Point::new(5, 3), 0, &[]));
        assert_eq!(vertices[1], Point::new(5, 3));
        assert!(is_concave_contour(&Contour::new(vertices)));
    }

    #[test]
    fn indent_rejected_outside_edge() {
        let mut vertices = square();
        assert!(!try_indent(&mut vertices, Point::new(5, -3), 0, &[]));
        // crossing the opposite edges
        assert!(!try_indent(&mut vertices, Point::new(5, 12), 0, &[]));
        assert_eq!(vertices, square());
    }

    #[test]
    fn indent_keeps_obstacle_inside() {
        let hole = [Point::new(4, 1), Point::new(4, 2), Point::new(6, 2), Point::new(6, 1)];
        let mut vertices = square();
        // edges to (5, 3) would cut the hole out of the contour
        assert!(!try_indent(&mut vertices, Point::new(5, 3), 0, &[hole.as_slice()]));
        assert!(try_indent(&mut vertices, Point::new(5, 7), 2, &[hole.as_slice()]));
    }

    #[test]
    fn indent_contour_reaches_target() {
        let mut vertices = square();
        let candidates = [Point::new(5, 2), Point::new(8, 5), Point::new(5, 8), Point::new(2, 5)];
        indent_contour(&mut vertices, &candidates, 7, &[0, 1, 2], &[]);
        assert_eq!(vertices.len(), 7);
        assert!(is_concave_contour(&Contour::new(vertices)));
    }
}
