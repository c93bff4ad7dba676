use std::cmp::Ordering;

use crate::{
    core::{
        math::{orientation, sort_dedup_points, Orientation},
        traits::Scalar,
    },
    geometry::Point,
};

/// Removes vertices lying on the line through their neighbours until none remain (or fewer than 3
/// vertices are left).
pub fn compress_collinear<T>(vertices: &mut Vec<Point<T>>)
where
    T: Scalar,
{
    let mut i = 0;
    let mut stable_steps = 0;
    while vertices.len() >= 3 && stable_steps < vertices.len() {
        let n = vertices.len();
        let index = i % n;
        let prev = vertices[(index + n - 1) % n];
        let next = vertices[(index + 1) % n];
        if orientation(prev, vertices[index], next) == Orientation::Collinear {
            vertices.remove(index);
            stable_steps = 0;
            i = index + n - 2;
        } else {
            stable_steps += 1;
            i = index + 1;
        }
    }
}

/// Orders `points` by angle around their centroid, keeping the farthest of points sharing an
/// angle, then compresses collinear vertices.
///
/// The result is star shaped about the centroid for well spread points but is not guaranteed to be
/// simple (angles are compared in floating point), callers validate it.
pub fn star_vertices<T>(points: &[Point<T>]) -> Vec<Point<T>>
where
    T: Scalar,
{
    let mut points = points.to_vec();
    sort_dedup_points(&mut points);
    if points.len() < 3 {
        return points;
    }

    let count = points.len() as f64;
    let cx = points.iter().map(|p| p.x.as_f64()).sum::<f64>() / count;
    let cy = points.iter().map(|p| p.y.as_f64()).sum::<f64>() / count;

    let mut keyed: Vec<_> = points
        .into_iter()
        .map(|p| {
            let dx = p.x.as_f64() - cx;
            let dy = p.y.as_f64() - cy;
            (dy.atan2(dx), dx * dx + dy * dy, p)
        })
        .collect();
    keyed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    });

    let mut vertices: Vec<Point<T>> = Vec::with_capacity(keyed.len());
    let mut last_angle = None;
    for (angle, _, p) in keyed.into_iter() {
        if last_angle == Some(angle) {
            // sorted by distance within one angle, keep the farthest
            if let Some(last) = vertices.last_mut() {
                *last = p;
            }
        } else {
            vertices.push(p);
            last_angle = Some(angle);
        }
    }

    compress_collinear(&mut vertices);
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{validation::is_valid_contour, Contour};

    #[test]
    fn compress_removes_every_collinear_vertex() {
        let mut vertices = vec![
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(4, 0),
            Point::new(4, 2),
            Point::new(4, 4),
            Point::new(0, 4),
            Point::new(0, 2),
        ];
        compress_collinear(&mut vertices);
        assert_eq!(
            vertices,
            vec![Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)]
        );
    }

    #[test]
    fn compress_collinear_ring_collapses() {
        let mut vertices = vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)];
        compress_collinear(&mut vertices);
        assert_eq!(vertices.len(), 2);
    }

    #[test]
    fn star_of_scattered_points_is_valid() {
        let points = vec![
            Point::new(0, 0),
            Point::new(5, 1),
            Point::new(9, -1),
            Point::new(8, 6),
            Point::new(4, 4),
            Point::new(1, 9),
            Point::new(-3, 5),
        ];
        let star = star_vertices(&points);
        assert_eq!(star.len(), 7);
        assert!(is_valid_contour(&Contour::new(star)));
    }
}
