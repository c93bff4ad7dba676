use static_aabb2d_index::AABB;

use super::{Point, Segment};
use crate::core::{
    math::{orientation, Orientation},
    traits::Scalar,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed ring of vertices, the edge from the last vertex back to the first is implied.
///
/// Generated contours are strict (no three consecutive vertices collinear, which also rules out
/// repeated consecutive vertices) and simple (no edges cross, overlap, or touch except for
/// adjacent edges at their shared vertex).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Contour<T = f64> {
    pub vertices: Vec<Point<T>>,
}

impl<T> Contour<T>
where
    T: Scalar,
{
    #[inline]
    pub fn new(vertices: Vec<Point<T>>) -> Self {
        Contour { vertices }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate the closing edges of the contour.
    ///
    /// # Examples
    ///
    /// ```
    /// # use proptest_geometry::geometry::*;
    /// let triangle = Contour::new(vec![Point::new(0, 0), Point::new(2, 0), Point::new(0, 2)]);
    /// let edges: Vec<_> = triangle.edges().collect();
    /// assert_eq!(edges.len(), 3);
    /// assert_eq!(edges[2], Segment::new(Point::new(0, 2), Point::new(0, 0)));
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        ring_edges(&self.vertices)
    }

    /// Orientation of the contour, determined at its lexicographically smallest vertex.
    ///
    /// Only meaningful for strict simple contours.
    pub fn orientation(&self) -> Orientation {
        ring_orientation(&self.vertices)
    }

    /// Returns the contour with vertex order reversed (keeping the first vertex in place).
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        if vertices.len() > 1 {
            vertices[1..].reverse();
        }
        Contour { vertices }
    }

    /// Bounding box of all the vertices.
    pub fn extents(&self) -> Option<AABB<T>> {
        points_extents(&self.vertices)
    }
}

/// Returns the edges of the closed ring formed by `vertices`.
pub(crate) fn ring_edges<T>(vertices: &[Point<T>]) -> impl Iterator<Item = Segment<T>> + '_
where
    T: Scalar,
{
    let n = vertices.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % n]))
}

pub(crate) fn ring_orientation<T>(vertices: &[Point<T>]) -> Orientation
where
    T: Scalar,
{
    let n = vertices.len();
    if n < 3 {
        return Orientation::Collinear;
    }

    let lowest = (0..n)
        .min_by(|&i, &j| vertices[i].lexicographic_cmp(&vertices[j]))
        .unwrap_or(0);

    orientation(
        vertices[(lowest + n - 1) % n],
        vertices[lowest],
        vertices[(lowest + 1) % n],
    )
}

pub(crate) fn points_extents<T>(points: &[Point<T>]) -> Option<AABB<T>>
where
    T: Scalar,
{
    let first = points.first()?;
    let mut result = AABB {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };

    for p in points.iter().skip(1) {
        if p.x < result.min_x {
            result.min_x = p.x;
        }
        if p.y < result.min_y {
            result.min_y = p.y;
        }
        if p.x > result.max_x {
            result.max_x = p.x;
        }
        if p.y > result.max_y {
            result.max_y = p.y;
        }
    }

    Some(result)
}
