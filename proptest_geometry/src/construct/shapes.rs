use super::{
    indent_contour, select_vertices, sort_along, split_into_slabs, strict_convex_hull,
    strictly_inside_convex, Axis,
};
use crate::{
    core::traits::Scalar,
    geometry::{Contour, Point, Polygon},
};

/// Counterclockwise contour with up to `target` vertices built from `points`: their strict convex
/// hull, reduced to at most `max_hull` vertices, then indented with the points strictly inside it.
///
/// Passing `max_hull < target` forces at least one indentation (a reflex vertex) whenever the
/// target is reached. Returns `None` if the points are all collinear.
pub fn contour_from_points<T>(
    points: &[Point<T>],
    target: usize,
    max_hull: usize,
    offset: usize,
    picks: &[usize],
) -> Option<Vec<Point<T>>>
where
    T: Scalar,
{
    let mut vertices = strict_convex_hull(points);
    if vertices.len() < 3 {
        return None;
    }

    let limit = target.min(max_hull).max(3);
    if vertices.len() > limit {
        vertices = select_vertices(&vertices, limit, offset);
    }

    let inner: Vec<_> = points
        .iter()
        .copied()
        .filter(|&p| strictly_inside_convex(p, &vertices))
        .collect();
    indent_contour(&mut vertices, &inner, target, picks, &[]);
    Some(vertices)
}

/// Drawn parameters of a single polygon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolygonPlan {
    pub border_size: usize,
    pub hole_sizes: Vec<usize>,
    pub axis: Axis,
    pub offset: usize,
    pub picks: Vec<usize>,
}

impl PolygonPlan {
    /// Number of distinct points to draw for the polygon.
    pub fn point_count(&self) -> usize {
        2 * self.border_size + self.hole_sizes.iter().sum::<usize>()
    }
}

/// Polygon built from `points` following `plan`: the border is the strict convex hull (reduced to
/// the border size), the points strictly inside it are split into strictly separated slabs along
/// the plan's axis, one hole per slab, and the leftover inside points indent the border while
/// every hole stays strictly inside.
///
/// Holes are returned clockwise. Sizes may fall short of the plan, callers validate the result.
pub fn polygon_from_points<T>(points: &[Point<T>], plan: &PolygonPlan) -> Option<Polygon<T>>
where
    T: Scalar,
{
    let mut border = strict_convex_hull(points);
    if border.len() < 3 {
        return None;
    }
    if border.len() > plan.border_size {
        border = select_vertices(&border, plan.border_size.max(3), plan.offset);
    }

    let inner: Vec<_> = points
        .iter()
        .copied()
        .filter(|&p| strictly_inside_convex(p, &border))
        .collect();
    let mut sorted = inner.clone();
    sort_along(&mut sorted, plan.axis);
    let slabs = split_into_slabs(&sorted, &plan.hole_sizes, plan.axis)?;

    let mut holes = Vec::with_capacity(slabs.len());
    for (slab, &size) in slabs.iter().zip(plan.hole_sizes.iter()) {
        holes.push(contour_from_points(slab, size, size, plan.offset, &plan.picks)?);
    }

    let leftover: Vec<_> = inner
        .into_iter()
        .filter(|p| !slabs.iter().any(|slab| slab.contains(p)))
        .collect();
    let obstacles: Vec<_> = holes.iter().map(|h| h.as_slice()).collect();
    indent_contour(
        &mut border,
        &leftover,
        plan.border_size,
        &plan.picks,
        &obstacles,
    );

    let holes = holes
        .into_iter()
        .map(|h| Contour::new(h).reversed())
        .collect();
    Some(Polygon::new(Contour::new(border), holes))
}
