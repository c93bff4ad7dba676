use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder};

use crate::{
    core::{math::segment_boxes_overlap, traits::Scalar},
    geometry::Segment,
};

/// Spatial index over the bounding boxes of a set of edges, used to find candidate edge pairs
/// without testing every pair.
///
/// Boxes are stored as `f64` and widened slightly so that the index never misses a pair whose exact
/// boxes overlap, candidate pairs are then filtered with exact comparisons. If a coordinate cannot
/// be represented the index falls back to testing all pairs.
pub(crate) struct EdgeIndex<'a, T> {
    edges: &'a [Segment<T>],
    index: Option<StaticAABB2DIndex<f64>>,
}

#[inline]
fn widen_down(v: f64) -> f64 {
    v - (v.abs() * 4.0 * f64::EPSILON + f64::MIN_POSITIVE)
}

#[inline]
fn widen_up(v: f64) -> f64 {
    v + (v.abs() * 4.0 * f64::EPSILON + f64::MIN_POSITIVE)
}

fn widened_box<T>(edge: &Segment<T>) -> Option<[f64; 4]>
where
    T: Scalar,
{
    let (x1, y1) = (edge.start.x.as_f64(), edge.start.y.as_f64());
    let (x2, y2) = (edge.end.x.as_f64(), edge.end.y.as_f64());
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return None;
    }

    Some([
        widen_down(x1.min(x2)),
        widen_down(y1.min(y2)),
        widen_up(x1.max(x2)),
        widen_up(y1.max(y2)),
    ])
}

fn build_index<T>(edges: &[Segment<T>]) -> Option<StaticAABB2DIndex<f64>>
where
    T: Scalar,
{
    let mut builder = StaticAABB2DIndexBuilder::new(edges.len());
    for edge in edges.iter() {
        let [min_x, min_y, max_x, max_y] = widened_box(edge)?;
        builder.add(min_x, min_y, max_x, max_y);
    }

    match builder.build() {
        Ok(index) => Some(index),
        Err(StaticAABB2DIndexBuildError::ItemCountError { .. }) => {
            unreachable!("internal library error: count mismatch when building spatial index")
        }
        Err(StaticAABB2DIndexBuildError::NumericCastError) => None,
    }
}

impl<'a, T> EdgeIndex<'a, T>
where
    T: Scalar,
{
    pub fn new(edges: &'a [Segment<T>]) -> Self {
        let index = if edges.is_empty() {
            None
        } else {
            build_index(edges)
        };
        EdgeIndex { edges, index }
    }

    /// Visit the indexes of edges whose boxes overlap the box of `segment`, stopping (and returning
    /// true) as soon as `visitor` returns true.
    pub fn any_near<F>(&self, segment: &Segment<T>, mut visitor: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        match (&self.index, widened_box(segment)) {
            (Some(index), Some([min_x, min_y, max_x, max_y])) => {
                let mut query_stack = Vec::new();
                index
                    .query_with_stack(min_x, min_y, max_x, max_y, &mut query_stack)
                    .into_iter()
                    .filter(|&i| segment_boxes_overlap(&self.edges[i], segment))
                    .any(&mut visitor)
            }
            _ => (0..self.edges.len())
                .filter(|&i| segment_boxes_overlap(&self.edges[i], segment))
                .any(&mut visitor),
        }
    }

    /// Visit every pair `(i, j)` with `i < j` of edges whose boxes overlap, stopping (and returning
    /// true) as soon as `visitor` returns true.
    pub fn any_pair<F>(&self, mut visitor: F) -> bool
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut query_stack = Vec::new();
        for (i, edge) in self.edges.iter().enumerate() {
            let found = match (&self.index, widened_box(edge)) {
                (Some(index), Some([min_x, min_y, max_x, max_y])) => index
                    .query_with_stack(min_x, min_y, max_x, max_y, &mut query_stack)
                    .into_iter()
                    .filter(|&j| j > i && segment_boxes_overlap(edge, &self.edges[j]))
                    .any(|j| visitor(i, j)),
                _ => (i + 1..self.edges.len())
                    .filter(|&j| segment_boxes_overlap(edge, &self.edges[j]))
                    .any(|j| visitor(i, j)),
            };

            if found {
                return true;
            }
        }

        false
    }
}
