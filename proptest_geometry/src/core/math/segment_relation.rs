use super::{min_max, orientation, Orientation};
use crate::{core::traits::Scalar, geometry::Segment};

/// Relation between two segments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SegmentRelation {
    /// No points in common.
    Disjoint,
    /// Exactly one point in common which is an endpoint of at least one of the segments.
    Touch,
    /// Exactly one point in common which is interior to both segments.
    Cross,
    /// Collinear segments sharing more than one point.
    Overlap,
}

/// Exact relation between the segments `s1` and `s2`.
///
/// Neither segment may be degenerate.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::core::math::*;
/// # use proptest_geometry::geometry::{Point, Segment};
/// let s = |x1, y1, x2, y2| Segment::new(Point::new(x1, y1), Point::new(x2, y2));
/// assert_eq!(segment_relation(&s(0, 0, 4, 4), &s(0, 4, 4, 0)), SegmentRelation::Cross);
/// assert_eq!(segment_relation(&s(0, 0, 4, 4), &s(4, 4, 8, 0)), SegmentRelation::Touch);
/// assert_eq!(segment_relation(&s(0, 0, 4, 0), &s(2, 0, 8, 0)), SegmentRelation::Overlap);
/// assert_eq!(segment_relation(&s(0, 0, 4, 0), &s(5, 0, 8, 0)), SegmentRelation::Disjoint);
/// ```
pub fn segment_relation<T>(s1: &Segment<T>, s2: &Segment<T>) -> SegmentRelation
where
    T: Scalar,
{
    let (a, b) = (s1.start, s1.end);
    let (c, d) = (s2.start, s2.end);
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);

    if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
        // all four points on one line, lexicographic order is the order along it
        let (a_lo, a_hi) = s1.sorted_endpoints();
        let (c_lo, c_hi) = s2.sorted_endpoints();
        return match (a_hi.lexicographic_cmp(&c_lo), c_hi.lexicographic_cmp(&a_lo)) {
            (std::cmp::Ordering::Less, _) | (_, std::cmp::Ordering::Less) => {
                SegmentRelation::Disjoint
            }
            (std::cmp::Ordering::Equal, _) | (_, std::cmp::Ordering::Equal) => {
                SegmentRelation::Touch
            }
            _ => SegmentRelation::Overlap,
        };
    }

    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 == o2 || o3 == o4 {
        return SegmentRelation::Disjoint;
    }

    if [o1, o2, o3, o4].contains(&Orientation::Collinear) {
        SegmentRelation::Touch
    } else {
        SegmentRelation::Cross
    }
}

/// Returns true if the axis aligned bounding boxes of the segments overlap (closed boxes).
#[inline]
pub fn segment_boxes_overlap<T>(s1: &Segment<T>, s2: &Segment<T>) -> bool
where
    T: Scalar,
{
    let (min_x1, max_x1) = min_max(s1.start.x, s1.end.x);
    let (min_y1, max_y1) = min_max(s1.start.y, s1.end.y);
    let (min_x2, max_x2) = min_max(s2.start.x, s2.end.x);
    let (min_y2, max_y2) = min_max(s2.start.y, s2.end.y);
    min_x1 <= max_x2 && min_x2 <= max_x1 && min_y1 <= max_y2 && min_y2 <= max_y1
}
