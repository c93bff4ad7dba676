use super::{orientation, point_on_segment, Orientation};
use crate::{
    core::traits::Scalar,
    geometry::{Point, Polygon},
};

/// Location of a point relative to a closed region.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Exterior,
    Boundary,
    Interior,
}

/// Locates `point` relative to the region bounded by the closed ring `vertices` (either
/// orientation).
///
/// Uses the winding number, every predicate evaluated exactly.
///
/// # Examples
///
/// ```
/// # use proptest_geometry::core::math::*;
/// # use proptest_geometry::geometry::Point;
/// let square = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)];
/// assert_eq!(locate_in_ring(Point::new(2, 2), &square), Location::Interior);
/// assert_eq!(locate_in_ring(Point::new(4, 1), &square), Location::Boundary);
/// assert_eq!(locate_in_ring(Point::new(5, 1), &square), Location::Exterior);
/// ```
pub fn locate_in_ring<T>(point: Point<T>, vertices: &[Point<T>]) -> Location
where
    T: Scalar,
{
    let n = vertices.len();
    let mut winding = 0i64;
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        if point_on_segment(point, v1, v2) {
            return Location::Boundary;
        }

        if v1.y <= point.y {
            if v2.y > point.y && orientation(v1, v2, point) == Orientation::CounterClockwise {
                winding += 1;
            }
        } else if v2.y <= point.y && orientation(v1, v2, point) == Orientation::Clockwise {
            winding -= 1;
        }
    }

    if winding == 0 {
        Location::Exterior
    } else {
        Location::Interior
    }
}

/// Locates `point` relative to the area of `polygon` (border minus holes).
pub fn locate_in_polygon<T>(point: Point<T>, polygon: &Polygon<T>) -> Location
where
    T: Scalar,
{
    match locate_in_ring(point, &polygon.border.vertices) {
        Location::Interior => {}
        other => return other,
    }

    for hole in polygon.holes.iter() {
        match locate_in_ring(point, &hole.vertices) {
            Location::Exterior => {}
            Location::Boundary => return Location::Boundary,
            Location::Interior => return Location::Exterior,
        }
    }

    Location::Interior
}
