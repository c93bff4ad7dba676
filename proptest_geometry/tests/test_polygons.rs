mod test_utils;

mod test_polygons {
    use proptest::{prelude::*, strategy::ValueTree, test_runner::TestRunner};
    use proptest_geometry::{
        core::math::{locate_in_polygon, Location, Orientation},
        geometry::{validation::is_valid_polygon, Point, Polygon},
        planar::polygons,
        strategy::{PolygonSizes, Sizes},
    };

    use super::test_utils::{
        brute_force::{doubled_area, is_simple, is_strict, rings_apart, ring_inside},
        domain, in_domain,
    };

    fn with_holes() -> PolygonSizes {
        PolygonSizes {
            border: Sizes::between(3, 10),
            holes: Sizes::between(1, 3),
            hole: Sizes::between(4, 8),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn polygons_with_holes(polygon in polygons(&domain(), with_holes()).unwrap()) {
            let border = &polygon.border.vertices;
            prop_assert!((3..=10).contains(&border.len()));
            prop_assert!((1..=3).contains(&polygon.holes.len()));
            prop_assert!(border.iter().all(in_domain));
            prop_assert!(is_strict(border) && is_simple(border));
            prop_assert!(doubled_area(border) > 0);

            for (i, hole) in polygon.holes.iter().enumerate() {
                let vertices = &hole.vertices;
                prop_assert!((4..=8).contains(&vertices.len()));
                prop_assert!(is_strict(vertices) && is_simple(vertices));
                prop_assert!(doubled_area(vertices) < 0);
                prop_assert!(ring_inside(vertices, border));
                for other in &polygon.holes[i + 1..] {
                    prop_assert!(rings_apart(vertices, &other.vertices));
                }
            }
            prop_assert!(is_valid_polygon(&polygon));
        }

        #[test]
        fn polygons_without_holes(
            polygon in polygons(&domain(), PolygonSizes::without_holes(Sizes::between(3, 12))).unwrap()
        ) {
            prop_assert!(polygon.holes.is_empty());
            prop_assert!((3..=12).contains(&polygon.border.vertex_count()));
            prop_assert_eq!(polygon.border.orientation(), Orientation::CounterClockwise);
            prop_assert_eq!(Polygon::from_border(polygon.border.clone()), polygon);
        }

        #[test]
        fn hole_vertices_lie_on_polygon_boundary(
            polygon in polygons(&domain(), with_holes()).unwrap()
        ) {
            for hole in &polygon.holes {
                for &vertex in &hole.vertices {
                    prop_assert_eq!(locate_in_polygon(vertex, &polygon), Location::Boundary);
                }
            }
            for &vertex in &polygon.border.vertices {
                prop_assert_eq!(locate_in_polygon(vertex, &polygon), Location::Boundary);
            }
            prop_assert_eq!(
                locate_in_polygon(Point::new(1000, 1000), &polygon),
                Location::Exterior
            );
        }
    }

    #[test]
    fn default_sizes_generate() {
        let strategy = polygons(&domain(), PolygonSizes::default()).unwrap();
        let mut runner = TestRunner::deterministic();
        for _ in 0..8 {
            let polygon = strategy.new_tree(&mut runner).unwrap().current();
            assert!(is_valid_polygon(&polygon));
            assert_eq!(polygon.rings().count(), polygon.holes.len() + 1);
        }
    }

    #[test]
    fn shrinking_keeps_polygons_valid() {
        let strategy = polygons(&domain(), with_holes()).unwrap();
        let mut runner = TestRunner::deterministic();
        let mut tree = strategy.new_tree(&mut runner).unwrap();
        for _ in 0..32 {
            let polygon = tree.current();
            assert!(!polygon.holes.is_empty());
            assert!(is_valid_polygon(&polygon));
            if !tree.simplify() {
                break;
            }
        }
    }
}
