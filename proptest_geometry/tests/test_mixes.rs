mod test_utils;

mod test_mixes {
    use proptest::{prelude::*, strategy::ValueTree, test_runner::TestRunner};
    use proptest_geometry::{
        core::math::{
            locate_in_polygon, point_on_segment, segment_relation, Location, SegmentRelation,
        },
        geometry::{
            validation::{is_valid_mix, linear_edges},
            Discrete, Linear, Mix, Point, Shaped,
        },
        planar::mixes,
        strategy::{MixSizes, PolygonSizes, Sizes},
    };

    use super::test_utils::domain;

    fn small_mixes() -> MixSizes {
        MixSizes {
            points: Sizes::between(0, 4),
            segments: Sizes::between(0, 4),
            polygons: Sizes::between(0, 2),
            polygon: PolygonSizes::without_holes(Sizes::between(3, 6)),
        }
    }

    fn discrete_points(mix: &Mix<i32>) -> Vec<Point<i32>> {
        match &mix.discrete {
            Discrete::Empty(_) => Vec::new(),
            Discrete::Multipoint(multipoint) => multipoint.points.clone(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn parts_are_disjoint(mix in mixes(&domain(), small_mixes()).unwrap()) {
            let points = discrete_points(&mix);
            let edges = linear_edges(&mix.linear);
            let polygons = mix.shaped.polygons();
            prop_assert!(points.len() <= 4);
            prop_assert!(polygons.len() <= 2);

            for &point in &points {
                for polygon in polygons {
                    prop_assert_eq!(locate_in_polygon(point, polygon), Location::Exterior);
                }
                for edge in &edges {
                    prop_assert!(!point_on_segment(point, edge.start, edge.end));
                }
            }
            for edge in &edges {
                for polygon in polygons {
                    for ring in polygon.rings() {
                        for other in ring.edges() {
                            prop_assert_eq!(segment_relation(edge, &other), SegmentRelation::Disjoint);
                        }
                    }
                    prop_assert_eq!(locate_in_polygon(edge.start, polygon), Location::Exterior);
                }
            }
            prop_assert!(is_valid_mix(&mix));
        }

        #[test]
        fn part_kinds_follow_counts(mix in mixes(&domain(), small_mixes()).unwrap()) {
            match &mix.linear {
                Linear::Empty(_) => {}
                Linear::Segment(segment) => prop_assert!(!segment.is_degenerate()),
                Linear::Contour(contour) => prop_assert!((3..=4).contains(&contour.vertex_count())),
                Linear::Multisegment(multisegment) => {
                    prop_assert!((2..=4).contains(&multisegment.segments.len()))
                }
            }
            match &mix.shaped {
                Shaped::Empty(_) => {}
                Shaped::Polygon(polygon) => prop_assert!(polygon.holes.is_empty()),
                Shaped::Multipolygon(multipolygon) => {
                    prop_assert_eq!(multipolygon.polygons.len(), 2)
                }
            }
            prop_assert!(mix.part_count() <= 3);
        }
    }

    #[test]
    fn all_parts_present() {
        let sizes = MixSizes {
            points: Sizes::between(1, 3),
            segments: Sizes::between(1, 3),
            polygons: Sizes::between(1, 2),
            ..small_mixes()
        };
        let strategy = mixes(&domain(), sizes).unwrap();
        let mut runner = TestRunner::deterministic();
        for _ in 0..8 {
            let mix = strategy.new_tree(&mut runner).unwrap().current();
            assert_eq!(mix.part_count(), 3);
            assert!(is_valid_mix(&mix));
        }
    }

    #[test]
    fn empty_mix() {
        let sizes = MixSizes {
            points: Sizes::exactly(0),
            segments: Sizes::exactly(0),
            polygons: Sizes::exactly(0),
            ..MixSizes::default()
        };
        let strategy = mixes(&domain(), sizes).unwrap();
        let mut runner = TestRunner::deterministic();
        let mix = strategy.new_tree(&mut runner).unwrap().current();
        assert!(mix.discrete.is_empty() && mix.linear.is_empty() && mix.shaped.is_empty());
        assert_eq!(mix.part_count(), 0);
    }
}
