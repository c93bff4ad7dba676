mod test_utils;

mod test_multi {
    use proptest::{prelude::*, strategy::ValueTree, test_runner::TestRunner};
    use proptest_geometry::{
        core::math::{segment_relation, SegmentRelation},
        geometry::validation::{
            is_valid_multicontour, is_valid_multipoint, is_valid_multipolygon,
            is_valid_multisegment,
        },
        planar::{multicontours, multipoints, multipolygons, multisegments},
        strategy::{Coordinates, Domain, PolygonSizes, Sizes},
    };

    use super::test_utils::{
        brute_force::{doubled_area, is_simple, rings_apart},
        domain, in_domain, small_domain,
    };

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn multipoints_are_distinct(
            multipoint in multipoints(&domain(), Sizes::between(0, 16)).unwrap()
        ) {
            let points = &multipoint.points;
            prop_assert!(points.len() <= 16);
            prop_assert!(points.iter().all(in_domain));
            prop_assert!(is_valid_multipoint(&multipoint));
        }

        #[test]
        fn multisegments_only_touch(
            multisegment in multisegments(&domain(), Sizes::between(1, 10)).unwrap()
        ) {
            let segments = &multisegment.segments;
            prop_assert!((1..=10).contains(&segments.len()));
            for (i, s1) in segments.iter().enumerate() {
                prop_assert!(!s1.is_degenerate());
                for s2 in &segments[i + 1..] {
                    let relation = segment_relation(s1, s2);
                    prop_assert!(
                        relation == SegmentRelation::Disjoint || relation == SegmentRelation::Touch,
                        "{:?} and {:?} are {:?}", s1, s2, relation
                    );
                }
            }
            prop_assert!(is_valid_multisegment(&multisegment));
        }

        #[test]
        fn crowded_multisegments(
            multisegment in multisegments(&small_domain(), Sizes::between(0, 6)).unwrap()
        ) {
            prop_assert!(multisegment.segments.len() <= 6);
            prop_assert!(is_valid_multisegment(&multisegment));
        }

        #[test]
        fn multicontours_are_apart(
            multicontour in multicontours(&domain(), Sizes::between(1, 4), Sizes::between(3, 6)).unwrap()
        ) {
            let contours = &multicontour.contours;
            prop_assert!((1..=4).contains(&contours.len()));
            for (i, contour) in contours.iter().enumerate() {
                prop_assert!((3..=6).contains(&contour.vertex_count()));
                prop_assert!(is_simple(&contour.vertices));
                for other in &contours[i + 1..] {
                    prop_assert!(rings_apart(&contour.vertices, &other.vertices));
                }
            }
            prop_assert!(is_valid_multicontour(&multicontour));
        }

        #[test]
        fn multipolygons_are_apart(
            multipolygon in multipolygons(
                &domain(),
                Sizes::between(1, 3),
                PolygonSizes {
                    border: Sizes::between(3, 6),
                    holes: Sizes::between(0, 1),
                    hole: Sizes::between(3, 4),
                },
            ).unwrap()
        ) {
            let polygons = &multipolygon.polygons;
            prop_assert!((1..=3).contains(&polygons.len()));
            for (i, polygon) in polygons.iter().enumerate() {
                prop_assert!(doubled_area(&polygon.border.vertices) > 0);
                prop_assert!(polygon.holes.len() <= 1);
                for other in &polygons[i + 1..] {
                    prop_assert!(rings_apart(&polygon.border.vertices, &other.border.vertices));
                }
            }
            prop_assert!(is_valid_multipolygon(&multipolygon));
        }
    }

    #[test]
    fn empty_collections() {
        let mut runner = TestRunner::deterministic();
        let multipoint = multipoints(&domain(), Sizes::exactly(0))
            .unwrap()
            .new_tree(&mut runner)
            .unwrap()
            .current();
        assert!(multipoint.points.is_empty());

        let multicontour = multicontours(&domain(), Sizes::exactly(0), Sizes::at_least(3))
            .unwrap()
            .new_tree(&mut runner)
            .unwrap()
            .current();
        assert!(multicontour.contours.is_empty());

        let multipolygon = multipolygons(&domain(), Sizes::exactly(0), PolygonSizes::default())
            .unwrap()
            .new_tree(&mut runner)
            .unwrap()
            .current();
        assert!(multipolygon.polygons.is_empty());
    }

    #[test]
    fn multipoints_fill_whole_domain() {
        let grid = Domain::square(Coordinates::range(0, 7).unwrap());
        for count in [56, 63, 64] {
            let strategy = multipoints(&grid, Sizes::exactly(count)).unwrap();
            let mut runner = TestRunner::deterministic();
            for _ in 0..8 {
                let multipoint = strategy.new_tree(&mut runner).unwrap().current();
                assert_eq!(multipoint.points.len(), count);
                assert!(is_valid_multipoint(&multipoint));
            }
        }
    }

    #[test]
    fn multipoints_capped_by_domain() {
        let tiny = Domain::square(Coordinates::range(0, 2).unwrap());
        let strategy = multipoints(&tiny, Sizes::at_least(5)).unwrap();
        let mut runner = TestRunner::deterministic();
        for _ in 0..8 {
            let multipoint = strategy.new_tree(&mut runner).unwrap().current();
            assert!((5..=9).contains(&multipoint.points.len()));
            assert!(is_valid_multipoint(&multipoint));
        }
    }
}
