use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};
use proptest_geometry::{
    planar::{multipolygons, polygons},
    strategy::{Coordinates, Domain, PolygonSizes, Sizes},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let domain = Domain::square(Coordinates::range(0i64, 1_000)?);
    let sizes = PolygonSizes {
        border: Sizes::between(3, 8),
        holes: Sizes::between(1, 3),
        hole: Sizes::between(3, 6),
    };
    let mut runner = TestRunner::default();

    let polygon = polygons(&domain, sizes)?
        .new_tree(&mut runner)
        .map_err(|reason| format!("{reason:?}"))?
        .current();
    println!("border: {:?}", polygon.border.vertices);
    for (i, hole) in polygon.holes.iter().enumerate() {
        println!("hole {i}: {:?}", hole.vertices);
    }

    let multipolygon = multipolygons(&domain, Sizes::between(2, 4), sizes)?
        .new_tree(&mut runner)
        .map_err(|reason| format!("{reason:?}"))?
        .current();
    println!("multipolygon of {}:", multipolygon.polygons.len());
    for polygon in multipolygon.polygons.iter() {
        println!("  border {:?}, {} holes", polygon.border.vertices, polygon.holes.len());
    }
    Ok(())
}
