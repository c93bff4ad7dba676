use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};
use proptest_geometry::{
    geometry::{Discrete, Linear, Shaped},
    planar::mixes,
    strategy::{Coordinates, Domain, MixSizes, Sizes},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let domain = Domain::new(
        Coordinates::range(-1.0f64, 1.0)?,
        Coordinates::sampled(vec![-0.5, 0.0, 0.25, 0.5, 0.75])?,
    );
    let sizes = MixSizes {
        points: Sizes::between(1, 4),
        segments: Sizes::between(1, 4),
        polygons: Sizes::between(0, 2),
        ..MixSizes::default()
    };
    let strategy = mixes(&domain, sizes)?;
    let mut runner = TestRunner::default();

    for _ in 0..4 {
        let mix = strategy
            .new_tree(&mut runner)
            .map_err(|reason| format!("{reason:?}"))?
            .current();
        let discrete = match &mix.discrete {
            Discrete::Empty(_) => 0,
            Discrete::Multipoint(multipoint) => multipoint.points.len(),
        };
        let linear = match &mix.linear {
            Linear::Empty(_) => "empty",
            Linear::Segment(_) => "segment",
            Linear::Contour(_) => "contour",
            Linear::Multisegment(_) => "multisegment",
        };
        let shaped = match &mix.shaped {
            Shaped::Empty(_) => "empty",
            Shaped::Polygon(_) => "polygon",
            Shaped::Multipolygon(_) => "multipolygon",
        };
        println!("{discrete} points, {linear}, {shaped}");
    }
    Ok(())
}
