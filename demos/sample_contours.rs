use log::info;
use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};
use proptest_geometry::{
    planar::{concave_contours, convex_contours, star_contours},
    strategy::{Coordinates, Domain, Sizes},
};

fn print_samples<S>(name: &str, strategy: &S, runner: &mut TestRunner) -> Result<(), String>
where
    S: Strategy,
{
    println!("{name}:");
    for _ in 0..3 {
        let value = strategy
            .new_tree(runner)
            .map_err(|reason| format!("{reason:?}"))?
            .current();
        println!("  {value:?}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let domain = Domain::square(Coordinates::range(-20, 20)?);
    let sizes = Sizes::between(4, 8);
    let mut runner = TestRunner::default();
    info!("sampling contours with {sizes:?}");

    print_samples("convex", &convex_contours(&domain, sizes)?, &mut runner)?;
    print_samples("concave", &concave_contours(&domain, sizes)?, &mut runner)?;
    print_samples("star", &star_contours(&domain, sizes)?, &mut runner)?;
    Ok(())
}
