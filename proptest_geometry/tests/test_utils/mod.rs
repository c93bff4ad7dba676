#![allow(dead_code)]
pub mod brute_force;

use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};
use proptest_geometry::{
    geometry::Point,
    strategy::{Coordinates, Domain},
};

pub const MIN_COORDINATE: i32 = -100;
pub const MAX_COORDINATE: i32 = 100;

/// Integer domain most tests draw from.
pub fn domain() -> Domain<i32> {
    Domain::square(Coordinates::range(MIN_COORDINATE, MAX_COORDINATE).unwrap())
}

/// Small integer domain where collisions and collinear draws are common.
pub fn small_domain() -> Domain<i32> {
    Domain::square(Coordinates::range(0, 12).unwrap())
}

pub fn in_domain(p: &Point<i32>) -> bool {
    (MIN_COORDINATE..=MAX_COORDINATE).contains(&p.x)
        && (MIN_COORDINATE..=MAX_COORDINATE).contains(&p.y)
}

/// Draws one value with a deterministic runner.
pub fn sample<S>(strategy: &S) -> S::Value
where
    S: Strategy,
{
    let mut runner = TestRunner::deterministic();
    strategy.new_tree(&mut runner).unwrap().current()
}

/// Draws `count` values in sequence from one deterministic runner.
pub fn samples<S>(strategy: &S, count: usize) -> Vec<S::Value>
where
    S: Strategy,
{
    let mut runner = TestRunner::deterministic();
    (0..count)
        .map(|_| strategy.new_tree(&mut runner).unwrap().current())
        .collect()
}
