//! Coordinate and size configuration plus the bounded retry strategy every builder runs through.
mod domain;
mod retry;
mod sizes;

pub(crate) use domain::{candidate_count, distinct_prefix, take_distinct};
pub use domain::{Coordinates, Domain};
pub use retry::{Retry, RetryValueTree};
pub use sizes::{MixSizes, PolygonSizes, Sizes};
