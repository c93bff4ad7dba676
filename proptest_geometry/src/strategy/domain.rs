use std::ops::RangeInclusive;

use proptest::{
    arbitrary::any,
    collection::vec,
    sample::select,
    strategy::{BoxedStrategy, Strategy},
};

use super::{Retry, Sizes};
use crate::{
    config::{CANDIDATE_OVERSAMPLING, CANDIDATE_SLACK, DENSE_DOMAIN_FACTOR},
    construct::shuffle_with,
    core::traits::Scalar,
    geometry::Point,
    ConfigError,
};

/// Distribution of a single coordinate axis.
#[derive(Debug, Clone)]
pub struct Coordinates<T> {
    strategy: BoxedStrategy<T>,
    bounds: Option<(T, T)>,
    cardinality: Option<u128>,
    // sorted distinct values of a sample
    values: Option<Vec<T>>,
}

fn unsupported_range<T>(min: T, max: T) -> ConfigError
where
    T: Scalar,
{
    ConfigError::UnsupportedRange {
        min: format!("{min:?}"),
        max: format!("{max:?}"),
        supported_min: format!("{:?}", T::MIN_COORDINATE),
        supported_max: format!("{:?}", T::MAX_COORDINATE),
    }
}

impl<T> Coordinates<T>
where
    T: Scalar,
{
    /// Values drawn from the closed range `[min, max]`.
    ///
    /// Fails with [ConfigError::UnsupportedRange] if the range leaves
    /// `[T::MIN_COORDINATE, T::MAX_COORDINATE]` (see [Scalar]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use proptest_geometry::{strategy::Coordinates, ConfigError};
    /// let xs = Coordinates::range(-10, 10).unwrap();
    /// assert_eq!(xs.cardinality(), Some(21));
    /// assert!(matches!(Coordinates::range(1, 0), Err(ConfigError::InvalidRange { .. })));
    /// assert!(matches!(
    ///     Coordinates::range(i16::MIN, i16::MAX),
    ///     Err(ConfigError::UnsupportedRange { .. })
    /// ));
    /// ```
    pub fn range(min: T, max: T) -> Result<Self, ConfigError> {
        if !(min <= max) {
            return Err(ConfigError::InvalidRange {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            });
        }
        if !(min.is_supported() && max.is_supported()) {
            return Err(unsupported_range(min, max));
        }

        Ok(Coordinates {
            strategy: T::range_strategy(min, max),
            bounds: Some((min, max)),
            cardinality: T::range_cardinality(min, max),
            values: None,
        })
    }

    /// Values chosen uniformly from `values`.
    ///
    /// Fails with [ConfigError::UnsupportedRange] if a value is unsupported (see [Scalar]).
    pub fn sampled(values: Vec<T>) -> Result<Self, ConfigError> {
        let mut distinct = values.clone();
        distinct.sort_by(|a, b| a.scalar_cmp(b));
        distinct.dedup();
        let (min, max) = match (distinct.first(), distinct.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Err(ConfigError::EmptySample),
        };
        if distinct.iter().any(|v| !v.is_supported()) {
            return Err(unsupported_range(min, max));
        }

        Ok(Coordinates {
            strategy: select(values).boxed(),
            bounds: Some((min, max)),
            cardinality: Some(distinct.len() as u128),
            values: Some(distinct),
        })
    }

    /// Values drawn from an arbitrary strategy, bounds and cardinality unknown.
    ///
    /// Draws outside `[T::MIN_COORDINATE, T::MAX_COORDINATE]` are rejected.
    pub fn from_strategy<S>(strategy: S) -> Self
    where
        S: Strategy<Value = T> + Send + Sync + 'static,
    {
        Coordinates {
            strategy: strategy
                .prop_filter("coordinate outside the supported range", |v| v.is_supported())
                .boxed(),
            bounds: None,
            cardinality: None,
            values: None,
        }
    }

    /// Inclusive bounds of the drawn values, if known.
    #[inline]
    pub fn bounds(&self) -> Option<(T, T)> {
        self.bounds
    }

    /// Number of distinct values that can be drawn, if known.
    #[inline]
    pub fn cardinality(&self) -> Option<u128> {
        self.cardinality
    }

    #[inline]
    pub fn strategy(&self) -> BoxedStrategy<T> {
        self.strategy.clone()
    }

    /// Every value that can be drawn, ascending, if there are at most `limit` of them.
    fn enumerate(&self, limit: u128) -> Option<Vec<T>> {
        if self.cardinality? > limit {
            return None;
        }
        if let Some(values) = &self.values {
            return Some(values.clone());
        }

        let (min, max) = self.bounds?;
        let mut result = vec![min];
        let mut value = min;
        while value < max {
            value = value + T::one();
            result.push(value);
        }
        Some(result)
    }

    fn require(&self, kind: &'static str, required: usize) -> Result<(), ConfigError> {
        match self.cardinality {
            Some(available) if available < required as u128 => Err(ConfigError::DomainTooSmall {
                kind,
                required,
                available,
            }),
            _ => Ok(()),
        }
    }
}

/// Coordinate domain of generated points: one distribution per axis.
#[derive(Debug, Clone)]
pub struct Domain<T> {
    xs: Coordinates<T>,
    ys: Coordinates<T>,
}

impl<T> From<Coordinates<T>> for Domain<T>
where
    T: Scalar,
{
    fn from(coordinates: Coordinates<T>) -> Self {
        Domain::square(coordinates)
    }
}

impl<T> Domain<T>
where
    T: Scalar,
{
    #[inline]
    pub fn new(xs: Coordinates<T>, ys: Coordinates<T>) -> Self {
        Domain { xs, ys }
    }

    /// Same distribution on both axes.
    #[inline]
    pub fn square(coordinates: Coordinates<T>) -> Self {
        Domain {
            xs: coordinates.clone(),
            ys: coordinates,
        }
    }

    #[inline]
    pub fn xs(&self) -> &Coordinates<T> {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &Coordinates<T> {
        &self.ys
    }

    /// Number of distinct points that can be drawn, if known.
    pub fn point_cardinality(&self) -> Option<u128> {
        match (self.xs.cardinality, self.ys.cardinality) {
            (Some(xs), Some(ys)) => Some(xs.saturating_mul(ys)),
            _ => None,
        }
    }

    /// Strategy drawing a single point, `x` first then `y`.
    pub fn points(&self) -> BoxedStrategy<Point<T>> {
        (self.xs.strategy(), self.ys.strategy())
            .prop_map(|(x, y)| Point::new(x, y))
            .boxed()
    }

    /// Strategy drawing a list of pairwise distinct points with a length within `sizes`.
    ///
    /// Fails with [ConfigError::DomainTooSmall] if the domain is known to hold fewer points than
    /// the minimum size.
    pub fn distinct_points(&self, sizes: Sizes) -> Result<BoxedStrategy<Vec<Point<T>>>, ConfigError> {
        let sizes = sizes.validate("distinct points", 0)?;
        self.require_points("distinct points", sizes.min)?;
        let counts = self.distinct_counts(&sizes);
        let source = (self.point_pool(*counts.end()), counts);
        Ok(Retry::new("distinct points", source, |(candidates, count)| {
            take_distinct(&candidates, count)
        })
        .boxed())
    }

    pub(crate) fn require_points(&self, kind: &'static str, required: usize) -> Result<(), ConfigError> {
        match self.point_cardinality() {
            Some(available) if available < required as u128 => Err(ConfigError::DomainTooSmall {
                kind,
                required,
                available,
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn require_axis_values(
        &self,
        kind: &'static str,
        required: usize,
    ) -> Result<(), ConfigError> {
        self.xs.require(kind, required)?;
        self.ys.require(kind, required)
    }

    /// Sizes to draw for lists of distinct points, the maximum capped at the number of points in
    /// the domain (never below the minimum).
    pub(crate) fn distinct_counts(&self, sizes: &Sizes) -> RangeInclusive<usize> {
        let (min, max) = sizes.resolved();
        match self.point_cardinality() {
            Some(available) if available < max as u128 => min..=(available as usize).max(min),
            _ => min..=max,
        }
    }

    /// Candidate points to take `count` distinct ones from, in drawn order.
    ///
    /// A domain with few points relative to `count` is enumerated and shuffled, so every point is
    /// in the pool exactly once. Otherwise raw points are oversampled and usually hold enough
    /// distinct ones.
    pub(crate) fn point_pool(&self, count: usize) -> BoxedStrategy<Vec<Point<T>>> {
        let limit = count.saturating_mul(DENSE_DOMAIN_FACTOR) as u128;
        match self.enumerate_points(limit) {
            Some(points) => vec(any::<usize>(), points.len())
                .prop_map(move |picks| {
                    let mut shuffled = points.clone();
                    shuffle_with(&mut shuffled, &picks);
                    shuffled
                })
                .boxed(),
            None => vec(self.points(), candidate_count(count)).boxed(),
        }
    }

    fn enumerate_points(&self, limit: u128) -> Option<Vec<Point<T>>> {
        if self.point_cardinality()? > limit {
            return None;
        }

        let xs = self.xs.enumerate(limit)?;
        let ys = self.ys.enumerate(limit)?;
        Some(
            xs.iter()
                .flat_map(|&x| ys.iter().map(move |&y| Point::new(x, y)))
                .collect(),
        )
    }
}

#[inline]
pub(crate) fn candidate_count(count: usize) -> usize {
    count * CANDIDATE_OVERSAMPLING + CANDIDATE_SLACK
}

/// Up to `limit` pairwise distinct values of `candidates`, in drawn order.
pub(crate) fn distinct_prefix<V>(candidates: &[V], limit: usize) -> Vec<V>
where
    V: Copy + PartialEq,
{
    let mut result = Vec::with_capacity(limit.min(candidates.len()));
    for &candidate in candidates.iter() {
        if result.len() == limit {
            break;
        }
        if !result.contains(&candidate) {
            result.push(candidate);
        }
    }

    result
}

/// First `count` pairwise distinct values of `candidates` (in drawn order), `None` if there are not
/// enough.
pub(crate) fn take_distinct<V>(candidates: &[V], count: usize) -> Option<Vec<V>>
where
    V: Copy + PartialEq,
{
    let result = distinct_prefix(candidates, count);
    if result.len() == count {
        Some(result)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{strategy::ValueTree, test_runner::TestRunner};

    #[test]
    fn take_distinct_skips_duplicates() {
        let values = [3, 1, 3, 2, 1, 5];
        assert_eq!(take_distinct(&values, 3), Some(vec![3, 1, 2]));
        assert_eq!(take_distinct(&values, 4), Some(vec![3, 1, 2, 5]));
        assert_eq!(take_distinct(&values, 5), None);
        assert_eq!(take_distinct(&values, 0), Some(vec![]));
    }

    #[test]
    fn sampled_cardinality_counts_distinct_values() {
        let xs = Coordinates::sampled(vec![2, 1, 2, 7]).unwrap();
        assert_eq!(xs.cardinality(), Some(3));
        assert_eq!(xs.bounds(), Some((1, 7)));
        assert_eq!(
            Coordinates::<i32>::sampled(Vec::new()).unwrap_err(),
            ConfigError::EmptySample
        );
    }

    #[test]
    fn enumerates_small_axes() {
        let xs = Coordinates::range(-2, 1).unwrap();
        assert_eq!(xs.enumerate(4), Some(vec![-2, -1, 0, 1]));
        assert_eq!(xs.enumerate(3), None);
        let sampled = Coordinates::sampled(vec![7, 3, 7]).unwrap();
        assert_eq!(sampled.enumerate(10), Some(vec![3, 7]));
        assert_eq!(Coordinates::range(0.5, 0.5).unwrap().enumerate(1), Some(vec![0.5]));
        assert_eq!(Coordinates::range(0.0, 1.0).unwrap().enumerate(100), None);
        assert_eq!(Coordinates::from_strategy(0..3).enumerate(100), None);
    }

    #[test]
    fn dense_domain_pool_holds_every_point_once() {
        let domain = Domain::square(Coordinates::range(0, 7).unwrap());
        let mut runner = TestRunner::deterministic();
        let mut pool = domain.point_pool(64).new_tree(&mut runner).unwrap().current();
        assert_eq!(pool.len(), 64);
        pool.sort_by(|a, b| a.x.cmp(&b.x).then(a.y.cmp(&b.y)));
        pool.dedup();
        assert_eq!(pool.len(), 64);
    }

    #[test]
    fn distinct_counts_are_capped_by_the_domain() {
        let domain = Domain::square(Coordinates::range(0, 2).unwrap());
        assert_eq!(domain.distinct_counts(&Sizes::between(4, 20)), 4..=9);
        assert_eq!(domain.distinct_counts(&Sizes::between(1, 5)), 1..=5);
        assert_eq!(domain.distinct_counts(&Sizes::at_least(9)), 9..=9);
    }

    #[test]
    fn unsupported_coordinates_are_refused() {
        assert_eq!(
            Coordinates::range(i16::MIN, 0).unwrap_err(),
            ConfigError::UnsupportedRange {
                min: "-32768".to_string(),
                max: "0".to_string(),
                supported_min: "-16384".to_string(),
                supported_max: "16383".to_string(),
            }
        );
        assert!(Coordinates::range(i32::MIN / 2, i32::MAX / 2).is_ok());
        assert!(matches!(
            Coordinates::sampled(vec![0, i64::MAX]),
            Err(ConfigError::UnsupportedRange { .. })
        ));
        assert!(matches!(
            Coordinates::range(0.0, f64::INFINITY),
            Err(ConfigError::UnsupportedRange { .. })
        ));
    }

    #[test]
    fn domain_too_small_for_distinct_points() {
        let domain = Domain::new(
            Coordinates::sampled(vec![0]).unwrap(),
            Coordinates::range(0, 1).unwrap(),
        );
        assert_eq!(domain.point_cardinality(), Some(2));
        assert_eq!(
            domain.distinct_points(Sizes::exactly(3)).unwrap_err(),
            ConfigError::DomainTooSmall {
                kind: "distinct points",
                required: 3,
                available: 2
            }
        );
        assert!(domain.distinct_points(Sizes::exactly(2)).is_ok());
    }
}
