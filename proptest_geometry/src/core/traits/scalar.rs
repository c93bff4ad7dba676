use std::cmp::Ordering;

use proptest::strategy::{BoxedStrategy, Strategy};

/// Trait representing a coordinate value (e.g. `-3`, `12`, `0.5`) that geometries can be generated
/// over.
///
/// Integer implementations evaluate orientation predicates in a wider integer type so they are
/// exact. `f32` is widened to `f64` and `f64` is evaluated directly, both are best effort.
///
/// # Supported range
///
/// Coordinates must lie within `[MIN_COORDINATE, MAX_COORDINATE]`, half of the type's range. Inside
/// it, differences of two coordinates and sums along a generated convex contour never overflow, and
/// the integer orientation predicates stay exact. [Coordinates](crate::strategy::Coordinates)
/// refuses ranges and samples that leave it.
///
/// | type  | supported range        |
/// |-------|------------------------|
/// | `i16` | `-2^14 ..= 2^14 - 1`   |
/// | `i32` | `-2^30 ..= 2^30 - 1`   |
/// | `i64` | `-2^62 ..= 2^62 - 1`   |
/// | `f32` | `f32::MIN / 2 ..= f32::MAX / 2` |
/// | `f64` | `f64::MIN / 2 ..= f64::MAX / 2` |
pub trait Scalar:
    num_traits::Num
    + num_traits::NumCast
    + num_traits::ToPrimitive
    + Copy
    + PartialOrd
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Smallest supported coordinate.
    const MIN_COORDINATE: Self;

    /// Largest supported coordinate.
    const MAX_COORDINATE: Self;

    /// Sign of the cross product `(b - a) x (c - a)`.
    ///
    /// [Ordering::Greater] means `c` lies to the left of the directed line `a -> b`,
    /// [Ordering::Less] means it lies to the right and [Ordering::Equal] means the three points
    /// are collinear.
    fn cross_sign(a: (Self, Self), b: (Self, Self), c: (Self, Self)) -> Ordering;

    /// Strategy drawing values uniformly from the closed range `[min, max]`.
    fn range_strategy(min: Self, max: Self) -> BoxedStrategy<Self>;

    /// Number of distinct values in the closed range `[min, max]`, `None` if unknown (or too large
    /// to matter).
    fn range_cardinality(min: Self, max: Self) -> Option<u128>;

    /// Whether `self` lies within `[MIN_COORDINATE, MAX_COORDINATE]` (NaN never does).
    #[inline]
    fn is_supported(&self) -> bool {
        *self >= Self::MIN_COORDINATE && *self <= Self::MAX_COORDINATE
    }

    /// Total order used for sorting, incomparable values (NaN) compare equal.
    #[inline]
    fn scalar_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Lossy conversion used for spatial indexing and angular sorting.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_integer_scalar {
    ($t:ty, $wide:ty) => {
        impl Scalar for $t {
            const MIN_COORDINATE: Self = <$t>::MIN / 2;
            const MAX_COORDINATE: Self = <$t>::MAX / 2;

            #[inline]
            fn cross_sign(a: (Self, Self), b: (Self, Self), c: (Self, Self)) -> Ordering {
                let (ax, ay) = (a.0 as $wide, a.1 as $wide);
                let (bx, by) = (b.0 as $wide, b.1 as $wide);
                let (cx, cy) = (c.0 as $wide, c.1 as $wide);
                ((bx - ax) * (cy - ay)).cmp(&((by - ay) * (cx - ax)))
            }

            #[inline]
            fn range_strategy(min: Self, max: Self) -> BoxedStrategy<Self> {
                (min..=max).boxed()
            }

            #[inline]
            fn range_cardinality(min: Self, max: Self) -> Option<u128> {
                if min > max {
                    return Some(0);
                }
                Some((max as i128 - min as i128) as u128 + 1)
            }
        }
    };
}

macro_rules! impl_float_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            const MIN_COORDINATE: Self = <$t>::MIN / 2.0;
            const MAX_COORDINATE: Self = <$t>::MAX / 2.0;

            #[inline]
            fn cross_sign(a: (Self, Self), b: (Self, Self), c: (Self, Self)) -> Ordering {
                let (ax, ay) = (a.0 as f64, a.1 as f64);
                let (bx, by) = (b.0 as f64, b.1 as f64);
                let (cx, cy) = (c.0 as f64, c.1 as f64);
                let left = (bx - ax) * (cy - ay);
                let right = (by - ay) * (cx - ax);
                left.partial_cmp(&right).unwrap_or(Ordering::Equal)
            }

            #[inline]
            fn range_strategy(min: Self, max: Self) -> BoxedStrategy<Self> {
                (min..=max).boxed()
            }

            #[inline]
            fn range_cardinality(min: Self, max: Self) -> Option<u128> {
                if min == max {
                    Some(1)
                } else {
                    None
                }
            }
        }
    };
}

impl_integer_scalar!(i16, i64);
impl_integer_scalar!(i32, i128);
impl_integer_scalar!(i64, i128);
impl_float_scalar!(f32);
impl_float_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_cross_sign_does_not_overflow() {
        let a = (i32::MIN, i32::MIN);
        let b = (i32::MAX, i32::MAX);
        assert_eq!(i32::cross_sign(a, b, (0, 0)), Ordering::Equal);
        assert_eq!(i32::cross_sign(a, b, (i32::MIN, i32::MAX)), Ordering::Greater);
        assert_eq!(i32::cross_sign(a, b, (i32::MAX, i32::MIN)), Ordering::Less);
    }

    #[test]
    fn supported_range_keeps_i64_predicates_exact() {
        let (lo, hi) = (i64::MIN_COORDINATE, i64::MAX_COORDINATE);
        assert_eq!((lo, hi), (-(1 << 62), (1 << 62) - 1));
        assert_eq!(i64::cross_sign((lo, lo), (hi, lo), (lo, hi)), Ordering::Greater);
        assert_eq!(i64::cross_sign((lo, lo), (hi, hi), (hi - 1, hi - 1)), Ordering::Equal);
        assert_eq!(i64::cross_sign((lo, hi), (hi, lo), (hi, hi)), Ordering::Greater);
        assert_eq!(i64::cross_sign((lo, hi), (hi, lo), (lo, lo)), Ordering::Less);
    }

    #[test]
    fn supported_range_is_half_the_type() {
        assert_eq!((i16::MIN_COORDINATE, i16::MAX_COORDINATE), (-16384, 16383));
        assert!(i32::MAX_COORDINATE.is_supported());
        assert!(!(i32::MAX_COORDINATE + 1).is_supported());
        assert!(!i32::MIN.is_supported());
        assert!(!f64::NAN.is_supported());
        assert!(!f64::INFINITY.is_supported());
        assert!(0.5f32.is_supported());
    }

    #[test]
    fn cardinality_of_ranges() {
        assert_eq!(i16::range_cardinality(-1, 1), Some(3));
        assert_eq!(i64::range_cardinality(i64::MIN, i64::MAX), Some(u64::MAX as u128 + 1));
        assert_eq!(f64::range_cardinality(0.0, 1.0), None);
        assert_eq!(f32::range_cardinality(2.0, 2.0), Some(1));
    }

    #[test]
    fn f32_collinear_points_are_detected() {
        let a = (0.5f32, 0.25f32);
        let b = (1.5f32, 0.75f32);
        let c = (3.0f32, 1.5f32);
        assert_eq!(f32::cross_sign(a, b, c), Ordering::Equal);
        assert_eq!(f32::cross_sign(a, b, (3.0, 1.5 + f32::EPSILON)), Ordering::Greater);
    }
}
