use std::ops::RangeInclusive;

use crate::{
    config::{DEFAULT_SIZE_SPAN, MIN_CONTOUR_SIZE, MIN_MULTI_SIZE},
    ConfigError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive bounds on the size of a generated geometry (vertex count, element count, etc.).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sizes {
    pub min: usize,
    /// Maximum size, `None` for unbounded (drawn sizes then stay within
    /// [DEFAULT_SIZE_SPAN] of `min`).
    pub max: Option<usize>,
}

impl Sizes {
    #[inline]
    pub const fn at_least(min: usize) -> Self {
        Sizes { min, max: None }
    }

    #[inline]
    pub const fn between(min: usize, max: usize) -> Self {
        Sizes {
            min,
            max: Some(max),
        }
    }

    #[inline]
    pub const fn exactly(size: usize) -> Self {
        Sizes::between(size, size)
    }

    /// Checks the bounds against the `floor` of the geometry `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use proptest_geometry::{strategy::Sizes, ConfigError};
    /// assert!(Sizes::between(3, 5).validate("contour", 3).is_ok());
    /// assert_eq!(
    ///     Sizes::at_least(2).validate("contour", 3),
    ///     Err(ConfigError::SizeBelowFloor { kind: "contour", min: 2, floor: 3 })
    /// );
    /// assert_eq!(
    ///     Sizes::between(6, 4).validate("contour", 3),
    ///     Err(ConfigError::MinGreaterThanMax { kind: "contour", min: 6, max: 4 })
    /// );
    /// ```
    pub fn validate(self, kind: &'static str, floor: usize) -> Result<Self, ConfigError> {
        if self.min < floor {
            return Err(ConfigError::SizeBelowFloor {
                kind,
                min: self.min,
                floor,
            });
        }

        match self.max {
            Some(max) if max < self.min => Err(ConfigError::MinGreaterThanMax {
                kind,
                min: self.min,
                max,
            }),
            _ => Ok(self),
        }
    }

    /// Bounds used for drawing, an unbounded maximum resolves to `min + DEFAULT_SIZE_SPAN`.
    #[inline]
    pub fn resolved(&self) -> (usize, usize) {
        (
            self.min,
            self.max.unwrap_or(self.min + DEFAULT_SIZE_SPAN),
        )
    }

    /// Range of sizes drawn, see [Sizes::resolved].
    #[inline]
    pub fn range(&self) -> RangeInclusive<usize> {
        let (min, max) = self.resolved();
        min..=max
    }

    /// Returns true if `size` is within the bounds.
    #[inline]
    pub fn contains(&self, size: usize) -> bool {
        size >= self.min && self.max.map_or(true, |max| size <= max)
    }

    /// Same bounds with the minimum raised to at least `floor`, `None` if no size remains.
    pub fn raised_to(&self, floor: usize) -> Option<Self> {
        let min = self.min.max(floor);
        match self.max {
            Some(max) if max < min => None,
            _ => Some(Sizes { min, max: self.max }),
        }
    }
}

/// Size bounds of a polygon: border vertex count, hole count and vertex count of each hole.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PolygonSizes {
    pub border: Sizes,
    pub holes: Sizes,
    pub hole: Sizes,
}

impl Default for PolygonSizes {
    fn default() -> Self {
        PolygonSizes {
            border: Sizes::at_least(MIN_CONTOUR_SIZE),
            holes: Sizes::at_least(MIN_MULTI_SIZE),
            hole: Sizes::at_least(MIN_CONTOUR_SIZE),
        }
    }
}

impl PolygonSizes {
    /// Polygons without holes.
    pub fn without_holes(border: Sizes) -> Self {
        PolygonSizes {
            border,
            holes: Sizes::exactly(0),
            hole: Sizes::at_least(MIN_CONTOUR_SIZE),
        }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        Ok(PolygonSizes {
            border: self.border.validate("polygon border", MIN_CONTOUR_SIZE)?,
            holes: self.holes.validate("polygon holes", MIN_MULTI_SIZE)?,
            hole: self.hole.validate("polygon hole", MIN_CONTOUR_SIZE)?,
        })
    }

    /// Largest number of points a single polygon is built from (twice the border for indentation
    /// material plus one point per hole vertex).
    pub(crate) fn max_point_count(&self) -> usize {
        let (_, border) = self.border.resolved();
        let (_, holes) = self.holes.resolved();
        let (_, hole) = self.hole.resolved();
        2 * border + holes * hole
    }
}

/// Size bounds of a mix: point count of the discrete part, segment count of the linear part,
/// polygon count and polygon sizes of the shaped part.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MixSizes {
    pub points: Sizes,
    pub segments: Sizes,
    pub polygons: Sizes,
    pub polygon: PolygonSizes,
}

impl Default for MixSizes {
    fn default() -> Self {
        MixSizes {
            points: Sizes::at_least(MIN_MULTI_SIZE),
            segments: Sizes::at_least(MIN_MULTI_SIZE),
            polygons: Sizes::at_least(MIN_MULTI_SIZE),
            polygon: PolygonSizes::without_holes(Sizes::at_least(MIN_CONTOUR_SIZE)),
        }
    }
}

impl MixSizes {
    pub fn validate(self) -> Result<Self, ConfigError> {
        Ok(MixSizes {
            points: self.points.validate("mix points", MIN_MULTI_SIZE)?,
            segments: self.segments.validate("mix segments", MIN_MULTI_SIZE)?,
            polygons: self.polygons.validate("mix polygons", MIN_MULTI_SIZE)?,
            polygon: self.polygon.validate()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_resolves_to_span() {
        let sizes = Sizes::at_least(4);
        assert_eq!(sizes.resolved(), (4, 4 + DEFAULT_SIZE_SPAN));
        assert!(sizes.contains(1000));
        assert!(!sizes.contains(3));
    }

    #[test]
    fn raising_past_max_leaves_nothing() {
        assert_eq!(Sizes::exactly(3).raised_to(4), None);
        assert_eq!(Sizes::between(3, 6).raised_to(4), Some(Sizes::between(4, 6)));
        assert_eq!(Sizes::at_least(2).raised_to(4), Some(Sizes::at_least(4)));
    }

    #[test]
    fn polygon_sizes_validate_each_part() {
        let sizes = PolygonSizes {
            hole: Sizes::between(2, 5),
            ..Default::default()
        };
        assert_eq!(
            sizes.validate(),
            Err(ConfigError::SizeBelowFloor {
                kind: "polygon hole",
                min: 2,
                floor: 3
            })
        );
        assert!(PolygonSizes::default().validate().is_ok());
    }
}
