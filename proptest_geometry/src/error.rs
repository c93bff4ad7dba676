use thiserror::Error;

/// Error returned when a generation request cannot be satisfied by any draw.
///
/// Reported up front when a strategy is configured, never during generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{kind}: minimum size {min} is below the floor of {floor}")]
    SizeBelowFloor {
        kind: &'static str,
        min: usize,
        floor: usize,
    },
    #[error("{kind}: minimum size {min} is greater than maximum size {max}")]
    MinGreaterThanMax {
        kind: &'static str,
        min: usize,
        max: usize,
    },
    #[error("{kind}: domain holds {available} distinct values, {required} are required")]
    DomainTooSmall {
        kind: &'static str,
        required: usize,
        available: u128,
    },
    #[error("coordinate range is empty: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },
    #[error(
        "coordinate range [{min}, {max}] leaves the supported range [{supported_min}, {supported_max}]"
    )]
    UnsupportedRange {
        min: String,
        max: String,
        supported_min: String,
        supported_max: String,
    },
    #[error("sampled coordinates need at least one value")]
    EmptySample,
}
