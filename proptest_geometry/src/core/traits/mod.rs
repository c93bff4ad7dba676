//! Core/common traits for use in proptest_geometry.
mod scalar;

pub use scalar::Scalar;
