//! Generator error types.

use thiserror::Error;

use crate::id::Dimension;

/// Errors surfaced by the biome generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A query was made before any seed was applied. Sampling an unseeded
    /// context would silently produce garbage, so it is rejected instead.
    #[error("no seed applied to generator")]
    UninitializedContext,
    /// A coordinate is outside the supported world volume.
    #[error("{axis} coordinate {value} outside supported range {min}..={max}")]
    OutOfRangeCoordinate {
        axis: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// The sampling scale is not one of the supported powers of four.
    #[error("unsupported sampling scale {0}: expected 1, 4, 16, 64, or 256")]
    UnsupportedScale(i32),
    /// Only the overworld climate stack is carried.
    #[error("no climate stack for dimension {0:?}")]
    UnsupportedDimension(Dimension),
}
