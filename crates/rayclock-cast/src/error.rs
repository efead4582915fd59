//! Error types for the ray caster.

use thiserror::Error;

/// Errors raised by the validating constructors.
///
/// Casting itself never fails: a ray that misses every wall, or meets a wall
/// it is parallel to, simply reports no hit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastError {
    /// Zero-length segment, zero direction, bad angular resolution or
    /// non-finite coordinates.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type for caster operations.
pub type Result<T> = std::result::Result<T, CastError>;
