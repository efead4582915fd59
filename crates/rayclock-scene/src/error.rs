//! Error types for the scene driver.

use rayclock_cast::CastError;
use thiserror::Error;

/// Errors that can occur while building or configuring a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Configuration values out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`crate::SceneConfig`].
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The caster rejected the scene geometry.
    #[error(transparent)]
    Cast(#[from] CastError),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
