//! Scene configuration.

use std::path::Path;

use rayclock_cast::{DEFAULT_RESOLUTION_DEGREES, MAX_RAYS};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Scene parameters.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Canvas width in scene units.
    pub width: f64,
    /// Canvas height in scene units.
    pub height: f64,
    /// Number of hour walls spread across the canvas.
    pub hour_walls: usize,
    /// Shortest hour wall.
    pub min_wall_len: f64,
    /// Upper bound (exclusive) on hour wall length.
    pub max_wall_len: f64,
    /// Orbit radius as a fraction of the smaller canvas dimension.
    pub orbit_radius_ratio: f64,
    /// Orbit speed in turns per minute.
    pub orbit_speed: f64,
    /// Angle between neighbouring rays (degrees).
    pub resolution_degrees: f64,
    /// Frames per second for fixed-step playback.
    pub fps: f64,
    /// Seed for the wall layout; random when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 512.0,
            height: 512.0,
            hour_walls: 24,
            min_wall_len: 100.0,
            max_wall_len: 200.0,
            orbit_radius_ratio: 0.40,
            orbit_speed: 1.0,
            resolution_degrees: DEFAULT_RESOLUTION_DEGREES,
            fps: 60.0,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(SceneError::InvalidConfig(
                "width and height must be positive".into(),
            ));
        }
        if self.hour_walls == 0 {
            return Err(SceneError::InvalidConfig("hour_walls must be at least 1".into()));
        }
        if !(self.min_wall_len > 0.0 && self.min_wall_len <= self.max_wall_len)
            || !self.max_wall_len.is_finite()
        {
            return Err(SceneError::InvalidConfig(
                "wall lengths must satisfy 0 < min_wall_len <= max_wall_len".into(),
            ));
        }
        if !(self.orbit_radius_ratio.is_finite() && self.orbit_radius_ratio >= 0.0) {
            return Err(SceneError::InvalidConfig(
                "orbit_radius_ratio must be non-negative".into(),
            ));
        }
        if !self.orbit_speed.is_finite() {
            return Err(SceneError::InvalidConfig("orbit_speed must be finite".into()));
        }
        if !(self.resolution_degrees > 0.0 && self.resolution_degrees <= 360.0) {
            return Err(SceneError::InvalidConfig(
                "resolution_degrees must be in (0, 360]".into(),
            ));
        }
        if (360.0 / self.resolution_degrees).ceil() > MAX_RAYS as f64 {
            return Err(SceneError::InvalidConfig(format!(
                "resolution_degrees {} needs more than {MAX_RAYS} rays",
                self.resolution_degrees
            )));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(SceneError::InvalidConfig("fps must be positive".into()));
        }
        Ok(())
    }

    /// Smaller of width and height.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Milliseconds between fixed-step frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps
    }
}
