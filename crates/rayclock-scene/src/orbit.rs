//! Orbit clock: maps elapsed time to the emitter position.

use std::f64::consts::TAU;

use rayclock_math::{dir_from_angle, Point2};

use crate::config::SceneConfig;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Circular path around the canvas centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Centre of the circle.
    pub center: Point2,
    /// Radius of the circle.
    pub radius: f64,
    /// Turns per minute.
    pub speed: f64,
}

impl Orbit {
    /// Orbit described by a scene config.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            center: Point2::new(config.width / 2.0, config.height / 2.0),
            radius: config.min_dimension() * config.orbit_radius_ratio,
            speed: config.orbit_speed,
        }
    }

    /// Angle in radians after `elapsed_ms`.
    pub fn angle(&self, elapsed_ms: f64) -> f64 {
        elapsed_ms / MS_PER_MINUTE * TAU * self.speed
    }

    /// Position after `elapsed_ms`.
    pub fn position(&self, elapsed_ms: f64) -> Point2 {
        self.center + dir_from_angle(self.angle(elapsed_ms)) * self.radius
    }
}
