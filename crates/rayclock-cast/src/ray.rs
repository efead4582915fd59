//! Ray representation and re-aiming.

use rayclock_math::{dir_from_angle, is_finite, Dir2, Point2, Tolerance, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{CastError, Result};
use crate::intersect::intersect_segment;
use crate::segment::Segment;

/// A ray in the scene plane defined by origin and direction.
///
/// The direction need not be unit length for intersection tests, but it
/// must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point2,
    /// Direction of the ray.
    pub direction: Vec2,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction is stored as given.
    pub fn new(origin: Point2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Create a ray, rejecting a zero or non-finite direction.
    pub fn try_new(origin: Point2, direction: Vec2) -> Result<Self> {
        if !is_finite(&origin) || !direction.x.is_finite() || !direction.y.is_finite() {
            return Err(CastError::InvalidGeometry(
                "ray origin and direction must be finite".into(),
            ));
        }
        if Tolerance::DEFAULT.is_zero(direction.norm()) {
            return Err(CastError::InvalidGeometry(
                "ray direction must be non-zero".into(),
            ));
        }
        Ok(Self::new(origin, direction))
    }

    /// Create a ray with a unit direction at `angle` radians from +X.
    pub fn from_angle(origin: Point2, angle: f64) -> Self {
        Self::new(origin, dir_from_angle(angle))
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point2 {
        self.origin + t * self.direction
    }

    /// Move the ray without changing its direction.
    #[inline]
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin.x = x;
        self.origin.y = y;
    }

    /// Point the ray at `(x, y)` with a unit direction.
    ///
    /// Aiming at the origin itself leaves the direction untouched.
    pub fn look_at(&mut self, x: f64, y: f64) -> Result<()> {
        let target = Vec2::new(x - self.origin.x, y - self.origin.y);
        let dir = Dir2::try_new(target, Tolerance::DEFAULT.linear).ok_or_else(|| {
            CastError::InvalidGeometry(format!("cannot aim ray at its own origin ({x}, {y})"))
        })?;
        self.direction = dir.into_inner();
        Ok(())
    }

    /// Intersection point with `wall`, if the wall lies strictly ahead.
    #[inline]
    pub fn cast(&self, wall: &Segment) -> Option<Point2> {
        intersect_segment(self, wall).map(|hit| hit.point)
    }
}
