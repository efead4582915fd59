#![warn(missing_docs)]

//! Math types for the rayclock ray caster.
//!
//! Thin wrappers around nalgebra providing the 2D types used by the
//! caster and the scene driver: points, vectors, unit directions and
//! tolerance constants.

use nalgebra::{Unit, Vector2};
use serde::{Deserialize, Serialize};

/// A point in the 2D scene plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the 2D scene plane.
pub type Vec2 = Vector2<f64>;

/// A unit (normalized) direction vector in 2D.
pub type Dir2 = Unit<Vector2<f64>>;

/// Unit direction for an angle in radians, measured from +X towards +Y.
#[inline]
pub fn dir_from_angle(angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c, s)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Returns `true` if both coordinates of the point are finite.
#[inline]
pub fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Tolerance constants for geometric comparisons.
///
/// The intersection primitive itself compares against exact zero; these
/// tolerances are only used for validation and degenerate-input checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Linear distance tolerance in scene units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 linear).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        distance(a, b) < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_dir_from_angle_axes() {
        let east = dir_from_angle(0.0);
        assert_abs_diff_eq!(east.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(east.y, 0.0, epsilon = 1e-12);

        let south = dir_from_angle(PI / 2.0);
        assert_abs_diff_eq!(south.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(south.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dir_from_angle_is_unit() {
        for i in 0..16 {
            let d = dir_from_angle(i as f64 * PI / 8.0);
            assert_abs_diff_eq!(d.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_abs_diff_eq!(distance(&a, &b), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distance(&b, &a), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point2::new(1.0, 1.0);
        assert!(tol.points_equal(&a, &Point2::new(1.0, 1.0 + 1e-12)));
        assert!(!tol.points_equal(&a, &Point2::new(1.0, 1.001)));
    }

    #[test]
    fn test_tolerance_is_zero() {
        let tol = Tolerance::default();
        assert_eq!(tol, Tolerance { linear: 1e-9 });
        assert!(tol.is_zero(-1e-12));
        assert!(!tol.is_zero(1e-6));
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&Point2::new(1.0, -2.0)));
        assert!(!is_finite(&Point2::new(f64::NAN, 0.0)));
        assert!(!is_finite(&Point2::new(0.0, f64::INFINITY)));
    }
}
