//! Emitter: a fan of rays recast from a moving point every frame.

use rayclock_math::{distance, Point2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{CastError, Result};
use crate::intersect::intersect_segment;
use crate::ray::Ray;
use crate::segment::Segment;

/// Default angular step between neighbouring rays (720 rays per turn).
pub const DEFAULT_RESOLUTION_DEGREES: f64 = 0.5;

/// Upper bound on the fan size accepted by [`Emitter::new`].
pub const MAX_RAYS: usize = 1_000_000;

const FULL_TURN_DEGREES: f64 = 360.0;

/// Nearest wall struck by one ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Intersection point.
    pub point: Point2,
    /// Distance from the emitter position to `point`.
    pub distance: f64,
    /// Index of the wall in the slice passed to the resolver.
    pub wall: usize,
}

/// A point that casts a fixed fan of rays covering a full turn.
///
/// Ray directions are fixed at construction. [`Emitter::update`] only moves
/// the origin shared by every ray.
#[derive(Debug, Clone)]
pub struct Emitter {
    position: Point2,
    rays: Vec<Ray>,
}

impl Emitter {
    /// Create an emitter at `(x, y)` with one ray every `resolution_degrees`.
    ///
    /// Angles start at 0° and stop short of 360°, so a resolution of 0.5°
    /// yields 720 rays. Resolutions needing more than [`MAX_RAYS`] rays are
    /// rejected.
    pub fn new(x: f64, y: f64, resolution_degrees: f64) -> Result<Self> {
        if !resolution_degrees.is_finite()
            || resolution_degrees <= 0.0
            || resolution_degrees > FULL_TURN_DEGREES
        {
            return Err(CastError::InvalidGeometry(format!(
                "angular resolution must be in (0, 360] degrees, got {resolution_degrees}"
            )));
        }

        let steps = (FULL_TURN_DEGREES / resolution_degrees).ceil();
        if steps > MAX_RAYS as f64 {
            return Err(CastError::InvalidGeometry(format!(
                "angular resolution {resolution_degrees}° needs more than {MAX_RAYS} rays"
            )));
        }

        let mut count = steps as usize;
        // Drop a final angle that only rounding pushed below 360°.
        if count > 0 && (count - 1) as f64 * resolution_degrees >= FULL_TURN_DEGREES - 1e-9 {
            count -= 1;
        }

        let origin = Point2::new(x, y);
        let rays: Vec<Ray> = (0..count)
            .map(|i| Ray::from_angle(origin, (i as f64 * resolution_degrees).to_radians()))
            .collect();

        log::debug!(
            "emitter at ({x}, {y}) with {} rays ({resolution_degrees}° step)",
            rays.len()
        );

        Ok(Self {
            position: origin,
            rays,
        })
    }

    /// Create an emitter at `(x, y)` with `count` evenly spaced rays.
    ///
    /// A count of zero is valid and resolves to an empty result.
    pub fn with_ray_count(x: f64, y: f64, count: usize) -> Self {
        let origin = Point2::new(x, y);
        let step = std::f64::consts::TAU / count.max(1) as f64;
        let rays = (0..count)
            .map(|i| Ray::from_angle(origin, i as f64 * step))
            .collect();

        log::debug!("emitter at ({x}, {y}) with {count} rays");

        Self {
            position: origin,
            rays,
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// The ray fan in angular order.
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Number of rays in the fan.
    #[inline]
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    /// Returns `true` if the fan has no rays.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Move the emitter and every ray origin to `(x, y)`.
    pub fn update(&mut self, x: f64, y: f64) {
        self.position = Point2::new(x, y);
        for ray in &mut self.rays {
            ray.set_origin(x, y);
        }
    }

    /// Nearest hit point per ray, in fan order.
    ///
    /// Rays that strike nothing (including every ray when `walls` is empty)
    /// report `None`.
    pub fn resolve(&self, walls: &[Segment]) -> Vec<Option<Point2>> {
        self.rays
            .iter()
            .map(|ray| self.nearest(ray, walls).map(|hit| hit.point))
            .collect()
    }

    /// Like [`Emitter::resolve`], keeping the distance and wall index.
    pub fn resolve_hits(&self, walls: &[Segment]) -> Vec<Option<RayHit>> {
        self.rays
            .iter()
            .map(|ray| self.nearest(ray, walls))
            .collect()
    }

    /// Data-parallel [`Emitter::resolve`]; output is identical.
    pub fn resolve_par(&self, walls: &[Segment]) -> Vec<Option<Point2>> {
        self.rays
            .par_iter()
            .map(|ray| self.nearest(ray, walls).map(|hit| hit.point))
            .collect()
    }

    /// Test one ray against every wall, keeping the closest hit.
    ///
    /// On equal distances the earlier wall wins.
    fn nearest(&self, ray: &Ray, walls: &[Segment]) -> Option<RayHit> {
        let mut closest: Option<RayHit> = None;
        let mut closest_d = f64::INFINITY;

        for (idx, wall) in walls.iter().enumerate() {
            if let Some(hit) = intersect_segment(ray, wall) {
                let d = distance(&self.position, &hit.point);
                if d < closest_d {
                    closest_d = d;
                    closest = Some(RayHit {
                        point: hit.point,
                        distance: d,
                        wall: idx,
                    });
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rayclock_math::Vec2;

    /// Square from -10 to 10 whose edges overlap at the corners.
    fn closed_box() -> Vec<Segment> {
        vec![
            Segment::new(-11.0, -10.0, 11.0, -10.0),
            Segment::with_visibility(10.0, -11.0, 10.0, 11.0, false),
            Segment::with_visibility(11.0, 10.0, -11.0, 10.0, false),
            Segment::new(-10.0, 11.0, -10.0, -11.0),
        ]
    }

    fn directions(emitter: &Emitter) -> Vec<Vec2> {
        emitter.rays().iter().map(|r| r.direction).collect()
    }

    #[test]
    fn test_default_resolution_ray_count() {
        let emitter = Emitter::new(256.0, 256.0, DEFAULT_RESOLUTION_DEGREES).unwrap();
        assert_eq!(emitter.len(), 720);
    }

    #[test]
    fn test_ray_count_for_uneven_resolution() {
        assert_eq!(Emitter::new(0.0, 0.0, 1.0).unwrap().len(), 360);
        assert_eq!(Emitter::new(0.0, 0.0, 0.1).unwrap().len(), 3600);
        assert_eq!(Emitter::new(0.0, 0.0, 7.0).unwrap().len(), 52);
        assert_eq!(Emitter::new(0.0, 0.0, 360.0).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_resolution() {
        for bad in [0.0, -1.0, 361.0, f64::NAN, f64::INFINITY, 1e-300, 1e-6] {
            let err = Emitter::new(0.0, 0.0, bad).unwrap_err();
            assert!(matches!(err, CastError::InvalidGeometry(_)));
        }
    }

    #[test]
    fn test_ray_count_at_cap() {
        assert_eq!(Emitter::new(0.0, 0.0, 0.001).unwrap().len(), 360_000);
        assert!(Emitter::new(0.0, 0.0, 0.0001).is_err());
    }

    #[test]
    fn test_with_ray_count_spacing() {
        let emitter = Emitter::with_ray_count(1.0, 2.0, 8);
        assert_eq!(emitter.len(), 8);
        assert_eq!(emitter.position(), Point2::new(1.0, 2.0));
        let step = std::f64::consts::TAU / 8.0;
        for (i, d) in directions(&emitter).iter().enumerate() {
            let angle = i as f64 * step;
            assert_abs_diff_eq!(d.x, angle.cos(), epsilon = 1e-12);
            assert_abs_diff_eq!(d.y, angle.sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fan_directions_are_unit_and_ordered() {
        let emitter = Emitter::new(0.0, 0.0, 90.0).unwrap();
        let dirs = directions(&emitter);
        assert_eq!(dirs.len(), 4);
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (d, (x, y)) in dirs.iter().zip(expected) {
            assert_abs_diff_eq!(d.x, x, epsilon = 1e-12);
            assert_abs_diff_eq!(d.y, y, epsilon = 1e-12);
            assert_abs_diff_eq!(d.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_update_moves_every_origin() {
        let mut emitter = Emitter::new(0.0, 0.0, 30.0).unwrap();
        emitter.update(3.0, -4.0);
        assert_eq!(emitter.position(), Point2::new(3.0, -4.0));
        assert!(emitter.rays().iter().all(|r| r.origin == Point2::new(3.0, -4.0)));
    }

    #[test]
    fn test_fan_unchanged_by_update() {
        let mut emitter = Emitter::new(5.0, 5.0, DEFAULT_RESOLUTION_DEGREES).unwrap();
        let before = directions(&emitter);
        for i in 0..50 {
            emitter.update(i as f64 * 1.7, -(i as f64) * 0.3);
        }
        assert_eq!(directions(&emitter), before);
    }

    #[test]
    fn test_nearest_hit_wins() {
        let walls = vec![
            Segment::new(10.0, -5.0, 10.0, 5.0),
            Segment::new(5.0, -5.0, 5.0, 5.0),
        ];
        let emitter = Emitter::with_ray_count(0.0, 0.0, 1);
        let hits = emitter.resolve_hits(&walls);
        let hit = hits[0].unwrap();
        assert_abs_diff_eq!(hit.point.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.point.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.distance, 5.0, epsilon = 1e-12);
        assert_eq!(hit.wall, 1);
    }

    #[test]
    fn test_tie_goes_to_first_wall() {
        let walls = vec![
            Segment::new(5.0, -5.0, 5.0, 5.0),
            Segment::new(5.0, 5.0, 5.0, -5.0),
        ];
        let emitter = Emitter::with_ray_count(0.0, 0.0, 1);
        assert_eq!(emitter.resolve_hits(&walls)[0].unwrap().wall, 0);
    }

    #[test]
    fn test_empty_walls() {
        let emitter = Emitter::new(1.0, 2.0, DEFAULT_RESOLUTION_DEGREES).unwrap();
        let hits = emitter.resolve(&[]);
        assert_eq!(hits.len(), 720);
        assert!(hits.iter().all(Option::is_none));
    }

    #[test]
    fn test_zero_rays() {
        let emitter = Emitter::with_ray_count(0.0, 0.0, 0);
        assert!(emitter.is_empty());
        assert!(emitter.resolve(&closed_box()).is_empty());
        assert!(emitter.resolve_par(&closed_box()).is_empty());
    }

    #[test]
    fn test_full_circle_coverage() {
        let walls = closed_box();
        let mut emitter = Emitter::new(0.0, 0.0, DEFAULT_RESOLUTION_DEGREES).unwrap();
        for (x, y) in [(0.0, 0.0), (1.3, -2.7), (-9.5, 9.5), (9.99, 0.01)] {
            emitter.update(x, y);
            let hits = emitter.resolve(&walls);
            assert_eq!(hits.len(), 720);
            assert!(hits.iter().all(Option::is_some), "escape from ({x}, {y})");
        }
    }

    #[test]
    fn test_hits_lie_on_box() {
        let emitter = Emitter::new(1.0, 2.0, 3.0).unwrap();
        for hit in emitter.resolve(&closed_box()).into_iter().flatten() {
            let on_x = (hit.x.abs() - 10.0).abs() < 1e-9;
            let on_y = (hit.y.abs() - 10.0).abs() < 1e-9;
            assert!(on_x || on_y, "hit {hit:?} is off the box");
        }
    }

    #[test]
    fn test_partial_walls_leave_misses() {
        let walls = vec![Segment::new(5.0, -1.0, 5.0, 1.0)];
        let emitter = Emitter::new(0.0, 0.0, 90.0).unwrap();
        let hits = emitter.resolve(&walls);
        assert!(hits[0].is_some());
        assert!(hits[1..].iter().all(Option::is_none));
    }

    #[test]
    fn test_update_idempotent() {
        let walls = closed_box();
        let mut emitter = Emitter::new(0.0, 0.0, DEFAULT_RESOLUTION_DEGREES).unwrap();
        emitter.update(2.5, -3.5);
        let first = emitter.resolve(&walls);
        emitter.update(2.5, -3.5);
        assert_eq!(emitter.resolve(&walls), first);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut walls = closed_box();
        walls.push(Segment::new(-3.0, -3.0, 4.0, 2.0));
        walls.push(Segment::new(6.0, -8.0, 6.0, 8.0));
        let mut emitter = Emitter::new(0.0, 0.0, DEFAULT_RESOLUTION_DEGREES).unwrap();
        emitter.update(-1.0, 4.0);
        assert_eq!(emitter.resolve_par(&walls), emitter.resolve(&walls));
    }

    #[test]
    fn test_resolve_matches_resolve_hits() {
        let walls = closed_box();
        let emitter = Emitter::new(0.5, 0.5, 5.0).unwrap();
        let points = emitter.resolve(&walls);
        let hits = emitter.resolve_hits(&walls);
        for (p, h) in points.iter().zip(&hits) {
            assert_eq!(*p, h.map(|h| h.point));
        }
    }
}
