//! Ray-segment intersection (closed-form).
//!
//! The ray is treated as the line through `origin` and `origin + direction`
//! and the segment as the line through its endpoints. Solving both
//! parametric forms gives `t` along the segment and `u` along the ray.

use rayclock_math::Point2;

use crate::ray::Ray;
use crate::segment::Segment;

/// Result of a ray-segment intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Parameter along the segment, strictly inside `(0, 1)`.
    pub t: f64,
    /// Parameter along the ray in units of `direction`, strictly positive.
    pub u: f64,
    /// Intersection point.
    pub point: Point2,
}

/// Intersect a ray with a segment.
///
/// Returns `None` when the lines are parallel or collinear, when the
/// crossing lies outside the open segment (endpoints do not count), or when
/// it is not strictly ahead of the ray origin.
///
/// Parallelism is detected with an exact `den == 0.0` comparison. Nearly
/// parallel walls therefore still produce (distant) hits; switching to an
/// epsilon would change which grazing rays report a wall.
pub fn intersect_segment(ray: &Ray, wall: &Segment) -> Option<SegmentHit> {
    let (x1, y1) = (wall.a().x, wall.a().y);
    let (x2, y2) = (wall.b().x, wall.b().y);

    let (x3, y3) = (ray.origin.x, ray.origin.y);
    let (x4, y4) = (x3 + ray.direction.x, y3 + ray.direction.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    // Also rejects NaN from non-finite inputs.
    if t > 0.0 && t < 1.0 && u > 0.0 {
        let point = Point2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1));
        Some(SegmentHit { t, u, point })
    } else {
        None
    }
}
