//! Line-segment walls.

use rayclock_math::{is_finite, Point2, Tolerance};
use serde::{Deserialize, Serialize};

use crate::error::{CastError, Result};

/// A finite wall between two endpoints.
///
/// The `visible` flag is only read by renderers; hidden walls still block
/// rays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    a: Point2,
    b: Point2,
    visible: bool,
}

impl Segment {
    /// Create a visible segment from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Zero-length segments are accepted and never produce a hit.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::with_visibility(x1, y1, x2, y2, true)
    }

    /// Create a segment with an explicit visibility flag.
    pub fn with_visibility(x1: f64, y1: f64, x2: f64, y2: f64, visible: bool) -> Self {
        Self::from_points(Point2::new(x1, y1), Point2::new(x2, y2), visible)
    }

    /// Create a segment from two points.
    pub fn from_points(a: Point2, b: Point2, visible: bool) -> Self {
        Self { a, b, visible }
    }

    /// Create a visible segment, rejecting zero-length or non-finite input.
    pub fn try_new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        let seg = Self::new(x1, y1, x2, y2);
        if !is_finite(&seg.a) || !is_finite(&seg.b) {
            return Err(CastError::InvalidGeometry(format!(
                "segment endpoints must be finite: ({x1}, {y1}) - ({x2}, {y2})"
            )));
        }
        if seg.is_degenerate() {
            return Err(CastError::InvalidGeometry(format!(
                "zero-length segment at ({x1}, {y1})"
            )));
        }
        Ok(seg)
    }

    /// First endpoint.
    #[inline]
    pub fn a(&self) -> Point2 {
        self.a
    }

    /// Second endpoint.
    #[inline]
    pub fn b(&self) -> Point2 {
        self.b
    }

    /// Whether a renderer should draw this wall.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Check if this segment is degenerate (zero length).
    pub fn is_degenerate(&self) -> bool {
        Tolerance::DEFAULT.points_equal(&self.a, &self.b)
    }

    /// Point at parameter `t` along the segment: `a + t * (b - a)`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.a + t * (self.b - self.a)
    }
}
