#![warn(missing_docs)]

//! 2D ray casting against line-segment walls.
//!
//! An [`Emitter`] owns a fixed fan of rays covering a full turn. Every frame
//! the caller moves it and resolves the fan against a slice of walls; each
//! ray reports the nearest wall it strikes, if any.
//!
//! # Architecture
//!
//! - [`Segment`] - Immutable wall between two endpoints
//! - [`Ray`] - Origin and direction, with re-aiming
//! - [`intersect`] - Ray-segment intersection primitive
//! - [`Emitter`] - Fan of rays and nearest-hit resolution
//!
//! # Example
//!
//! ```
//! use rayclock_cast::{Emitter, Segment};
//!
//! let walls = vec![
//!     Segment::new(5.0, -5.0, 5.0, 5.0),
//!     Segment::new(10.0, -5.0, 10.0, 5.0),
//! ];
//!
//! let mut emitter = Emitter::with_ray_count(0.0, 0.0, 4);
//! emitter.update(0.0, 0.0);
//! let hits = emitter.resolve(&walls);
//!
//! let first = hits[0].expect("ray along +X hits the nearer wall");
//! assert!((first.x - 5.0).abs() < 1e-9);
//! ```

mod emitter;
mod error;
pub mod intersect;
mod ray;
mod segment;

pub use emitter::{Emitter, RayHit, DEFAULT_RESOLUTION_DEGREES, MAX_RAYS};
pub use error::{CastError, Result};
pub use intersect::{intersect_segment, SegmentHit};
pub use ray::Ray;
pub use segment::Segment;

pub use rayclock_math::{Point2, Vec2};
