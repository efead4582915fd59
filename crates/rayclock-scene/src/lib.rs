#![warn(missing_docs)]

//! Reference scene driver for the rayclock ray caster.
//!
//! Lays out the clock face (one wall per hour inside a closed frame),
//! moves the emitter around the canvas centre once a minute and resolves
//! its rays every frame. Drawing is left to the host.
//!
//! # Example
//!
//! ```
//! use rayclock_scene::{Scene, SceneConfig};
//!
//! let config = SceneConfig { seed: Some(1), ..Default::default() };
//! let mut scene = Scene::new(config).unwrap();
//!
//! let frame = scene.frame(0.0);
//! assert_eq!(frame.hits.len(), 720);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod orbit;
pub mod scene;

pub use config::SceneConfig;
pub use error::{Result, SceneError};
pub use layout::{boundary_walls, clock_walls, hour_walls};
pub use orbit::Orbit;
pub use scene::{Frame, FrameStats, Scene};
