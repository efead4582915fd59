//! Scene driver: owns the walls and the emitter, steps frames.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayclock_cast::{Emitter, Segment};
use rayclock_math::{distance, Point2};
use serde::{Deserialize, Serialize};

use crate::config::SceneConfig;
use crate::error::Result;
use crate::layout::clock_walls;
use crate::orbit::Orbit;

/// One resolved frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Time the frame was sampled at (ms since start).
    pub elapsed_ms: f64,
    /// Emitter position for this frame.
    pub position: Point2,
    /// Nearest hit per ray, in fan order.
    pub hits: Vec<Option<Point2>>,
}

/// Summary of a frame's hits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Rays cast.
    pub rays: usize,
    /// Rays that struck a wall.
    pub hits: usize,
    /// Rays that struck nothing.
    pub misses: usize,
    /// Distance to the closest hit.
    pub nearest: Option<f64>,
    /// Distance to the farthest hit.
    pub farthest: Option<f64>,
}

impl Frame {
    /// Count hits and measure hit distances from the emitter.
    pub fn stats(&self) -> FrameStats {
        let distances: Vec<f64> = self
            .hits
            .iter()
            .flatten()
            .map(|p| distance(&self.position, p))
            .collect();

        FrameStats {
            rays: self.hits.len(),
            hits: distances.len(),
            misses: self.hits.len() - distances.len(),
            nearest: distances.iter().copied().reduce(f64::min),
            farthest: distances.iter().copied().reduce(f64::max),
        }
    }
}

/// A clock scene: wall layout, orbiting emitter and the config behind them.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    walls: Vec<Segment>,
    emitter: Emitter,
    orbit: Orbit,
}

impl Scene {
    /// Build a scene, seeding the layout from `config.seed` when present.
    pub fn new(config: SceneConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Build a scene drawing wall lengths from `rng`.
    pub fn with_rng<R: Rng>(config: SceneConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let walls = clock_walls(&config, rng);
        Self::with_walls(config, walls)
    }

    /// Build a scene around a caller-supplied wall set.
    pub fn with_walls(config: SceneConfig, walls: Vec<Segment>) -> Result<Self> {
        config.validate()?;

        let degenerate = walls.iter().filter(|w| w.is_degenerate()).count();
        if degenerate > 0 {
            log::warn!("{degenerate} zero-length walls will never be hit");
        }

        let emitter = Emitter::new(
            config.width / 2.0,
            config.height / 2.0,
            config.resolution_degrees,
        )?;
        let orbit = Orbit::from_config(&config);

        log::debug!(
            "scene {}x{}: {} walls, {} rays",
            config.width,
            config.height,
            walls.len(),
            emitter.len()
        );

        Ok(Self {
            config,
            walls,
            emitter,
            orbit,
        })
    }

    /// Scene configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// All walls, hidden ones included.
    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    /// Walls a renderer should draw.
    pub fn visible_walls(&self) -> impl Iterator<Item = &Segment> {
        self.walls.iter().filter(|w| w.is_visible())
    }

    /// The emitter in its current position.
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// The path the emitter follows.
    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Move the emitter to its orbit position at `elapsed_ms` and cast.
    pub fn frame(&mut self, elapsed_ms: f64) -> Frame {
        let position = self.advance(elapsed_ms);
        let hits = self.emitter.resolve(&self.walls);
        Self::finish(elapsed_ms, position, hits)
    }

    /// Like [`Scene::frame`], casting rays in parallel.
    pub fn frame_par(&mut self, elapsed_ms: f64) -> Frame {
        let position = self.advance(elapsed_ms);
        let hits = self.emitter.resolve_par(&self.walls);
        Self::finish(elapsed_ms, position, hits)
    }

    /// Sample time of fixed-step frame `index`.
    pub fn frame_time_ms(&self, index: u64) -> f64 {
        index as f64 * self.config.frame_interval_ms()
    }

    fn advance(&mut self, elapsed_ms: f64) -> Point2 {
        let position = self.orbit.position(elapsed_ms);
        self.emitter.update(position.x, position.y);
        position
    }

    fn finish(elapsed_ms: f64, position: Point2, hits: Vec<Option<Point2>>) -> Frame {
        let frame = Frame {
            elapsed_ms,
            position,
            hits,
        };
        log::trace!("frame at {elapsed_ms} ms: {:?}", frame.stats());
        frame
    }
}
