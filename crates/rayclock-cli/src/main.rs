//! rayclock CLI - headless driver for the ray-casting clock
//!
//! Steps the clock scene without a renderer and prints frames, wall
//! layouts or throughput figures.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rayclock_scene::{Frame, Scene, SceneConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "rayclock")]
#[command(about = "Headless ray-casting clock", long_about = None)]
struct Cli {
    /// Scene config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Seed for the wall layout (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single frame and print it as JSON
    Frame {
        /// Time since start in milliseconds
        #[arg(short, long, default_value_t = 0.0)]
        time_ms: f64,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Step fixed-rate frames and report throughput
    Run {
        /// Number of frames to simulate
        #[arg(short = 'n', long, default_value_t = 600)]
        frames: u64,
        /// Cast each frame's rays in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Print the wall layout as JSON
    Walls {
        /// Only walls a renderer would draw
        #[arg(long)]
        visible: bool,
    },
}

/// Totals gathered by the `run` command.
#[derive(Debug, Default, PartialEq)]
struct RunSummary {
    frames: u64,
    rays_per_frame: usize,
    walls: usize,
    total_hits: u64,
    min_hits: Option<usize>,
    max_hits: Option<usize>,
}

impl RunSummary {
    fn record(&mut self, frame: &Frame) {
        let hits = frame.stats().hits;
        self.frames += 1;
        self.rays_per_frame = frame.hits.len();
        self.total_hits += hits as u64;
        self.min_hits = Some(self.min_hits.map_or(hits, |m| m.min(hits)));
        self.max_hits = Some(self.max_hits.map_or(hits, |m| m.max(hits)));
    }

    fn mean_hits(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.total_hits as f64 / self.frames as f64
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(cli.config.as_ref(), cli.seed)?;
    let mut scene = Scene::new(config).context("failed to build scene")?;
    log::info!(
        "scene ready: {} walls, {} rays per frame",
        scene.walls().len(),
        scene.emitter().len()
    );

    match cli.command {
        Commands::Frame { time_ms, pretty } => {
            let frame = scene.frame(time_ms);
            print_json(&frame, pretty)?;
        }
        Commands::Run { frames, parallel } => {
            run_frames(&mut scene, frames, parallel);
        }
        Commands::Walls { visible } => {
            let walls: Vec<_> = if visible {
                scene.visible_walls().copied().collect()
            } else {
                scene.walls().to_vec()
            };
            print_json(&walls, true)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn build_config(path: Option<&PathBuf>, seed: Option<u64>) -> Result<SceneConfig> {
    let mut config = match path {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn run_frames(scene: &mut Scene, frames: u64, parallel: bool) -> RunSummary {
    let mut summary = RunSummary {
        walls: scene.walls().len(),
        ..Default::default()
    };

    let start = Instant::now();
    for i in 0..frames {
        let t = scene.frame_time_ms(i);
        let frame = if parallel {
            scene.frame_par(t)
        } else {
            scene.frame(t)
        };
        summary.record(&frame);
    }
    let elapsed = start.elapsed().as_secs_f64();

    println!("Frames:         {}", summary.frames);
    println!("Walls:          {}", summary.walls);
    println!("Rays per frame: {}", summary.rays_per_frame);
    println!("Mean hits:      {:.1}", summary.mean_hits());
    if let (Some(min), Some(max)) = (summary.min_hits, summary.max_hits) {
        println!("Hit range:      {min}..={max}");
    }
    println!("Elapsed:        {elapsed:.3}s");
    if elapsed > 0.0 {
        println!("Frames/sec:     {:.1}", summary.frames as f64 / elapsed);
    }

    summary
}
