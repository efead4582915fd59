//! Wall layout for the clock face.
//!
//! One vertical wall per hour, evenly spaced across the canvas and centred
//! on its horizontal midline, inside a closed frame of four edges.

use rand::Rng;
use rayclock_cast::Segment;

use crate::config::SceneConfig;

/// Vertical hour walls with random lengths in `[min_wall_len, max_wall_len)`.
pub fn hour_walls<R: Rng>(config: &SceneConfig, rng: &mut R) -> Vec<Segment> {
    let mid = config.height / 2.0;
    (0..config.hour_walls)
        .map(|i| {
            let len = if config.min_wall_len < config.max_wall_len {
                rng.gen_range(config.min_wall_len..config.max_wall_len)
            } else {
                config.min_wall_len
            };
            let x = i as f64 * config.width / config.hour_walls as f64;
            Segment::new(x, mid - len / 2.0, x, mid + len / 2.0)
        })
        .collect()
}

/// Closed frame one unit outside the top and left canvas edges.
///
/// Top and left edges are visible; right and bottom are hidden but still
/// block rays, so no ray from inside the canvas escapes.
pub fn boundary_walls(width: f64, height: f64) -> [Segment; 4] {
    [
        Segment::with_visibility(-1.0, -1.0, width, -1.0, true),
        Segment::with_visibility(width, -1.0, width, height, false),
        Segment::with_visibility(width, height, -1.0, height, false),
        Segment::with_visibility(-1.0, height, -1.0, -1.0, true),
    ]
}

/// Full clock layout: hour walls followed by the boundary frame.
pub fn clock_walls<R: Rng>(config: &SceneConfig, rng: &mut R) -> Vec<Segment> {
    let mut walls = hour_walls(config, rng);
    walls.extend(boundary_walls(config.width, config.height));
    log::debug!(
        "laid out {} walls ({} hour walls)",
        walls.len(),
        config.hour_walls
    );
    walls
}
