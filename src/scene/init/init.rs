use crate::domain::config::SceneConfig;
use crate::sprite::{Sprite, Vec2};

use super::perf_stats::PerfStats;
use super::{random, SceneCore};

pub(super) fn create_scene_core(config: SceneConfig, width: f32, height: f32) -> SceneCore {
    // xorshift32 has a fixed point at zero
    let mut rng_state = if config.seed == 0 { 1 } else { config.seed };

    let tuning = config.tuning;
    let size = config.sprite_size;
    let max_x = (width - size).max(0.0);
    let max_y = (height - size).max(0.0);

    let mut sprites = Vec::with_capacity(config.assets.len());
    for asset in config.assets.iter() {
        let pos = Vec2::new(
            random::rand_range(&mut rng_state, max_x),
            random::rand_range(&mut rng_state, max_y),
        );
        let velocity = Vec2::new(
            random::rand_symmetric(&mut rng_state) * tuning.initial_speed,
            random::rand_symmetric(&mut rng_state) * tuning.initial_speed,
        );
        let rotation = random::rand_range(&mut rng_state, 360.0);
        let spin = random::rand_symmetric(&mut rng_state) * tuning.initial_spin;

        sprites.push(Sprite::new(asset.clone(), pos, velocity, rotation, spin, size));
    }

    SceneCore {
        config,
        sprites,
        tuning,
        cursor_x: 0.0,
        cursor_y: 0.0,
        width,
        height,
        frame: 0,
        rng_state,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
