//! Scene - floating-sprite simulation core
//!
//! SceneCore owns the sprites, the live cursor position and the per-tick
//! orchestration; per-sprite physics lives in the sprite module. The wasm
//! facade is in facade.rs and is the only place that touches the DOM.
//!
//! `tick()` is an explicit function: the host scheduler (a
//! requestAnimationFrame loop in the browser, a plain loop in tests) calls
//! it once per frame. The core never reschedules itself.

use crate::domain::config::{SceneConfig, Tuning};
use crate::sprite::Sprite;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/forces.rs"]
mod forces;
#[path = "step/step.rs"]
mod step;
#[path = "events/events.rs"]
mod events;
#[path = "render/dom.rs"]
mod dom;
mod facade;

pub use facade::Scene;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation scene
pub struct SceneCore {
    config: SceneConfig,
    sprites: Vec<Sprite>,

    // Settings
    tuning: Tuning,

    // State
    cursor_x: f32,
    cursor_y: f32,
    width: f32,
    height: f32,
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Create a scene with the default config (12 sample sprites)
    pub fn new(width: f32, height: f32) -> Self {
        init::create_scene_core(SceneConfig::default(), width, height)
    }

    /// Create a scene from an explicit config
    pub fn with_config(config: SceneConfig, width: f32, height: f32) -> Self {
        init::create_scene_core(config, width, height)
    }

    /// Create a scene from a config JSON string
    pub fn from_config_json(json: &str, width: f32, height: f32) -> Result<Self, String> {
        let config = SceneConfig::from_json(json)?;
        Ok(Self::with_config(config, width, height))
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn sprite_count(&self) -> usize { self.sprites.len() }

    pub fn sprites(&self) -> &[Sprite] { &self.sprites }

    /// Last cursor position seen by `pointer_moved`
    pub fn cursor(&self) -> (f32, f32) { (self.cursor_x, self.cursor_y) }

    pub fn config(&self) -> &SceneConfig { &self.config }

    pub fn config_json(&self) -> String { self.config.to_json() }

    pub fn tuning(&self) -> &Tuning { &self.tuning }

    // === SETTINGS ===

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_influence_radius(&mut self, radius: f32) {
        settings::set_influence_radius(self, radius);
    }

    pub fn set_force_scale(&mut self, scale: f32) {
        settings::set_force_scale(self, scale);
    }

    // === EVENTS ===

    /// Overwrite the stored cursor position (last write wins, no queueing)
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        events::pointer_moved(self, x, y);
    }

    /// Adopt a new viewport size and pull sprites back inside it
    pub fn viewport_resized(&mut self, width: f32, height: f32) {
        events::viewport_resized(self, width, height);
    }

    /// Advance the simulation one frame
    pub fn tick(&mut self) {
        step::tick(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
