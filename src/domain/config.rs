use serde::{Deserialize, Serialize};

/// Physics constants for the scene.
///
/// Units are pixels and frames throughout. Every field has a default that
/// matches the shipped toy, and configs may override any subset.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Maximum distance (px) at which the cursor exerts force
    pub influence_radius: f32,
    /// Velocity gained per frame at zero cursor distance (px/frame)
    pub force_scale: f32,
    /// Velocity retained after a wall bounce (0.0 = dead stop, 1.0 = elastic)
    pub restitution: f32,
    /// Per-frame velocity damping, applied every frame
    pub friction: f32,
    /// Per-frame spin damping, gentler than friction
    pub spin_damping: f32,
    /// Initial velocity components are uniform in [-initial_speed, initial_speed]
    pub initial_speed: f32,
    /// Initial spin is uniform in [-initial_spin, initial_spin]
    pub initial_spin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            influence_radius: 200.0,
            force_scale: 0.5,
            restitution: 0.8,
            friction: 0.9,
            spin_damping: 0.99,
            initial_speed: 1.0,
            initial_spin: 1.0,
        }
    }
}

/// Static scene configuration: asset list, footprint, RNG seed and tuning.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// One sprite is created per asset path
    pub assets: Vec<String>,
    /// Footprint edge length (px); width == height for clamping math
    pub sprite_size: f32,
    /// Seed for the xorshift32 stream (initial placement and spin jitter)
    pub seed: u32,
    pub tuning: Tuning,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        // Sample set shipped with the toy page
        let assets = (0..12)
            .map(|i| format!("images/IMG_0{}.PNG", 658 + i))
            .collect();
        Self {
            assets,
            sprite_size: 100.0,
            seed: 12345,
            tuning: Tuning::default(),
        }
    }
}
