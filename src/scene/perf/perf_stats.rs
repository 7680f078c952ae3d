use wasm_bindgen::prelude::*;

/// Snapshot of the last tick's timings and counters
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) sprites_affected: u32,
    pub(super) sprite_count: u32,
    pub(super) frame: u64,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }

    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }

    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }

    /// Sprites that received a cursor force this tick
    #[wasm_bindgen(getter)]
    pub fn sprites_affected(&self) -> u32 { self.sprites_affected }

    #[wasm_bindgen(getter)]
    pub fn sprite_count(&self) -> u32 { self.sprite_count }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
