//! Drift Engine - floating-sprite physics in WASM
//!
//! A fixed set of sprites drifts around the viewport, bounces off its
//! edges and gets pushed around by cursor proximity.
//!
//! Architecture:
//! - domain/  - Configuration and physics tuning
//! - sprite/  - Per-sprite physics state
//! - scene/   - Orchestration, events and the wasm facade
//!
//! All physics lives in `SceneCore`, which has no browser dependencies and
//! runs on native targets for testing. The `Scene` facade owns the DOM
//! binding and is a translation layer only.

pub mod domain;
pub mod scene;
pub mod sprite;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Drift WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{SceneConfig, Tuning};
pub use scene::{PerfStats, Scene, SceneCore};
pub use sprite::{Sprite, Vec2};
