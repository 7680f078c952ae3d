use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::dom;
use super::perf_stats::PerfStats;
use super::SceneCore;

/// Browser-facing scene handle.
///
/// Owns the core plus the DOM elements it renders into. All physics lives
/// in `SceneCore`; this type translates ticks and host events into style
/// writes. The host page wires pointermove/resize listeners and drives
/// `tick()` from its requestAnimationFrame loop.
#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
    cursor: HtmlElement,
    elements: Vec<HtmlElement>,
}

#[wasm_bindgen]
impl Scene {
    /// Mount the default scene into `container`, with `cursor` as the
    /// cursor indicator element
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        cursor: HtmlElement,
        width: f32,
        height: f32,
    ) -> Result<Scene, JsValue> {
        Self::mount(SceneCore::new(width, height), container, cursor)
    }

    /// Mount a scene built from a config JSON string
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(
        container: HtmlElement,
        cursor: HtmlElement,
        width: f32,
        height: f32,
        json: String,
    ) -> Result<Scene, JsValue> {
        let core = SceneCore::from_config_json(&json, width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        Self::mount(core, container, cursor)
    }

    /// Advance one frame and commit transforms to the DOM
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        dom::commit_transforms(&self.elements, self.core.sprites())
    }

    /// Pointer-move notification (absolute viewport coordinates)
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.core.pointer_moved(x, y);
        dom::move_cursor_indicator(&self.cursor, x, y)
    }

    /// Viewport-resize notification
    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.viewport_resized(width, height);
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter, js_name = spriteCount)]
    pub fn sprite_count(&self) -> usize {
        self.core.sprite_count()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.core.height()
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn set_influence_radius(&mut self, radius: f32) {
        self.core.set_influence_radius(radius);
    }

    pub fn set_force_scale(&mut self, scale: f32) {
        self.core.set_force_scale(scale);
    }

    fn mount(
        core: SceneCore,
        container: HtmlElement,
        cursor: HtmlElement,
    ) -> Result<Scene, JsValue> {
        let document = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container is not attached to a document"))?;
        let elements = dom::build_sprite_elements(&document, &container, core.sprites())?;

        Ok(Scene {
            core,
            cursor,
            elements,
        })
    }
}
