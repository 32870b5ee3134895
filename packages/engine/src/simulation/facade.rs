use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::color::Rgb;
use crate::domain::config::Intensities;
use crate::spatial::coord::Coordinate;

use super::perf_stats::PerfStats;
use super::{LifeCore, Pattern};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: LifeCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, columns: u32) -> Result<World, JsValue> {
        let core = LifeCore::new(rows, columns).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON config (camelCase keys, all optional)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let core = LifeCore::from_config_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.core.columns() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn live_count(&self) -> u32 { self.core.live_count() as u32 }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === SETTINGS ===

    pub fn set_intensities(&mut self, recessive: u32, mid: u32, dominant: u32) {
        self.core.set_intensities(Intensities::new(recessive, mid, dominant));
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === SEEDING (between steps only) ===

    pub fn seed_cell(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) -> Result<(), JsValue> {
        self.core.seed_cell(x, y, Rgb::new(r, g, b)).map_err(to_js)
    }

    pub fn kill_cell(&mut self, x: i32, y: i32) -> Result<(), JsValue> {
        self.core.kill_cell(x, y).map_err(to_js)
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.core
            .grid()
            .get(Coordinate::new(x, y))
            .map(|cell| cell.alive)
            .unwrap_or(false)
    }

    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Stamp a preset: "block", "beehive", "line" or "r-pentomino"
    pub fn place_pattern(&mut self, name: &str) -> Result<u32, JsValue> {
        let pattern: Pattern = name.parse().map_err(to_js)?;
        Ok(self.core.place_pattern(pattern) as u32)
    }

    // === STEPPING ===

    /// Advance one generation; returns the number of live cells
    pub fn step(&mut self) -> u32 {
        self.core.step().live
    }

    #[wasm_bindgen(js_name = stepMany)]
    pub fn step_many(&mut self, generations: u32) -> u32 {
        self.core.step_many(generations).live
    }

    // === RENDER ===

    /// Refresh the ABGR buffer and return a pointer to it
    pub fn render(&mut self) -> *const u32 {
        self.core.render_abgr();
        self.core.pixels_ptr()
    }

    /// Get pointer to the pixel buffer (for JS rendering)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.core.pixels_len() * std::mem::size_of::<u32>()
    }
}
