use wasm_bindgen::prelude::*;

use crate::systems::transition::{PassTimings, StepReport};

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) resolve_ms: f64,
    pub(super) evaluate_ms: f64,
    pub(super) commit_ms: f64,
    pub(super) births: u32,
    pub(super) survivals: u32,
    pub(super) deaths: u32,
    pub(super) edge_deaths: u32,
    pub(super) live_cells: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record(&mut self, report: &StepReport, timings: &PassTimings) {
        self.resolve_ms = timings.resolve_ms;
        self.evaluate_ms = timings.evaluate_ms;
        self.commit_ms = timings.commit_ms;
        self.births = report.births;
        self.survivals = report.survivals;
        self.deaths = report.deaths;
        self.edge_deaths = report.edge_deaths;
        self.live_cells = report.live;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn resolve_ms(&self) -> f64 { self.resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn evaluate_ms(&self) -> f64 { self.evaluate_ms }
    #[wasm_bindgen(getter)]
    pub fn commit_ms(&self) -> f64 { self.commit_ms }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn survivals(&self) -> u32 { self.survivals }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn edge_deaths(&self) -> u32 { self.edge_deaths }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
