//! Simulation - owns one grid and drives it generation by generation
//!
//! `LifeCore` only orchestrates; the rules live in `systems/`:
//! - neighbor snapshot and edge handling in spatial/neighbors.rs
//! - life rule in systems/rules.rs
//! - color inheritance in systems/inheritance.rs
//!
//! Seeding (commands, patterns) happens strictly between steps.

use crate::core::EngineError;
use crate::domain::color::Rgb;
use crate::domain::config::{Intensities, LifeConfig};
use crate::spatial::grid::Grid;
use crate::systems::rng::RandomSource;
use crate::systems::transition::{StepReport, TransitionEngine};

#[path = "perf/perf_clock.rs"]
mod perf_clock;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/patterns.rs"]
mod patterns;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use patterns::Pattern;
pub use perf_stats::PerfStats;

use perf_clock::PerfClock;

/// The simulation core
pub struct LifeCore {
    grid: Grid,
    config: LifeConfig,
    engine: TransitionEngine,
    // seeding colors and random fills; separate from the engine's stream
    seed_rng: RandomSource,

    generation: u64,
    last_report: StepReport,

    // Render buffer (ABGR, one u32 per cell)
    pixels: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LifeCore {
    /// Create a core with default intensities and the given dimensions
    pub fn new(rows: u32, columns: u32) -> Result<Self, EngineError> {
        init::create_life_core(LifeConfig { rows, columns, ..LifeConfig::default() })
    }

    pub fn from_config(config: LifeConfig) -> Result<Self, EngineError> {
        init::create_life_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        init::create_life_core(LifeConfig::from_json(json)?)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn columns(&self) -> u32 { self.grid.columns() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn live_count(&self) -> usize { self.grid.live_count() }

    /// Current generation, read-only
    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn config(&self) -> &LifeConfig { &self.config }

    pub fn last_report(&self) -> StepReport { self.last_report }

    // === SETTINGS ===

    pub fn set_intensities(&mut self, intensities: Intensities) {
        settings::set_intensities(self, intensities);
    }

    pub fn intensities(&self) -> Intensities {
        settings::intensities(self)
    }

    /// Restart both random streams from `seed`
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === SEEDING ===

    /// Bring a cell to life with the given color
    pub fn seed_cell(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), EngineError> {
        commands::seed_cell(self, x, y, color)
    }

    /// Kill a cell
    pub fn kill_cell(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        commands::kill_cell(self, x, y)
    }

    /// Each cell independently alive with probability 1/2, random color
    pub fn randomize(&mut self) {
        commands::randomize(self)
    }

    /// Kill every cell and restart the generation counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Stamp a preset around the grid center; returns how many cells were placed
    pub fn place_pattern(&mut self, pattern: Pattern) -> usize {
        patterns::place_pattern(self, pattern)
    }

    // === STEPPING ===

    /// Advance exactly one generation
    pub fn step(&mut self) -> StepReport {
        step::step(self)
    }

    pub fn step_many(&mut self, generations: u32) -> StepReport {
        let mut report = self.last_report;
        for _ in 0..generations {
            report = self.step();
        }
        report
    }

    // === RENDER ===

    /// Refresh and return the ABGR pixel buffer for the current generation
    pub fn render_abgr(&mut self) -> &[u32] {
        render_extract::render_abgr(self)
    }

    /// Get pointer to the pixel buffer (for JS rendering)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
