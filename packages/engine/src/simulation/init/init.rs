use crate::core::EngineError;
use crate::domain::color::DEAD_COLOR;
use crate::domain::config::LifeConfig;
use crate::spatial::grid::Grid;
use crate::systems::rng::RandomSource;
use crate::systems::transition::{StepReport, TransitionEngine};

use super::perf_stats::PerfStats;
use super::LifeCore;

pub(super) fn create_life_core(config: LifeConfig) -> Result<LifeCore, EngineError> {
    config.validate()?;
    let grid = Grid::new(config.rows, config.columns)?;
    let size = grid.size();

    tracing::debug!(rows = config.rows, columns = config.columns, seed = config.seed, "life core created");

    Ok(LifeCore {
        grid,
        engine: TransitionEngine::new(config.seed),
        seed_rng: seeding_stream(config.seed),
        config,
        generation: 0,
        last_report: StepReport::default(),
        pixels: vec![DEAD_COLOR; size],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

/// Stream for seeding colors, offset so it does not mirror the engine's.
pub(super) fn seeding_stream(seed: u32) -> RandomSource {
    RandomSource::new(seed.rotate_left(16) ^ 0x5bd1_e995)
}
