use crate::domain::config::Intensities;

use super::init::seeding_stream;
use super::perf_stats::PerfStats;
use super::LifeCore;

pub(super) fn set_intensities(core: &mut LifeCore, intensities: Intensities) {
    core.config.set_intensities(intensities);
}

pub(super) fn intensities(core: &LifeCore) -> Intensities {
    core.config.intensities()
}

pub(super) fn set_seed(core: &mut LifeCore, seed: u32) {
    core.config.seed = seed;
    core.engine.reseed(seed);
    core.seed_rng = seeding_stream(seed);
}

pub(super) fn enable_perf_metrics(core: &mut LifeCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &LifeCore) -> PerfStats {
    core.perf_stats.clone()
}
