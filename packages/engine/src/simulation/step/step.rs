use super::{LifeCore, PerfClock};

pub(super) fn step(core: &mut LifeCore) -> crate::systems::transition::StepReport {
    let _span = tracing::debug_span!("step", generation = core.generation).entered();
    let intensities = core.config.intensities();

    let report = if core.perf_enabled {
        let clock = PerfClock::start();
        let (report, timings) =
            core.engine
                .step_with_clock(&mut core.grid, intensities, Some(|| clock.now_ms()));
        core.perf_stats.record(&report, &timings);
        core.perf_stats.step_ms = clock.now_ms();
        core.perf_stats.grid_size = core.grid.size() as u32;
        // alive + color + staged copies of both
        core.perf_stats.memory_bytes = (core.grid.size() as u32).saturating_mul(10);
        report
    } else {
        core.engine.step(&mut core.grid, intensities)
    };

    core.generation += 1;
    core.last_report = report;

    tracing::debug!(
        generation = core.generation,
        births = report.births,
        survivals = report.survivals,
        deaths = report.deaths,
        edge_deaths = report.edge_deaths,
        live = report.live,
        "generation committed"
    );
    report
}
