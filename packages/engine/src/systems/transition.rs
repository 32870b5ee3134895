//! Transition engine - one generation per `step`
//!
//! Three passes, each finishing before the next starts:
//! 1. Resolve: neighbor snapshot of the current generation
//! 2. Evaluate: every cell's next value (parallel with the `parallel` feature)
//! 3. Commit: staged values become current for the whole grid at once

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::config::Intensities;
use crate::spatial::grid::Grid;
use crate::spatial::neighbors::{NeighborResolver, NeighborSnapshot};
use crate::systems::inheritance::ColorInheritance;
use crate::systems::rng::RandomSource;
use crate::systems::rules::{self, Outcome};

/// Per-generation tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub births: u32,
    pub survivals: u32,
    pub deaths: u32,
    pub edge_deaths: u32,
    pub live: u32,
}

impl StepReport {
    fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Born(_) => self.births += 1,
            Outcome::Survived(_) => self.survivals += 1,
            Outcome::Died => self.deaths += 1,
            Outcome::EdgeDeath => self.edge_deaths += 1,
            Outcome::StayedDead => {}
        }
    }
}

/// Pass durations in ms, filled only when timing is requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassTimings {
    pub resolve_ms: f64,
    pub evaluate_ms: f64,
    pub commit_ms: f64,
}

pub struct TransitionEngine {
    rng: RandomSource,
}

impl TransitionEngine {
    pub fn new(seed: u32) -> Self {
        Self { rng: RandomSource::new(seed) }
    }

    pub fn reseed(&mut self, seed: u32) {
        self.rng = RandomSource::new(seed);
    }

    /// Advance `grid` by exactly one generation.
    pub fn step(&mut self, grid: &mut Grid, intensities: Intensities) -> StepReport {
        self.step_with_clock(grid, intensities, None::<fn() -> f64>).0
    }

    /// `step` that also measures each pass with `clock` (ms).
    pub fn step_with_clock<C: Fn() -> f64>(
        &mut self,
        grid: &mut Grid,
        intensities: Intensities,
        clock: Option<C>,
    ) -> (StepReport, PassTimings) {
        let now = || clock.as_ref().map(|c| c()).unwrap_or(0.0);
        let mut timings = PassTimings::default();

        let t0 = now();
        let snapshot = NeighborResolver::snapshot(grid);
        let t1 = now();

        let generation_seed = self.rng.next_u32();
        let inheritance = ColorInheritance::new(intensities);
        let outcomes = evaluate_all(grid, &snapshot, &inheritance, generation_seed);
        let t2 = now();

        let mut report = StepReport::default();
        let staged: Vec<_> = outcomes
            .into_iter()
            .map(|outcome| {
                report.tally(outcome);
                outcome.next_color()
            })
            .collect();
        report.live = report.births + report.survivals;
        grid.stage_all(staged);
        grid.commit();
        let t3 = now();

        timings.resolve_ms = t1 - t0;
        timings.evaluate_ms = t2 - t1;
        timings.commit_ms = t3 - t2;
        (report, timings)
    }
}

/// Evaluate pass. Reads only the current generation; the snapshot is dropped
/// by the caller once the grid is committed.
fn evaluate_all(
    grid: &Grid,
    snapshot: &NeighborSnapshot,
    inheritance: &ColorInheritance,
    generation_seed: u32,
) -> Vec<Outcome> {
    let evaluate_one = |idx| evaluate_cell(grid, snapshot, inheritance, generation_seed, idx);

    #[cfg(feature = "parallel")]
    let outcomes = (0..grid.size()).into_par_iter().map(evaluate_one).collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = (0..grid.size()).map(evaluate_one).collect();

    outcomes
}

/// Single-threaded evaluate pass, whatever the feature set.
#[cfg(test)]
fn evaluate_serial(
    grid: &Grid,
    snapshot: &NeighborSnapshot,
    inheritance: &ColorInheritance,
    generation_seed: u32,
) -> Vec<Outcome> {
    (0..grid.size())
        .map(|idx| evaluate_cell(grid, snapshot, inheritance, generation_seed, idx))
        .collect()
}

#[inline]
fn evaluate_cell(
    grid: &Grid,
    snapshot: &NeighborSnapshot,
    inheritance: &ColorInheritance,
    generation_seed: u32,
    idx: usize,
) -> Outcome {
    let mut rng = RandomSource::for_cell(generation_seed, idx);
    rules::evaluate(grid, idx, snapshot.of(idx), inheritance, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Rgb;
    use crate::spatial::coord::Coordinate;

    fn seed_all(grid: &mut Grid, points: &[(i32, i32)], color: Rgb) {
        for &(x, y) in points {
            grid.seed(Coordinate::new(x, y), true, Some(color)).unwrap();
        }
    }

    fn live_set(grid: &Grid) -> Vec<(i32, i32)> {
        grid.cells()
            .filter(|c| c.alive)
            .map(|c| (c.coord.x, c.coord.y))
            .collect()
    }

    #[test]
    fn blinker_oscillates_in_the_interior() {
        let mut grid = Grid::new(7, 7).unwrap();
        let c = Rgb::new(120, 80, 40);
        seed_all(&mut grid, &[(2, 3), (3, 3), (4, 3)], c);
        let mut engine = TransitionEngine::new(9);

        let report = engine.step(&mut grid, Intensities::new(0, 0, 0));
        assert_eq!(live_set(&grid), vec![(3, 2), (3, 3), (3, 4)]);
        assert_eq!(report, StepReport { births: 2, survivals: 1, deaths: 2, edge_deaths: 0, live: 3 });

        engine.step(&mut grid, Intensities::new(0, 0, 0));
        assert_eq!(live_set(&grid), vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn evaluation_never_sees_committed_cells() {
        // in-place updates in row-major order would let (3,2)'s birth feed
        // later cells; simultaneous update keeps the blinker symmetric
        let mut grid = Grid::new(7, 7).unwrap();
        seed_all(&mut grid, &[(3, 2), (3, 3), (3, 4)], Rgb::new(1, 1, 1));
        TransitionEngine::new(1).step(&mut grid, Intensities::default());
        assert_eq!(live_set(&grid), vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn edge_cells_are_counted_as_edge_deaths() {
        let mut grid = Grid::new(4, 4).unwrap();
        seed_all(&mut grid, &[(0, 0), (1, 1)], Rgb::new(5, 5, 5));
        let report = TransitionEngine::new(1).step(&mut grid, Intensities::default());
        assert_eq!(report.edge_deaths, 1);
        assert_eq!(report.deaths, 1);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn same_seed_gives_same_colors() {
        let build = || {
            let mut grid = Grid::new(12, 12).unwrap();
            let mut rng = RandomSource::new(3);
            for y in 2..10 {
                for x in 2..10 {
                    if rng.coin() {
                        grid.seed(Coordinate::new(x, y), true, Some(Rgb::random(&mut rng))).unwrap();
                    }
                }
            }
            grid
        };
        let (mut a, mut b) = (build(), build());
        let (mut ea, mut eb) = (TransitionEngine::new(77), TransitionEngine::new(77));
        for _ in 0..5 {
            ea.step(&mut a, Intensities::default());
            eb.step(&mut b, Intensities::default());
        }
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn evaluate_pass_matches_serial_evaluation() {
        let mut grid = Grid::new(40, 40).unwrap();
        let mut rng = RandomSource::new(11);
        for y in 1..39 {
            for x in 1..39 {
                if rng.below(3) == 0 {
                    grid.seed(Coordinate::new(x, y), true, Some(Rgb::random(&mut rng))).unwrap();
                }
            }
        }
        let inheritance = ColorInheritance::new(Intensities::new(2, 50, 2));
        let mut engine = TransitionEngine::new(31);

        for _ in 0..8 {
            let snapshot = NeighborResolver::snapshot(&grid);
            let generation_seed = rng.next_u32();
            let outcomes = evaluate_all(&grid, &snapshot, &inheritance, generation_seed);
            let serial = evaluate_serial(&grid, &snapshot, &inheritance, generation_seed);
            assert_eq!(outcomes, serial);
            assert!(outcomes.iter().any(|o| matches!(o, Outcome::Born(_))));

            engine.step(&mut grid, Intensities::new(2, 50, 2));
        }
    }

    #[test]
    fn clock_fills_pass_timings() {
        let mut grid = Grid::new(3, 3).unwrap();
        let ticks = std::cell::Cell::new(0.0);
        let clock = || {
            ticks.set(ticks.get() + 1.0);
            ticks.get()
        };
        let (_, timings) = TransitionEngine::new(1).step_with_clock(&mut grid, Intensities::default(), Some(clock));
        assert_eq!(timings.resolve_ms, 1.0);
        assert_eq!(timings.evaluate_ms, 1.0);
        assert_eq!(timings.commit_ms, 1.0);
    }
}
