use crate::core::EngineError;
use crate::domain::color::Rgb;
use crate::spatial::coord::Coordinate;

use super::LifeCore;

pub(super) fn seed_cell(core: &mut LifeCore, x: i32, y: i32, color: Rgb) -> Result<(), EngineError> {
    core.grid.seed(Coordinate::new(x, y), true, Some(color))
}

pub(super) fn kill_cell(core: &mut LifeCore, x: i32, y: i32) -> Result<(), EngineError> {
    core.grid.seed(Coordinate::new(x, y), false, None)
}

/// Fill the grid with a coin flip per cell. Cells that lose the flip keep
/// their current state.
pub(super) fn randomize(core: &mut LifeCore) {
    let mut placed = 0usize;
    for idx in 0..core.grid.size() {
        if core.seed_rng.coin() {
            let at = core.grid.coord_of(idx);
            let color = Rgb::random(&mut core.seed_rng);
            // `at` comes from the grid itself
            if core.grid.seed(at, true, Some(color)).is_ok() {
                placed += 1;
            }
        }
    }
    tracing::debug!(placed, "grid randomized");
}

pub(super) fn clear(core: &mut LifeCore) {
    core.grid.clear();
    core.generation = 0;
    core.last_report = Default::default();
}
