//! Life rule with edge death
//!
//! B3/S23 on interior cells. Any cell with a neighbor slot outside the grid
//! dies, whatever its neighbor count.

use crate::domain::color::Rgb;
use crate::spatial::grid::Grid;
use crate::spatial::neighbors::{touches_edge, NeighborSlots};
use crate::systems::inheritance::ColorInheritance;
use crate::systems::rng::RandomSource;

const BIRTH_COUNT: usize = 3;

/// What happens to one cell in the next generation. `EdgeDeath` is only
/// reported for cells that were alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Born(Rgb),
    Survived(Rgb),
    Died,
    EdgeDeath,
    StayedDead,
}

impl Outcome {
    /// Staged color; `None` means dead next generation.
    #[inline]
    pub fn next_color(self) -> Option<Rgb> {
        match self {
            Outcome::Born(c) | Outcome::Survived(c) => Some(c),
            Outcome::Died | Outcome::EdgeDeath | Outcome::StayedDead => None,
        }
    }
}

/// Evaluate cell `idx` against the current generation only.
pub fn evaluate(
    grid: &Grid,
    idx: usize,
    neighbors: &NeighborSlots,
    inheritance: &ColorInheritance,
    rng: &mut RandomSource,
) -> Outcome {
    if touches_edge(neighbors) {
        return if grid.is_alive_idx(idx) { Outcome::EdgeDeath } else { Outcome::StayedDead };
    }

    let mut live = 0usize;
    let mut parents = [Rgb::default(); BIRTH_COUNT];
    for &n in neighbors.iter().flatten() {
        if grid.is_alive_idx(n) {
            if live < BIRTH_COUNT {
                // alive cells always carry a color
                parents[live] = grid.color_idx(n).unwrap_or_default();
            }
            live += 1;
        }
    }

    match (grid.color_idx(idx), live) {
        (None, BIRTH_COUNT) => Outcome::Born(inheritance.inherit_trio(&parents, rng)),
        (None, _) => Outcome::StayedDead,
        (Some(color), 2 | 3) => Outcome::Survived(color),
        (Some(_), _) => Outcome::Died,
    }
}
