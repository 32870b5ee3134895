//! Neighbor resolution
//!
//! Built once per generation from the current grid and read-only afterwards.
//! A `None` slot marks a direction that falls outside the grid.

use crate::spatial::coord::{Coordinate, Direction};
use crate::spatial::grid::Grid;

/// Neighbor indices of one cell, in `Direction::ALL` order.
pub type NeighborSlots = [Option<usize>; 8];

pub struct NeighborResolver;

impl NeighborResolver {
    /// Neighbors of the cell at `coord`. Coordinates outside the grid get
    /// all-empty slots.
    #[inline]
    pub fn resolve(grid: &Grid, coord: Coordinate) -> NeighborSlots {
        let mut slots = [None; 8];
        if !grid.is_inside(coord) {
            return slots;
        }
        for (slot, dir) in slots.iter_mut().zip(Direction::ALL) {
            let target = coord + dir.offset();
            if grid.is_inside(target) {
                *slot = Some(grid.index_unchecked(target));
            }
        }
        slots
    }

    /// Resolve every cell before anything is evaluated.
    pub fn snapshot(grid: &Grid) -> NeighborSnapshot {
        let slots = (0..grid.size())
            .map(|idx| Self::resolve(grid, grid.coord_of(idx)))
            .collect();
        NeighborSnapshot { slots }
    }
}

/// Per-generation arena of neighbor slots, indexed like the grid.
pub struct NeighborSnapshot {
    slots: Vec<NeighborSlots>,
}

impl NeighborSnapshot {
    #[inline]
    pub fn of(&self, idx: usize) -> &NeighborSlots {
        &self.slots[idx]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

}

/// True when any direction leaves the grid.
#[inline]
pub fn touches_edge(slots: &NeighborSlots) -> bool {
    slots.iter().any(Option::is_none)
}
