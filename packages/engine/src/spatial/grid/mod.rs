//! Grid - Structure of Arrays storage for life cells
//!
//! Current generation: `alive[]`, `colors[]` (read by renderers).
//! Next generation:    `next_alive[]`, `next_colors[]` (written by the evaluate pass only).
//!
//! Commit swaps the two halves, so readers never see a half-updated generation.

use crate::core::EngineError;
use crate::domain::color::Rgb;
use crate::domain::config::validate_dimensions;
use crate::spatial::coord::Coordinate;

mod indexing;
mod accessors;
mod staging;

pub use accessors::Cells;

/// Snapshot of one cell as seen by callers. `color` is `Some` iff `alive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coordinate,
    pub alive: bool,
    pub color: Option<Rgb>,
}

impl Cell {
    pub fn dead(coord: Coordinate) -> Self {
        Self { coord, alive: false, color: None }
    }

    pub fn live(coord: Coordinate, color: Rgb) -> Self {
        Self { coord, alive: true, color: Some(color) }
    }
}

/// Fixed-size life grid, row-major (`y * columns + x`)
pub struct Grid {
    rows: u32,
    columns: u32,
    size: usize,

    alive: Vec<bool>,
    colors: Vec<Option<Rgb>>,

    next_alive: Vec<bool>,
    next_colors: Vec<Option<Rgb>>,
}

impl Grid {
    /// All cells start dead with no color.
    pub fn new(rows: u32, columns: u32) -> Result<Self, EngineError> {
        validate_dimensions(rows, columns)?;
        let size = (rows as usize)
            .checked_mul(columns as usize)
            .ok_or_else(|| EngineError::InvalidConfiguration(format!("{}x{} grid overflows", columns, rows)))?;
        Ok(Self {
            rows,
            columns,
            size,
            alive: vec![false; size],
            colors: vec![None; size],
            next_alive: vec![false; size],
            next_colors: vec![None; size],
        })
    }
}
