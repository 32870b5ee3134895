//! Preset starting configurations, stamped around the grid center
//! (`columns / 2`, `rows / 2`). Each placed cell gets a fresh random color.

use std::str::FromStr;

use crate::core::EngineError;
use crate::domain::color::Rgb;
use crate::spatial::coord::Coordinate;

use super::LifeCore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Block,
    Beehive,
    /// Full-width row through the center
    Line,
    RPentomino,
}

impl Pattern {
    /// Offsets from the center; `Line` is handled separately.
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Block => &[(-1, -1), (0, -1), (-1, 0), (0, 0)],
            Pattern::Beehive => &[(-1, -2), (0, -2), (-2, -1), (1, -1), (-1, 0), (0, 0)],
            Pattern::RPentomino => &[(-1, -1), (0, -1), (-1, 0), (-2, 0), (-1, 1)],
            Pattern::Line => &[],
        }
    }

    fn cells(self, rows: u32, columns: u32) -> Vec<Coordinate> {
        let center = Coordinate::new((columns / 2) as i32, (rows / 2) as i32);
        match self {
            Pattern::Line => (0..columns as i32).map(|x| Coordinate::new(x, center.y)).collect(),
            _ => self
                .offsets()
                .iter()
                .map(|&offset| center + Coordinate::from(offset))
                .collect(),
        }
    }
}

impl FromStr for Pattern {
    type Err = EngineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "block" => Ok(Pattern::Block),
            "beehive" => Ok(Pattern::Beehive),
            "line" => Ok(Pattern::Line),
            "r-pentomino" | "rpentomino" => Ok(Pattern::RPentomino),
            _ => Err(EngineError::UnknownPattern(name.to_string())),
        }
    }
}

pub(super) fn place_pattern(core: &mut LifeCore, pattern: Pattern) -> usize {
    let mut placed = 0;
    for at in pattern.cells(core.grid.rows(), core.grid.columns()) {
        // small grids clip the preset
        if !core.grid.is_inside(at) {
            continue;
        }
        let color = Rgb::random(&mut core.seed_rng);
        if core.grid.seed(at, true, Some(color)).is_ok() {
            placed += 1;
        }
    }
    tracing::debug!(?pattern, placed, "pattern placed");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Block".parse::<Pattern>().unwrap(), Pattern::Block);
        assert_eq!("r-pentomino".parse::<Pattern>().unwrap(), Pattern::RPentomino);
        assert_eq!(
            "glider".parse::<Pattern>().unwrap_err(),
            EngineError::UnknownPattern("glider".to_string())
        );
    }

    #[test]
    fn block_sits_left_and_above_center() {
        let cells = Pattern::Block.cells(10, 10);
        let expected: Vec<Coordinate> = [(4, 4), (5, 4), (4, 5), (5, 5)]
            .iter()
            .map(|&p| Coordinate::from(p))
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn line_spans_every_column_on_middle_row() {
        let cells = Pattern::Line.cells(7, 9);
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| c.y == 3));
    }
}
