use super::super::*;

impl Grid {
    pub fn get(&self, coord: Coordinate) -> Result<Cell, EngineError> {
        let idx = self.index_of(coord)?;
        Ok(self.cell_at(idx))
    }

    /// Overwrite one cell. Only for construction and seeding between steps.
    pub fn set(&mut self, cell: Cell) -> Result<(), EngineError> {
        self.seed(cell.coord, cell.alive, cell.color)
    }

    /// Direct external mutation that bypasses the life rule.
    pub fn seed(&mut self, coord: Coordinate, alive: bool, color: Option<Rgb>) -> Result<(), EngineError> {
        let idx = self.index_of(coord)?;
        let color = match (alive, color) {
            (true, Some(c)) => Some(c),
            (true, None) => return Err(EngineError::MissingColor { x: coord.x, y: coord.y }),
            (false, _) => None,
        };
        self.alive[idx] = alive;
        self.colors[idx] = color;
        Ok(())
    }

    #[inline]
    pub fn is_alive_idx(&self, idx: usize) -> bool {
        self.alive[idx]
    }

    #[inline]
    pub fn color_idx(&self, idx: usize) -> Option<Rgb> {
        self.colors[idx]
    }

    #[inline]
    pub(crate) fn cell_at(&self, idx: usize) -> Cell {
        Cell {
            coord: self.coord_of(idx),
            alive: self.alive[idx],
            color: self.colors[idx],
        }
    }

    /// Current generation in row-major order.
    pub fn cells(&self) -> Cells<'_> {
        Cells { grid: self, next: 0 }
    }

    pub fn live_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// Current colors, `None` for dead cells.
    #[inline]
    pub fn colors(&self) -> &[Option<Rgb>] {
        &self.colors
    }
}

/// Iterator over current-generation cells
pub struct Cells<'a> {
    grid: &'a Grid,
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.grid.size {
            return None;
        }
        let cell = self.grid.cell_at(self.next);
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.size - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}
