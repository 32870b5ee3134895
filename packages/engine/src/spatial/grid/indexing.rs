use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn columns(&self) -> u32 { self.columns }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Bounds checking ===
    #[inline]
    pub fn is_inside(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.x < self.columns as i32 && coord.y >= 0 && coord.y < self.rows as i32
    }

    // === Index conversion ===
    #[inline]
    pub fn index_of(&self, coord: Coordinate) -> Result<usize, EngineError> {
        if !self.is_inside(coord) {
            return Err(EngineError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self.index_unchecked(coord))
    }

    /// Index without bounds check; callers guard with `is_inside`.
    #[inline(always)]
    pub fn index_unchecked(&self, coord: Coordinate) -> usize {
        debug_assert!(
            self.is_inside(coord),
            "index_unchecked: out of bounds ({}, {}) for {}x{} grid",
            coord.x,
            coord.y,
            self.columns,
            self.rows
        );
        (coord.y as usize) * (self.columns as usize) + coord.x as usize
    }

    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coordinate {
        let columns = self.columns as usize;
        Coordinate::new((idx % columns) as i32, (idx / columns) as i32)
    }
}
