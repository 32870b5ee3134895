use super::*;

impl Grid {
    /// Write every cell's next value. `outcomes[i]` is the next color of cell
    /// `i`, `None` meaning dead.
    pub(crate) fn stage_all(&mut self, outcomes: Vec<Option<Rgb>>) {
        debug_assert_eq!(outcomes.len(), self.size, "stage_all: one outcome per cell");
        for (idx, next) in outcomes.into_iter().enumerate() {
            self.next_alive[idx] = next.is_some();
            self.next_colors[idx] = next;
        }
    }

    /// Publish the staged generation for every cell at once.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.alive, &mut self.next_alive);
        std::mem::swap(&mut self.colors, &mut self.next_colors);
    }

    /// Kill every cell, staging buffers included.
    pub fn clear(&mut self) {
        self.alive.fill(false);
        self.colors.fill(None);
        self.next_alive.fill(false);
        self.next_colors.fill(None);
    }
}
