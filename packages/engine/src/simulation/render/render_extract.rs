//! Render extraction: current generation -> packed ABGR pixels.
//! Reads only committed state.

use crate::domain::color::DEAD_COLOR;

use super::LifeCore;

pub(super) fn render_abgr(core: &mut LifeCore) -> &[u32] {
    let colors = core.grid.colors();
    if core.pixels.len() != colors.len() {
        core.pixels.resize(colors.len(), DEAD_COLOR);
    }
    for (px, color) in core.pixels.iter_mut().zip(colors) {
        *px = color.map_or(DEAD_COLOR, |c| c.to_abgr());
    }
    &core.pixels
}
