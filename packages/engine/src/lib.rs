//! Chroma Life Engine - colored Game of Life generations in WASM
//!
//! Cells follow B3/S23 on the interior of a fixed grid; any cell touching the
//! grid edge dies. Newborn cells inherit a color from their three parents.
//!
//! Architecture:
//! - core/       - errors and logging
//! - spatial/    - coordinates, grid storage, neighbor snapshots
//! - domain/     - colors and configuration
//! - systems/    - life rule, color inheritance, transition engine
//! - simulation/ - orchestration and the JS-facing `World`

// Logging macros must be exported before the modules that use them
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use crate::core::EngineError;
pub use domain::color::{Channel, Rgb};
pub use domain::config::{Intensities, LifeConfig};
pub use simulation::{LifeCore, Pattern, PerfStats, World};
pub use spatial::coord::{Coordinate, Direction};
pub use spatial::grid::{Cell, Grid};
pub use spatial::neighbors::{NeighborResolver, NeighborSnapshot};
pub use systems::{ColorInheritance, StepReport, TransitionEngine};

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Browser builds start the Rayon pool from JS through this export
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Chroma Life engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
