//! Systems - the generation rules
//!
//! - `rules`: per-cell life rule with edge death
//! - `inheritance`: offspring colors at birth
//! - `transition`: resolve / evaluate / commit orchestration
//! - `rng`: deterministic random streams

pub mod inheritance;
pub mod rng;
pub mod rules;
pub mod transition;

pub use inheritance::ColorInheritance;
pub use transition::{StepReport, TransitionEngine};
