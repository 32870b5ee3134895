//! Core - errors and logging shared by every layer
//!
//! `logging` must stay first so its macros are visible to the modules below.

#[macro_use]
pub mod logging;
pub mod error;

pub use error::EngineError;
