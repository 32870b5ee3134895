//! Spatial layer: addressing, storage and neighborhoods

pub mod coord;
pub mod grid;
pub mod neighbors;
