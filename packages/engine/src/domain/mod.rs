//! Domain - color and configuration types

pub mod color;
pub mod config;
