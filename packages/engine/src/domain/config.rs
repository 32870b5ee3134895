//! Simulation configuration
//!
//! Loaded from JSON the same way content bundles are: camelCase keys, every
//! field optional.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

pub const DEFAULT_ROWS: u32 = 60;
pub const DEFAULT_COLUMNS: u32 = 60;
pub const DEFAULT_RECESSIVE_INTENSITY: u32 = 2;
pub const DEFAULT_MID_INTENSITY: u32 = 50;
pub const DEFAULT_DOMINANT_INTENSITY: u32 = 2;
pub const DEFAULT_SEED: u32 = 12345;

/// How strongly each ranked channel is pulled during inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intensities {
    pub recessive: u32,
    pub mid: u32,
    pub dominant: u32,
}

impl Intensities {
    pub const fn new(recessive: u32, mid: u32, dominant: u32) -> Self {
        Self { recessive, mid, dominant }
    }
}

impl Default for Intensities {
    fn default() -> Self {
        Self::new(
            DEFAULT_RECESSIVE_INTENSITY,
            DEFAULT_MID_INTENSITY,
            DEFAULT_DOMINANT_INTENSITY,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifeConfig {
    pub rows: u32,
    pub columns: u32,
    pub recessive_intensity: u32,
    pub mid_intensity: u32,
    pub dominant_intensity: u32,
    pub seed: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            recessive_intensity: DEFAULT_RECESSIVE_INTENSITY,
            mid_intensity: DEFAULT_MID_INTENSITY,
            dominant_intensity: DEFAULT_DOMINANT_INTENSITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl LifeConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: LifeConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_dimensions(self.rows, self.columns)
    }

    pub fn intensities(&self) -> Intensities {
        Intensities::new(
            self.recessive_intensity,
            self.mid_intensity,
            self.dominant_intensity,
        )
    }

    pub fn set_intensities(&mut self, intensities: Intensities) {
        self.recessive_intensity = intensities.recessive;
        self.mid_intensity = intensities.mid;
        self.dominant_intensity = intensities.dominant;
    }
}

pub(crate) fn validate_dimensions(rows: u32, columns: u32) -> Result<(), EngineError> {
    if rows == 0 || columns == 0 {
        return Err(EngineError::InvalidConfiguration(format!(
            "grid dimensions must be positive, got {}x{}",
            columns, rows
        )));
    }
    // coordinates are i32 and every cell needs an addressable index
    let fits = rows <= i32::MAX as u32
        && columns <= i32::MAX as u32
        && (rows as usize).checked_mul(columns as usize).is_some();
    if !fits {
        return Err(EngineError::InvalidConfiguration(format!(
            "grid dimensions {}x{} exceed the addressable range",
            columns, rows
        )));
    }
    Ok(())
}
