use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cell pixel size clamp range
pub const MIN_CELL_SIZE: f32 = 2.0;
pub const MAX_CELL_SIZE: f32 = 40.0;

/// Update rate clamp range, generations per second
pub const MIN_UPDATES_PER_SECOND: f32 = 1.0;
pub const MAX_UPDATES_PER_SECOND: f32 = 60.0;

/// User-adjustable simulation parameters.
///
/// Loaded from an optional JSON file at startup; every field can also be
/// changed at runtime through commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid edge length in cells (grids are square)
    pub grid_size: usize,
    /// Cell edge length in pixels
    pub cell_size: f32,
    /// Generations advanced per second while running
    pub updates_per_second: f32,
    /// Probability that a randomized cell starts alive
    pub live_probability: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: 30,
            cell_size: 15.0,
            updates_per_second: 10.0,
            live_probability: 0.3,
        }
    }
}

impl Settings {
    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_size == 0 {
            return Err(SettingsError::EmptyGrid);
        }
        if self.cell_size <= 0.0 {
            return Err(SettingsError::InvalidCellSize(self.cell_size));
        }
        if self.updates_per_second <= 0.0 {
            return Err(SettingsError::InvalidRate(self.updates_per_second));
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(SettingsError::InvalidProbability(self.live_probability));
        }
        Ok(())
    }

    /// Read settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Settings validation and loading errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Grid size must be non-zero")]
    EmptyGrid,
    #[error("Cell size must be positive, got {0}")]
    InvalidCellSize(f32),
    #[error("Update rate must be positive, got {0}")]
    InvalidRate(f32),
    #[error("Live probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_grid_rejected() {
        let settings = Settings {
            grid_size: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::EmptyGrid)
        ));
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let settings = Settings {
            live_probability: 1.5,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_json_round_trip_with_partial_input() {
        // Missing fields fall back to defaults
        let settings: Settings = serde_json::from_str(r#"{"grid_size": 50}"#).unwrap();
        assert_eq!(settings.grid_size, 50);
        assert_eq!(settings.cell_size, Settings::default().cell_size);

        let text = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
