//! Host-supplied simulation settings, parsed from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GridError;
use crate::Grid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("target frame rate must be positive")]
    ZeroFrameRate,
}

/// Every field is optional in JSON; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SimConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Edge length of one square cell in pixels.
    pub cell_size: u32,
    /// Seed for the diagonal tie-break generator.
    pub seed: u64,
    pub show_grid_lines: bool,
    /// Frames per second the host should pace `tick` at.
    pub target_fps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            cell_size: 10,
            seed: 0x5A4D_5EED,
            show_grid_lines: true,
            target_fps: 60,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Same checks grid construction applies, plus a non-zero frame rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::dimensions(self.width, self.height, self.cell_size)?;
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!((config.width, config.height, config.cell_size), (600, 600, 10));
        assert!(config.show_grid_lines);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn camel_case_fields_override_defaults() {
        let config =
            SimConfig::from_json(r#"{"cellSize": 4, "showGridLines": false, "seed": 9}"#).unwrap();
        assert_eq!(config.cell_size, 4);
        assert!(!config.show_grid_lines);
        assert_eq!(config.seed, 9);
        assert_eq!(config.width, 600);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            SimConfig::from_json(r#"{"cell_size": 4}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn rejects_degenerate_grid() {
        let err = SimConfig::from_json(r#"{"width": 5, "cellSize": 10}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Grid(GridError::InvalidDimensions { width: 5, .. })
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{"cellSize": 0}"#),
            Err(ConfigError::Grid(_))
        ));
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(matches!(
            SimConfig::from_json(r#"{"targetFps": 0}"#),
            Err(ConfigError::ZeroFrameRate)
        ));
    }

    #[test]
    fn to_json_uses_camel_case() {
        let json = SimConfig::default().to_json();
        assert!(json.contains("\"cellSize\":10"));
        assert!(json.contains("\"showGridLines\":true"));
    }

    proptest! {
        #[test]
        fn prop_serialized_config_parses_back(
            width in 1u32..2000,
            height in 1u32..2000,
            cell_size in 1u32..50,
            seed in any::<u64>(),
            show_grid_lines in any::<bool>(),
        ) {
            prop_assume!(width >= cell_size && height >= cell_size);
            let config = SimConfig { width, height, cell_size, seed, show_grid_lines, target_fps: 30 };
            prop_assert_eq!(SimConfig::from_json(&config.to_json()).unwrap(), config);
        }
    }
}
