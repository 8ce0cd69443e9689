//! Configuration system
//!
//! All tunable constants of the diorama live in [`DioramaConfig`]; the
//! defaults reproduce the waterfall scene as authored. Files may be TOML or
//! RON, dispatched on extension.

use crate::foam::SpawnBounds;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from file, falling back to defaults if the file
    /// is missing or malformed
    fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("falling back to default config ({path}): {err}");
                Self::default()
            }
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level diorama configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DioramaConfig {
    /// Point-light sweep settings
    pub lights: LightSweepConfig,

    /// Bear-head animation settings
    pub head: HeadBobConfig,

    /// Foam particle settings
    pub foam: FoamConfig,
}

impl Config for DioramaConfig {}

/// Point-light sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSweepConfig {
    /// Sweep speed of the first light
    pub speed_a: f32,

    /// Sweep speed of the second light
    pub speed_b: f32,
}

impl Default for LightSweepConfig {
    fn default() -> Self {
        Self {
            speed_a: 3000.0,
            speed_b: 2000.0,
        }
    }
}

/// Bear-head animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadBobConfig {
    /// Duration of each swing (down or up) in seconds
    pub swing_secs: f32,

    /// Duration of each pause (bottom and top) in seconds
    pub pause_secs: f32,

    /// Tilt at the start of the descent, in degrees
    pub max_tilt_deg: f32,
}

impl Default for HeadBobConfig {
    fn default() -> Self {
        Self {
            swing_secs: 2.0,
            pause_secs: 2.0,
            max_tilt_deg: 30.0,
        }
    }
}

/// Foam particle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoamConfig {
    /// Particle time-to-live in milliseconds
    pub lifetime_ms: f64,

    /// Width of each of the four spawn buckets; only `4 * bucket_width` of
    /// the unit interval produces spawns per frame
    pub bucket_width: f32,

    /// Particles created per group before the first frame
    pub initial_per_group: usize,

    /// Smallest spawnable particle radius
    pub min_radius: f32,

    /// Largest spawnable particle radius
    pub max_radius: f32,

    /// Vertical step applied to every particle each frame, scaled by the
    /// shared wobble phase
    pub rise_step: f32,

    /// Rate multiplier applied to wall-clock milliseconds to form the
    /// shared wobble phase
    pub wobble_rate: f64,

    /// Spawn bounds for the eight groups
    pub groups: Vec<SpawnBounds>,
}

impl Default for FoamConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 2000.0,
            bucket_width: 0.01,
            initial_per_group: 20,
            min_radius: 0.05,
            max_radius: 0.15,
            rise_step: 0.008,
            wobble_rate: 0.015,
            groups: SpawnBounds::waterfall_defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_waterfall_scene() {
        let config = DioramaConfig::default();
        assert_eq!(config.lights.speed_a, 3000.0);
        assert_eq!(config.lights.speed_b, 2000.0);
        assert_eq!(config.head.swing_secs, 2.0);
        assert_eq!(config.head.pause_secs, 2.0);
        assert_eq!(config.foam.lifetime_ms, 2000.0);
        assert_eq!(config.foam.initial_per_group, 20);
        assert_eq!(config.foam.groups.len(), 8);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DioramaConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: DioramaConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.foam.groups.len(), config.foam.groups.len());
        assert_eq!(parsed.lights.speed_a, config.lights.speed_a);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: DioramaConfig = toml::from_str("[lights]\nspeed_a = 1500.0\n").unwrap();
        assert_eq!(parsed.lights.speed_a, 1500.0);
        assert_eq!(parsed.lights.speed_b, 2000.0);
        assert_eq!(parsed.foam.groups.len(), 8);
    }
}
