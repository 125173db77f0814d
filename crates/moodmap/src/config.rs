use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

pub const CONFIG_PATH: &str = "moodmap_config.toml";

static CONFIG: OnceLock<Mutex<MosaicConfig>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Get a copy of the current configuration, loading it on first use.
///
/// A missing or broken file is logged and replaced by the defaults.
pub fn get_config() -> MosaicConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_PATH)));
    match config_mutex.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Re-read the config file, keeping the previous values if it fails.
pub fn reload_config() -> Result<(), ConfigError> {
    let new_config = MosaicConfig::load_from_file(CONFIG_PATH)?;
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    match config_mutex.lock() {
        Ok(mut config) => *config = new_config,
        Err(poisoned) => *poisoned.into_inner() = new_config,
    }
    Ok(())
}

fn load_or_default(path: &str) -> MosaicConfig {
    match MosaicConfig::load_from_file(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{path}: {err}; using built-in defaults");
            MosaicConfig::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    pub globe: GlobeConfig,
    pub camera: CameraConfig,
    pub feed: FeedConfig,
    pub stats: StatsConfig,
    /// Fixed position reported by the locator; unset means "unknown".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub radius: f32,
    /// Icosahedron subdivision level; each face becomes `(detail + 1)^2` triangles.
    pub detail: u32,
    /// World-space distance within which a mood recolors vertices.
    pub paint_threshold: f32,
    /// Total spread of the random HSL lightness offset on the base color.
    pub base_lightness_jitter: f32,
    /// Radians per second around the Y axis.
    pub rotation_speed: f32,
    pub breathing_rate: f32,
    pub breathing_amplitude: f32,
    pub atmosphere_radius: f32,
    pub atmosphere_opacity: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            detail: 12,
            paint_threshold: crate::paint::DEFAULT_PAINT_THRESHOLD,
            base_lightness_jitter: 0.05,
            rotation_speed: 0.03,
            breathing_rate: 0.3,
            breathing_amplitude: 0.002,
            atmosphere_radius: 5.2,
            atmosphere_opacity: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub start_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the remaining orbit velocity applied per frame.
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            start_distance: 18.0,
            min_distance: 12.0,
            max_distance: 30.0,
            damping: 0.05,
            rotate_speed: 0.5,
            zoom_speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// How many of the latest moods are replayed onto the globe at sign-in.
    pub recent_limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { recent_limit: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Great-circle radius of the region summarized on double-click.
    pub region_radius_deg: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            region_radius_deg: 15.0,
        }
    }
}

impl MosaicConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
