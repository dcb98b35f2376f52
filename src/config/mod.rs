//! Configuration file support for mapscriber.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/mapscriber/config.toml`. Settings cover the geocoding and routing
//! endpoints, the initial map view, and toast notifications.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::BaseLayer;
pub use types::{MapConfig, NotificationsConfig, ServicesConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [services]
/// geocoder_url = "https://nominatim.openstreetmap.org"
/// router_url = "https://router.project-osrm.org"
/// routing_profile = "driving"
/// search_limit = 5
///
/// [map]
/// default_layer = "topo"
/// center = [51.505, -0.09]
/// zoom = 13
///
/// [notifications]
/// max_visible = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Geocoding and routing endpoints
    #[serde(default)]
    pub services: ServicesConfig,

    /// Initial map view
    #[serde(default)]
    pub map: MapConfig,

    /// Toast notification settings
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `services.search_limit`: 1 - 20
    /// - `map.zoom`: 1 - 19
    /// - `map.center`: latitude -90 - 90, longitude -180 - 180
    /// - `notifications.max_visible`: 1 - 20
    pub fn validate_and_clamp(&mut self) {
        // Search limit: 1 - 20
        if !(1..=20).contains(&self.services.search_limit) {
            log::warn!(
                "Invalid search_limit {}, clamping to 1-20 range",
                self.services.search_limit
            );
            self.services.search_limit = self.services.search_limit.clamp(1, 20);
        }

        if self.services.routing_profile.trim().is_empty() {
            log::warn!("Empty routing_profile, falling back to 'driving'");
            self.services.routing_profile = "driving".to_string();
        }

        // Zoom: 1 - 19
        if !(1..=19).contains(&self.map.zoom) {
            log::warn!("Invalid zoom {}, clamping to 1-19 range", self.map.zoom);
            self.map.zoom = self.map.zoom.clamp(1, 19);
        }

        let [lat, lng] = self.map.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            log::warn!(
                "Invalid map center [{:.4}, {:.4}], clamping to valid coordinates",
                lat,
                lng
            );
            self.map.center = [lat.clamp(-90.0, 90.0), lng.clamp(-180.0, 180.0)];
        }

        // Visible notices: 1 - 20
        if !(1..=20).contains(&self.notifications.max_visible) {
            log::warn!(
                "Invalid max_visible {}, clamping to 1-20 range",
                self.notifications.max_visible
            );
            self.notifications.max_visible = self.notifications.max_visible.clamp(1, 20);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/mapscriber/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mapscriber");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists there or it cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(
            config.services.geocoder_url,
            "https://nominatim.openstreetmap.org"
        );
        assert_eq!(config.services.search_limit, 5);
        assert_eq!(config.map.default_layer, BaseLayer::Osm);
        assert_eq!(config.map.center, [51.505, -0.09]);
        assert_eq!(config.notifications.max_visible, 5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [services]
            search_limit = 0
            routing_profile = " "

            [map]
            default_layer = "dark"
            center = [95.0, -200.0]
            zoom = 25

            [notifications]
            max_visible = 99
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.services.search_limit, 1);
        assert_eq!(config.services.routing_profile, "driving");
        assert_eq!(config.map.default_layer, BaseLayer::Dark);
        assert_eq!(config.map.center, [90.0, -180.0]);
        assert_eq!(config.map.zoom, 19);
        assert_eq!(config.notifications.max_visible, 20);
    }

    #[test]
    fn load_from_reads_and_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let missing = Config::load_from(&path).unwrap();
        assert_eq!(missing.map.zoom, 13);

        Config::create_default_file(&path).unwrap();
        let created = Config::load_from(&path).unwrap();
        assert_eq!(created.services.routing_profile, "driving");
        assert!(Config::create_default_file(&path).is_err());

        fs::write(&path, "[map]\nzoom = \"high\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn example_config_parses() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.services.search_limit, 5);
    }
}
