use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory (also holds the workout slot)
    pub config_dir: PathBuf,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    /// Stand-in for the platform geolocation provider
    #[serde(default)]
    pub location: LocationConfig,
}

/// Where the workout list is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Name of the durable slot holding the serialized workout list
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    "workouts".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            slot_key: default_slot_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_zoom_level")]
    pub zoom_level: u8,
}

fn default_zoom_level() -> u8 {
    13
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom_level: default_zoom_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_enabled")]
    pub enabled: bool,

    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    #[serde(default = "default_weather_product")]
    pub product: String,

    /// Deadline for the whole fetch, in milliseconds
    #[serde(default = "default_weather_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_weather_enabled() -> bool {
    true
}

fn default_weather_base_url() -> String {
    "https://www.7timer.info/bin/api.pl".to_string()
}

fn default_weather_product() -> String {
    "civillight".to_string()
}

fn default_weather_timeout_ms() -> u64 {
    10_000
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            enabled: default_weather_enabled(),
            base_url: default_weather_base_url(),
            product: default_weather_product(),
            timeout_ms: default_weather_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationConfig {
    /// Both coordinates, if configured
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pacemap");

        Self {
            config_dir,
            storage: StorageConfig::default(),
            map: MapConfig::default(),
            weather: WeatherConfig::default(),
            location: LocationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating a default file if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; errors fail the load.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.storage.slot_key.trim().is_empty() {
            result.add_error("storage.slot_key", "Slot key must not be empty");
        }

        if self.map.zoom_level == 0 {
            result.add_warning("map.zoom_level", "Zoom level 0 shows the whole world");
        } else if self.map.zoom_level > 19 {
            result.add_error("map.zoom_level", "Zoom level must be between 0 and 19");
        }

        if self.weather.enabled {
            self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);

            if self.weather.timeout_ms == 0 {
                result.add_error("weather.timeout_ms", "Timeout must be greater than 0");
            } else if self.weather.timeout_ms > 60_000 {
                result.add_warning(
                    "weather.timeout_ms",
                    "Weather timeout is more than a minute",
                );
            }
        }

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    result.add_error("location.latitude", "Latitude must be within [-90, 90]");
                }
                if !(-180.0..=180.0).contains(&lng) {
                    result.add_error(
                        "location.longitude",
                        "Longitude must be within [-180, 180]",
                    );
                }
            }
            (None, None) => {
                result.add_warning(
                    "location",
                    "No position configured - map and weather will be unavailable",
                );
            }
            _ => {
                result.add_warning(
                    "location",
                    "Only one coordinate configured - position will be ignored",
                );
            }
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }
                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("pacemap");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.map.zoom_level, 13);
        assert_eq!(config.weather.timeout_ms, 10_000);
        assert_eq!(config.weather.product, "civillight");
        assert_eq!(config.storage.slot_key, "workouts");
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    fn test_missing_location_is_warning() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "location"));
    }

    #[test]
    fn test_out_of_range_latitude() {
        let mut config = Config::default();
        config.location.latitude = Some(91.0);
        config.location.longitude = Some(0.0);
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "location.latitude"));
    }

    #[test]
    fn test_invalid_weather_url_scheme() {
        let mut config = Config::default();
        config.weather.base_url = "ftp://example.com/api".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_disabled_weather_skips_url_check() {
        let mut config = Config::default();
        config.weather.enabled = false;
        config.weather.base_url = "not-a-url".to_string();
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = Config::default();
        config.weather.timeout_ms = 0;
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "weather.timeout_ms"));
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.map.zoom_level, 13);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "config_dir = \"/tmp/pacemap\"\n\n[location]\nlatitude = 48.85\nlongitude = 2.35\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.location.coordinates(), Some((48.85, 2.35)));
        assert_eq!(config.storage.slot_key, "workouts");
        assert!(config.weather.enabled);
    }

    #[test]
    fn test_unknown_map_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "config_dir = \"/tmp/pacemap\"\n\n[map]\nzoom_level = 11\ntile_url = \"https://tiles.example/{z}/{x}/{y}.png\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.map.zoom_level, 11);

        let saved = toml::to_string(&config).unwrap();
        assert!(!saved.contains("tile_url"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
