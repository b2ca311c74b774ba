//! Configuration module
//!
//! Reads `~/.config/geoservice/config.toml`. Every section is optional;
//! a missing file or section falls back to the defaults below.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [events]
//! capacity = 256
//!
//! [seed]
//! demo_data = true
//!
//! [[catalog]]
//! id = "electricite"
//! title = "Électricité"
//! provider_id = "prov-1"
//! provider_name = "David Electric"
//! price = 25000
//! category = "Technique"
//! rating = 4.8
//!
//! [[providers]]
//! id = "prov-1"
//! name = "David Electric"
//! services = ["Électricité"]
//! rating = 4.8
//! status = "active"
//! total_jobs_completed = 156
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{CatalogEntry, ProviderStatus};
use crate::support::errors::ConfigError;

/// Environment variable holding an explicit config path
pub const CONFIG_ENV: &str = "GEOSERVICE_CONFIG";

/// Default location: `<config dir>/geoservice/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("geoservice")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub events: EventsConfig,
    pub seed: SeedConfig,
    /// Replaces the built-in catalog when non-empty
    pub catalog: Vec<CatalogEntry>,
    /// Replaces the built-in provider directory when non-empty
    pub providers: Vec<ProviderSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Broadcast channel capacity
    pub capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the demo clients and walk the demo reservations through the lifecycle
    pub demo_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: true }
    }
}

/// Provider directory entry as written in the config file
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default = "default_provider_status")]
    pub status: ProviderStatus,
    #[serde(default)]
    pub total_jobs_completed: u32,
}

fn default_provider_status() -> ProviderStatus {
    ProviderStatus::Pending
}

impl AppConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Path from `GEOSERVICE_CONFIG`, else the default location.
    pub fn resolve_path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "text");
        assert_eq!(cfg.events.capacity, 1024);
        assert!(cfg.seed.demo_data);
        assert!(cfg.catalog.is_empty());
        assert!(cfg.providers.is_empty());
    }

    #[test]
    fn parses_sections_and_tables() {
        let cfg = AppConfig::from_toml(
            r#"
            [logging]
            level = "debug"

            [seed]
            demo_data = false

            [[catalog]]
            id = "peinture"
            title = "Peinture"
            provider_id = "prov-9"
            provider_name = "Couleurs Douala"
            price = 18000
            category = "Travaux"
            rating = 4.2

            [[providers]]
            id = "prov-9"
            name = "Couleurs Douala"
            services = ["Peinture"]
            status = "active"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, "text");
        assert!(!cfg.seed.demo_data);
        assert_eq!(cfg.catalog[0].price, 18_000);
        assert_eq!(cfg.providers[0].status, ProviderStatus::Active);
        assert_eq!(cfg.providers[0].total_jobs_completed, 0);
    }

    #[test]
    fn provider_status_defaults_to_pending() {
        let cfg = AppConfig::from_toml(
            r#"
            [[providers]]
            id = "prov-x"
            name = "Nouveau"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.providers[0].status, ProviderStatus::Pending);
    }

    #[test]
    fn rejects_bad_status() {
        let err = AppConfig::from_toml(
            r#"
            [[providers]]
            id = "prov-x"
            name = "Nouveau"
            status = "banned"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[events]\ncapacity = 16").unwrap();

        let cfg = AppConfig::load(file.path()).unwrap();
        assert_eq!(cfg.events.capacity, 16);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/geoservice.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
