//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/linguastat/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/linguastat/` (~/.config/linguastat/)
//! - State/Logs: `$XDG_STATE_HOME/linguastat/` (~/.local/state/linguastat/)
//!
//! Every constant the aggregation passes consume (baselines, placeholder
//! reference metrics, illustrative chart catalogs) lives here and is
//! injected into the engine, so the aggregation code carries no hidden
//! globals and tests can swap any of it.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics baselines and catalogs
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Baselines and injected catalogs for the aggregation engine.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Company-wide project target the period completion rate is measured
    /// against (not the period's own project count)
    #[serde(default = "default_completion_baseline")]
    pub completion_baseline: u32,

    /// Weekly revenue baseline for the proportional revenue estimate
    #[serde(default = "default_base_weekly_revenue")]
    pub base_weekly_revenue: f64,

    /// Weekly translation-volume baseline for the proportional total estimate
    #[serde(default = "default_weekly_translation_baseline")]
    pub weekly_translation_baseline: u64,

    /// Placeholder values for metrics with no snapshot-derived source yet
    #[serde(default)]
    pub reference: ReferenceMetrics,

    /// Language pairs the simulated day metrics draw from
    #[serde(default = "default_language_pairs")]
    pub language_pairs: Vec<String>,

    /// Illustrative chart catalogs
    #[serde(default)]
    pub catalogs: ChartCatalogs,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            completion_baseline: default_completion_baseline(),
            base_weekly_revenue: default_base_weekly_revenue(),
            weekly_translation_baseline: default_weekly_translation_baseline(),
            reference: ReferenceMetrics::default(),
            language_pairs: default_language_pairs(),
            catalogs: ChartCatalogs::default(),
        }
    }
}

fn default_completion_baseline() -> u32 {
    100
}

fn default_base_weekly_revenue() -> f64 {
    12_500.50
}

fn default_weekly_translation_baseline() -> u64 {
    12_500
}

fn default_language_pairs() -> Vec<String> {
    ["FR-EN", "EN-FR", "FR-ES", "ES-FR", "EN-DE", "DE-EN", "FR-DE", "EN-IT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Reference constants standing in for metrics the engine does not yet
/// derive from snapshots.
///
/// These are placeholders to be wired to real measurement sources, not
/// business figures to tune. They are reported verbatim in every summary
/// until a data-backed source replaces them.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceMetrics {
    #[serde(default = "default_average_precision")]
    pub average_precision: f64,

    #[serde(default = "default_active_languages")]
    pub active_languages: u32,

    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,

    #[serde(default = "default_total_errors")]
    pub total_errors: u32,

    #[serde(default = "default_average_processing_hours")]
    pub average_processing_hours: f64,
}

impl Default for ReferenceMetrics {
    fn default() -> Self {
        Self {
            average_precision: default_average_precision(),
            active_languages: default_active_languages(),
            growth_rate: default_growth_rate(),
            total_errors: default_total_errors(),
            average_processing_hours: default_average_processing_hours(),
        }
    }
}

fn default_average_precision() -> f64 {
    94.2
}

fn default_active_languages() -> u32 {
    12
}

fn default_growth_rate() -> f64 {
    15.3
}

fn default_total_errors() -> u32 {
    12
}

fn default_average_processing_hours() -> f64 {
    2.3
}

/// One labeled value of an illustrative catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
    pub value: f64,
}

impl CatalogEntry {
    fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Illustrative content for the chart breakdowns that are not yet computed
/// from snapshots (top projects, document types, hourly activity).
///
/// The language distribution chart is always computed from project data and
/// has no catalog here.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartCatalogs {
    #[serde(default = "default_top_projects")]
    pub top_projects: Vec<CatalogEntry>,

    #[serde(default = "default_document_types")]
    pub document_types: Vec<CatalogEntry>,

    #[serde(default = "default_hourly_activity")]
    pub hourly_activity: Vec<CatalogEntry>,
}

impl Default for ChartCatalogs {
    fn default() -> Self {
        Self {
            top_projects: default_top_projects(),
            document_types: default_document_types(),
            hourly_activity: default_hourly_activity(),
        }
    }
}

fn default_top_projects() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Corporate Website", 85.0),
        CatalogEntry::new("Mobile Application", 92.0),
        CatalogEntry::new("Technical Documentation", 78.0),
        CatalogEntry::new("Marketing Campaign", 95.0),
    ]
}

fn default_document_types() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("PDF", 45.0),
        CatalogEntry::new("DOCX", 25.0),
        CatalogEntry::new("HTML", 15.0),
        CatalogEntry::new("TXT", 10.0),
        CatalogEntry::new("Other", 5.0),
    ]
}

fn default_hourly_activity() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("08:00", 45.0),
        CatalogEntry::new("10:00", 78.0),
        CatalogEntry::new("12:00", 65.0),
        CatalogEntry::new("14:00", 82.0),
        CatalogEntry::new("16:00", 91.0),
        CatalogEntry::new("18:00", 58.0),
    ]
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/linguastat/config.toml` (~/.config/linguastat/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("linguastat").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/linguastat/` (~/.local/state/linguastat/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("linguastat")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/linguastat/linguastat.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("linguastat.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analytics.completion_baseline, 100);
        assert_eq!(config.analytics.base_weekly_revenue, 12_500.50);
        assert_eq!(config.analytics.language_pairs.len(), 8);
        assert_eq!(config.analytics.catalogs.document_types.len(), 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analytics]
completion_baseline = 250
base_weekly_revenue = 9000.0
language_pairs = ["EN-JA", "JA-EN"]

[analytics.reference]
average_precision = 97.5

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.analytics.completion_baseline, 250);
        assert_eq!(config.analytics.base_weekly_revenue, 9000.0);
        assert_eq!(config.analytics.language_pairs, vec!["EN-JA", "JA-EN"]);
        assert_eq!(config.analytics.reference.average_precision, 97.5);
        // Untouched sections keep their defaults
        assert_eq!(config.analytics.reference.active_languages, 12);
        assert_eq!(config.analytics.catalogs.top_projects.len(), 4);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analytics]\ncompletion_baseline = 42\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analytics.completion_baseline, 42);

        let missing = dir.path().join("missing.toml");
        assert!(Config::load_from(&missing).is_err());
    }

    #[test]
    fn test_parse_catalog_override() {
        let toml = r#"
[analytics]
[[analytics.catalogs.document_types]]
label = "XLIFF"
value = 60.0

[[analytics.catalogs.document_types]]
label = "PDF"
value = 40.0
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let types = &config.analytics.catalogs.document_types;
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].label, "XLIFF");
        assert_eq!(types[1].value, 40.0);
    }
}
