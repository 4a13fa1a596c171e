use serde::Deserialize;

use super::error::AnalyticsError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data_source: DataSourceConfig,
    pub incremental: IncrementalConfig,
    pub attractiveness: AttractivenessConfig,
}

/// Synthetic fact source settings
#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceConfig {
    pub first_year: i32,
    pub last_year: i32,
    /// Seed of the linear-congruential sequence (42 reproduces the demo dataset)
    pub seed: u64,
    /// Artificial delay before the first load becomes available
    pub load_delay_ms: u64,
}

/// Waterfall (incremental opportunity) settings
#[derive(Debug, Deserialize, Clone)]
pub struct IncrementalConfig {
    pub base_year: i32,
    pub first_year: i32,
    pub last_year: i32,
    pub terminal_year: i32,
    /// Base total the default schedule was drawn for; also used when the
    /// filtered base year has no data
    pub reference_baseline: f64,
    /// Display fallback per year `first_year..=last_year`, not a forecast
    pub default_increments: Vec<f64>,
}

/// Bubble chart settings
#[derive(Debug, Deserialize, Clone)]
pub struct AttractivenessConfig {
    pub start_year: i32,
    pub end_year: i32,
    /// Position of the first year of the window within the available years
    pub window_start_fraction: f64,
    pub fallback: AttractivenessFallback,
}

/// What to show for a region without enough data
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttractivenessFallback {
    /// Substitute the named default table (demo behaviour)
    NamedDefaults,
    /// Drop the region from the chart
    OmitRegion,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data_source]
first_year = 2023
last_year = 2025
seed = 42
load_delay_ms = 500

[incremental]
base_year = 2024
first_year = 2025
last_year = 2031
terminal_year = 2032
reference_baseline = 57159.0
default_increments = [2638.4, 2850.4, 3055.6, 3231.0, 3432.9, 3674.2, 3885.1]

[attractiveness]
start_year = 2025
end_year = 2032
window_start_fraction = 0.3
fallback = "named_defaults"
"#;

impl Config {
    /// Check the year windows and the schedule length
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        let ds = &self.data_source;
        if ds.first_year > ds.last_year {
            return Err(AnalyticsError::InvalidYearWindow {
                start: ds.first_year,
                end: ds.last_year,
            });
        }

        let inc = &self.incremental;
        if !(inc.base_year < inc.first_year
            && inc.first_year <= inc.last_year
            && inc.last_year < inc.terminal_year)
        {
            return Err(AnalyticsError::InvalidYearWindow {
                start: inc.base_year,
                end: inc.terminal_year,
            });
        }
        let expected = (inc.last_year - inc.first_year + 1) as usize;
        if inc.default_increments.len() != expected {
            return Err(AnalyticsError::IncrementScheduleMismatch {
                expected,
                actual: inc.default_increments.len(),
            });
        }

        let att = &self.attractiveness;
        if att.start_year >= att.end_year {
            return Err(AnalyticsError::InvalidYearWindow {
                start: att.start_year,
                end: att.end_year,
            });
        }
        Ok(())
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Configuration embedded in the binary
pub fn embedded_default() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    embedded_default()
}
