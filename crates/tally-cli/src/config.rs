use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tally_chart::{ChartOptions, DEFAULT_CHART_PATH};

/// Configuration for tally.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (TALLY_* prefix)
/// 3. Config file (~/.config/genre-tally/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the genre record CSV.
    ///
    /// Can be set via:
    /// - CLI: --record /path/to/genres.csv
    /// - ENV: TALLY_RECORD_PATH
    /// - Config: record_path = "/path/to/genres.csv"
    /// - Default: genres.csv in the working directory
    #[serde(default = "default_record_path")]
    pub record_path: PathBuf,

    /// Where `tally chart` writes its PNG.
    ///
    /// Can be set via:
    /// - CLI: tally chart --output /path/to/chart.png
    /// - ENV: TALLY_CHART_PATH
    /// - Config: chart_path = "/path/to/chart.png"
    /// - Default: popularity.png in the working directory
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,

    /// Chart width in pixels.
    ///
    /// Can be set via:
    /// - ENV: TALLY_CHART_WIDTH
    /// - Config: chart_width = 1000
    #[serde(default = "default_chart_width", deserialize_with = "native_or_text")]
    pub chart_width: u32,

    /// Chart height in pixels.
    ///
    /// Can be set via:
    /// - ENV: TALLY_CHART_HEIGHT
    /// - Config: chart_height = 600
    #[serde(default = "default_chart_height", deserialize_with = "native_or_text")]
    pub chart_height: u32,

    /// Log at debug level.
    ///
    /// Can be set via:
    /// - CLI: --verbose
    /// - ENV: TALLY_VERBOSE
    /// - Config: verbose = true
    #[serde(default, deserialize_with = "native_or_text")]
    pub verbose: bool,

    /// Colour log output. Only honoured when stdout is a terminal.
    ///
    /// Can be set via:
    /// - ENV: TALLY_COLOURED
    /// - Config: coloured = false
    #[serde(default = "default_coloured", deserialize_with = "native_or_text")]
    pub coloured: bool,
}

/// Environment overrides arrive as strings, so accept `"800"` as well as `800`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NativeOrText<T> {
    Native(T),
    Text(String),
}

fn native_or_text<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NativeOrText::<T>::deserialize(deserializer)? {
        NativeOrText::Native(value) => Ok(value),
        NativeOrText::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_path: default_record_path(),
            chart_path: default_chart_path(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            verbose: false,
            coloured: default_coloured(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/genre-tally/config.toml
    /// Reads environment variables with TALLY_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("tally");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, letting a --record flag override the record path.
    pub fn load_with_record_path(record_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(path) = record_path {
            config.record_path = path;
        }
        Ok(config)
    }

    /// Chart options from this config, optionally writing to `output`.
    pub fn chart_options(&self, output: Option<PathBuf>) -> ChartOptions {
        ChartOptions {
            path: output.unwrap_or_else(|| self.chart_path.clone()),
            width: self.chart_width,
            height: self.chart_height,
            ..ChartOptions::default()
        }
    }
}

fn default_record_path() -> PathBuf {
    PathBuf::from("genres.csv")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHART_PATH)
}

fn default_coloured() -> bool {
    true
}

fn default_chart_width() -> u32 {
    ChartOptions::default().width
}

fn default_chart_height() -> u32 {
    ChartOptions::default().height
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/genre-tally/config.toml
/// - macOS: ~/Library/Application Support/genre-tally/config.toml
/// - Windows: %APPDATA%\genre-tally\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("genre-tally")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Genre Tally Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (TALLY_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# CSV record holding genre listen counts
#
# Can also be set via:
# - CLI: tally --record /custom/genres.csv show
# - Environment: TALLY_RECORD_PATH=/custom/genres.csv
record_path = "genres.csv"

# PNG written by `tally chart` (overwritten on every run)
#
# Can also be set via:
# - CLI: tally chart --output /custom/chart.png
# - Environment: TALLY_CHART_PATH=/custom/chart.png
chart_path = "popularity.png"

# Chart size in pixels
chart_width = 1000
chart_height = 600

# Log at debug level (same as --verbose)
verbose = false

# Colour log output when writing to a terminal
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
