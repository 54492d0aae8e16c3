//! Configuration module for `coursegraph`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$COURSE_GRAPH";

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const CONFIG_KEYS: [&str; 9] = [
    "level",
    "file",
    "verbose",
    "urls",
    "block_selector",
    "title_selector",
    "body_selector",
    "timeout_secs",
    "out_dir",
];

/// Error message for a key outside [`CONFIG_KEYS`]
#[must_use]
pub fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: '{key}' (expected one of: {})",
        CONFIG_KEYS.join(", ")
    )
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Scraping configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Calendar pages scraped when no source is given on the command line
    #[serde(default)]
    pub urls: Vec<String>,
    /// CSS selector matching one course block
    #[serde(default)]
    pub block_selector: String,
    /// CSS selector for the course title inside a block
    #[serde(default)]
    pub title_selector: String,
    /// CSS selector for the description paragraphs inside a block
    #[serde(default)]
    pub body_selector: String,
    /// HTTP timeout in seconds (0 means the built-in default)
    #[serde(default)]
    pub timeout_secs: u64,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported graph files
    #[serde(default)]
    pub out_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Scraping settings
    #[serde(default)]
    pub scrape: ScrapeConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override HTTP timeout
    pub timeout_secs: Option<u64>,
    /// Override output directory
    pub out_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_GRAPH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursegraph`
    /// - macOS: `~/Library/Application Support/coursegraph`
    /// - Windows: `%APPDATA%\coursegraph`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursegraph")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are updated,
    /// so settings added in newer releases show up in older config files.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.scrape.urls.is_empty() && !defaults.scrape.urls.is_empty() {
            self.scrape.urls.clone_from(&defaults.scrape.urls);
            changed = true;
        }
        for (field, default) in [
            (&mut self.scrape.block_selector, &defaults.scrape.block_selector),
            (&mut self.scrape.title_selector, &defaults.scrape.title_selector),
            (&mut self.scrape.body_selector, &defaults.scrape.body_selector),
        ] {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }
        if self.scrape.timeout_secs == 0 && defaults.scrape.timeout_secs != 0 {
            self.scrape.timeout_secs = defaults.scrape.timeout_secs;
            changed = true;
        }

        if self.paths.out_dir.is_empty() && !defaults.paths.out_dir.is_empty() {
            self.paths.out_dir.clone_from(&defaults.paths.out_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto this configuration
    ///
    /// Only non-`None` values replace config values. Prefer
    /// [`with_overrides`](Self::with_overrides) when the stored config may
    /// still be saved, so overrides never reach the configuration file.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.scrape.timeout_secs = timeout;
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
    }

    /// Copy of this configuration with CLI overrides applied, for this run only
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let stored = Config::load();
    /// let effective = stored.with_overrides(&ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// });
    /// ```
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut effective = self.clone();
        effective.apply_overrides(overrides);
        effective
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Log file path with `$COURSE_GRAPH` expanded, or `None` when file logging is off
    #[must_use]
    pub fn log_file_path(&self) -> Option<PathBuf> {
        let file = self.logging.file.trim();
        (!file.is_empty()).then(|| PathBuf::from(Self::expand_variables(file)))
    }

    /// Output directory with `$COURSE_GRAPH` expanded
    #[must_use]
    pub fn out_dir_path(&self) -> PathBuf {
        PathBuf::from(Self::expand_variables(&self.paths.out_dir))
    }

    /// Initialize config from a TOML string
    ///
    /// Values are kept as written; `$COURSE_GRAPH` placeholders are expanded by
    /// [`log_file_path`](Self::log_file_path) and [`out_dir_path`](Self::out_dir_path)
    /// so they survive a later [`save()`](Self::save). Missing fields use their
    /// serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load the compiled-in defaults for the current build profile
    ///
    /// # Panics
    /// Panics if the embedded default configuration is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults if not found
    ///
    /// An existing file gets missing fields merged in from the defaults (and is
    /// re-saved when that changes anything). On first run the defaults are
    /// written out. Any read or parse failure falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    /// Same as [`save()`](Config::save).
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// See [`CONFIG_KEYS`]; `urls` comes back comma-separated. Dashes may be
    /// used in place of underscores.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "urls" => Some(self.scrape.urls.join(",")),
            "block_selector" => Some(self.scrape.block_selector.clone()),
            "title_selector" => Some(self.scrape.title_selector.clone()),
            "body_selector" => Some(self.scrape.body_selector.clone()),
            "timeout_secs" => Some(self.scrape.timeout_secs.to_string()),
            "out_dir" => Some(self.paths.out_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// `urls` takes a comma-separated list; `verbose` and `timeout_secs` are parsed.
    /// Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "urls" => {
                self.scrape.urls = value
                    .split(',')
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "block_selector" => self.scrape.block_selector = value.to_string(),
            "title_selector" => self.scrape.title_selector = value.to_string(),
            "body_selector" => self.scrape.body_selector = value.to_string(),
            "timeout_secs" => {
                self.scrape.timeout_secs = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid number for 'timeout_secs': '{value}'"))?;
            }
            "out_dir" => self.paths.out_dir = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "urls" => self.scrape.urls.clone_from(&defaults.scrape.urls),
            "block_selector" => self
                .scrape
                .block_selector
                .clone_from(&defaults.scrape.block_selector),
            "title_selector" => self
                .scrape
                .title_selector
                .clone_from(&defaults.scrape.title_selector),
            "body_selector" => self
                .scrape
                .body_selector
                .clone_from(&defaults.scrape.body_selector),
            "timeout_secs" => self.scrape.timeout_secs = defaults.scrape.timeout_secs,
            "out_dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Delete the configuration file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[scrape]")?;
        writeln!(f, "  urls = [{}]", quoted_list(&self.scrape.urls))?;
        writeln!(f, "  block_selector = \"{}\"", self.scrape.block_selector)?;
        writeln!(f, "  title_selector = \"{}\"", self.scrape.title_selector)?;
        writeln!(f, "  body_selector = \"{}\"", self.scrape.body_selector)?;
        writeln!(f, "  timeout_secs = {}", self.scrape.timeout_secs)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        Ok(())
    }
}

fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
