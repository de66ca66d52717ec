//! Configuration module.
//!
//! Handles loading and validating `config.toml`. Stock defaults are
//! overridden by a user config file in the config directory (`--config-dir`,
//! default `.`). Command-line flags win over both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [fields]                  # which badge entries are checked
//! camera = true
//! focal_length = true
//! iso = true
//! exposure_time = true
//! f_number = true
//! white_balance = false
//! exposure_program = false
//!
//! [colors]                  # #rgb or #rrggbb only
//! gradient_from = "#f8fafc"
//! gradient_to = "#f1f5f9"
//! text = "#334155"
//!
//! [layout]                  # page chrome around the formatter
//! credit_name = "@tas"
//! credit_url = "https://cohost.org/tas"
//! repository_url = "https://github.com/tascodes/cohost-formatters"
//!
//! [logging]
//! level = "warn"            # off, error, warn, info, debug, trace
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [colors]
//! text = "#0f172a"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::fields::{FieldId, FieldSelection};
use crate::style::StyleChoice;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Initial field selection.
    pub fields: FieldsConfig,
    /// Initial badge colours.
    pub colors: StyleChoice,
    /// Footer links on the rendered page.
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

impl BadgeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, url) in [
            ("layout.credit_url", &self.layout.credit_url),
            ("layout.repository_url", &self.layout.repository_url),
        ] {
            if !(url.is_empty() || url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an http(s) URL or empty"
                )));
            }
        }
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of off, error, warn, info, debug, trace",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// One flag per badge field, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldsConfig {
    pub camera: bool,
    pub focal_length: bool,
    pub iso: bool,
    pub exposure_time: bool,
    pub f_number: bool,
    pub white_balance: bool,
    pub exposure_program: bool,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self::from(&FieldSelection::default())
    }
}

impl From<&FieldSelection> for FieldsConfig {
    fn from(sel: &FieldSelection) -> Self {
        Self {
            camera: sel.is_checked(FieldId::Camera),
            focal_length: sel.is_checked(FieldId::FocalLength),
            iso: sel.is_checked(FieldId::Iso),
            exposure_time: sel.is_checked(FieldId::ExposureTime),
            f_number: sel.is_checked(FieldId::FNumber),
            white_balance: sel.is_checked(FieldId::WhiteBalance),
            exposure_program: sel.is_checked(FieldId::ExposureProgram),
        }
    }
}

impl From<&FieldsConfig> for FieldSelection {
    fn from(cfg: &FieldsConfig) -> Self {
        let mut sel = FieldSelection::none();
        sel.set(FieldId::Camera, cfg.camera);
        sel.set(FieldId::FocalLength, cfg.focal_length);
        sel.set(FieldId::Iso, cfg.iso);
        sel.set(FieldId::ExposureTime, cfg.exposure_time);
        sel.set(FieldId::FNumber, cfg.f_number);
        sel.set(FieldId::WhiteBalance, cfg.white_balance);
        sel.set(FieldId::ExposureProgram, cfg.exposure_program);
        sel
    }
}

/// Page chrome: who made it and where the source lives.
///
/// Empty strings hide the corresponding link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub credit_name: String,
    pub credit_url: String,
    pub repository_url: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            credit_name: "@tas".to_string(),
            credit_url: "https://cohost.org/tas".to_string(),
            repository_url: "https://github.com/tascodes/cohost-formatters".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log level; `RUST_LOG` overrides it.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the stock defaults; missing keys and sections fall
/// back to their defaults through `#[serde(default)]`.
pub fn load_config(dir: &Path) -> Result<BadgeConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(BadgeConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: BadgeConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# exif-badge configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
# Command-line flags (--toggle, --from, --to, --text) override these.

# ---------------------------------------------------------------------------
# Fields shown on the badge, always in this order
# ---------------------------------------------------------------------------
[fields]
camera = true             # make + model, rendered bold
focal_length = true       # 35mm
iso = true                # ISO 400
exposure_time = true      # 250"
f_number = true           # f/2.8
white_balance = false     # White Balance Auto white balance
exposure_program = false  # Exposure Program Aperture priority

# ---------------------------------------------------------------------------
# Badge colors (#rgb or #rrggbb)
# ---------------------------------------------------------------------------
[colors]
gradient_from = "#f8fafc" # top-left of the 135deg background gradient
gradient_to = "#f1f5f9"   # bottom-right of the gradient
text = "#334155"

# ---------------------------------------------------------------------------
# Page footer links (empty string hides a link)
# ---------------------------------------------------------------------------
[layout]
credit_name = "@tas"
credit_url = "https://cohost.org/tas"
repository_url = "https://github.com/tascodes/cohost-formatters"

# ---------------------------------------------------------------------------
# Diagnostics (RUST_LOG overrides this)
# ---------------------------------------------------------------------------
[logging]
level = "warn"
"##
}
