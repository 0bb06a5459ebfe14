//! # Settings Module
//!
//! ## Purpose
//! Persistent user preferences of the balancer: output style of the balanced equation,
//! whether the mass report is printed, and the logging level.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "spaced_output": true,
//!   "show_unit_coefficients": true,
//!   "print_report": false,
//!   "log_level": "warn"
//! }
//! ```
//! Missing keys take their default values; a missing or unreadable file means defaults
//! for everything.
//!
//! ## Usage Pattern
//! ```rust
//! use ChemBalancer::settings::Settings;
//!
//! let mut settings = Settings::new();
//! println!("log level {}", settings.log_level());
//! let style = settings.output_style();
//! settings.config.print_report = true;
//! ```

use crate::Balancer::formatter::OutputStyle;
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "balancer_config.json";

/// Serializable configuration stored in balancer_config.json.
///
/// # Fields
/// * `spaced_output` - `2H2 + 1O2 = 2H2O` when true, `2H2+1O2 = 2H2O` when false
/// * `show_unit_coefficients` - print coefficient 1 explicitly
/// * `print_report` - print the stoichiometric matrix and mass table after the equation
/// * `log_level` - one of off, error, warn, info, debug, trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    pub spaced_output: bool,
    pub show_unit_coefficients: bool,
    pub print_report: bool,
    pub log_level: String,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            spaced_output: true,
            show_unit_coefficients: true,
            print_report: false,
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration together with the file it is persisted to.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: BalancerConfig,
    config_file: String,
}

impl Settings {
    /// Loads "balancer_config.json" from the current directory,
    /// defaults if it is absent or invalid.
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        Self::load(config_file).unwrap_or_else(|e| {
            warn!(
                "failed to read config file '{}': {}, using defaults",
                config_file, e
            );
            Self::defaults_for(config_file)
        })
    }

    /// Like `with_config_file` but hands the load error to the caller, for use before
    /// a logger exists. A missing file is not an error.
    pub fn load(config_file: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            config: Self::load_config(config_file)?,
            config_file: config_file.to_string(),
        })
    }

    pub fn defaults_for(config_file: &str) -> Self {
        Self {
            config: BalancerConfig::default(),
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<BalancerConfig, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: BalancerConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(BalancerConfig::default())
        }
    }

    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn output_style(&self) -> OutputStyle {
        OutputStyle {
            spaced: self.config.spaced_output,
            show_unit_coefficients: self.config.show_unit_coefficients,
        }
    }

    /// unknown level names fall back to Warn
    pub fn log_level(&self) -> LevelFilter {
        self.config
            .log_level
            .parse::<LevelFilter>()
            .unwrap_or(LevelFilter::Warn)
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config = BalancerConfig::default();
        self.save_config()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
