//! Configuration system for vimlet.
//!
//! Configuration is read from a TOML file with every field optional; missing
//! fields fall back to their defaults. The command line takes no flags, so
//! this file is the only tuning surface.
//!
//! # Example
//!
//! ```
//! use vimlet::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.margin_x, 2);
//!
//! let custom = Config {
//!     theme: "default-light".to_string(),
//!     ..Config::default()
//! };
//! assert_eq!(custom.margin_y, 1);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the vimlet application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `margin_x` - Columns of blank frame on each side (default: 2)
/// * `margin_y` - Rows of blank frame above and below (default: 1)
/// * `tick_rate_ms` - Event loop poll interval, used to notice resizes (default: 100)
/// * `tab_width` - Columns used to draw a tab character (default: 4)
/// * `log_file` - Log file path (default: `<data dir>/vimlet/vimlet.log`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Horizontal frame margin per side
    #[serde(default = "default_margin_x")]
    pub margin_x: u16,

    /// Vertical frame margin per side
    #[serde(default = "default_margin_y")]
    pub margin_y: u16,

    /// Event loop poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Width of a rendered tab character
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Log file override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_margin_x() -> u16 {
    2
}

fn default_margin_y() -> u16 {
    1
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_tab_width() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            margin_x: default_margin_x(),
            margin_y: default_margin_y(),
            tick_rate_ms: default_tick_rate_ms(),
            tab_width: default_tab_width(),
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/vimlet/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("vimlet");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults on any failure.
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Parses TOML config text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Returns the log file path, honoring `log_file` when set.
    pub fn log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        dirs::data_local_dir().map(|mut path| {
            path.push("vimlet");
            path.push("vimlet.log");
            path
        })
    }
}
