/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ConfigError;

/// Configuration for untangle.
///
/// Loaded from `$XDG_CONFIG_HOME/untangle/config.toml` (or the platform equivalent).
/// Every section is optional; missing keys take their defaults.
///
/// ```toml
/// [reporting]
/// enabled = true
/// level = "warn"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UntangleConfig {
    /// How actuators report failed actions
    pub reporting: ReportingConfig,
}

/// Controls the report an actuator emits when an action fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Emit a report for every failed action
    pub enabled: bool,
    /// Tracing level of the report
    pub level: ReportLevel,
}

/// Tracing level used for failure reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    /// `tracing::Level::ERROR`
    Error,
    /// `tracing::Level::WARN`
    #[default]
    Warn,
    /// `tracing::Level::INFO`
    Info,
    /// `tracing::Level::DEBUG`
    Debug,
    /// `tracing::Level::TRACE`
    Trace,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: ReportLevel::Warn,
        }
    }
}

impl ReportingConfig {
    /// Reporting switched off.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            enabled: false,
            level: ReportLevel::Warn,
        }
    }
}

impl UntangleConfig {
    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read and [`ConfigError::Parse`] if it
    /// isn't a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `untangle/config.toml` under the XDG config directories. If no file is
    /// found, or the file can't be read or parsed, logs the reason and returns the defaults.
    pub fn load() -> Self {
        let xdg_dirs = match xdg::BaseDirectories::with_prefix("untangle") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("{}", ConfigError::from(e));
                return Self::default();
            }
        };

        let Some(path) = xdg_dirs.find_config_file("config.toml") else {
            info!("No configuration file found, using defaults");
            return Self::default();
        };

        info!("Loading configuration from: {}", path.display());
        match Self::from_file(&path) {
            Ok(config) => {
                info!("Successfully loaded configuration");
                config
            }
            Err(e) => {
                error!("{e}");
                Self::default()
            }
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: UntangleConfig = UntangleConfig::load();
}
