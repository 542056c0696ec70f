// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use lazy_static::*;
use log::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Chunk count both operands need before multiplication switches to Karatsuba.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 8;

/// Lowest accepted Karatsuba threshold. Below this the split halves are not guaranteed to
/// shrink and recursion would not terminate.
pub const MIN_KARATSUBA_THRESHOLD: usize = 4;

/// Environment variable prefix, e.g. `DECINT_ARITH__KARATSUBA_THRESHOLD`.
pub const ENV_PREFIX: &str = "DECINT";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "DECINT_CONFIG";

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::new().unwrap_or_else(|err| {
        warn!("Failed to load settings, using defaults! Reason: {:#?}", err);
        Settings::default()
    });
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Arithmetic tuning.
    #[serde(default)]
    pub arith: Arith,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arith {
    /// Karatsuba switch-over point in chunks.
    pub karatsuba_threshold: usize,
}

impl Default for Arith {
    fn default() -> Self {
        Self {
            karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD,
        }
    }
}

impl Arith {
    /// Configured threshold, raised to [`MIN_KARATSUBA_THRESHOLD`] if set lower.
    #[must_use]
    pub fn karatsuba_threshold(&self) -> usize {
        self.karatsuba_threshold.max(MIN_KARATSUBA_THRESHOLD)
    }
}

impl Settings {
    /// Loads defaults, then the configuration file if present, then `DECINT_` environment
    /// variables, each overriding the previous.
    pub fn new() -> Result<Self, ConfigError> {
        let mut s = Self::defaults()?;

        if let Some(path) = config_path() {
            debug!("Reading settings from {}", path.display());
            s = s.add_source(File::from(path).required(false));
        }

        s = s.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(s)
    }

    /// Loads defaults overridden by a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let s = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(s)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default_settings = Settings::default();
        Config::builder().set_default(
            "arith.karatsuba_threshold",
            default_settings.arith.karatsuba_threshold as i64,
        )
    }

    fn build(s: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = s.build()?.try_deserialize()?;

        if settings.arith.karatsuba_threshold < MIN_KARATSUBA_THRESHOLD {
            warn!(
                "Karatsuba threshold {} is below the minimum, using {}",
                settings.arith.karatsuba_threshold, MIN_KARATSUBA_THRESHOLD
            );
        }

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

/// `$DECINT_CONFIG` if set, otherwise `decint/config.toml` under the platform config directory.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }

    let mut path = dirs::config_dir()?;
    path.push("decint");
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.arith.karatsuba_threshold(), DEFAULT_KARATSUBA_THRESHOLD);
    }

    #[test]
    fn toml_overrides_threshold() {
        let settings = Settings::from_toml_str("[arith]\nkaratsuba_threshold = 32\n").unwrap();
        assert_eq!(settings.arith.karatsuba_threshold(), 32);
    }

    #[test]
    fn threshold_is_clamped() {
        let settings = Settings::from_toml_str("[arith]\nkaratsuba_threshold = 1\n").unwrap();
        assert_eq!(settings.arith.karatsuba_threshold, 1);
        assert_eq!(settings.arith.karatsuba_threshold(), MIN_KARATSUBA_THRESHOLD);
    }

    #[test]
    fn file_and_env_layers() {
        let mut path = env::temp_dir();
        path.push(format!("decint-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "[arith]\nkaratsuba_threshold = 32\n").unwrap();

        // Both layers are exercised in one test since they share process environment
        env::set_var(CONFIG_PATH_VAR, &path);
        let from_file = Settings::new();

        env::set_var("DECINT_ARITH__KARATSUBA_THRESHOLD", "48");
        let from_env = Settings::new();

        env::remove_var("DECINT_ARITH__KARATSUBA_THRESHOLD");
        env::remove_var(CONFIG_PATH_VAR);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(from_file.unwrap().arith.karatsuba_threshold(), 32);
        assert_eq!(from_env.unwrap().arith.karatsuba_threshold(), 48);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Settings::from_toml_str("[arith]\nkaratsuba_threshold = \"many\"\n").is_err());
        assert!(Settings::from_toml_str("[arith\n").is_err());
    }
}
