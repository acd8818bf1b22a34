//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `MATCHMAKER_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_ALPHA, DEFAULT_TOP_K};

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `MATCHMAKER_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding persisted arms and the interaction log. Default: `./.data`.
    pub storage_path: PathBuf,

    /// Sentence-encoder model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    ///
    /// `None` runs the deterministic stub encoder.
    pub model_path: Option<PathBuf>,

    /// LinUCB exploration constant. Default: `1.0`.
    pub bandit_alpha: f64,

    /// Recommendations returned when the caller does not pass `top_k`. Default: `10`.
    pub default_top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("./.data"),
            model_path: None,
            bandit_alpha: DEFAULT_ALPHA,
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    const ENV_STORAGE_PATH: &'static str = "MATCHMAKER_STORAGE_PATH";
    const ENV_MODEL_PATH: &'static str = "MATCHMAKER_MODEL_PATH";
    const ENV_BANDIT_ALPHA: &'static str = "MATCHMAKER_BANDIT_ALPHA";
    const ENV_TOP_K: &'static str = "MATCHMAKER_TOP_K";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_path = Self::parse_path_from_env(Self::ENV_STORAGE_PATH, defaults.storage_path);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let bandit_alpha = Self::parse_alpha_from_env(defaults.bandit_alpha)?;
        let default_top_k = Self::parse_top_k_from_env(defaults.default_top_k)?;

        Ok(Self {
            storage_path,
            model_path,
            bandit_alpha,
            default_top_k,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.exists() && !self.storage_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.storage_path.clone(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if !self.bandit_alpha.is_finite() || self.bandit_alpha <= 0.0 {
            return Err(ConfigError::InvalidAlpha {
                value: self.bandit_alpha.to_string(),
            });
        }

        if self.default_top_k == 0 {
            return Err(ConfigError::InvalidTopK {
                value: self.default_top_k.to_string(),
            });
        }

        Ok(())
    }

    fn parse_alpha_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_BANDIT_ALPHA) {
            Ok(value) => {
                let alpha: f64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::FloatParseError {
                            name: Self::ENV_BANDIT_ALPHA,
                            value: value.clone(),
                            source: e,
                        })?;

                if !alpha.is_finite() || alpha <= 0.0 {
                    return Err(ConfigError::InvalidAlpha { value });
                }

                Ok(alpha)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_top_k_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_TOP_K) {
            Ok(value) => {
                let top_k: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTopK {
                        value: value.clone(),
                    })?;

                if top_k == 0 {
                    return Err(ConfigError::InvalidTopK { value });
                }

                Ok(top_k)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
