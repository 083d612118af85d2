// src/config.rs

//! Runtime configuration for the demo binary and for callers that want a
//! configured default buffer.
//!
//! Configuration is JSON and every field is optional. Colors are written as
//! names or components (see [`Color`]), never as packed integers, so one file
//! works regardless of the pixel format compiled in. The pixel format itself is
//! a build-time choice and cannot be configured here.

use std::path::Path;

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Color, PackedColor};
use crate::framebuffer::DynamicBuffer;

/// Environment variable naming a JSON config file to load into [`CONFIG`].
pub const CONFIG_ENV_VAR: &str = "LGW_CONFIG";

/// Process-wide configuration, loaded on first access.
///
/// Reads the file named by `LGW_CONFIG` if set; falls back to defaults when the
/// variable is unset or the file cannot be loaded.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env_or_default);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub buffer: BufferConfig,
}

/// Dimensions and fill color of the default dynamic buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    pub width: usize,
    pub height: usize,
    pub fill: Color,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            width: 320,
            height: 240,
            fill: Color::default(),
        }
    }
}

impl BufferConfig {
    pub fn fill_color(&self) -> PackedColor {
        self.fill.packed()
    }

    /// Builds an initialized buffer with these dimensions and fill.
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize`.
    pub fn build(&self) -> DynamicBuffer {
        DynamicBuffer::with_fill(self.width, self.height, self.fill_color())
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    fn from_env_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Config::default();
        };
        match Config::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                warn!(
                    "Could not load config from {}: {err}. Using defaults.",
                    Path::new(&path).display()
                );
                Config::default()
            }
        }
    }
}
