//! Configuration loading for the bridge.
//!
//! `defaults/stata-bridge.default.toml` is embedded into the binary so the
//! documented defaults and the runtime behavior cannot drift apart. Hosts
//! layer a user file (conventionally `~/.stata_bridge.toml`) and
//! programmatic overrides on top via [`Loader`] before deserializing into
//! [`BridgeConfig`].

use crate::stata::session::ExecutionMode;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/stata-bridge.default.toml");

/// Top-level configuration consumed by the bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    pub session: SessionConfig,
}

/// Knobs for the session layer.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Absent means: pick the platform default.
    execution_mode: Option<ExecutionMode>,
    pub stata_path: String,
    cache_directory: String,
}

impl SessionConfig {
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
            .unwrap_or_else(ExecutionMode::platform_default)
    }

    pub fn cache_directory(&self) -> PathBuf {
        expand_tilde(&self.cache_directory)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Loader { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the configuration.
    pub fn build(self) -> Result<BridgeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the embedded defaults plus the user file, if one exists.
pub fn load() -> Result<BridgeConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = user_config_path() {
        loader = loader.with_optional_file(path);
    }
    loader.build()
}

/// Conventional location of the user configuration file.
pub fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".stata_bridge.toml"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
