//! Shared configuration loader for the callout toolchain.
//!
//! `defaults/callouts.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CalloutsConfig`].

use callout_codec::{CustomCalloutDefinition, Palette};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/callouts.default.toml");

/// Top-level configuration consumed by callout applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CalloutsConfig {
    pub store: StoreConfig,
    pub palette: PaletteConfig,
    pub export: ExportConfig,
    pub preview: PreviewConfig,
    pub logging: LoggingConfig,
}

/// Where the settings file lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    pub fallback_color: String,
}

impl PaletteConfig {
    /// A resolver over the built-in catalog, `custom`, then the configured fallback
    pub fn palette<'a>(&self, custom: &'a [CustomCalloutDefinition]) -> Palette<'a> {
        Palette::new(custom).with_fallback_color(self.fallback_color.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub embed_stylesheet: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
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
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (the CLI's `--store`, say).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CalloutsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CalloutsConfig, ConfigError> {
    Loader::new().build()
}
