//! Configuration loading
//!
//! `defaults/css-camelize.default.toml` is embedded into the binary. Callers
//! layer user files and CLI overrides on top of it through [`Loader`] before
//! deserializing into [`RewriteConfig`].

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use crate::error::Result;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/css-camelize.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "css-camelize.toml";

/// Where to read, where to write, and which scope class to strip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewriteConfig {
    pub input_path: PathBuf,
    /// Falls back to the input path with `.new` appended.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    pub scope_class: String,
}

impl RewriteConfig {
    /// The destination, derived from the input when none was configured.
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => sibling_output_path(&self.input_path),
        }
    }
}

/// `styles/Card.module.css` → `styles/Card.module.css.new`.
pub fn sibling_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".new");
    PathBuf::from(name)
}

/// Layers user overrides over the built-in defaults.
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

    /// Layer an optional configuration file (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RewriteConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RewriteConfig> {
    Loader::new().build()
}
