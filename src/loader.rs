//! Stylesheet loading and rewriting
//!
//! [`StylesheetLoader`] holds a source document read from a file or a string
//! and runs the selector passes over it. [`rewrite`] and [`rewrite_with`] are
//! the file-to-file entry points used by the CLI.
//!
//! The output is written in a single call only after both passes succeed, so
//! a failed read never leaves a partial file behind.

use crate::config::RewriteConfig;
use crate::error::{Result, RewriteError};
use crate::rewrite::{camelize_selectors, strip_scope_prefix, DEFAULT_SCOPE_CLASS};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An in-memory source stylesheet.
#[derive(Debug, Clone)]
pub struct StylesheetLoader {
    source: String,
}

impl StylesheetLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| RewriteError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read stylesheet");
        Ok(StylesheetLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        StylesheetLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Strip `scope_class` and camelCase the remaining selectors.
    pub fn rewrite(&self, scope_class: &str) -> String {
        let stripped = strip_scope_prefix(&self.source, scope_class);
        let stripped_bytes = self.source.len() - stripped.len();
        debug!(scope_class, stripped_bytes, "stripped scope prefix");

        let camelized = camelize_selectors(&stripped);
        debug!(
            changed = matches!(camelized, Cow::Owned(_)),
            "camelized selectors"
        );
        camelized.into_owned()
    }
}

/// Rewrite `input_path` into `output_path`, stripping the default scope class.
pub fn rewrite(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    let rewritten = StylesheetLoader::from_path(input_path)?.rewrite(DEFAULT_SCOPE_CLASS);
    write_output(output_path, &rewritten)
}

/// Rewrite according to `config`, returning the path that was written.
pub fn rewrite_with(config: &RewriteConfig) -> Result<PathBuf> {
    let output_path = config.resolved_output_path();
    let rewritten =
        StylesheetLoader::from_path(&config.input_path)?.rewrite(&config.scope_class);
    write_output(&output_path, &rewritten)?;
    Ok(output_path)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| RewriteError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote stylesheet");
    Ok(())
}
