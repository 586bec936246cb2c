//! Error types for theme generation.
//!
//! Copyright (c) 2025 Posit, PBC

use bsgen_sass_runtime::CompileError;
use thiserror::Error;

/// Errors that can occur while generating themed CSS
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// SASS compilation failed (invalid caller SCSS, unresolvable import, ...)
    #[error("SASS compilation failed: {message}")]
    Compilation { message: String },

    /// The cache collaborator failed to look up an entry
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The theme could not be read.
    ///
    /// The generator itself only accepts an already parsed [`Theme`], so it
    /// never returns this variant. It lets callers that read themes with
    /// [`Theme::from_json`] or [`Theme::from_json_str`] use `?` in functions
    /// returning `GeneratorError`.
    ///
    /// [`Theme`]: crate::Theme
    /// [`Theme::from_json`]: crate::Theme::from_json
    /// [`Theme::from_json_str`]: crate::Theme::from_json_str
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

impl From<CompileError> for GeneratorError {
    fn from(e: CompileError) -> Self {
        GeneratorError::Compilation {
            message: e.to_string(),
        }
    }
}

/// Errors raised while reading a theme description
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The input does not have the shape of a theme
    #[error("malformed theme: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Error reported by a cache collaborator
#[derive(Debug, Error)]
#[error("cache error: {message}")]
pub struct CacheError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CacheError {
    /// Create an error from a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying storage error.
    pub fn from_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
