//! Generator configuration.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Options can be built in code or deserialized from the same JSON shape
//! embedding applications already use:
//!
//! ```json
//! { "ignoreMinify": true, "bootstrapSourcePath": "/srv/assets/bootstrap/scss" }
//! ```

use std::path::PathBuf;

use bsgen_sass_runtime::OutputStyle;
use serde::{Deserialize, Serialize};

use crate::resources::bootstrap_source_path;

/// Construction options for [`crate::Bootstrap5Generator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Emit expanded, human-readable CSS instead of compressed output.
    pub ignore_minify: bool,

    /// Directory holding the Bootstrap SCSS sources. Falls back to
    /// `BSGEN_BOOTSTRAP_SCSS`, then to the bundled copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_source_path: Option<PathBuf>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_minify(mut self, ignore: bool) -> Self {
        self.ignore_minify = ignore;
        self
    }

    pub fn bootstrap_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bootstrap_source_path = Some(path.into());
        self
    }

    /// Whether output is minified.
    pub fn minified(&self) -> bool {
        !self.ignore_minify
    }

    pub fn output_style(&self) -> OutputStyle {
        OutputStyle::from_minified(self.minified())
    }

    /// Load paths handed to the compiler.
    pub fn load_paths(&self) -> Vec<PathBuf> {
        vec![bootstrap_source_path(self.bootstrap_source_path.as_ref())]
    }
}
