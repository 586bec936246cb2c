//! SCSS compilation using the grass crate.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! grass is a pure Rust implementation of Sass that targets dart-sass 1.54.3,
//! which is enough to compile Bootstrap 5.3.
//!
//! Key components:
//! - `SassCompiler`: the seam the generator compiles through
//! - `GrassCompiler`: default implementation backed by grass
//! - `compile_scss`: free function for one-off compilation

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::error::{CompileError, CompileResult};

/// Formatting mode for the produced CSS.
///
/// Mirrors the two modes every Sass implementation supports. Kept separate
/// from `grass::OutputStyle` so the compiler type does not leak into the
/// public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Human-readable output, one declaration per line
    Expanded,
    /// Minified output
    #[default]
    Compressed,
}

impl OutputStyle {
    /// Pick the style for a "minified" flag.
    pub fn from_minified(minified: bool) -> Self {
        if minified {
            OutputStyle::Compressed
        } else {
            OutputStyle::Expanded
        }
    }

    fn to_grass(self) -> grass::OutputStyle {
        match self {
            OutputStyle::Expanded => grass::OutputStyle::Expanded,
            OutputStyle::Compressed => grass::OutputStyle::Compressed,
        }
    }
}

/// A synchronous SCSS to CSS compiler.
///
/// Compilation is CPU-bound and is not split into suspendable steps, so the
/// trait is deliberately not async. Implementations must be usable from
/// several threads at once.
pub trait SassCompiler: Send + Sync {
    /// Compile `scss` to CSS.
    ///
    /// `load_paths` are searched, in order, when resolving `@import` and
    /// `@use` rules. Errors are returned as reported by the compiler.
    fn compile(
        &self,
        scss: &str,
        load_paths: &[PathBuf],
        style: OutputStyle,
    ) -> CompileResult<String>;

    /// Name of the underlying compiler, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Default compiler backed by grass and the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrassCompiler;

impl GrassCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl SassCompiler for GrassCompiler {
    fn compile(
        &self,
        scss: &str,
        load_paths: &[PathBuf],
        style: OutputStyle,
    ) -> CompileResult<String> {
        compile_scss(scss, load_paths, style)
    }

    fn name(&self) -> &'static str {
        "grass"
    }
}

/// Compile SCSS source to CSS using grass.
///
/// # Arguments
///
/// * `scss` - The SCSS source code to compile
/// * `load_paths` - Directories to search for @use/@import resolution
/// * `style` - Compressed or expanded output
///
/// # Returns
///
/// Compiled CSS string on success. A load path that is not a directory is
/// reported as `CompileError::LoadPathNotFound` before grass is invoked;
/// anything grass rejects becomes `CompileError::Sass`.
pub fn compile_scss(
    scss: &str,
    load_paths: &[PathBuf],
    style: OutputStyle,
) -> CompileResult<String> {
    if let Some(missing) = load_paths.iter().find(|p| !p.is_dir()) {
        return Err(CompileError::LoadPathNotFound(missing.clone()));
    }

    let options = grass::Options::default()
        .load_paths(load_paths)
        .style(style.to_grass());

    let started = Instant::now();
    let result =
        grass::from_string(scss, &options).map_err(|e| CompileError::Sass(e.to_string()));
    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        ok = result.is_ok(),
        "compiled scss with grass"
    );
    result
}
