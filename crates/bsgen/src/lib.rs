//! Bootstrap 5 theme generator.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate provides:
//! - Theme description types (`Theme`, `ThemeScss`, `Background`)
//! - SCSS assembly from a theme (`assemble_scss`)
//! - Content fingerprints used as cache keys (`fingerprint`)
//! - A cache-backed facade over the SCSS compiler (`Bootstrap5Generator`)

mod bundle;
mod cache;
mod compile;
mod config;
mod error;
mod fingerprint;
mod resources;
mod theme;

pub use bundle::{assemble_scss, color_maps, split_scss};
pub use cache::{CssCache, MemoryCache, NoopCache};
pub use compile::{Bootstrap5Generator, GeneratorBuilder};
pub use config::GeneratorOptions;
pub use error::{CacheError, GeneratorError, ThemeError};
pub use fingerprint::{canonical_json, fingerprint};
pub use resources::{
    BOOTSTRAP_SOURCE_ENV, BUNDLED_BOOTSTRAP_SCSS, CANONICAL_COLORS, COMPONENTS,
    bootstrap_source_path, is_component,
};
pub use theme::{Background, Orientation, ScssMap, ScssValue, Theme, ThemeScss};

// Compiler seam, re-exported so callers can plug in their own compiler
pub use bsgen_sass_runtime::{CompileError, GrassCompiler, OutputStyle, SassCompiler};
