/*
 * bsgen-sass-runtime
 * Copyright (c) 2025 Posit, PBC
 *
 * Compiler abstraction for the Bootstrap 5 theme generator.
 *
 * The generator never talks to a SASS implementation directly. It goes
 * through the `SassCompiler` trait so that embedding applications (and
 * tests) can substitute their own compiler. The default implementation,
 * `GrassCompiler`, uses the pure-Rust grass crate.
 */

mod error;
mod sass_native;

pub use error::{CompileError, CompileResult};
pub use sass_native::{GrassCompiler, OutputStyle, SassCompiler, compile_scss};
