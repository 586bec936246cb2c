/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Error type for SCSS compilation.
 */

use std::path::PathBuf;

/// Result type for compiler operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur while compiling SCSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The compiler rejected the source (syntax error, undefined variable,
    /// unresolvable import, ...)
    Sass(String),

    /// A configured load path does not exist or is not a directory
    LoadPathNotFound(PathBuf),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Sass(msg) => write!(f, "SASS compilation error: {}", msg),
            CompileError::LoadPathNotFound(path) => {
                write!(f, "SASS load path not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CompileError {}
