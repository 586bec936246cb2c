//! Cache-backed CSS generation.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The flow for a request is:
//! 1. Fingerprint the theme (`fingerprint`)
//! 2. Ask the cache collaborator for that fingerprint
//! 3. On a miss, assemble the SCSS (`assemble_scss`) and compile it
//! 4. Hand the CSS to the cache and return it
//!
//! Concurrent misses for the same theme are not coalesced; both compile.
//! Compilation is deterministic, so the duplicate work is harmless. A cache
//! that wants at-most-once compilation must track in-flight requests itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bsgen::{Bootstrap5Generator, GeneratorOptions, MemoryCache, Theme};
//!
//! let generator = Bootstrap5Generator::new(GeneratorOptions::default())
//!     .with_cache(Arc::new(MemoryCache::new()));
//! let theme = Theme::new().with_color("primary", "#ff0000");
//! let css = generator.get_css(&theme).await?;
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use bsgen_sass_runtime::{GrassCompiler, SassCompiler};
use tracing::{debug, warn};

use crate::bundle::assemble_scss;
use crate::cache::{CssCache, NoopCache};
use crate::config::GeneratorOptions;
use crate::error::GeneratorError;
use crate::fingerprint::fingerprint;
use crate::theme::Theme;

/// Generates Bootstrap 5 CSS for themes, memoized through a [`CssCache`].
pub struct Bootstrap5Generator {
    options: GeneratorOptions,
    cache: Arc<dyn CssCache>,
    compiler: Arc<dyn SassCompiler>,
}

/// Uses default options: compressed output and the Bootstrap sources
/// resolved by [`crate::bootstrap_source_path`]. The bundled
/// `bootstrap/scss` directory is an external asset that is not part of
/// this repository, so unless it has been installed or
/// `BSGEN_BOOTSTRAP_SCSS` is set, compilation fails with a
/// `GeneratorError::Compilation` naming the missing load path.
impl Default for Bootstrap5Generator {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

/// Step-by-step construction of a [`Bootstrap5Generator`].
///
/// Anything not set falls back to the same defaults as
/// [`Bootstrap5Generator::new`].
#[derive(Default)]
pub struct GeneratorBuilder {
    options: GeneratorOptions,
    cache: Option<Arc<dyn CssCache>>,
    compiler: Option<Arc<dyn SassCompiler>>,
}

impl GeneratorBuilder {
    pub fn options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn cache(mut self, cache: Arc<dyn CssCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn compiler(mut self, compiler: Arc<dyn SassCompiler>) -> Self {
        self.compiler = Some(compiler);
        self
    }

    pub fn build(self) -> Bootstrap5Generator {
        Bootstrap5Generator {
            options: self.options,
            cache: self.cache.unwrap_or_else(|| Arc::new(NoopCache)),
            compiler: self
                .compiler
                .unwrap_or_else(|| Arc::new(GrassCompiler::new())),
        }
    }
}

impl Debug for Bootstrap5Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap5Generator")
            .field("options", &self.options)
            .field("cache", &"<CssCache>")
            .field("compiler", &self.compiler.name())
            .finish()
    }
}

impl Bootstrap5Generator {
    /// Create a generator with no cache and the grass compiler.
    ///
    /// The Bootstrap sources come from `options.bootstrap_source_path`,
    /// then `BSGEN_BOOTSTRAP_SCSS`, then the bundled `bootstrap/scss`
    /// directory, which must be installed separately. A missing directory
    /// is reported by the first compile, not here.
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            cache: Arc::new(NoopCache),
            compiler: Arc::new(GrassCompiler::new()),
        }
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    pub fn with_cache(mut self, cache: Arc<dyn CssCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_compiler(mut self, compiler: Arc<dyn SassCompiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Cache key for `theme`.
    pub fn fingerprint(&self, theme: &Theme) -> String {
        fingerprint(theme)
    }

    /// Assemble and compile `theme` without consulting the cache.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Compilation` when the compiler rejects the
    /// assembled source, including errors caused by caller-supplied SCSS,
    /// variable or color values.
    pub fn generate_css(&self, theme: &Theme) -> Result<String, GeneratorError> {
        let scss = assemble_scss(theme);
        let css = self.compiler.compile(
            &scss,
            &self.options.load_paths(),
            self.options.output_style(),
        )?;
        Ok(css)
    }

    /// Read-through lookup.
    ///
    /// Returns cached CSS when the cache has a non-empty entry for the
    /// theme's fingerprint, otherwise compiles, stores and returns fresh CSS.
    ///
    /// # Errors
    ///
    /// A failing cache lookup or a failing compilation is returned. A
    /// failing cache write is logged and does not affect the result.
    pub async fn get_css(&self, theme: &Theme) -> Result<String, GeneratorError> {
        let id = fingerprint(theme);

        if let Some(css) = self.cache.get(&id, theme).await?.filter(|css| !css.is_empty()) {
            debug!(%id, "css cache hit");
            return Ok(css);
        }

        debug!(%id, "css cache miss");
        let css = self.generate_css(theme)?;
        self.store(&id, &css, theme).await;
        Ok(css)
    }

    /// Write-through refresh: always recompiles and stores.
    ///
    /// A theme without any recognized field yields an empty string without
    /// compiling or touching the cache.
    pub async fn cache_css(&self, theme: &Theme) -> Result<String, GeneratorError> {
        if theme.is_empty() {
            debug!("empty theme, nothing to cache");
            return Ok(String::new());
        }

        let id = fingerprint(theme);
        let css = self.generate_css(theme)?;
        self.store(&id, &css, theme).await;
        Ok(css)
    }

    async fn store(&self, id: &str, css: &str, theme: &Theme) {
        match self.cache.set(id, css, theme).await {
            Ok(()) => debug!(%id, bytes = css.len(), "stored css"),
            Err(e) => warn!(%id, error = %e, "failed to store css, entry dropped"),
        }
    }
}
