//! Bootstrap SCSS source location and partial inventory.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The Bootstrap 5.3 SCSS tree is an external asset bundle. It is expected
//! at `bootstrap/scss` inside this crate unless the caller points somewhere
//! else, either through `GeneratorOptions::bootstrap_source_path` or the
//! `BSGEN_BOOTSTRAP_SCSS` environment variable. The tree is only ever read.

use std::path::PathBuf;

/// Environment variable that overrides the bundled Bootstrap SCSS location.
pub const BOOTSTRAP_SOURCE_ENV: &str = "BSGEN_BOOTSTRAP_SCSS";

/// Bundled Bootstrap SCSS directory.
pub const BUNDLED_BOOTSTRAP_SCSS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/bootstrap/scss");

/// Semantic color names Bootstrap builds its theme maps from, in map order.
pub const CANONICAL_COLORS: [&str; 8] = [
    "primary",
    "secondary",
    "success",
    "info",
    "warning",
    "danger",
    "light",
    "dark",
];

/// Optional component partials, in the order `bootstrap.scss` imports them.
pub const COMPONENTS: [&str; 27] = [
    "containers",
    "grid",
    "tables",
    "forms",
    "buttons",
    "transitions",
    "dropdown",
    "button-group",
    "nav",
    "navbar",
    "card",
    "accordion",
    "breadcrumb",
    "pagination",
    "badge",
    "alert",
    "progress",
    "list-group",
    "close",
    "toasts",
    "modal",
    "tooltip",
    "popover",
    "carousel",
    "spinners",
    "offcanvas",
    "placeholders",
];

/// Preamble every build needs before any variable is read.
pub(crate) const PREAMBLE_IMPORTS: &[&str] = &["functions"];

/// Variable definitions, imported after the theme's own assignments so that
/// Bootstrap's `!default` values only fill the gaps.
pub(crate) const VARIABLE_IMPORTS: &[&str] = &["variables", "variables-dark"];

/// Always-on partials between the variables and the components.
pub(crate) const BASE_IMPORTS: &[&str] = &[
    "maps",
    "mixins",
    "utilities",
    "root",
    "reboot",
    "type",
    "images",
];

/// Utility layer, always imported after the components.
pub(crate) const UTILITY_IMPORTS: &[&str] = &["helpers", "utilities/api"];

/// Whether `name` is one of the optional components.
pub fn is_component(name: &str) -> bool {
    COMPONENTS.contains(&name)
}

/// Resolve the Bootstrap SCSS directory.
///
/// Precedence: explicit override, then `BSGEN_BOOTSTRAP_SCSS`, then the
/// bundled location.
pub fn bootstrap_source_path(explicit: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path.clone();
    }
    match std::env::var_os(BOOTSTRAP_SOURCE_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(BUNDLED_BOOTSTRAP_SCSS),
    }
}
