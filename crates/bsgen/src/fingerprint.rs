//! Cache key computation.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The fingerprint is a SHA-256 digest over a canonical JSON rendering of
//! the recognized theme fields: `variables`, `colors`, `scss`,
//! `components`, `background` and `css`. Object keys are sorted and the
//! component list is treated as a set, so neither key order nor unrelated
//! extra fields affect the result.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::theme::{Background, ScssMap, Theme, ThemeScss};

#[derive(Serialize)]
struct FingerprintFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a ScssMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<&'a ScssMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scss: Option<&'a ThemeScss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<&'a Background>,
    #[serde(skip_serializing_if = "Option::is_none")]
    css: Option<&'a Value>,
}

/// Compute the cache key for a theme, in `"sha256:<hex-digest>"` format.
pub fn fingerprint(theme: &Theme) -> String {
    let digest = Sha256::digest(canonical_json(theme).as_bytes());
    format!("sha256:{:x}", digest)
}

/// Canonical JSON text hashed by [`fingerprint`].
pub fn canonical_json(theme: &Theme) -> String {
    let components = theme.components.as_ref().map(|list| {
        let mut names: Vec<&str> = list.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    });

    let fields = FingerprintFields {
        variables: theme.variables.as_ref(),
        colors: theme.colors.as_ref(),
        scss: theme.scss.as_ref(),
        components,
        background: theme.background.as_ref(),
        css: theme.css.as_ref(),
    };

    // Every field serializes to plain JSON (string keys, finite numbers)
    let value = serde_json::to_value(&fields).unwrap_or(Value::Null);
    sorted(value).to_string()
}

/// Rebuild every object with its keys in sorted order.
///
/// `serde_json::Map` is only sorted when the `preserve_order` feature is
/// off, and any crate in the build can switch it on.
fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sorted(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}
