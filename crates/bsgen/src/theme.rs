//! Theme description types.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! A `Theme` is the caller's description of one stylesheet variant. Only the
//! recognized fields below take part in SCSS assembly and fingerprinting;
//! anything else the caller attaches lands in `extra` and is carried along
//! untouched.
//!
//! ```json
//! {
//!   "variables": { "$body-color": "#333", "$enable-shadows": true },
//!   "colors": { "primary": "#ff0000", "brand": "#123456" },
//!   "scss": { "before": "...", "after": "..." },
//!   "components": ["buttons", "modal"],
//!   "background": { "type": "gradient", "colors": ["#fff", "#eee"], "orientation": 45 },
//!   "owner": "ignored by the generator"
//! }
//! ```

use std::fmt;

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ThemeError;

/// Ordered mapping from SCSS name to SCSS value, in caller order.
pub type ScssMap = LinkedHashMap<String, ScssValue>;

/// Caller-supplied description of a stylesheet variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// SCSS variables, e.g. `"$body-color": "#333"`. The `$` is optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<ScssMap>,

    /// Semantic colors, e.g. `"primary": "#ff0000"`. Also drive the
    /// generated theme color maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ScssMap>,

    /// Raw SCSS injected around the framework import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scss: Option<ThemeScss>,

    /// Allow-list of framework components. `None` imports all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,

    /// Body background convenience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,

    /// Opaque passthrough. Part of the fingerprint, never assembled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<Value>,

    /// Unrecognized keys.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A literal SCSS value expression.
///
/// JSON strings are used verbatim; numbers and booleans are rendered the way
/// SCSS spells them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScssValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for ScssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScssValue::Text(s) => f.write_str(s),
            ScssValue::Number(n) => write!(f, "{}", n),
            ScssValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ScssValue {
    fn from(s: &str) -> Self {
        ScssValue::Text(s.to_string())
    }
}

impl From<String> for ScssValue {
    fn from(s: String) -> Self {
        ScssValue::Text(s)
    }
}

impl From<bool> for ScssValue {
    fn from(b: bool) -> Self {
        ScssValue::Bool(b)
    }
}

/// Raw SCSS supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeScss {
    /// Appended after everything else.
    Raw(String),
    /// Injected before the framework preamble and after the utilities.
    Split {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        before: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after: Option<String>,
    },
}

impl ThemeScss {
    pub fn before(&self) -> &str {
        match self {
            ThemeScss::Raw(_) => "",
            ThemeScss::Split { before, .. } => before.as_deref().unwrap_or_default(),
        }
    }

    pub fn after(&self) -> &str {
        match self {
            ThemeScss::Raw(s) => s,
            ThemeScss::Split { after, .. } => after.as_deref().unwrap_or_default(),
        }
    }
}

/// Body background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    /// Plain color, written to `$body-bg`.
    Single {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// Two-color linear gradient on `body`.
    Gradient {
        #[serde(default)]
        colors: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        orientation: Option<Orientation>,
    },
}

/// Gradient direction: a bare number of degrees, or any SCSS angle or
/// direction keyword (`"to right"`, `"0.25turn"`), passed through as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Orientation {
    Degrees(f64),
    Literal(String),
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Degrees(0.0)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Degrees(deg) => write!(f, "{}deg", deg),
            Orientation::Literal(s) => f.write_str(s),
        }
    }
}

impl Theme {
    /// Create an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a theme from a JSON value.
    ///
    /// Structural mismatches (e.g. `variables` that is not an object) are
    /// reported as `ThemeError::Malformed`.
    pub fn from_json(value: &Value) -> Result<Self, ThemeError> {
        Ok(Theme::deserialize(value)?)
    }

    /// Read a theme from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when none of the recognized fields is present.
    pub fn is_empty(&self) -> bool {
        self.variables.is_none()
            && self.colors.is_none()
            && self.scss.is_none()
            && self.components.is_none()
            && self.background.is_none()
            && self.css.is_none()
    }

    /// Whether the component allow-list admits `name`.
    pub fn allows_component(&self, name: &str) -> bool {
        match &self.components {
            None => true,
            Some(list) => list.iter().any(|c| c == name),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<ScssValue>) -> Self {
        self.variables
            .get_or_insert_with(ScssMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<ScssValue>) -> Self {
        self.colors
            .get_or_insert_with(ScssMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_scss(mut self, scss: ThemeScss) -> Self {
        self.scss = Some(scss);
        self
    }

    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = Some(components.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }
}
