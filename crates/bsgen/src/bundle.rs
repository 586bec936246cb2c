//! Themed SCSS assembly.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Builds the SCSS entry point for one theme. The order matters because SCSS
//! resolves `!default` assignments and the cascade top to bottom:
//!
//! 1. caller's `scss.before`
//! 2. banner and Bootstrap functions
//! 3. gradient body background rule, if any
//! 4. theme variables, then theme colors (plain assignments)
//! 5. Bootstrap variables (`!default`, so theme values win)
//! 6. theme color maps, when colors were supplied
//! 7. maps, mixins, utilities, root, reboot, type, images
//! 8. allowed components, in Bootstrap's order
//! 9. helpers and the utilities API
//! 10. caller's `scss.after`

use std::borrow::Cow;

use crate::resources::{
    BASE_IMPORTS, CANONICAL_COLORS, COMPONENTS, PREAMBLE_IMPORTS, UTILITY_IMPORTS,
    VARIABLE_IMPORTS,
};
use crate::theme::{Background, Orientation, ScssMap, Theme};

/// Theme color maps and how each entry derives from the base color.
const COLOR_MAPS: [(&str, Option<(&str, u8)>); 4] = [
    ("$theme-colors", None),
    ("$theme-colors-text", Some(("shade-color", 60))),
    ("$theme-colors-bg-subtle", Some(("tint-color", 80))),
    ("$theme-colors-border-subtle", Some(("tint-color", 60))),
];

const BODY_BG: &str = "$body-bg";

/// Assemble the complete SCSS source for a theme.
///
/// Pure string templating: nothing is validated here, so malformed values
/// surface later as compilation errors.
pub fn assemble_scss(theme: &Theme) -> String {
    let (before, after) = split_scss(theme);
    let mut out = String::new();

    push_raw(&mut out, before);

    out.push_str("@import \"mixins/banner\";\n@include bsBanner(\"\");\n");
    push_imports(&mut out, PREAMBLE_IMPORTS.iter().copied());

    if let Some(rule) = gradient_rule(theme.background.as_ref()) {
        out.push_str(&rule);
    }

    let body_bg = body_bg_override(theme.background.as_ref());
    push_variables(&mut out, theme.variables.as_ref(), body_bg);

    if let Some(colors) = &theme.colors {
        for (name, value) in colors {
            out.push_str(&format!("{}: {};\n", scss_variable(name), value));
        }
    }

    push_imports(&mut out, VARIABLE_IMPORTS.iter().copied());

    if let Some(colors) = theme.colors.as_ref().filter(|c| !c.is_empty()) {
        out.push_str(&color_maps(colors));
    }

    push_imports(&mut out, BASE_IMPORTS.iter().copied());
    push_imports(
        &mut out,
        COMPONENTS.iter().copied().filter(|c| theme.allows_component(c)),
    );
    push_imports(&mut out, UTILITY_IMPORTS.iter().copied());

    push_raw(&mut out, after);

    out
}

/// Split the caller's raw SCSS into the parts injected before and after
/// the framework.
pub fn split_scss(theme: &Theme) -> (&str, &str) {
    match &theme.scss {
        Some(scss) => (scss.before(), scss.after()),
        None => ("", ""),
    }
}

/// Render the four theme color maps for the given colors.
///
/// Keys are the eight canonical names followed by the caller's extra color
/// names, in the order they were supplied.
pub fn color_maps(colors: &ScssMap) -> String {
    let names = color_map_keys(colors);
    let mut out = String::new();

    for (map, derive) in COLOR_MAPS {
        let entries: Vec<String> = names
            .iter()
            .map(|name| match derive {
                None => format!("  \"{name}\": ${name}"),
                Some((function, weight)) => {
                    format!("  \"{name}\": {function}(${name}, {weight}%)")
                }
            })
            .collect();
        out.push_str(&format!("{map}: (\n{}\n);\n", entries.join(",\n")));
    }

    out
}

fn color_map_keys(colors: &ScssMap) -> Vec<&str> {
    let mut names: Vec<&str> = CANONICAL_COLORS.to_vec();
    for key in colors.keys() {
        let name = key.trim_start_matches('$');
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// `$name` for a key that may or may not carry the sigil.
fn scss_variable(name: &str) -> Cow<'_, str> {
    if name.starts_with('$') {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("${name}"))
    }
}

fn push_variables(out: &mut String, variables: Option<&ScssMap>, body_bg: Option<&str>) {
    let mut body_bg_written = false;

    if let Some(variables) = variables {
        for (name, value) in variables {
            let name = scss_variable(name);
            match body_bg {
                Some(bg) if name == BODY_BG => {
                    out.push_str(&format!("{name}: {bg};\n"));
                    body_bg_written = true;
                }
                _ => out.push_str(&format!("{name}: {value};\n")),
            }
        }
    }

    if let (Some(bg), false) = (body_bg, body_bg_written) {
        out.push_str(&format!("{BODY_BG}: {bg};\n"));
    }
}

/// Color that replaces `$body-bg`, if the background asks for one.
///
/// A gradient with a single stop degrades to a plain color.
fn body_bg_override(background: Option<&Background>) -> Option<&str> {
    match background? {
        Background::Single { color } => color.as_deref(),
        Background::Gradient { colors, .. } if colors.len() == 1 => Some(colors[0].as_str()),
        Background::Gradient { .. } => None,
    }
}

fn gradient_rule(background: Option<&Background>) -> Option<String> {
    match background? {
        Background::Gradient {
            colors,
            orientation,
        } if colors.len() >= 2 => {
            let orientation = orientation.clone().unwrap_or_default();
            Some(linear_gradient_rule(&orientation, colors))
        }
        _ => None,
    }
}

fn linear_gradient_rule(orientation: &Orientation, colors: &[String]) -> String {
    format!(
        "body {{\n  background-image: linear-gradient({}, {});\n}}\n",
        orientation,
        colors.join(", ")
    )
}

fn push_imports<'a>(out: &mut String, names: impl Iterator<Item = &'a str>) {
    for name in names {
        out.push_str(&format!("@import \"{name}\";\n"));
    }
}

fn push_raw(out: &mut String, scss: &str) {
    if scss.is_empty() {
        return;
    }
    out.push_str(scss);
    if !scss.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeScss;
    use serde_json::json;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
    }

    #[test]
    fn test_default_theme_imports_everything() {
        let scss = assemble_scss(&Theme::new());

        for component in COMPONENTS {
            assert!(scss.contains(&format!("@import \"{component}\";")));
        }
        assert!(!scss.contains("$theme-colors"));
        assert!(scss.starts_with("@import \"mixins/banner\";"));
    }

    #[test]
    fn test_emission_order() {
        let theme = Theme::from_json(&json!({
            "variables": { "$spacer": "2rem" },
            "colors": { "primary": "#ff0000" },
            "scss": { "before": "// BEFORE", "after": "// AFTER" },
            "background": { "type": "gradient", "colors": ["#fff", "#000"] }
        }))
        .unwrap();
        let scss = assemble_scss(&theme);

        let order = [
            "// BEFORE",
            "@import \"mixins/banner\";",
            "@import \"functions\";",
            "background-image: linear-gradient(0deg, #fff, #000);",
            "$spacer: 2rem;",
            "$primary: #ff0000;",
            "@import \"variables\";",
            "@import \"variables-dark\";",
            "$theme-colors: (",
            "@import \"maps\";",
            "@import \"images\";",
            "@import \"containers\";",
            "@import \"placeholders\";",
            "@import \"helpers\";",
            "@import \"utilities/api\";",
            "// AFTER",
        ];
        for pair in order.windows(2) {
            assert!(
                position(&scss, pair[0]) < position(&scss, pair[1]),
                "{:?} should precede {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_raw_scss_goes_after_utilities() {
        let theme = Theme::new().with_scss(ThemeScss::Raw(".custom { color: red; }".to_string()));
        let scss = assemble_scss(&theme);

        assert!(scss.ends_with(".custom { color: red; }\n"));
        assert!(position(&scss, "@import \"utilities/api\";") < position(&scss, ".custom"));
    }

    #[test]
    fn test_component_allow_list() {
        let theme = Theme::new().with_components(["buttons", "modal", "no-such-component"]);
        let scss = assemble_scss(&theme);

        assert!(scss.contains("@import \"buttons\";"));
        assert!(scss.contains("@import \"modal\";"));
        assert!(!scss.contains("@import \"carousel\";"));
        assert!(!scss.contains("no-such-component"));
        // Base and utility layers are not subject to the allow-list
        assert!(scss.contains("@import \"reboot\";"));
        assert!(scss.contains("@import \"utilities/api\";"));
    }

    #[test]
    fn test_components_follow_canonical_order() {
        let theme = Theme::new().with_components(["modal", "buttons"]);
        let scss = assemble_scss(&theme);
        assert!(position(&scss, "@import \"buttons\";") < position(&scss, "@import \"modal\";"));
    }

    #[test]
    fn test_variable_sigil() {
        let theme = Theme::new()
            .with_variable("$body-color", "#333")
            .with_variable("border-radius", "0")
            .with_color("$brand", "#123456")
            .with_color("accent", "#abcdef");
        let scss = assemble_scss(&theme);

        assert!(scss.contains("$body-color: #333;\n"));
        assert!(scss.contains("$border-radius: 0;\n"));
        assert!(scss.contains("$brand: #123456;\n"));
        assert!(scss.contains("$accent: #abcdef;\n"));
        assert!(!scss.contains("$$"));
    }

    #[test]
    fn test_single_background_overrides_body_bg() {
        let theme = Theme::new()
            .with_variable("$body-bg", "#000")
            .with_variable("$body-color", "#333")
            .with_background(Background::Single {
                color: Some("#fafafa".to_string()),
            });
        let scss = assemble_scss(&theme);

        assert!(scss.contains("$body-bg: #fafafa;\n$body-color: #333;\n"));
        assert!(!scss.contains("$body-bg: #000;"));
    }

    #[test]
    fn test_single_background_added_when_absent() {
        let theme = Theme::new().with_background(Background::Single {
            color: Some("#fafafa".to_string()),
        });
        assert!(assemble_scss(&theme).contains("$body-bg: #fafafa;\n"));
    }

    #[test]
    fn test_background_without_color_is_ignored() {
        let scss = assemble_scss(&Theme::new().with_background(Background::Single { color: None }));
        assert!(!scss.contains("$body-bg"));

        let scss = assemble_scss(&Theme::new().with_background(Background::Gradient {
            colors: vec![],
            orientation: None,
        }));
        assert!(!scss.contains("linear-gradient"));
        assert!(!scss.contains("$body-bg"));
    }

    #[test]
    fn test_gradient_orientation() {
        let gradient = |orientation| Background::Gradient {
            colors: vec!["#fff".to_string(), "#eee".to_string()],
            orientation,
        };

        let scss = assemble_scss(&Theme::new().with_background(gradient(Some(Orientation::Degrees(45.0)))));
        assert!(scss.contains("linear-gradient(45deg, #fff, #eee)"));

        let scss = assemble_scss(
            &Theme::new().with_background(gradient(Some(Orientation::Literal("to right".to_string())))),
        );
        assert!(scss.contains("linear-gradient(to right, #fff, #eee)"));
    }

    #[test]
    fn test_single_stop_gradient_is_plain_color() {
        let theme = Theme::new().with_background(Background::Gradient {
            colors: vec!["#fff".to_string()],
            orientation: None,
        });
        let scss = assemble_scss(&theme);
        assert!(scss.contains("$body-bg: #fff;"));
        assert!(!scss.contains("linear-gradient"));
    }

    #[test]
    fn test_empty_colors_emit_no_maps() {
        let theme = Theme::from_json(&json!({ "colors": {} })).unwrap();
        assert!(!assemble_scss(&theme).contains("$theme-colors"));
    }

    #[test]
    fn test_color_map_keys() {
        let colors = Theme::new()
            .with_color("brand", "#123456")
            .with_color("primary", "#ff0000")
            .with_color("$accent", "#abcdef")
            .colors
            .unwrap();

        assert_eq!(
            color_map_keys(&colors),
            [
                "primary", "secondary", "success", "info", "warning", "danger", "light", "dark",
                "brand", "accent"
            ]
        );
    }

    #[test]
    fn test_color_maps_snapshot() {
        let colors = Theme::new()
            .with_color("primary", "#ff0000")
            .with_color("brand", "#123456")
            .colors
            .unwrap();

        insta::assert_snapshot!(color_maps(&colors), @r#"
        $theme-colors: (
          "primary": $primary,
          "secondary": $secondary,
          "success": $success,
          "info": $info,
          "warning": $warning,
          "danger": $danger,
          "light": $light,
          "dark": $dark,
          "brand": $brand
        );
        $theme-colors-text: (
          "primary": shade-color($primary, 60%),
          "secondary": shade-color($secondary, 60%),
          "success": shade-color($success, 60%),
          "info": shade-color($info, 60%),
          "warning": shade-color($warning, 60%),
          "danger": shade-color($danger, 60%),
          "light": shade-color($light, 60%),
          "dark": shade-color($dark, 60%),
          "brand": shade-color($brand, 60%)
        );
        $theme-colors-bg-subtle: (
          "primary": tint-color($primary, 80%),
          "secondary": tint-color($secondary, 80%),
          "success": tint-color($success, 80%),
          "info": tint-color($info, 80%),
          "warning": tint-color($warning, 80%),
          "danger": tint-color($danger, 80%),
          "light": tint-color($light, 80%),
          "dark": tint-color($dark, 80%),
          "brand": tint-color($brand, 80%)
        );
        $theme-colors-border-subtle: (
          "primary": tint-color($primary, 60%),
          "secondary": tint-color($secondary, 60%),
          "success": tint-color($success, 60%),
          "info": tint-color($info, 60%),
          "warning": tint-color($warning, 60%),
          "danger": tint-color($danger, 60%),
          "light": tint-color($light, 60%),
          "dark": tint-color($dark, 60%),
          "brand": tint-color($brand, 60%)
        );
        "#);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let theme = Theme::new()
            .with_variable("$a", "1px")
            .with_color("primary", "red")
            .with_components(["buttons"]);
        assert_eq!(assemble_scss(&theme), assemble_scss(&theme.clone()));
    }
}
