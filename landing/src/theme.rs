//! Design tokens.
//!
//! The token table lives in `tokens.json` next to `Cargo.toml` and is
//! embedded at compile time. [`DesignTokens::to_css`] turns it into custom
//! properties on `:root`, `@keyframes` blocks and one utility class per shadow,
//! background and named animation. The page stylesheet only refers to the
//! custom properties, never to literal colours.

use crate::error::ThemeError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Raw token table, embedded from `tokens.json`.
pub const TOKENS_JSON: &str = include_str!("../tokens.json");

/// Shade name that maps to the bare palette variable (`--color-primary`).
const DEFAULT_SHADE: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DesignTokens {
    /// palette -> shade -> colour
    pub colors: BTreeMap<String, BTreeMap<String, String>>,
    /// family -> font stack
    pub fonts: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub shadows: BTreeMap<String, String>,
    #[serde(default)]
    pub backgrounds: BTreeMap<String, String>,
    /// name -> stop selector -> declarations
    #[serde(default)]
    pub keyframes: BTreeMap<String, BTreeMap<String, String>>,
    /// utility name -> `animation` shorthand
    #[serde(default)]
    pub animations: BTreeMap<String, String>,
}

impl DesignTokens {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let tokens: DesignTokens = serde_json::from_str(json)?;
        if let Some((name, _)) = tokens.colors.iter().find(|(_, shades)| shades.is_empty()) {
            return Err(ThemeError::EmptyPalette(name.clone()));
        }
        Ok(tokens)
    }

    /// The table shipped with the page.
    pub fn embedded() -> Result<Self, ThemeError> {
        Self::from_json(TOKENS_JSON)
    }

    /// Custom property name for a palette shade.
    pub fn color_var(palette: &str, shade: &str) -> String {
        if shade == DEFAULT_SHADE {
            format!("--color-{palette}")
        } else {
            format!("--color-{palette}-{shade}")
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (palette, shades) in &self.colors {
            for (shade, value) in shades {
                let _ = writeln!(css, "    {}: {value};", Self::color_var(palette, shade));
            }
        }
        for (family, stack) in &self.fonts {
            let _ = writeln!(css, "    --font-{family}: {};", stack.join(", "));
        }
        for (name, shadow) in &self.shadows {
            let _ = writeln!(css, "    --shadow-{name}: {shadow};");
        }
        css.push_str("}\n");

        for (name, stops) in &self.keyframes {
            let _ = writeln!(css, "\n@keyframes {name} {{");
            for (stop, declarations) in stops {
                let _ = writeln!(css, "    {stop} {{ {declarations}; }}");
            }
            css.push_str("}\n");
        }

        for name in self.shadows.keys() {
            let _ = writeln!(css, ".shadow-{name} {{ box-shadow: var(--shadow-{name}); }}");
        }
        for (name, image) in &self.backgrounds {
            let _ = writeln!(css, ".bg-{name} {{ background-image: {image}; }}");
        }
        for (name, animation) in &self.animations {
            let _ = writeln!(css, ".animate-{name} {{ animation: {animation}; }}");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_table_parses() {
        let tokens = DesignTokens::embedded().expect("tokens.json should parse");
        assert_eq!(tokens.colors["primary"]["DEFAULT"], "#3B82F6");
        assert_eq!(tokens.colors["dreamland"].len(), 5);
        assert_eq!(tokens.fonts["display"], vec!["\"Playfair Display\"", "serif"]);
    }

    #[test]
    fn every_palette_entry_becomes_a_variable() {
        let tokens = DesignTokens::embedded().unwrap();
        let css = tokens.to_css();
        for (palette, shades) in &tokens.colors {
            for (shade, value) in shades {
                let line = format!("{}: {value};", DesignTokens::color_var(palette, shade));
                assert!(css.contains(&line), "missing `{line}`");
            }
        }
        assert!(css.contains("--color-accent: #EC4899;"));
        assert!(css.contains("--color-dreamland-purple: #8B5CF6;"));
    }

    #[test]
    fn keyframes_and_utilities_are_emitted() {
        let css = DesignTokens::embedded().unwrap().to_css();
        assert!(css.contains("@keyframes float {"));
        assert!(css.contains("50% { transform: translateY(-10px); }"));
        assert!(css.contains(".animate-glow { animation: glow 3s ease-in-out infinite; }"));
        assert!(css.contains(".shadow-glow-accent { box-shadow: var(--shadow-glow-accent); }"));
        assert!(css.contains("--font-sans: Montserrat, sans-serif;"));
    }

    #[test]
    fn rejects_malformed_table() {
        assert!(matches!(
            DesignTokens::from_json("{\"colors\": 3}"),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_palette() {
        let json = r#"{ "colors": { "ghost": {} }, "fonts": {} }"#;
        match DesignTokens::from_json(json) {
            Err(ThemeError::EmptyPalette(name)) => assert_eq!(name, "ghost"),
            other => panic!("expected EmptyPalette, got {other:?}"),
        }
    }
}
