// SPDX-License-Identifier: PMPL-1.0-or-later
//! Storefront color themes.
//!
//! A theme maps role names (`primary`, `background`, `text`, ...) to hex
//! colors. Themes are read from TOML, YAML or JSON files, or from CSS custom
//! properties, and turned into the labeled pairs fed to
//! [`evaluate_palette`](crate::palette::evaluate_palette).

use crate::config::PairConfig;
use crate::error::{ContrastbotError, Result};
use crate::palette::ColorPair;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Roles every storefront theme is expected to define
pub const STANDARD_ROLES: &[&str] = &["primary", "secondary", "accent", "background", "text"];

/// The combinations checked for every theme, as (label, foreground role, background role)
pub const STANDARD_PAIRS: &[(&str, &str, &str)] = &[
    ("Text on Background", "text", "background"),
    ("Primary on Background", "primary", "background"),
    ("Secondary on Background", "secondary", "background"),
    ("Text on Primary", "text", "primary"),
    ("Background on Primary", "background", "primary"),
];

static CSS_COLOR_PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)--(?:color-)?([a-z][a-z0-9]*)(?:-color)?\s*:\s*([^;}\n]+)")
        .expect("valid regex")
});

/// Supported theme file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Toml,
    Yaml,
    Json,
    Css,
}

impl ThemeFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();
        match ext.as_str() {
            "toml" => Some(ThemeFormat::Toml),
            "yml" | "yaml" => Some(ThemeFormat::Yaml),
            "json" => Some(ThemeFormat::Json),
            "css" => Some(ThemeFormat::Css),
            _ => None,
        }
    }
}

/// A named set of role colors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: Option<String>,
    pub colors: BTreeMap<String, String>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a role color
    pub fn with_color(mut self, role: &str, color: &str) -> Self {
        self.colors.insert(role.to_lowercase(), color.to_string());
        self
    }

    /// Color assigned to a role
    pub fn color(&self, role: &str) -> Option<&str> {
        self.colors.get(&role.to_lowercase()).map(String::as_str)
    }

    /// Standard roles this theme leaves unset
    pub fn missing_roles(&self) -> Vec<&'static str> {
        STANDARD_ROLES
            .iter()
            .copied()
            .filter(|role| self.color(role).is_none())
            .collect()
    }

    /// Resolve a pair endpoint: a role name maps to its color, anything
    /// else is taken as a literal color. An unset standard role resolves to
    /// an empty string, which evaluates as unavailable.
    fn resolve(&self, key: &str) -> String {
        if let Some(color) = self.color(key) {
            return color.to_string();
        }
        if STANDARD_ROLES.contains(&key.to_lowercase().as_str()) {
            return String::new();
        }
        key.to_string()
    }

    /// The standard combinations, in fixed order
    pub fn standard_pairs(&self) -> Vec<ColorPair> {
        STANDARD_PAIRS
            .iter()
            .map(|(label, fg, bg)| ColorPair::new(label, &self.resolve(fg), &self.resolve(bg)))
            .collect()
    }

    /// Build pairs from configured combinations
    pub fn pairs_from(&self, configured: &[PairConfig]) -> Vec<ColorPair> {
        configured
            .iter()
            .map(|p| ColorPair::new(&p.label, &self.resolve(&p.foreground), &self.resolve(&p.background)))
            .collect()
    }

    /// Load a theme, picking the parser by file extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = ThemeFormat::from_path(path).ok_or_else(|| {
            ContrastbotError::Theme(format!("Unsupported theme file: {}", path.display()))
        })?;
        let content = std::fs::read_to_string(path)?;
        let mut theme = Self::parse(&content, format)?;
        if theme.name.is_none() {
            theme.name = path.file_stem().and_then(|s| s.to_str()).map(str::to_string);
        }
        debug!("Loaded theme {} with {} colors", path.display(), theme.colors.len());
        Ok(theme)
    }

    /// Parse theme content in the given format
    pub fn parse(content: &str, format: ThemeFormat) -> Result<Self> {
        match format {
            ThemeFormat::Css => Ok(Self::from_css(content)),
            ThemeFormat::Json => Ok(Self::from_value(&serde_json::from_str(content)?)),
            ThemeFormat::Yaml => Ok(Self::from_value(&serde_yaml::from_str(content)?)),
            ThemeFormat::Toml => {
                let value: Value = toml::from_str(content)?;
                Ok(Self::from_value(&value))
            }
        }
    }

    /// Build a theme from a structured document.
    ///
    /// Colors are looked up in `customizations.colors` (the website payload
    /// shape), then `colors`. Without either table only the standard roles
    /// are read from the top level.
    pub fn from_value(value: &Value) -> Self {
        let mut theme = Theme::new();
        theme.name = value.get("name").and_then(Value::as_str).map(str::to_string);

        let table = value
            .pointer("/customizations/colors")
            .or_else(|| value.get("colors"))
            .and_then(Value::as_object);

        match table {
            Some(map) => {
                for (role, color) in map {
                    match color.as_str() {
                        Some(c) => {
                            theme.colors.insert(role.to_lowercase(), c.trim().to_string());
                        }
                        None => warn!("Ignoring non-string color for role {}", role),
                    }
                }
            }
            None => {
                for role in STANDARD_ROLES {
                    if let Some(c) = value.get(*role).and_then(Value::as_str) {
                        theme.colors.insert(role.to_string(), c.trim().to_string());
                    }
                }
            }
        }

        theme
    }

    /// Build a theme from CSS custom properties.
    ///
    /// Recognizes `--color-<role>`, `--<role>-color` and `--<role>`; the first
    /// declaration of a role wins.
    pub fn from_css(content: &str) -> Self {
        let mut theme = Theme::new();

        for caps in CSS_COLOR_PROPERTY_RE.captures_iter(content) {
            let role = caps[1].to_lowercase();
            let value = caps[2].trim();
            if !STANDARD_ROLES.contains(&role.as_str()) {
                continue;
            }
            theme.colors.entry(role).or_insert_with(|| value.to_string());
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Theme {
        Theme::new()
            .with_color("primary", "#2563eb")
            .with_color("secondary", "#64748b")
            .with_color("accent", "#f59e0b")
            .with_color("background", "#ffffff")
            .with_color("text", "#111827")
    }

    #[test]
    fn test_standard_pairs_order() {
        let pairs = storefront().standard_pairs();
        let labels: Vec<_> = pairs.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Text on Background",
                "Primary on Background",
                "Secondary on Background",
                "Text on Primary",
                "Background on Primary",
            ]
        );
        assert_eq!(pairs[0].foreground, "#111827");
        assert_eq!(pairs[0].background, "#ffffff");
    }

    #[test]
    fn test_missing_role_resolves_empty() {
        let theme = Theme::new().with_color("text", "#000000");
        let pairs = theme.standard_pairs();
        assert_eq!(pairs[0].background, "");
        assert_eq!(theme.missing_roles(), ["primary", "secondary", "accent", "background"]);
    }

    #[test]
    fn test_pairs_from_config_accepts_literals() {
        let configured = vec![PairConfig {
            label: "Accent on White".to_string(),
            foreground: "accent".to_string(),
            background: "#ffffff".to_string(),
        }];
        let pairs = storefront().pairs_from(&configured);
        assert_eq!(pairs[0].foreground, "#f59e0b");
        assert_eq!(pairs[0].background, "#ffffff");
    }

    #[test]
    fn test_from_json_website_payload() {
        let json = r##"{
            "name": "Test Backend Website",
            "slug": "test-backend-website",
            "customizations": {
                "colors": { "primary": "#2563EB", "background": "#ffffff", "text": "#111827" },
                "typography": { "headingFont": "Inter" }
            }
        }"##;
        let theme = Theme::parse(json, ThemeFormat::Json).unwrap();
        assert_eq!(theme.name.as_deref(), Some("Test Backend Website"));
        assert_eq!(theme.color("primary"), Some("#2563EB"));
        assert_eq!(theme.color("slug"), None);
        assert_eq!(theme.colors.len(), 3);
    }

    #[test]
    fn test_from_toml_colors_table() {
        let toml = r##"
            name = "dark"

            [colors]
            background = "#111827"
            text = "#f9fafb"
        "##;
        let theme = Theme::parse(toml, ThemeFormat::Toml).unwrap();
        assert_eq!(theme.name.as_deref(), Some("dark"));
        assert_eq!(theme.color("text"), Some("#f9fafb"));
    }

    #[test]
    fn test_from_yaml_top_level() {
        let yaml = "name: light\nprimary: \"#2563eb\"\nbackground: \"#ffffff\"\nradius: 4\n";
        let theme = Theme::parse(yaml, ThemeFormat::Yaml).unwrap();
        assert_eq!(theme.name.as_deref(), Some("light"));
        assert_eq!(theme.color("primary"), Some("#2563eb"));
        assert_eq!(theme.color("background"), Some("#ffffff"));
        assert_eq!(theme.colors.len(), 2);
    }

    #[test]
    fn test_from_css_custom_properties() {
        let css = r#"
            :root {
                --color-primary: #2563eb;
                --background-color: #ffffff;
                --text: #111827;
                --spacing: 4px;
            }
            .dark { --color-primary: #93c5fd; }
        "#;
        let theme = Theme::from_css(css);
        assert_eq!(theme.color("primary"), Some("#2563eb"));
        assert_eq!(theme.color("background"), Some("#ffffff"));
        assert_eq!(theme.color("text"), Some("#111827"));
        assert_eq!(theme.color("spacing"), None);
    }

    #[test]
    fn test_css_pattern_is_shared_across_calls() {
        assert!(CSS_COLOR_PROPERTY_RE.is_match("--color-text: #000000;"));
        assert!(!CSS_COLOR_PROPERTY_RE.is_match("color: var(--color-text);"));

        let light = Theme::from_css(":root { --color-text: #111827; }");
        let dark = Theme::from_css(":root { --color-text: #f9fafb; }");
        assert_eq!(light.color("text"), Some("#111827"));
        assert_eq!(dark.color("text"), Some("#f9fafb"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Theme::parse("{ not json", ThemeFormat::Json).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ThemeFormat::from_path(Path::new("a/theme.TOML")), Some(ThemeFormat::Toml));
        assert_eq!(ThemeFormat::from_path(Path::new("theme.yml")), Some(ThemeFormat::Yaml));
        assert_eq!(ThemeFormat::from_path(Path::new("tokens.css")), Some(ThemeFormat::Css));
        assert_eq!(ThemeFormat::from_path(Path::new("README.md")), None);
    }
}
