// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for contrastbot

use crate::contrast::Verdict;
use crate::error::{ContrastbotError, Result};
use crate::palette::{ColorPair, PaletteReport};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extra labeled combinations to check
    #[serde(default)]
    pub pairs: Vec<PairConfig>,

    /// Also check the standard storefront combinations
    #[serde(default = "default_true")]
    pub include_standard_pairs: bool,

    /// Which verdicts fail the run
    #[serde(default)]
    pub fail_on: FailOn,

    /// Directory names skipped while scanning
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// File extensions treated as theme files while scanning
    #[serde(default = "default_theme_extensions")]
    pub theme_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pairs: Vec::new(),
            include_standard_pairs: true,
            fail_on: FailOn::default(),
            exclude: default_exclude(),
            theme_extensions: default_theme_extensions(),
        }
    }
}

impl Config {
    /// Pairs to evaluate for a theme, standard ones first
    pub fn pairs_for(&self, theme: &Theme) -> Vec<ColorPair> {
        let mut pairs = if self.include_standard_pairs {
            theme.standard_pairs()
        } else {
            Vec::new()
        };
        pairs.extend(theme.pairs_from(&self.pairs));
        pairs
    }
}

/// A configured combination; endpoints name a theme role or a literal color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    pub label: String,
    pub foreground: String,
    pub background: String,
}

/// Failure policy for the CLI exit code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Fail on `Bad` verdicts
    #[default]
    Bad,
    /// Fail on `Poor` or `Bad` verdicts
    Poor,
    /// Never fail
    Never,
}

impl FailOn {
    pub fn fails(&self, verdict: Verdict) -> bool {
        match self {
            FailOn::Bad => verdict == Verdict::Bad,
            FailOn::Poor => verdict.needs_improvement(),
            FailOn::Never => false,
        }
    }

    /// Whether any computed verdict across the reports fails this policy
    pub fn trips(&self, reports: &[PaletteReport]) -> bool {
        reports
            .iter()
            .flat_map(|r| &r.rows)
            .filter_map(|row| row.verdict)
            .any(|verdict| self.fails(verdict))
    }
}

impl std::fmt::Display for FailOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailOn::Bad => write!(f, "bad"),
            FailOn::Poor => write!(f, "poor"),
            FailOn::Never => write!(f, "never"),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_exclude() -> Vec<String> {
    vec![
        ".git".to_string(),
        "node_modules".to_string(),
        "target".to_string(),
        "dist".to_string(),
        "build".to_string(),
    ]
}

fn default_theme_extensions() -> Vec<String> {
    vec![
        "toml".to_string(),
        "json".to_string(),
        "yml".to_string(),
        "yaml".to_string(),
        "css".to_string(),
    ]
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("contrastbot")
        .join("config.toml")
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
            .map_err(|e| ContrastbotError::Config(format!("YAML parse error: {}", e))),
        _ => toml::from_str(&content)
            .map_err(|e| ContrastbotError::Config(format!("TOML parse error: {}", e))),
    }
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => serde_yaml::to_string(&config)?,
        _ => toml::to_string_pretty(&config)
            .map_err(|e| ContrastbotError::Config(format!("TOML serialize error: {}", e)))?,
    };

    std::fs::write(path, content)?;
    Ok(())
}
