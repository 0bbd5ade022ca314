// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for evaluating every theme file in a project.
//!
//! Walks directory trees, loads theme files and evaluates their palettes.

use crate::config::Config;
use crate::error::Result;
use crate::palette::PaletteReport;
use crate::theme::Theme;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Evaluate a single theme file
pub fn scan_file(path: &Path, config: &Config) -> Result<PaletteReport> {
    let theme = Theme::load(path)?;
    Ok(evaluate_theme(path, &theme, config))
}

fn evaluate_theme(path: &Path, theme: &Theme, config: &Config) -> PaletteReport {
    let missing = theme.missing_roles();
    if !missing.is_empty() {
        info!("{} leaves roles unset: {}", path.display(), missing.join(", "));
    }
    let pairs = config.pairs_for(theme);
    PaletteReport::new(&pairs).with_source(path.to_path_buf())
}

/// Evaluate every theme file under a directory.
///
/// Files that fail to load or define no colors at all are skipped. A theme
/// whose colors are all malformed is kept, with every row unavailable.
pub fn scan_directory(dir: &Path, config: &Config) -> Result<Vec<PaletteReport>> {
    std::fs::metadata(dir)?;

    let mut reports = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.file_type().is_dir() && e.depth() > 0 {
                return !config.exclude.iter().any(|x| x == name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        if !config.theme_extensions.iter().any(|x| *x == ext) {
            continue;
        }

        match Theme::load(path) {
            Ok(theme) if theme.colors.is_empty() => {
                info!("Skipping {}: no theme colors", path.display())
            }
            Ok(theme) => reports.push(evaluate_theme(path, &theme, config)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    info!("Evaluated {} theme(s)", reports.len());

    Ok(reports)
}
