// SPDX-License-Identifier: PMPL-1.0-or-later
//! Batch evaluation of labeled color pairs.
//!
//! `evaluate_palette` is the entry point a caller uses to check a whole
//! color scheme at once ("Text on Background", "Primary on Background", ...).
//! Each pair is evaluated independently; an unparsable color produces an
//! unavailable row and the remaining pairs are still evaluated.

use crate::contrast::{self, Verdict, AA_NORMAL_TEXT};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::path::PathBuf;
use tracing::debug;

/// A labeled foreground/background pair to evaluate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub label: String,
    pub foreground: String,
    pub background: String,
}

impl ColorPair {
    pub fn new(label: &str, foreground: &str, background: &str) -> Self {
        Self {
            label: label.to_string(),
            foreground: foreground.to_string(),
            background: background.to_string(),
        }
    }
}

/// Result of evaluating one pair.
///
/// `ratio` and `verdict` are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRow {
    pub label: String,
    pub foreground: String,
    pub background: String,
    pub ratio: Option<f64>,
    pub verdict: Option<Verdict>,
}

impl PaletteRow {
    /// Evaluate a single pair
    pub fn evaluate(pair: &ColorPair) -> Self {
        let ratio = contrast::contrast_ratio(&pair.foreground, &pair.background);
        let verdict = contrast::classify(ratio);
        if ratio.is_none() {
            debug!(
                "Contrast unavailable for {}: {:?} on {:?}",
                pair.label, pair.foreground, pair.background
            );
        }
        Self {
            label: pair.label.clone(),
            foreground: pair.foreground.clone(),
            background: pair.background.clone(),
            ratio,
            verdict,
        }
    }

    /// Whether a ratio could be computed
    pub fn is_available(&self) -> bool {
        self.ratio.is_some()
    }

    /// Recommendation text for a computed ratio below AA, if any
    pub fn recommendation(&self) -> Option<String> {
        let ratio = self.ratio?;
        if ratio >= AA_NORMAL_TEXT {
            return None;
        }
        Some(format!(
            "Improve contrast for {} (current: {:.2}, need: {}+)",
            self.label, ratio, AA_NORMAL_TEXT
        ))
    }

    /// One-line summary, e.g. `Text on Background: 17.74 Good`
    pub fn summary(&self) -> String {
        match (self.ratio, self.verdict) {
            (Some(ratio), Some(verdict)) => format!("{}: {:.2} {}", self.label, ratio, verdict),
            _ => format!("{}: unavailable", self.label),
        }
    }
}

/// Lazy iterator of palette rows, in input order.
///
/// Cloning yields an independent iterator starting from the same position,
/// so a fresh clone restarts the evaluation.
#[derive(Debug, Clone)]
pub struct PaletteRows<'a> {
    pairs: std::slice::Iter<'a, ColorPair>,
}

impl Iterator for PaletteRows<'_> {
    type Item = PaletteRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next().map(PaletteRow::evaluate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for PaletteRows<'_> {}
impl FusedIterator for PaletteRows<'_> {}

/// Evaluate every pair, preserving order
pub fn evaluate_palette(pairs: &[ColorPair]) -> PaletteRows<'_> {
    PaletteRows { pairs: pairs.iter() }
}

/// A fully evaluated palette, optionally tied to the file it came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteReport {
    pub source: Option<PathBuf>,
    pub rows: Vec<PaletteRow>,
}

impl PaletteReport {
    pub fn new(pairs: &[ColorPair]) -> Self {
        Self {
            source: None,
            rows: evaluate_palette(pairs).collect(),
        }
    }

    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }

    /// Rows with the given verdict
    pub fn by_verdict(&self, verdict: Verdict) -> Vec<&PaletteRow> {
        self.rows.iter().filter(|r| r.verdict == Some(verdict)).collect()
    }

    /// Rows whose ratio could not be computed
    pub fn unavailable(&self) -> Vec<&PaletteRow> {
        self.rows.iter().filter(|r| !r.is_available()).collect()
    }

    /// Recommendations for every computed row below AA, in row order
    pub fn recommendations(&self) -> Vec<String> {
        self.rows.iter().filter_map(PaletteRow::recommendation).collect()
    }

    /// Lowest computed ratio, if any row was computable
    pub fn worst_ratio(&self) -> Option<f64> {
        self.rows.iter().filter_map(|r| r.ratio).reduce(f64::min)
    }

    pub fn all_good(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r.verdict == Some(Verdict::Good))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairs() -> Vec<ColorPair> {
        vec![
            ColorPair::new("X", "#111827", "#ffffff"),
            ColorPair::new("Y", "bad", "#ffffff"),
            ColorPair::new("Z", "#f59e0b", "#ffffff"),
        ]
    }

    #[test]
    fn test_order_preserved_and_failure_isolated() {
        let pairs = sample_pairs();
        let rows: Vec<_> = evaluate_palette(&pairs).collect();

        assert_eq!(rows.len(), 3);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["X", "Y", "Z"]);

        assert!(rows[0].ratio.is_some());
        assert_eq!(rows[0].verdict, Some(Verdict::Good));
        assert_eq!(rows[1].ratio, None);
        assert_eq!(rows[1].verdict, None);
        assert!(rows[2].ratio.is_some());
        assert_eq!(rows[2].verdict, Some(Verdict::Bad));
    }

    #[test]
    fn test_palette_is_lazy_and_restartable() {
        let pairs = sample_pairs();
        let mut rows = evaluate_palette(&pairs);
        assert_eq!(rows.len(), 3);

        let first = rows.next().unwrap();
        let restart = evaluate_palette(&pairs);
        let snapshot = rows.clone();

        assert_eq!(rows.len(), 2);
        assert_eq!(snapshot.count(), 2);
        assert_eq!(restart.map(|r| r.label).collect::<Vec<_>>(), ["X", "Y", "Z"]);
        assert_eq!(first.label, "X");
        assert_eq!(rows.by_ref().count(), 2);
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_empty_palette() {
        assert_eq!(evaluate_palette(&[]).count(), 0);
        let report = PaletteReport::new(&[]);
        assert!(!report.all_good());
        assert_eq!(report.worst_ratio(), None);
    }

    #[test]
    fn test_row_summary() {
        let rows: Vec<_> = evaluate_palette(&sample_pairs()).collect();
        assert_eq!(rows[0].summary(), "X: 17.74 Good");
        assert_eq!(rows[1].summary(), "Y: unavailable");
        assert_eq!(rows[2].summary(), "Z: 2.15 Bad");
    }

    #[test]
    fn test_recommendations() {
        let report = PaletteReport::new(&sample_pairs());
        let recs = report.recommendations();
        assert_eq!(recs, ["Improve contrast for Z (current: 2.15, need: 4.5+)"]);
    }

    #[test]
    fn test_report_queries() {
        let report = PaletteReport::new(&sample_pairs());
        assert_eq!(report.by_verdict(Verdict::Good).len(), 1);
        assert_eq!(report.by_verdict(Verdict::Bad).len(), 1);
        assert_eq!(report.unavailable().len(), 1);
        assert!(!report.all_good());
        let worst = report.worst_ratio().unwrap();
        assert!((worst - 2.15).abs() < 0.01);
    }
}
