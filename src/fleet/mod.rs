// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fleet integration types for gitbot-fleet shared-context compatibility.
//!
//! Palette rows that fall short of AA are turned into findings the fleet
//! coordinator can consume alongside other bots' output.

use crate::contrast::{Verdict, AA_NORMAL_TEXT, MARGINAL_THRESHOLD};
use crate::palette::{PaletteReport, PaletteRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Severity levels for findings (mirrors gitbot-shared-context::Severity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Critical issue - blocks release
    Error,
    /// Should be addressed
    Warning,
    /// Informational
    Info,
}

impl Severity {
    /// Whether this severity blocks releases
    pub fn blocks_release(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// A finding from a contrast evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Unique identifier
    pub id: Uuid,
    /// Source bot identifier
    pub source: String,
    /// Rule/check identifier (e.g., "WCAG-1.4.3-contrast-bad")
    pub rule_id: String,
    /// Severity level
    pub severity: Severity,
    /// Detailed message
    pub message: String,
    /// Theme file the pair came from
    pub file: Option<PathBuf>,
    /// Pair label, e.g. "Text on Background"
    pub pair: Option<String>,
    /// Computed ratio, absent when a color was unparsable
    pub ratio: Option<f64>,
    /// Suggested fix
    pub suggestion: Option<String>,
    /// When this finding was created
    pub created_at: DateTime<Utc>,
    /// WCAG criterion reference
    pub wcag_criterion: Option<String>,
}

impl Finding {
    /// Create a new finding
    pub fn new(rule_id: &str, severity: Severity, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: "contrastbot".to_string(),
            rule_id: rule_id.to_string(),
            severity,
            message: message.to_string(),
            file: None,
            pair: None,
            ratio: None,
            suggestion: None,
            created_at: Utc::now(),
            wcag_criterion: None,
        }
    }

    pub fn with_wcag(mut self, criterion: &str) -> Self {
        self.wcag_criterion = Some(criterion.to_string());
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_pair(mut self, label: &str) -> Self {
        self.pair = Some(label.to_string());
        self
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    /// Build the finding for a palette row, if the row needs one
    pub fn from_row(row: &PaletteRow) -> Option<Self> {
        let finding = match (row.ratio, row.verdict) {
            (Some(_), Some(Verdict::Good)) => return None,
            (Some(ratio), Some(Verdict::Poor)) => Finding::new(
                "WCAG-1.4.3-contrast-poor",
                Severity::Warning,
                &format!(
                    "{}: contrast ratio {:.2}:1 is below the AA minimum ({}:1) for normal text",
                    row.label, ratio, AA_NORMAL_TEXT
                ),
            )
            .with_wcag("1.4.3")
            .with_ratio(ratio),
            (Some(ratio), _) => Finding::new(
                "WCAG-1.4.3-contrast-bad",
                Severity::Error,
                &format!(
                    "{}: contrast ratio {:.2}:1 is below {}:1 and fails even for large text",
                    row.label, ratio, MARGINAL_THRESHOLD
                ),
            )
            .with_wcag("1.4.3")
            .with_ratio(ratio),
            (None, _) => Finding::new(
                "contrast-unavailable",
                Severity::Info,
                &format!(
                    "{}: contrast unavailable ({:?} on {:?} is not a #RRGGBB pair)",
                    row.label, row.foreground, row.background
                ),
            )
            .with_suggestion("Set both colors to 6-digit hex values"),
        };

        let finding = finding.with_pair(&row.label);
        Some(match row.recommendation() {
            Some(rec) => finding.with_suggestion(&rec),
            None => finding,
        })
    }

    /// Get location string for display
    pub fn location_string(&self) -> String {
        match (&self.file, &self.pair) {
            (Some(f), Some(p)) => format!("{} ({})", f.display(), p),
            (Some(f), None) => f.display().to_string(),
            (None, Some(p)) => p.clone(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}

/// A collection of findings with aggregation methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    /// All findings
    pub findings: Vec<Finding>,
}

impl FindingSet {
    /// Create empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings for every row of a palette report that falls short of AA
    pub fn from_report(report: &PaletteReport) -> Self {
        let mut set = Self::new();
        for row in &report.rows {
            if let Some(finding) = Finding::from_row(row) {
                let finding = match &report.source {
                    Some(path) => finding.with_file(path.clone()),
                    None => finding,
                };
                set.add(finding);
            }
        }
        set
    }

    /// Add a finding
    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Extend with findings from an iterator
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// Get findings by severity
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.severity == severity).collect()
    }

    /// Get all errors
    pub fn errors(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Error)
    }

    /// Get all warnings
    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Warning)
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Check if release should be blocked
    pub fn blocks_release(&self) -> bool {
        self.findings.iter().any(|f| f.severity.blocks_release())
    }

    /// Total count
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorPair;

    fn report() -> PaletteReport {
        PaletteReport::new(&[
            ColorPair::new("Text on Background", "#111827", "#ffffff"),
            ColorPair::new("Primary on Background", "#ff0000", "#ffffff"),
            ColorPair::new("Accent on Background", "#f59e0b", "#ffffff"),
            ColorPair::new("Secondary on Background", "", "#ffffff"),
        ])
        .with_source(PathBuf::from("themes/storefront.json"))
    }

    #[test]
    fn test_findings_from_report() {
        let findings = FindingSet::from_report(&report());
        assert_eq!(findings.len(), 3);
        assert_eq!(findings.errors().len(), 1);
        assert_eq!(findings.warnings().len(), 1);
        assert_eq!(findings.by_severity(Severity::Info).len(), 1);
        assert!(findings.blocks_release());

        let error = findings.errors()[0];
        assert_eq!(error.rule_id, "WCAG-1.4.3-contrast-bad");
        assert_eq!(error.pair.as_deref(), Some("Accent on Background"));
        assert_eq!(
            error.suggestion.as_deref(),
            Some("Improve contrast for Accent on Background (current: 2.15, need: 4.5+)")
        );
        assert_eq!(
            error.location_string(),
            "themes/storefront.json (Accent on Background)"
        );
    }

    #[test]
    fn test_good_row_has_no_finding() {
        let row = PaletteRow::evaluate(&ColorPair::new("Text", "#000000", "#ffffff"));
        assert!(Finding::from_row(&row).is_none());
    }

    #[test]
    fn test_unavailable_is_not_an_error() {
        let row = PaletteRow::evaluate(&ColorPair::new("Text", "#xyz123", "#ffffff"));
        let finding = Finding::from_row(&row).unwrap();
        assert_eq!(finding.severity, Severity::Info);
        assert_eq!(finding.ratio, None);
        assert!(!finding.severity.blocks_release());
    }
}
