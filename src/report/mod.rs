// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for palette evaluations.
//!
//! Supports multiple output formats:
//! - Text: per-pair ratios and verdicts with numbered recommendations
//! - JSON: palette rows plus fleet findings for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::config::FailOn;
use crate::fleet::{FindingSet, Severity};
use crate::palette::PaletteReport;
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

/// Generate a report for one or more evaluated palettes.
///
/// The overall result follows `fail_on`, the same policy that decides the
/// CLI exit status.
pub fn generate_report(reports: &[PaletteReport], format: OutputFormat, fail_on: FailOn) -> String {
    let mut findings = FindingSet::new();
    for report in reports {
        findings.extend(FindingSet::from_report(report).findings);
    }

    match format {
        OutputFormat::Text => generate_text_report(reports, &findings, fail_on),
        OutputFormat::Json => generate_json_report(reports, &findings, fail_on),
        OutputFormat::Sarif => generate_sarif_report(&findings),
    }
}

/// Generate human-readable text report
fn generate_text_report(reports: &[PaletteReport], findings: &FindingSet, fail_on: FailOn) -> String {
    let mut output = String::new();

    output.push_str("=== Contrastbot Color Contrast Report ===\n");

    if reports.is_empty() {
        output.push_str("\nNo themes evaluated.\n");
        return output;
    }

    for report in reports {
        output.push('\n');
        match &report.source {
            Some(path) => output.push_str(&format!("Theme: {}\n", path.display())),
            None => output.push_str("Palette\n"),
        }

        for row in &report.rows {
            output.push_str(&format!("  {}\n", row.summary()));
        }

        output.push_str("Recommendations:\n");
        let recommendations = report.recommendations();
        if recommendations.is_empty() {
            output.push_str("  All color combinations have good contrast!\n");
        } else {
            for (i, rec) in recommendations.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, rec));
            }
        }
    }

    output.push('\n');
    if fail_on.trips(reports) {
        output.push_str(&format!("RESULT: FAIL (fail_on = {})\n", fail_on));
    } else if !findings.is_empty() {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    failed: bool,
    palettes: &'a [PaletteReport],
    findings: &'a FindingSet,
}

/// Generate JSON report
fn generate_json_report(reports: &[PaletteReport], findings: &FindingSet, fail_on: FailOn) -> String {
    let report = JsonReport {
        failed: fail_on.trips(reports),
        palettes: reports,
        findings,
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

/// Generate SARIF report
fn generate_sarif_report(findings: &FindingSet) -> String {
    let results: Vec<SarifResult> = findings.findings.iter().map(|f| {
        let level = match f.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "note",
        };

        let locations = f
            .file
            .iter()
            .map(|file| SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: file.display().to_string(),
                    },
                },
            })
            .collect();

        SarifResult {
            rule_id: f.rule_id.clone(),
            level: level.to_string(),
            message: SarifMessage { text: f.message.clone() },
            locations,
        }
    }).collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "contrastbot".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}
