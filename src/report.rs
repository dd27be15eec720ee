//! Report rendering for the command line.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::source::{Finding, LintReport};

/// Findings for one input, labeled with where they came from
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Display path, or "<stdin>"
    pub path: String,
    pub report: LintReport,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    path: &'a str,
    message: String,
    #[serde(flatten)]
    finding: &'a Finding,
}

/// One line per finding: `path:line: severity: message [code]`
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for file in reports {
        for finding in &file.report.findings {
            out.push_str(&format!(
                "{}:{}: {}: {} [{}]\n",
                file.path,
                finding.line,
                finding.severity,
                finding.diagnostic,
                finding.diagnostic.code()
            ));
        }
    }
    out
}

/// A JSON array of findings across all inputs
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    let findings: Vec<JsonFinding<'_>> = reports
        .iter()
        .flat_map(|file| {
            file.report.findings.iter().map(|finding| JsonFinding {
                path: &file.path,
                message: finding.diagnostic.to_string(),
                finding,
            })
        })
        .collect();

    serde_json::to_string_pretty(&findings).context("Failed to serialize findings")
}

/// Total number of findings across all inputs
pub fn finding_count(reports: &[FileReport]) -> usize {
    reports.iter().map(|file| file.report.findings.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Diagnostic, Severity};

    fn sample() -> Vec<FileReport> {
        vec![FileReport {
            path: "Sources/Math.swift".to_string(),
            report: LintReport {
                findings: vec![Finding {
                    line: 7,
                    declaration: "sum".to_string(),
                    severity: Severity::Warning,
                    diagnostic: Diagnostic::ParametersDontMatch {
                        name: "sum".to_string(),
                    },
                }],
            },
        }]
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&sample()),
            "Sources/Math.swift:7: warning: change the parameters of sum's documentation to match its parameters [parametersDontMatch]\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        let first = &json[0];
        assert_eq!(first["path"], "Sources/Math.swift");
        assert_eq!(first["line"], 7);
        assert_eq!(first["severity"], "warning");
        assert_eq!(first["code"], "parametersDontMatch");
        assert_eq!(first["name"], "sum");
    }

    #[test]
    fn test_json_declaration_on_every_finding() {
        let reports = vec![FileReport {
            path: "a.swift".to_string(),
            report: LintReport {
                findings: vec![Finding {
                    line: 3,
                    declaration: "pair".to_string(),
                    severity: Severity::Warning,
                    diagnostic: Diagnostic::UsePluralParameters,
                }],
            },
        }];
        let json: serde_json::Value = serde_json::from_str(&render_json(&reports).unwrap()).unwrap();
        assert_eq!(json[0]["declaration"], "pair");
        assert_eq!(json[0]["code"], "usePluralParameters");
        assert!(json[0].get("name").is_none());
    }

    #[test]
    fn test_empty_reports() {
        assert_eq!(render_text(&[]), "");
        assert_eq!(render_json(&[]).unwrap(), "[]");
        assert_eq!(finding_count(&sample()), 1);
    }
}
