//! Command-line driver.
//!
//! Expands input patterns, lints every file on its own task, and prints
//! the combined report.

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::{Config, OutputFormat, RuleConfig};
use crate::report::{self, FileReport};
use crate::source::lint_source;

/// Expand glob patterns into a sorted, de-duplicated file list
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern).with_context(|| format!("invalid pattern: {}", pattern))? {
            let path = entry.with_context(|| format!("failed to read match for {}", pattern))?;
            if path.is_file() {
                files.push(path);
                matched = true;
            }
        }
        if !matched {
            log::warn!("No files matched {}", pattern);
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Lint files concurrently, one task per file.
///
/// Reports come back in input order. Unreadable files are logged and skipped.
pub async fn lint_files(paths: Vec<PathBuf>, rule: Arc<RuleConfig>) -> Result<Vec<FileReport>> {
    let mut tasks = JoinSet::new();

    for (index, path) in paths.into_iter().enumerate() {
        let rule = Arc::clone(&rule);
        tasks.spawn(async move {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    return None;
                }
            };
            let report = lint_source(&content, &rule);
            log::debug!(
                "{}: {} finding(s)",
                path.display(),
                report.findings.len()
            );
            Some((
                index,
                FileReport {
                    path: path.display().to_string(),
                    report,
                },
            ))
        });
    }

    let mut reports = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        if let Some(report) = joined.context("lint task failed")? {
            reports.push(report);
        }
    }
    reports.sort_by_key(|(index, _)| *index);

    Ok(reports.into_iter().map(|(_, report)| report).collect())
}

/// Run the linter with a resolved configuration.
///
/// Returns `true` when the run should exit successfully.
pub async fn run(config: Config) -> Result<bool> {
    let reports = if config.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        vec![FileReport {
            path: "<stdin>".to_string(),
            report: lint_source(&input, &config.rule),
        }]
    } else {
        let paths = expand_inputs(&config.files)?;
        log::info!("Linting {} file(s)", paths.len());
        lint_files(paths, Arc::new(config.rule.clone())).await?
    };

    match config.format {
        OutputFormat::Text => print!("{}", report::render_text(&reports)),
        OutputFormat::Json => println!("{}", report::render_json(&reports)?),
    }

    let findings = report::finding_count(&reports);
    let has_errors = reports.iter().any(|file| file.report.has_errors());
    log::info!("{} finding(s) in {} input(s)", findings, reports.len());

    Ok(!has_errors && !(config.deny_warnings && findings > 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_inputs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.swift"), "").unwrap();
        fs::write(dir.path().join("a.swift"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let pattern = format!("{}/*.swift", dir.path().display());
        let files = expand_inputs(&[pattern.clone(), pattern]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.swift", "b.swift"]);
    }

    #[tokio::test]
    async fn test_lint_files_preserves_order() {
        let dir = TempDir::new().unwrap();
        let clean = dir.path().join("clean.swift");
        let noisy = dir.path().join("noisy.swift");
        fs::write(&clean, "/// Summary.\nfunc f(a: Int) {}\n").unwrap();
        fs::write(&noisy, "/// - Returns: x\nfunc g() {}\n").unwrap();

        let reports = lint_files(
            vec![noisy.clone(), clean.clone(), dir.path().join("missing.swift")],
            Arc::new(RuleConfig::default()),
        )
        .await
        .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].path, noisy.display().to_string());
        assert_eq!(reports[0].report.findings.len(), 1);
        assert!(reports[1].report.is_clean());
    }
}
