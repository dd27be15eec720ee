//! Source-level linting.
//!
//! Finds `///` comment blocks attached to callable declarations in a
//! source text and runs the documentation rule on each of them.
//!
//! Design goals:
//! - One pass over the lines, no syntax tree.
//! - Declaration headers may span several lines.
//! - Blocks attached to non-callable declarations are skipped.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::RuleConfig;
use crate::parser::CommentParser;
use crate::signature::declaration::is_callable_header;
use crate::signature::{parse_declaration, Callable};
use crate::validation::{validate, Diagnostic, Severity};

static RE_DOC_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*///").unwrap());

static RE_ATTRIBUTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@\w+(?:\([^)]*\))?\s*$").unwrap());

/// Upper bound on lines read for one declaration header
const MAX_HEADER_LINES: usize = 32;

/// A diagnostic located in a source text
///
/// `declaration` is set on every finding. The style diagnostics carry no
/// name of their own, so consumers key on this field rather than on the
/// diagnostic's `name`, which only the name-parameterized codes have.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// 1-based line of the declaration
    pub line: usize,
    /// Declaration name
    pub declaration: String,
    pub severity: Severity,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

/// Findings for one source text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, other: LintReport) {
        self.findings.extend(other.findings);
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }
}

/// A doc comment block and the declaration it is attached to
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentedDeclaration {
    /// Raw comment lines, markers included
    pub comment: String,
    /// Declaration header text, possibly spanning lines
    pub header: String,
    /// 1-based line where the declaration starts
    pub line: usize,
}

/// Collect every callable declaration preceded by a `///` block
pub fn documented_declarations(source: &str) -> Vec<DocumentedDeclaration> {
    let lines: Vec<&str> = source.lines().collect();
    let mut found = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !RE_DOC_LINE.is_match(lines[i]) {
            i += 1;
            continue;
        }

        let block_start = i;
        while i < lines.len() && RE_DOC_LINE.is_match(lines[i]) {
            i += 1;
        }
        let comment = lines[block_start..i].join("\n");

        // Attributes may sit between the comment and the declaration
        let mut decl_idx = i;
        while decl_idx < lines.len()
            && (lines[decl_idx].trim().is_empty() || RE_ATTRIBUTE_LINE.is_match(lines[decl_idx]))
        {
            decl_idx += 1;
        }

        if decl_idx >= lines.len() || RE_DOC_LINE.is_match(lines[decl_idx]) {
            log::trace!("Doc block at line {} has no declaration", block_start + 1);
            i = decl_idx;
            continue;
        }

        if !is_callable_header(lines[decl_idx]) {
            log::trace!(
                "Doc block at line {} documents a non-callable declaration",
                block_start + 1
            );
            i = decl_idx + 1;
            continue;
        }

        let header = read_header(&lines[decl_idx..]);
        found.push(DocumentedDeclaration {
            comment,
            header,
            line: decl_idx + 1,
        });
        i = decl_idx + 1;
    }

    found
}

/// Join lines until the parameter list closes and the header ends
fn read_header(lines: &[&str]) -> String {
    let mut header = String::new();
    let mut depth = 0isize;
    let mut opened = false;

    for (idx, line) in lines.iter().take(MAX_HEADER_LINES).enumerate() {
        if idx > 0 {
            header.push('\n');
        }
        header.push_str(line);

        for ch in line.chars() {
            match ch {
                '(' => {
                    depth += 1;
                    opened = true;
                }
                ')' => depth -= 1,
                _ => {}
            }
        }

        if opened && depth <= 0 {
            let continues = lines.get(idx + 1).is_some_and(|next| {
                let next = next.trim_start();
                next.starts_with("->")
                    || next.starts_with("throws")
                    || next.starts_with("rethrows")
                    || next.starts_with("async")
                    || next.starts_with("where")
            });
            if line.contains('{') || !continues {
                break;
            }
        }
    }

    header
}

/// Lint a whole source text
pub fn lint_source(source: &str, config: &RuleConfig) -> LintReport {
    let parser = CommentParser::new(config.keywords.clone());
    let mut report = LintReport::new();

    for documented in documented_declarations(source) {
        let Some(declaration) = parse_declaration(&documented.header) else {
            log::debug!(
                "Could not read declaration header at line {}",
                documented.line
            );
            continue;
        };

        let comment = parser.parse(&documented.comment);
        let signature = declaration.signature_view();

        for diagnostic in validate(comment.as_ref(), &signature) {
            if !config.is_enabled(diagnostic.code()) {
                continue;
            }
            report.add(Finding {
                line: documented.line,
                declaration: signature.name.clone(),
                severity: config.severity,
                diagnostic,
            });
        }
    }

    report
}
