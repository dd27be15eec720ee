//! Documentation Comment Linter
//!
//! Checks that a declaration's doc comment correctly and minimally
//! describes its signature.
//!
//! This library provides:
//! - Doc comment parsing into a typed model
//! - Signature projection of callable declarations
//! - The validation rule and its diagnostics
//! - Source scanning, reporting and configuration for the CLI

pub mod config;
pub mod parser;
pub mod report;
pub mod runner;
pub mod signature;
pub mod source;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, RuleConfig};
pub use parser::{parse_comment, CommentParser, DocComment, ParamEntry, ParameterSection};
pub use signature::{Callable, SignatureView};
pub use source::{lint_source, Finding, LintReport};
pub use validation::{validate, Diagnostic, DiagnosticCode, Severity};
