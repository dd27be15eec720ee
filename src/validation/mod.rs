//! Validation Engine
//!
//! Clean separation of documentation checks from comment parsing and
//! source scanning.

pub mod diagnostics;
pub mod engine;

pub use diagnostics::{Diagnostic, DiagnosticCode, Severity};
pub use engine::validate;
