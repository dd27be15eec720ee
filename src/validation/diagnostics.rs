//! Diagnostic Kinds
//!
//! The closed set of findings the documentation rule can produce.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single documentation/signature inconsistency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "code", rename_all = "camelCase")]
pub enum Diagnostic {
    /// Plural or repeated tags on a one-parameter declaration
    UseSingularParameter,
    /// Singular tags on a declaration with several parameters
    UsePluralParameters,
    /// Documented names differ from the declared ones
    ParametersDontMatch { name: String },
    /// Value-returning declaration lacks a return tag
    DocumentReturnValue { name: String },
    /// Return tag on a declaration that returns nothing
    RemoveReturnComment { name: String },
}

impl Diagnostic {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Diagnostic::UseSingularParameter => DiagnosticCode::UseSingularParameter,
            Diagnostic::UsePluralParameters => DiagnosticCode::UsePluralParameters,
            Diagnostic::ParametersDontMatch { .. } => DiagnosticCode::ParametersDontMatch,
            Diagnostic::DocumentReturnValue { .. } => DiagnosticCode::DocumentReturnValue,
            Diagnostic::RemoveReturnComment { .. } => DiagnosticCode::RemoveReturnComment,
        }
    }

    /// Declaration name carried by name-parameterized diagnostics
    pub fn declaration_name(&self) -> Option<&str> {
        match self {
            Diagnostic::UseSingularParameter | Diagnostic::UsePluralParameters => None,
            Diagnostic::ParametersDontMatch { name }
            | Diagnostic::DocumentReturnValue { name }
            | Diagnostic::RemoveReturnComment { name } => Some(name),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UseSingularParameter => write!(
                f,
                "replace the plural 'Parameters' tag with a singular inline 'Parameter' tag"
            ),
            Diagnostic::UsePluralParameters => write!(
                f,
                "replace the singular 'Parameter' tags with a plural 'Parameters' tag and nest each parameter"
            ),
            Diagnostic::ParametersDontMatch { name } => write!(
                f,
                "change the parameters of {}'s documentation to match its parameters",
                name
            ),
            Diagnostic::DocumentReturnValue { name } => {
                write!(f, "document the return value of {}", name)
            }
            Diagnostic::RemoveReturnComment { name } => write!(
                f,
                "remove the return comment of {}, it doesn't return a value",
                name
            ),
        }
    }
}

/// Stable identifier of a diagnostic kind, used in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticCode {
    UseSingularParameter,
    UsePluralParameters,
    ParametersDontMatch,
    DocumentReturnValue,
    RemoveReturnComment,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UseSingularParameter => "useSingularParameter",
            DiagnosticCode::UsePluralParameters => "usePluralParameters",
            DiagnosticCode::ParametersDontMatch => "parametersDontMatch",
            DiagnosticCode::DocumentReturnValue => "documentReturnValue",
            DiagnosticCode::RemoveReturnComment => "removeReturnComment",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity a finding is reported with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}
