//! Validation Engine
//!
//! Decides whether a doc comment correctly describes a signature.
//! Pure and total: no I/O, no shared state, never fails.

use crate::parser::{DocComment, ParamEntry, ParameterSection};
use crate::signature::SignatureView;
use crate::validation::diagnostics::Diagnostic;

/// Parameter count classes the style rules distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Zero,
    One,
    Many,
}

impl Arity {
    fn of(signature: &SignatureView) -> Self {
        match signature.parameter_count() {
            0 => Arity::Zero,
            1 => Arity::One,
            _ => Arity::Many,
        }
    }
}

/// Validate a declaration's documentation against its signature.
///
/// An absent comment, or one with neither parameter nor return tags,
/// yields no diagnostics. Otherwise the parameter check runs before the
/// return check and each contributes at most one diagnostic.
pub fn validate(comment: Option<&DocComment>, signature: &SignatureView) -> Vec<Diagnostic> {
    let Some(comment) = comment else {
        return Vec::new();
    };

    if comment.is_omission() {
        log::trace!("{}: tags omitted, skipping", signature.name);
        return Vec::new();
    }

    let mut diagnostics = Vec::new();
    diagnostics.extend(check_parameters(&comment.parameters, signature));
    diagnostics.extend(check_returns(comment.returns.as_deref(), signature));

    log::debug!(
        "{}: {} diagnostic(s) for {} parameter(s)",
        signature.name,
        diagnostics.len(),
        signature.parameter_count()
    );

    diagnostics
}

/// Check the parameter section's tag style and documented names
fn check_parameters(section: &ParameterSection, signature: &SignatureView) -> Option<Diagnostic> {
    let mismatch = || Diagnostic::ParametersDontMatch {
        name: signature.name.clone(),
    };

    match (Arity::of(signature), section) {
        (_, ParameterSection::None) => None,

        (Arity::One, ParameterSection::Singular(entry)) => {
            (entry.name != signature.parameter_names[0]).then(mismatch)
        }
        (Arity::One, ParameterSection::SingularRepeated(_) | ParameterSection::PluralBlock(_)) => {
            Some(Diagnostic::UseSingularParameter)
        }

        (Arity::Many, ParameterSection::Singular(_) | ParameterSection::SingularRepeated(_)) => {
            Some(Diagnostic::UsePluralParameters)
        }
        (Arity::Many, ParameterSection::PluralBlock(entries)) => {
            (!names_match(entries, &signature.parameter_names)).then(mismatch)
        }

        (
            Arity::Zero,
            ParameterSection::Singular(_)
            | ParameterSection::SingularRepeated(_)
            | ParameterSection::PluralBlock(_),
        ) => (!names_match(section.entries(), &signature.parameter_names)).then(mismatch),
    }
}

/// Check return tag presence against return value presence
fn check_returns(returns: Option<&str>, signature: &SignatureView) -> Option<Diagnostic> {
    match (signature.has_return_value, returns) {
        (true, None) => Some(Diagnostic::DocumentReturnValue {
            name: signature.name.clone(),
        }),
        (false, Some(_)) => Some(Diagnostic::RemoveReturnComment {
            name: signature.name.clone(),
        }),
        _ => None,
    }
}

/// Element-for-element, order-sensitive name comparison
fn names_match(entries: &[ParamEntry], actual: &[String]) -> bool {
    entries.len() == actual.len()
        && entries
            .iter()
            .zip(actual)
            .all(|(entry, name)| entry.name == *name)
}
