//! Declaration Signatures
//!
//! Read-only projection of a callable declaration: its name, ordered
//! parameter names, and whether it yields a value.

pub mod declaration;

pub use declaration::{parse_declaration, Declaration, DeclarationKind, ParameterDecl};

/// What the validator needs to know about a declaration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureView {
    /// Declaration identifier, used for labeling diagnostics
    pub name: String,
    /// Parameter names in declaration order
    pub parameter_names: Vec<String>,
    /// True iff the declaration yields a non-trivial result
    pub has_return_value: bool,
}

impl SignatureView {
    pub fn new<I, S>(name: impl Into<String>, parameter_names: I, has_return_value: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameter_names: parameter_names.into_iter().map(Into::into).collect(),
            has_return_value,
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_names.len()
    }
}

/// Anything a front end can project into a SignatureView
pub trait Callable {
    fn name(&self) -> &str;
    fn parameter_names(&self) -> Vec<String>;
    fn has_return_value(&self) -> bool;

    fn signature_view(&self) -> SignatureView {
        SignatureView {
            name: self.name().to_string(),
            parameter_names: self.parameter_names(),
            has_return_value: self.has_return_value(),
        }
    }
}

impl Callable for SignatureView {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_names(&self) -> Vec<String> {
        self.parameter_names.clone()
    }

    fn has_return_value(&self) -> bool {
        self.has_return_value
    }

    fn signature_view(&self) -> SignatureView {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_view_new() {
        let view = SignatureView::new("sum", ["avg", "sum"], true);
        assert_eq!(view.name, "sum");
        assert_eq!(view.parameter_names, vec!["avg", "sum"]);
        assert_eq!(view.parameter_count(), 2);
        assert!(view.has_return_value);
    }

    #[test]
    fn test_projection_is_identity_for_views() {
        let view = SignatureView::new("noReturn", ["p1"], false);
        assert_eq!(view.signature_view(), view);
    }
}
