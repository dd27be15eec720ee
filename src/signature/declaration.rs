//! Declaration Header Reader
//!
//! Minimal reader for callable declaration headers (`func`, `init`,
//! `subscript`). Only extracts what a SignatureView needs; bodies and
//! types are never interpreted.

use super::Callable;
use regex::Regex;
use std::sync::LazyLock;

static RE_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:@\w+(?:\([^)]*\))?|[a-z]+(?:\([a-z]+\))?)\s+)*(?:func\s+(?P<name>[^\s(<]+)|(?P<init>init\b)[?!]?|(?P<subscript>subscript\b))",
    )
    .unwrap()
});

/// Kind of callable declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Function,
    Initializer,
    Subscript,
}

/// One declared parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    /// External argument label, if distinct from the name
    pub label: Option<String>,
    /// Internal name, the one documentation refers to
    pub name: String,
    pub type_annotation: String,
}

/// A parsed callable declaration header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub parameters: Vec<ParameterDecl>,
    /// Text of the return clause without the arrow
    pub return_type: Option<String>,
}

impl Callable for Declaration {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_names(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.name.clone()).collect()
    }

    fn has_return_value(&self) -> bool {
        match self.kind {
            DeclarationKind::Initializer => false,
            DeclarationKind::Function | DeclarationKind::Subscript => self
                .return_type
                .as_deref()
                .is_some_and(|ty| !is_void(ty)),
        }
    }
}

/// Check whether a header starts a callable declaration
pub fn is_callable_header(line: &str) -> bool {
    RE_HEAD.is_match(line)
}

/// Parse a declaration header such as `func sum(avg: Int, sum: Int) -> Int {`.
///
/// The header may span several lines. Returns `None` when the text does
/// not start a callable declaration or its parameter list is unterminated.
pub fn parse_declaration(header: &str) -> Option<Declaration> {
    let caps = RE_HEAD.captures(header)?;

    let (kind, name) = if let Some(name) = caps.name("name") {
        (DeclarationKind::Function, name.as_str())
    } else if caps.name("init").is_some() {
        (DeclarationKind::Initializer, "init")
    } else {
        (DeclarationKind::Subscript, "subscript")
    };

    let rest = &header[caps.get(0)?.end()..];
    let rest = skip_generic_clause(rest)?;
    let rest = rest.trim_start().strip_prefix('(')?;
    let close = find_closing_paren(rest)?;

    let parameters = split_top_level(&rest[..close], ',')
        .into_iter()
        .filter_map(parse_parameter)
        .collect();
    let return_type = parse_return_clause(&rest[close + 1..]);

    Some(Declaration {
        kind,
        name: name.to_string(),
        parameters,
        return_type,
    })
}

/// Skip a `<...>` generic parameter clause if one is present
fn skip_generic_clause(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('<') {
        return Some(trimmed);
    }

    let mut depth = 0usize;
    let mut prev = '\0';
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' if prev != '-' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&trimmed[idx + 1..]);
                }
            }
            _ => {}
        }
        prev = ch;
    }
    None
}

/// Byte index of the `)` closing a list whose `(` was already consumed
fn find_closing_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut prev = '\0';

    for (idx, ch) in text.char_indices() {
        if in_string {
            if ch == '"' && prev != '\\' {
                in_string = false;
            }
        } else {
            match ch {
                '"' => in_string = true,
                '(' => depth += 1,
                ')' if depth == 0 => return Some(idx),
                ')' => depth -= 1,
                _ => {}
            }
        }
        prev = ch;
    }
    None
}

/// Split on `separator` where it is not nested in brackets or strings
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut prev = '\0';
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if ch == '"' && prev != '\\' {
                in_string = false;
            }
        } else {
            match ch {
                '"' => in_string = true,
                '(' | '[' | '<' | '{' => depth += 1,
                '>' if prev == '-' => {}
                ')' | ']' | '>' | '}' => depth = depth.saturating_sub(1),
                c if c == separator && depth == 0 => {
                    parts.push(&text[start..idx]);
                    start = idx + c.len_utf8();
                }
                _ => {}
            }
        }
        prev = ch;
    }
    parts.push(&text[start..]);
    parts
}

/// Parse `label name: Type = default` into a parameter
fn parse_parameter(text: &str) -> Option<ParameterDecl> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (names, annotation) = text.split_once(':')?;
    let words: Vec<&str> = names.split_whitespace().collect();
    let (label, name) = match words.as_slice() {
        [] => return None,
        [name] => (None, *name),
        [.., label, name] => {
            let label = (*label != "_").then(|| strip_backticks(label).to_string());
            (label, *name)
        }
    };

    let type_annotation = split_top_level(annotation, '=')
        .first()
        .map_or("", |ty| ty.trim())
        .to_string();

    Some(ParameterDecl {
        label,
        name: strip_backticks(name).to_string(),
        type_annotation,
    })
}

/// Read `-> Type` from the text following the parameter list
fn parse_return_clause(text: &str) -> Option<String> {
    let head = text.split('{').next().unwrap_or("");
    let (_, ty) = head.split_once("->")?;
    let ty = ty
        .split_whitespace()
        .take_while(|word| *word != "where")
        .collect::<Vec<_>>()
        .join(" ");
    (!ty.is_empty()).then_some(ty)
}

fn strip_backticks(name: &str) -> &str {
    name.trim_matches('`')
}

fn is_void(ty: &str) -> bool {
    matches!(ty.trim(), "Void" | "()" | "Swift.Void")
}
