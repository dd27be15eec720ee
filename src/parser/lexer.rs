//! Doc Comment Lexer
//!
//! Line-level classification of a documentation comment block.
//! Each line becomes exactly one token; no model assembly happens here.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static RE_DOC_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*///").unwrap());

static RE_DASH_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-(?:\s+(.*))?$").unwrap());

/// Keywords that introduce structural tag lines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagKeywords {
    /// Singular parameter keyword (e.g. "Parameter")
    pub parameter: String,
    /// Plural parameter header keyword (e.g. "Parameters")
    pub parameters: String,
    /// Return keyword (e.g. "Returns")
    pub returns: String,
}

impl Default for TagKeywords {
    fn default() -> Self {
        Self {
            parameter: "Parameter".to_string(),
            parameters: "Parameters".to_string(),
            returns: "Returns".to_string(),
        }
    }
}

impl TagKeywords {
    /// Match a word against the keywords, ignoring case
    pub fn classify(&self, word: &str) -> Option<TagKind> {
        let word = word.to_lowercase();
        if word == self.parameters.to_lowercase() {
            Some(TagKind::Parameters)
        } else if word == self.parameter.to_lowercase() {
            Some(TagKind::Parameter)
        } else if word == self.returns.to_lowercase() {
            Some(TagKind::Returns)
        } else {
            None
        }
    }
}

/// Which keyword a tag line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Singular form, one parameter per tag
    Parameter,
    /// Plural header followed by a nested list
    Parameters,
    Returns,
}

/// Token types in a doc comment
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A dash line starting with a recognized keyword.
    /// `rest` is whatever follows the keyword, without a leading colon.
    Tag { kind: TagKind, rest: String },
    /// Any other dash line
    Item,
    /// A non-blank line that is not a dash line
    Text,
    Blank,
}

/// One classified comment line
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Leading whitespace width after the comment marker is removed
    pub indent: usize,
    /// Line content after the dash for dash lines, trimmed text otherwise
    pub text: String,
}

/// Tokenize a raw comment block, one token per line
pub fn tokenize_comment(raw: &str, keywords: &TagKeywords) -> Vec<Token> {
    raw.lines().map(|line| tokenize_line(line, keywords)).collect()
}

/// Classify a single comment line
pub fn tokenize_line(line: &str, keywords: &TagKeywords) -> Token {
    let body = strip_doc_marker(line);
    let trimmed = body.trim_start();
    let indent = body.chars().count() - trimmed.chars().count();
    let trimmed = trimmed.trim_end();

    if trimmed.is_empty() {
        return Token {
            kind: TokenKind::Blank,
            indent,
            text: String::new(),
        };
    }

    let Some(caps) = RE_DASH_LINE.captures(trimmed) else {
        return Token {
            kind: TokenKind::Text,
            indent,
            text: trimmed.to_string(),
        };
    };

    let content = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
    let kind = match split_keyword(&content, keywords) {
        Some((kind, rest)) => TokenKind::Tag { kind, rest },
        None => TokenKind::Item,
    };

    Token {
        kind,
        indent,
        text: content,
    }
}

/// Remove a leading `///` marker and at most one following space
fn strip_doc_marker(line: &str) -> &str {
    match RE_DOC_MARKER.find(line) {
        Some(m) => {
            let rest = &line[m.end()..];
            rest.strip_prefix(' ').unwrap_or(rest)
        }
        None => line,
    }
}

/// Split "Keyword: rest" into the tag kind and the remainder
fn split_keyword(content: &str, keywords: &TagKeywords) -> Option<(TagKind, String)> {
    let end = content
        .find(|c: char| c.is_whitespace() || c == ':')
        .unwrap_or(content.len());
    let kind = keywords.classify(&content[..end])?;

    let rest = content[end..].trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest).trim();
    Some((kind, rest.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(line: &str) -> Token {
        tokenize_line(line, &TagKeywords::default())
    }

    #[test]
    fn test_plural_header() {
        let token = lex("/// - Parameters:");
        assert_eq!(
            token.kind,
            TokenKind::Tag {
                kind: TagKind::Parameters,
                rest: String::new()
            }
        );
        assert_eq!(token.indent, 0);
    }

    #[test]
    fn test_singular_inline() {
        let token = lex("/// - Parameter command: The command to run.");
        assert_eq!(
            token.kind,
            TokenKind::Tag {
                kind: TagKind::Parameter,
                rest: "command: The command to run.".to_string()
            }
        );
    }

    #[test]
    fn test_plural_without_colon_keeps_entry_text() {
        let token = lex("/// - Parameters singular: singular description.");
        assert_eq!(
            token.kind,
            TokenKind::Tag {
                kind: TagKind::Parameters,
                rest: "singular: singular description.".to_string()
            }
        );
    }

    #[test]
    fn test_keywords_ignore_case() {
        let token = lex("- returns: a value");
        assert!(matches!(
            token.kind,
            TokenKind::Tag {
                kind: TagKind::Returns,
                ..
            }
        ));
    }

    #[test]
    fn test_keyword_must_be_whole_word() {
        let token = lex("/// - Parametersfoo: nope");
        assert_eq!(token.kind, TokenKind::Item);
        assert_eq!(token.text, "Parametersfoo: nope");
    }

    #[test]
    fn test_nested_item_indent() {
        let token = lex("///   - stdin: The string to use as standard input.");
        assert_eq!(token.kind, TokenKind::Item);
        assert_eq!(token.indent, 2);
        assert_eq!(token.text, "stdin: The string to use as standard input.");
    }

    #[test]
    fn test_text_and_blank() {
        let text = lex("/// One sentence summary.");
        assert_eq!(text.kind, TokenKind::Text);
        assert_eq!(text.text, "One sentence summary.");

        assert_eq!(lex("///").kind, TokenKind::Blank);
        assert_eq!(lex("   ").kind, TokenKind::Blank);
    }

    #[test]
    fn test_dash_without_space_is_text() {
        let token = lex("/// -Parameters:");
        assert_eq!(token.kind, TokenKind::Text);
    }

    #[test]
    fn test_custom_keywords() {
        let keywords = TagKeywords {
            parameter: "Arg".to_string(),
            parameters: "Args".to_string(),
            returns: "Yields".to_string(),
        };
        let token = tokenize_line("- Args:", &keywords);
        assert!(matches!(
            token.kind,
            TokenKind::Tag {
                kind: TagKind::Parameters,
                ..
            }
        ));
        let token = tokenize_line("- Parameters:", &keywords);
        assert_eq!(token.kind, TokenKind::Item);
    }
}
