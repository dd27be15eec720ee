//! Documentation Comment Model
//!
//! Typed representation of a parsed doc comment and the assembly of
//! lexer tokens into it. No signature checks here - pure structure.

use crate::parser::lexer::{TagKind, Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

static RE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\s:]+)\s*:\s*(.*)$").unwrap());

/// A parsed documentation comment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocComment {
    /// Text preceding the first tag line
    pub summary: String,
    pub parameters: ParameterSection,
    /// Description of the return tag, if one is present
    pub returns: Option<String>,
    /// Untagged prose following the first tag line
    pub discussion: Vec<String>,
}

impl DocComment {
    /// True when no parameter or return tag is present at all.
    /// Such comments are exempt from tag-level checks.
    pub fn is_omission(&self) -> bool {
        self.parameters == ParameterSection::None && self.returns.is_none()
    }
}

/// The parameter documentation of a comment, keyed by tag style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParameterSection {
    #[default]
    None,
    /// Exactly one `- Parameter name: ...` entry
    Singular(ParamEntry),
    /// Two or more singular-keyword entries
    SingularRepeated(Vec<ParamEntry>),
    /// A `- Parameters:` header with nested entries
    PluralBlock(Vec<ParamEntry>),
}

impl ParameterSection {
    /// Documented entries in document order
    pub fn entries(&self) -> &[ParamEntry] {
        match self {
            ParameterSection::None => &[],
            ParameterSection::Singular(entry) => std::slice::from_ref(entry),
            ParameterSection::SingularRepeated(entries) | ParameterSection::PluralBlock(entries) => {
                entries
            }
        }
    }

    /// Documented parameter names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries().iter().map(|entry| entry.name.as_str())
    }
}

/// A single `name: description` parameter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamEntry {
    pub name: String,
    pub description: String,
}

impl ParamEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Parse "name: description" into an entry
pub fn parse_entry(text: &str) -> Option<ParamEntry> {
    let caps = RE_ENTRY.captures(text.trim())?;
    Some(ParamEntry::new(&caps[1], caps[2].trim()))
}

/// Where continuation lines are appended
#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    Entry(usize),
    Returns,
}

/// The tag line whose indented block is currently open
#[derive(Debug, Clone)]
struct OpenTag {
    kind: TagKind,
    indent: usize,
    /// Entry count when the tag opened, to detect singular tags with no entry
    first_entry: usize,
    /// Original line text, kept in case the tag degrades to prose
    text: String,
}

/// Incremental builder for a DocComment
#[derive(Debug, Default)]
struct Assembler {
    summary: Vec<String>,
    discussion: Vec<String>,
    entries: Vec<ParamEntry>,
    plural: bool,
    returns: Option<String>,
    tagged: bool,
    open: Option<OpenTag>,
    target: Option<Target>,
}

impl Assembler {
    fn push(&mut self, token: Token) {
        match token.kind {
            TokenKind::Blank => {}
            TokenKind::Tag { kind, rest } => {
                if self.is_nested(token.indent) && self.open_is_parameter() {
                    self.push_item(&token.text);
                } else {
                    self.open_tag(kind, rest, token.indent, token.text);
                }
            }
            TokenKind::Item => {
                if self.is_nested(token.indent) {
                    self.push_item(&token.text);
                } else {
                    self.close_tag();
                    self.push_prose(format!("- {}", token.text));
                }
            }
            TokenKind::Text => {
                if self.is_nested(token.indent) {
                    self.continue_description(&token.text);
                } else {
                    self.close_tag();
                    self.push_prose(token.text);
                }
            }
        }
    }

    fn is_nested(&self, indent: usize) -> bool {
        self.open.as_ref().is_some_and(|open| indent > open.indent)
    }

    fn open_is_parameter(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.kind != TagKind::Returns)
    }

    fn open_tag(&mut self, kind: TagKind, rest: String, indent: usize, text: String) {
        self.close_tag();

        let first_entry = self.entries.len();
        self.target = None;

        match kind {
            TagKind::Parameters => {
                self.plural = true;
                self.tagged = true;
                if let Some(entry) = parse_entry(&rest) {
                    self.entries.push(entry);
                    self.target = Some(Target::Entry(self.entries.len() - 1));
                }
            }
            TagKind::Parameter => {
                // Only confirmed as a tag once it yields an entry
                if let Some(entry) = parse_entry(&rest) {
                    self.tagged = true;
                    self.entries.push(entry);
                    self.target = Some(Target::Entry(self.entries.len() - 1));
                }
            }
            TagKind::Returns => {
                self.tagged = true;
                if self.returns.is_none() {
                    self.returns = Some(rest);
                    self.target = Some(Target::Returns);
                }
            }
        }

        self.open = Some(OpenTag {
            kind,
            indent,
            first_entry,
            text,
        });
    }

    fn close_tag(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        self.target = None;

        if open.kind == TagKind::Parameter && self.entries.len() == open.first_entry {
            self.push_prose(format!("- {}", open.text));
        }
    }

    fn push_item(&mut self, text: &str) {
        let Some(kind) = self.open.as_ref().map(|open| open.kind) else {
            return;
        };

        if kind == TagKind::Returns {
            self.continue_description(text);
            return;
        }

        match parse_entry(text) {
            Some(entry) => {
                if kind == TagKind::Parameter {
                    self.tagged = true;
                }
                self.entries.push(entry);
                self.target = Some(Target::Entry(self.entries.len() - 1));
            }
            None => self.target = None,
        }
    }

    fn continue_description(&mut self, text: &str) {
        let Some(target) = self.target else {
            return;
        };
        let description = match target {
            Target::Entry(idx) => &mut self.entries[idx].description,
            Target::Returns => match self.returns.as_mut() {
                Some(returns) => returns,
                None => return,
            },
        };

        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(text);
    }

    fn push_prose(&mut self, text: String) {
        if self.tagged {
            self.discussion.push(text);
        } else {
            self.summary.push(text);
        }
    }

    fn finish(mut self) -> DocComment {
        self.close_tag();

        let parameters = if self.plural {
            ParameterSection::PluralBlock(self.entries)
        } else {
            let mut entries = self.entries;
            match entries.len() {
                0 => ParameterSection::None,
                1 => ParameterSection::Singular(entries.remove(0)),
                _ => ParameterSection::SingularRepeated(entries),
            }
        };

        DocComment {
            summary: self.summary.join("\n"),
            parameters,
            returns: self.returns,
            discussion: self.discussion,
        }
    }
}

/// Assemble lexer tokens into a DocComment
pub fn tokens_to_doc_comment(tokens: Vec<Token>) -> DocComment {
    let mut assembler = Assembler::default();
    for token in tokens {
        assembler.push(token);
    }
    assembler.finish()
}
