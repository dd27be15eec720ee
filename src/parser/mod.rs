//! Doc Comment Parser
//!
//! Turns a raw documentation comment block into a structural model.
//! Performs no cross-checking against the declaration it documents.

pub mod ast;
pub mod lexer;

pub use ast::{DocComment, ParamEntry, ParameterSection};
pub use lexer::{tokenize_comment, TagKeywords, TagKind, Token, TokenKind};

/// Comment parser bound to a set of tag keywords
#[derive(Debug, Clone, Default)]
pub struct CommentParser {
    keywords: TagKeywords,
}

impl CommentParser {
    pub fn new(keywords: TagKeywords) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &TagKeywords {
        &self.keywords
    }

    /// Parse a raw comment block.
    ///
    /// Returns `None` when the raw text holds no non-blank line, meaning no
    /// documentation is attached. A block of bare `///` markers is present
    /// but empty. Unrecognized tag syntax never fails; it
    /// is kept as plain prose.
    pub fn parse(&self, raw: &str) -> Option<DocComment> {
        if raw.trim().is_empty() {
            return None;
        }
        let tokens = lexer::tokenize_comment(raw, &self.keywords);
        Some(ast::tokens_to_doc_comment(tokens))
    }
}

/// Parse a raw comment block with the default keywords
/// (`Parameter`, `Parameters`, `Returns`).
pub fn parse_comment(raw: &str) -> Option<DocComment> {
    CommentParser::default().parse(raw)
}
