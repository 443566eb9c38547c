//! Token types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::models::Span;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Source encoding marker (always first)
    Encoding,
    /// Identifier, including soft keywords such as `match`
    Name,
    /// Hard keyword
    Keyword,
    Number,
    /// Any string literal, prefixes and triple quotes included
    String,
    Op,
    Comment,
    /// End of a logical line
    Newline,
    /// Non-logical line break
    Nl,
    Indent,
    Dedent,
    #[serde(rename = "ENDMARKER")]
    EndMarker,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Encoding => "ENCODING",
            TokenKind::Name => "NAME",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Op => "OP",
            TokenKind::Comment => "COMMENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Nl => "NL",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::EndMarker => "ENDMARKER",
        }
    }

    /// Layout tokens carry whitespace structure rather than program text
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Nl | TokenKind::Indent | TokenKind::Dedent
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of the first character in the snippet
    pub offset: usize,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
            span,
        }
    }
}

/// Complete token sequence for one snippet, ending with ENDMARKER
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStream {
    pub snippet_index: usize,
    pub tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(snippet_index: usize, tokens: Vec<Token>) -> Self {
        Self {
            snippet_index,
            tokens,
        }
    }

    /// `(kind, text)` pairs in text order
    pub fn pairs(&self) -> Vec<(TokenKind, &str)> {
        self.tokens
            .iter()
            .map(|t| (t.kind, t.text.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Count of tokens with the given kind
    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}
