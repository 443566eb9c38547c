//! Lexical error types

use serde::Serialize;
use thiserror::Error;

/// Reason the lexer could not continue
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexErrorKind {
    #[error("invalid UTF-8 byte sequence")]
    InvalidUtf8,

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("EOF in multi-line string")]
    UnterminatedTripleQuotedString,

    #[error("EOF in multi-line statement")]
    EofInMultiLineStatement,

    #[error("unindent does not match any outer indentation level")]
    InconsistentDedent,

    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("unexpected character after line continuation character")]
    StrayBackslash,
}

/// Lexer failure with snippet index and byte offset
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Lex error in snippet {snippet_index} at byte {offset}: {kind}")]
pub struct LexError {
    pub snippet_index: usize,
    pub offset: usize,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(snippet_index: usize, offset: usize, kind: LexErrorKind) -> Self {
        Self {
            snippet_index,
            offset,
            kind,
        }
    }
}
