//! Lexical Feature - Python tokenizer
//!
//! # Tokenization Strategy
//!
//! The snippet is decoded as UTF-8 and streamed through an incremental lexer
//! that classifies maximal runs into token kinds and emits each token as soon
//! as it completes:
//!
//! ```text
//! "def f(n): return n"
//!   → ENCODING 'utf-8', KEYWORD 'def', NAME 'f', OP '(', NAME 'n', OP ')',
//!     OP ':', KEYWORD 'return', NAME 'n', NEWLINE '', ENDMARKER ''
//! ```
//!
//! Lexing is independent of parsing: a snippet may tokenize cleanly and still
//! fail structural analysis, and the reverse.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::TokenizeCorpusUseCase;
pub use domain::{LexError, LexErrorKind, Token, TokenKind, TokenStream};
pub use infrastructure::{untokenize, PythonLexer};

use crate::features::corpus::Snippet;

/// Tokenize one snippet into a complete token stream
pub fn tokenize(snippet: &Snippet) -> Result<TokenStream, LexError> {
    let tokens = PythonLexer::new(snippet.index, snippet.text.as_bytes())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TokenStream::new(snippet.index, tokens))
}

/// Tokenize raw bytes (the text need not be valid UTF-8)
pub fn tokenize_bytes(snippet_index: usize, bytes: &[u8]) -> Result<TokenStream, LexError> {
    let tokens = PythonLexer::new(snippet_index, bytes).collect::<Result<Vec<_>, _>>()?;
    Ok(TokenStream::new(snippet_index, tokens))
}
