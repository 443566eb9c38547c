//! Lexical domain models

mod error;
mod token;

pub use error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind, TokenStream};
