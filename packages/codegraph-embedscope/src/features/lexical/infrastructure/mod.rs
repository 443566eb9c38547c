//! Lexer infrastructure

mod keywords;
mod python_lexer;
mod untokenize;

pub use python_lexer::PythonLexer;
pub use untokenize::untokenize;
