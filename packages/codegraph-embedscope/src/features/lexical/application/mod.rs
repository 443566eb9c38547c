//! Lexical application layer

mod tokenize_corpus;

pub use tokenize_corpus::TokenizeCorpusUseCase;
