//! Parsing application layer

mod analyze_corpus;

pub use analyze_corpus::AnalyzeCorpusUseCase;
