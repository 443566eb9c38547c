//! Parsing Feature - Structural Analyzer
//!
//! Parses each snippet into a syntax tree and extracts named structural facts
//! (function names, class names, imported modules, control-flow kinds).
//!
//! ## Structure
//! - `domain/` - StructuralFacts, PatternKind, ParseError
//! - `ports/` - StructuralAnalyzer trait
//! - `application/` - AnalyzeCorpusUseCase (per-snippet isolation)
//! - `infrastructure/` - tree-sitter backed PythonAnalyzer

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::AnalyzeCorpusUseCase;
pub use domain::{ParseError, PatternKind, StructuralFacts};
pub use infrastructure::PythonAnalyzer;
pub use ports::StructuralAnalyzer;

use crate::features::corpus::Snippet;

/// Analyze one snippet with the default Python analyzer
pub fn analyze(snippet: &Snippet) -> Result<StructuralFacts, ParseError> {
    PythonAnalyzer::new().analyze(snippet)
}
