//! Tree-sitter backed analyzers

mod analyzer;
pub mod languages;
mod syntax_check;

pub use analyzer::PythonAnalyzer;
