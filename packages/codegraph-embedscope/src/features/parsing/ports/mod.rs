//! Structural analyzer port (interface)

use crate::features::corpus::Snippet;
use crate::features::parsing::domain::{ParseError, StructuralFacts};

/// Analyzer trait - abstraction over the parsing implementation
///
/// Implementations must be pure: no state may carry over from one snippet
/// to the next, so snippets can be analyzed from any thread in any order.
pub trait StructuralAnalyzer: Send + Sync {
    /// Extract structural facts from one snippet
    fn analyze(&self, snippet: &Snippet) -> Result<StructuralFacts, ParseError>;

    /// Source language handled by this analyzer
    fn language_name(&self) -> &'static str;
}
