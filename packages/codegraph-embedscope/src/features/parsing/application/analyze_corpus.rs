//! Analyze corpus use case

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::warn;

use crate::features::corpus::{Corpus, Snippet};
use crate::features::parsing::domain::{ParseError, StructuralFacts};
use crate::features::parsing::ports::StructuralAnalyzer;

/// Analyze snippets one by one, isolating failures per snippet
pub struct AnalyzeCorpusUseCase<A: StructuralAnalyzer> {
    analyzer: A,
}

impl<A: StructuralAnalyzer> AnalyzeCorpusUseCase<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Execute for a single snippet
    pub fn execute(&self, snippet: &Snippet) -> Result<StructuralFacts, ParseError> {
        self.analyzer.analyze(snippet).inspect_err(|e| {
            warn!("structural analysis failed: {}", e);
        })
    }

    /// Execute for every snippet; output is in corpus order
    pub fn execute_batch(&self, corpus: &Corpus) -> Vec<Result<StructuralFacts, ParseError>> {
        #[cfg(feature = "parallel")]
        {
            corpus
                .snippets()
                .par_iter()
                .map(|snippet| self.execute(snippet))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            corpus.iter().map(|snippet| self.execute(snippet)).collect()
        }
    }
}
