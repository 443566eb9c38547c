//! Tokenize corpus use case

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::features::corpus::{Corpus, Snippet};
use crate::features::lexical::domain::{LexError, TokenStream};
use crate::features::lexical::tokenize;

/// Tokenize every snippet independently of structural analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeCorpusUseCase;

impl TokenizeCorpusUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, snippet: &Snippet) -> Result<TokenStream, LexError> {
        match tokenize(snippet) {
            Ok(stream) => {
                debug!("snippet {}: {} tokens", snippet.index, stream.len());
                Ok(stream)
            }
            Err(e) => {
                warn!("tokenization failed: {}", e);
                Err(e)
            }
        }
    }

    /// Output is in corpus order; one failing snippet never affects another
    pub fn execute_batch(&self, corpus: &Corpus) -> Vec<Result<TokenStream, LexError>> {
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
