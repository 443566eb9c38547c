//! Comparison pipeline orchestrator

use std::sync::Arc;
use std::time::Instant;

use rayon::ThreadPool;
use tracing::{info, warn};

use super::result::{BackendFailure, BackendReport, PipelineReport, SnippetReport};
use crate::config::ValidatedConfig;
use crate::errors::Result;
use crate::features::corpus::Corpus;
use crate::features::embedding::{BackendEmbedding, EmbeddingBackend, EmbeddingGenerator};
use crate::features::lexical::TokenizeCorpusUseCase;
use crate::features::parsing::{AnalyzeCorpusUseCase, PythonAnalyzer};
use crate::features::projection::PcaProjector;
use crate::features::visualization::PlotSink;
use crate::shared::parallel::build_thread_pool;

/// Runs analysis, tokenization, embedding and projection over one corpus
pub struct ComparisonPipeline {
    config: ValidatedConfig,
    analyzer: PythonAnalyzer,
    generator: EmbeddingGenerator,
    projector: PcaProjector,
    /// None when the pool could not be built; work then runs on the caller's pool
    pool: Option<ThreadPool>,
}

impl ComparisonPipeline {
    pub fn new(config: ValidatedConfig) -> Self {
        let pool = match build_thread_pool(config.parallel().num_workers) {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("Falling back to the global thread pool: {}", e);
                None
            }
        };

        Self {
            analyzer: PythonAnalyzer::from_config(&config.analysis()),
            generator: EmbeddingGenerator::new(config.embedding()),
            projector: PcaProjector::new(config.projection()),
            pool,
            config,
        }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Run every stage and report each snippet and backend
    pub fn run(&self, corpus: &Corpus, backends: &[Arc<dyn EmbeddingBackend>]) -> PipelineReport {
        let start = Instant::now();
        info!(
            "Comparing {} snippets across {} backends ({})",
            corpus.len(),
            backends.len(),
            self.config.summary()
        );

        let work = || {
            let snippets = self.analyze_snippets(corpus);
            let backends = self.compare_backends(corpus, backends);
            (snippets, backends)
        };

        let (snippets, backends) = match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        };

        let report = PipelineReport {
            snippets,
            backends,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!("Comparison complete: {}", report.summary());
        report
    }

    /// Run, then hand the successful point clouds to `sink`
    ///
    /// Rendering is skipped when no backend produced a cloud.
    pub fn run_with_sink(
        &self,
        corpus: &Corpus,
        backends: &[Arc<dyn EmbeddingBackend>],
        sink: &mut dyn PlotSink,
    ) -> Result<PipelineReport> {
        let report = self.run(corpus, backends);
        let clouds = report.clouds();

        if clouds.is_empty() {
            warn!("No backend produced a point cloud; nothing to render");
        } else {
            sink.render(&clouds)?;
        }

        Ok(report)
    }

    fn analyze_snippets(&self, corpus: &Corpus) -> Vec<SnippetReport> {
        let analyze = AnalyzeCorpusUseCase::new(self.analyzer.clone());
        let tokenize = TokenizeCorpusUseCase::new();

        #[cfg(feature = "parallel")]
        let (facts, tokens) = rayon::join(
            || analyze.execute_batch(corpus),
            || tokenize.execute_batch(corpus),
        );

        #[cfg(not(feature = "parallel"))]
        let (facts, tokens) = (analyze.execute_batch(corpus), tokenize.execute_batch(corpus));

        corpus
            .iter()
            .zip(facts.into_iter().zip(tokens))
            .map(|(snippet, (facts, tokens))| SnippetReport {
                index: snippet.index,
                label: snippet.label.clone(),
                facts,
                tokens,
            })
            .collect()
    }

    fn compare_backends(
        &self,
        corpus: &Corpus,
        backends: &[Arc<dyn EmbeddingBackend>],
    ) -> Vec<BackendReport> {
        self.generator
            .embed_all(corpus, backends)
            .into_iter()
            .map(|embedding| self.project(embedding))
            .collect()
    }

    fn project(&self, embedding: BackendEmbedding) -> BackendReport {
        let BackendEmbedding { backend, result } = embedding;
        let shape = result.as_ref().ok().map(|m| m.shape());

        let outcome = result
            .map_err(BackendFailure::Embedding)
            .and_then(|matrix| {
                self.projector
                    .project(&matrix)
                    .map_err(BackendFailure::Projection)
            });

        if let Err(BackendFailure::Projection(ref e)) = outcome {
            warn!("{}: {}", backend, e);
        }

        BackendReport {
            backend,
            shape,
            outcome,
        }
    }
}
