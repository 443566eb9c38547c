//! End-to-end pipeline tests: shapes, alignment and per-backend isolation

#[path = "../common/mod.rs"]
mod common;
use common::*;

use std::sync::Arc;

use codegraph_embedscope::config::{PipelineConfig, Preset};
use codegraph_embedscope::{
    BackendError, BackendFailure, ComparisonPipeline, Corpus, EmbeddingBackend,
    EmbeddingGenerator, MemorySink, PcaProjector, ProjectionError, SvgScatterSink, UnloadedBackend,
};
use tempfile::tempdir;

fn quiet_pipeline() -> ComparisonPipeline {
    let config = PipelineConfig::preset(Preset::Balanced)
        .embedding(|c| c.show_progress(false))
        .build()
        .unwrap();
    ComparisonPipeline::new(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// Shapes and alignment
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_three_backends_ten_snippets() {
    let corpus = Corpus::reference();
    let backends = hashing_backends(&[384, 768, 512]);
    let generator = EmbeddingGenerator::default();
    let projector = PcaProjector::default();

    let embeddings = generator.embed_all(&corpus, &backends);
    assert_eq!(embeddings.len(), 3);

    for (embedding, expected_dim) in embeddings.iter().zip([384, 768, 512]) {
        let matrix = embedding.result.as_ref().unwrap();
        assert_eq!(matrix.shape(), (10, expected_dim));

        let points = projector.project(matrix).unwrap();
        assert_eq!(points.len(), 10);
        assert_eq!(points.label, embedding.backend);
    }
}

#[test]
fn test_rows_follow_snippet_order() {
    let corpus = Corpus::reference();
    let backend = codegraph_embedscope::HashingBackend::new("h", 128);
    let matrix = EmbeddingGenerator::default().embed(&corpus, &backend).unwrap();

    for (i, snippet) in corpus.iter().enumerate() {
        let expected = backend.embed_text(&snippet.text);
        assert_eq!(matrix.row(i).unwrap().to_vec(), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Isolation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_short_output_fails_only_that_backend() {
    let mut backends = hashing_backends(&[384, 768]);
    backends.insert(1, Arc::new(TruncatingBackend { dimension: 8 }));

    let report = quiet_pipeline().run(&Corpus::reference(), &backends);
    assert_eq!(report.backends.len(), 3);

    let failed = report.backend("truncating").unwrap();
    assert_eq!(failed.shape, None);
    assert_eq!(
        failed.outcome.as_ref().unwrap_err(),
        &BackendFailure::Embedding(BackendError::LengthMismatch {
            backend: "truncating".to_string(),
            expected: 10,
            actual: 9,
        })
    );

    for name in ["hashing-384", "hashing-768"] {
        let ok = report.backend(name).unwrap();
        assert_eq!(ok.outcome.as_ref().unwrap().len(), 10);
    }
}

#[test]
fn test_every_backend_reported_with_reason() {
    let backends: Vec<Arc<dyn EmbeddingBackend>> = vec![
        Arc::new(UnavailableBackend),
        Arc::new(ScalarBackend),
        Arc::new(codegraph_embedscope::HashingBackend::new("fine", 32)),
    ];
    let report = quiet_pipeline().run(&Corpus::reference(), &backends);

    let names: Vec<&str> = report.backends.iter().map(|b| b.backend.as_str()).collect();
    assert_eq!(names, vec!["unavailable", "scalar", "fine"]);

    assert!(matches!(
        report.backends[0].outcome,
        Err(BackendFailure::Embedding(BackendError::Unavailable { .. }))
    ));
    assert_eq!(report.backends[1].shape, Some((10, 1)));
    assert!(matches!(
        report.backends[1].outcome,
        Err(BackendFailure::Projection(ProjectionError::TooFewDimensions { found: 1 }))
    ));
    assert!(report.backends[2].outcome.is_ok());
    assert_eq!(report.clouds().len(), 1);
}

#[test]
fn test_unloaded_model_stays_in_report() {
    let load_error = BackendError::unavailable("mpnet", "model download failed");
    let mut backends = hashing_backends(&[64]);
    backends.push(Arc::new(UnloadedBackend::new("mpnet", 768, load_error.clone())));

    let report = quiet_pipeline().run(&Corpus::reference(), &backends);

    assert_eq!(report.backends.len(), 2);
    let unloaded = report.backend("mpnet").unwrap();
    assert_eq!(unloaded.shape, None);
    assert_eq!(
        unloaded.outcome.as_ref().unwrap_err(),
        &BackendFailure::Embedding(load_error)
    );
    assert_eq!(report.failed_backends(), 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["backends"][1]["backend"], "mpnet");
    assert_eq!(json["backends"][1]["outcome"]["Err"]["stage"], "embedding");
    assert_eq!(json["backends"][1]["outcome"]["Err"]["error"]["kind"], "unavailable");
}

#[test]
fn test_snippet_failures_do_not_block_backends() {
    let corpus = Corpus::new(["def ok(): pass", "x = = 1", "s = 'open"]);
    let report = quiet_pipeline().run(&corpus, &hashing_backends(&[16]));

    assert_eq!(report.snippets.len(), 3);
    assert!(report.snippets[0].facts.is_ok());
    assert!(report.snippets[1].facts.is_err());
    assert!(report.snippets[1].tokens.is_ok());
    assert!(report.snippets[2].tokens.is_err());
    assert_eq!(report.failed_snippets(), 2);
    assert_eq!(report.backends[0].outcome.as_ref().unwrap().len(), 3);
}

// ═══════════════════════════════════════════════════════════════════════════
// Boundaries
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_single_snippet_projection_fails() {
    let report = quiet_pipeline().run(&Corpus::new(["x = 1"]), &hashing_backends(&[384]));
    assert!(matches!(
        report.backends[0].outcome,
        Err(BackendFailure::Projection(ProjectionError::TooFewSnippets { found: 1 }))
    ));
}

#[test]
fn test_empty_corpus_embeds_to_empty_matrix() {
    let generator = EmbeddingGenerator::default();
    let backend = TruncatingBackend { dimension: 8 };
    let matrix = generator.embed(&Corpus::default(), &backend).unwrap();
    assert_eq!(matrix.shape(), (0, 8));
}

// ═══════════════════════════════════════════════════════════════════════════
// Sinks
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_memory_sink_receives_labeled_clouds() {
    let mut sink = MemorySink::new();
    let mut backends = hashing_backends(&[64, 128]);
    backends.push(Arc::new(UnavailableBackend));

    quiet_pipeline()
        .run_with_sink(&Corpus::reference(), &backends, &mut sink)
        .unwrap();

    assert_eq!(sink.labels(), vec!["hashing-64", "hashing-128"]);
    assert!(sink.clouds().iter().all(|c| c.len() == 10));
}

#[test]
fn test_svg_sink_writes_plot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("embeddings.svg");
    let mut sink = SvgScatterSink::new(&path);

    quiet_pipeline()
        .run_with_sink(&Corpus::reference(), &hashing_backends(&[32, 48]), &mut sink)
        .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("PCA of Code Snippet Embeddings by Model"));
    assert!(svg.contains("Principal Component 2"));
    assert!(svg.contains("hashing-48"));
}
