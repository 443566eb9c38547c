//! Property-based tests
//!
//! Invariants that should hold for ALL generated inputs:
//! - Determinism: analyze/tokenize/embed/project give identical results on repeat
//! - Alignment: embed and project preserve corpus length and order
//! - Geometry: re-running the pipeline keeps pairwise distances
//! - Round trip: untokenized streams tokenize back to the same pairs

#[path = "../common/mod.rs"]
mod common;
use common::*;

use codegraph_embedscope::{
    analyze, tokenize, untokenize, Corpus, EmbeddingGenerator, HashingBackend, PcaProjector,
    Snippet,
};
use proptest::prelude::*;

fn function_source(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("def f_{n}(x):\n    if x:\n        return x\n"))
        .collect()
}

/// `name = value` with an optional trailing comment; lists may span two lines
fn statement() -> impl Strategy<Value = String> {
    let value = prop_oneof![
        "[1-9][0-9]{0,3}",
        "'[a-z ]{0,6}'",
        "[a-z][a-z0-9_]{0,5}",
        (0u8..10, 0u8..10).prop_map(|(a, b)| format!("[{a},\n        {b}]")),
    ];
    ("[a-z][a-z0-9_]{0,5}", value, any::<bool>()).prop_map(|(name, value, comment)| {
        if comment {
            format!("{name} = {value}  # note")
        } else {
            format!("{name} = {value}")
        }
    })
}

/// Top-level statements and `if` blocks, optionally separated by blank lines
fn program() -> impl Strategy<Value = String> {
    let block = (
        prop::option::of("[a-z][a-z0-9_]{0,5}"),
        prop::collection::vec(statement(), 1..4),
        any::<bool>(),
    );
    prop::collection::vec(block, 1..6).prop_map(|blocks| {
        let mut out = String::new();
        for (condition, body, blank_after) in blocks {
            let indent = match condition {
                Some(condition) => {
                    out.push_str(&format!("if {condition}:\n"));
                    "    "
                }
                None => "",
            };
            for line in body {
                out.push_str(indent);
                out.push_str(&line);
                out.push('\n');
            }
            if blank_after {
                out.push('\n');
            }
        }
        out
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_analyze_counts_and_orders_functions(
        names in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..8)
    ) {
        let snippet = Snippet::new(1, function_source(&names));
        let facts = analyze(&snippet).unwrap();

        let expected: Vec<String> = names.iter().map(|n| format!("f_{n}")).collect();
        prop_assert_eq!(&facts.functions, &expected);
        prop_assert_eq!(facts.control_patterns.len(), names.len());
        prop_assert_eq!(analyze(&snippet).unwrap(), facts);
    }

    #[test]
    fn prop_tokenize_is_deterministic(text in "[ -~\n]{0,80}") {
        let snippet = Snippet::new(1, text);
        prop_assert_eq!(tokenize(&snippet), tokenize(&snippet));
    }

    #[test]
    fn prop_untokenize_round_trips(source in program()) {
        let first = tokenize(&Snippet::new(1, source)).unwrap();
        let rebuilt = untokenize(&first);
        let second = tokenize(&Snippet::new(1, rebuilt)).unwrap();
        prop_assert_eq!(second.pairs(), first.pairs());
    }

    #[test]
    fn prop_embed_preserves_length_and_order(
        texts in prop::collection::vec("[ -~]{0,40}", 0..12),
        dim in 2usize..64,
    ) {
        let corpus = Corpus::new(texts.clone());
        let backend = HashingBackend::new("h", dim);
        let matrix = EmbeddingGenerator::default().embed(&corpus, &backend).unwrap();

        prop_assert_eq!(matrix.shape(), (texts.len(), dim));
        for (i, text) in texts.iter().enumerate() {
            prop_assert_eq!(matrix.row(i).unwrap().to_vec(), backend.embed_text(text));
        }
    }

    #[test]
    fn prop_projection_is_repeatable(
        texts in prop::collection::vec("[a-z =+()]{1,30}", 2..12),
        dim in 2usize..48,
    ) {
        let corpus = Corpus::new(texts.clone());
        let backend = HashingBackend::new("h", dim);
        let generator = EmbeddingGenerator::default();
        let projector = PcaProjector::default();

        let first = projector
            .project(&generator.embed(&corpus, &backend).unwrap())
            .unwrap();
        let second = projector
            .project(&generator.embed(&corpus, &backend).unwrap())
            .unwrap();

        prop_assert_eq!(first.len(), texts.len());
        let d1 = pairwise_distances(&first.points);
        let d2 = pairwise_distances(&second.points);
        for (a, b) in d1.iter().zip(&d2) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}
