//! Lexical tokenizer integration tests

#[path = "../common/mod.rs"]
mod common;
use common::*;

use codegraph_embedscope::features::lexical::{tokenize_bytes, LexErrorKind, TokenizeCorpusUseCase};
use codegraph_embedscope::{analyze, tokenize, untokenize, Corpus, Snippet, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn test_every_stream_is_framed() {
    let corpus = Corpus::reference();
    for result in TokenizeCorpusUseCase::new().execute_batch(&corpus) {
        let stream = result.unwrap();
        assert_eq!(stream.tokens.first().unwrap().kind, TokenKind::Encoding);
        assert_eq!(stream.tokens.first().unwrap().text, "utf-8");
        assert_eq!(stream.tokens.last().unwrap().kind, TokenKind::EndMarker);
        assert_eq!(stream.count(TokenKind::EndMarker), 1);
    }
}

#[test]
fn test_tokens_in_text_order() {
    let stream = tokenize(&Snippet::new(1, fixture_n_functions(3))).unwrap();
    let offsets: Vec<usize> = stream.iter().map(|t| t.offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);
}

#[test]
fn test_keywords_and_names() {
    let stream = tokenize(&Snippet::new(1, "class C:\n  def m(self): pass")).unwrap();
    let keywords: Vec<&str> = stream
        .iter()
        .filter(|t| t.kind == TokenKind::Keyword)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(keywords, vec!["class", "def", "pass"]);
    assert_eq!(stream.count(TokenKind::Indent), 1);
    assert_eq!(stream.count(TokenKind::Dedent), 1);
}

#[test]
fn test_tokenize_is_deterministic() {
    for snippet in &Corpus::reference() {
        assert_eq!(tokenize(snippet), tokenize(snippet));
    }
}

#[test]
fn test_untokenize_round_trips_reference_corpus() {
    for snippet in &Corpus::reference() {
        let stream = tokenize(snippet).unwrap();
        let rebuilt = untokenize(&stream);
        let again = tokenize(&Snippet::new(snippet.index, rebuilt.clone())).unwrap();
        assert_eq!(again.pairs(), stream.pairs(), "snippet {}", snippet.index);

        // Rebuilt text is still the same program structurally
        assert_eq!(
            analyze(&Snippet::new(snippet.index, rebuilt)).unwrap().functions,
            analyze(snippet).unwrap().functions
        );
    }
}

#[test]
fn test_failures_isolated_per_snippet() {
    let corpus = Corpus::new(["a = 1", "s = \"never closed", "if x:\n        y\n    z", "b = 2"]);
    let results = TokenizeCorpusUseCase::new().execute_batch(&corpus);

    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().kind,
        LexErrorKind::UnterminatedString
    );
    assert_eq!(
        results[2].as_ref().unwrap_err().kind,
        LexErrorKind::InconsistentDedent
    );
    assert!(results[3].is_ok());
}

#[test]
fn test_invalid_utf8_reports_offset() {
    let err = tokenize_bytes(3, b"ok = 1\n\xff").unwrap_err();
    assert_eq!(err.snippet_index, 3);
    assert_eq!(err.kind, LexErrorKind::InvalidUtf8);
    assert_eq!(err.offset, 7);
}

#[test]
fn test_lexing_independent_of_parsing() {
    // Lexically fine, syntactically broken
    let snippet = Snippet::new(1, "x = = 1");
    assert!(tokenize(&snippet).is_ok());
    assert!(analyze(&snippet).is_err());
}
