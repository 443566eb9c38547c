//! Structural analyzer integration tests
//!
//! Facts must follow pre-order traversal order with duplicates kept, and
//! one snippet's failure must not affect any other.

#[path = "../common/mod.rs"]
mod common;
use common::*;

use codegraph_embedscope::config::{PipelineConfig, Preset};
use codegraph_embedscope::features::parsing::AnalyzeCorpusUseCase;
use codegraph_embedscope::{analyze, Corpus, PatternKind, PythonAnalyzer, Snippet};
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════════
// Reference scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_single_function() {
    let facts = analyze(&Snippet::new(1, "def f(n): return n")).unwrap();
    assert_eq!(facts.functions, vec!["f"]);
    assert!(facts.classes.is_empty());
    assert!(facts.imports.is_empty());
    assert!(facts.control_patterns.is_empty());
}

#[test]
fn test_scenario_try_except() {
    let facts = analyze(&Snippet::new(
        1,
        "try:\n  x=1/0\nexcept ZeroDivisionError:\n  pass",
    ))
    .unwrap();
    assert_eq!(facts.control_patterns, vec![PatternKind::Try]);
    assert_eq!(facts.pattern_names(), vec!["Try"]);
}

#[test]
fn test_scenario_class_with_method() {
    let facts = analyze(&Snippet::new(1, "class C:\n  def m(self): pass")).unwrap();
    assert_eq!(facts.classes, vec!["C"]);
    assert_eq!(facts.functions, vec!["m"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Reference corpus
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_corpus_facts() {
    let corpus = Corpus::reference();
    let results = AnalyzeCorpusUseCase::new(PythonAnalyzer::new()).execute_batch(&corpus);
    let facts: Vec<_> = results.into_iter().map(Result::unwrap).collect();

    assert_eq!(facts[0].functions, vec!["factorial"]);
    assert!(facts[0].control_patterns.is_empty()); // conditional expression only
    assert_eq!(facts[1].classes, vec!["MyClass"]);
    assert_eq!(facts[1].functions, vec!["__init__"]);
    assert_eq!(facts[2].imports, vec!["math"]);
    assert_eq!(
        facts[3].control_patterns,
        vec![PatternKind::For, PatternKind::For, PatternKind::If]
    );
    assert_eq!(facts[4].control_patterns, vec![PatternKind::For]);
    assert_eq!(facts[5].classes, vec!["Vehicle"]);
    assert!(facts[6].imports.is_empty());
    assert_eq!(facts[6].functions, vec!["get_current_time"]);
    assert_eq!(facts[9].control_patterns, vec![PatternKind::Try]);

    for (i, f) in facts.iter().enumerate() {
        assert_eq!(f.snippet_index, i + 1);
    }
}

#[test]
fn test_thorough_preset_captures_from_imports() {
    let config = PipelineConfig::preset(Preset::Thorough).build().unwrap();
    let analyzer = PythonAnalyzer::from_config(&config.analysis());
    let corpus = Corpus::reference();
    let results = AnalyzeCorpusUseCase::new(analyzer).execute_batch(&corpus);
    assert_eq!(results[6].as_ref().unwrap().imports, vec!["datetime"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Ordering and multiplicity
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_many_functions_in_source_order() {
    let facts = analyze(&Snippet::new(1, fixture_n_functions(25))).unwrap();
    let expected: Vec<String> = (0..25).map(|i| format!("func_{i}")).collect();
    assert_eq!(facts.functions, expected);
}

#[test]
fn test_class_name_precedes_its_methods() {
    let source = format!(
        "{}\n{}",
        fixture_simple_class("A", 2),
        fixture_simple_function("tail")
    );
    let facts = analyze(&Snippet::new(1, source)).unwrap();
    assert_eq!(facts.classes, vec!["A"]);
    assert_eq!(facts.functions, vec!["method_0", "method_1", "tail"]);
}

#[test]
fn test_imports_keep_duplicates() {
    let facts = analyze(&Snippet::new(
        1,
        fixture_with_imports(&["os", "sys", "os"]),
    ))
    .unwrap();
    assert_eq!(facts.imports, vec!["os", "sys", "os"]);
}

#[test]
fn test_nested_patterns_preorder() {
    let source = "\
try:
    while True:
        for x in y:
            if x:
                break
except Exception:
    if z:
        pass
";
    let facts = analyze(&Snippet::new(1, source)).unwrap();
    assert_eq!(
        facts.control_patterns,
        vec![
            PatternKind::Try,
            PatternKind::While,
            PatternKind::For,
            PatternKind::If,
            PatternKind::If,
        ]
    );
}

#[test]
fn test_analysis_is_deterministic() {
    let corpus = Corpus::reference();
    for snippet in &corpus {
        assert_eq!(analyze(snippet), analyze(snippet));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Failure isolation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_invalid_snippet_isolated() {
    let corpus = Corpus::new([
        "def ok(): pass",
        "def broken(:\n    pass",
        "class Fine: pass",
    ]);
    let results = AnalyzeCorpusUseCase::new(PythonAnalyzer::new()).execute_batch(&corpus);

    assert_eq!(results[0].as_ref().unwrap().functions, vec!["ok"]);
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.snippet_index, 2);
    assert!(err.to_string().contains("snippet 2"));
    assert_eq!(results[2].as_ref().unwrap().classes, vec!["Fine"]);
}

#[test]
fn test_unclosed_bracket_is_parse_error() {
    assert!(analyze(&Snippet::new(4, "x = (1, 2")).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// Python 3 syntax rules the grammar does not enforce
// ═══════════════════════════════════════════════════════════════════════════

fn location_of(source: &str) -> (u32, u32) {
    let err = analyze(&Snippet::new(3, source)).unwrap_err();
    assert_eq!(err.snippet_index, 3);
    let loc = err.location.expect("violation carries a location");
    (loc.line, loc.column)
}

#[test]
fn test_unindented_suite_rejected() {
    assert!(analyze(&Snippet::new(1, "if x:\npass")).is_err());
    assert!(analyze(&Snippet::new(1, "def f():\nreturn 1")).is_err());
    assert!(analyze(&Snippet::new(1, "for i in xs:\npass")).is_err());
}

#[test]
fn test_print_and_exec_statements_rejected() {
    let err = analyze(&Snippet::new(1, "print \"hello\"")).unwrap_err();
    assert!(err.message.contains("print"));
    assert_eq!(location_of("x = 1\nprint x"), (2, 0));

    let err = analyze(&Snippet::new(1, "exec \"x = 1\"")).unwrap_err();
    assert!(err.message.contains("exec"));
}

#[test]
fn test_unparenthesized_walrus_statement_rejected() {
    assert!(analyze(&Snippet::new(1, "x := 1")).is_err());
    assert!(analyze(&Snippet::new(1, "(x := 1)")).is_ok());
    assert!(analyze(&Snippet::new(1, "if (n := 10) > 5:\n    pass")).is_ok());
}

#[test]
fn test_delete_of_call_rejected() {
    assert_eq!(location_of("del f()"), (1, 4));
    assert_eq!(location_of("del a, g(1)"), (1, 7));
    assert!(analyze(&Snippet::new(1, "del a, b.c, d[0], (e, f)")).is_ok());
}

#[test]
fn test_legacy_integer_literals_rejected() {
    assert_eq!(location_of("x = 0777"), (1, 4));
    assert!(analyze(&Snippet::new(1, "n = 10L")).is_err());
    assert!(analyze(&Snippet::new(1, "x = 0o777 + 00 + 0x1F + 0777j")).is_ok());
}

#[test]
fn test_comment_column_does_not_affect_suite_indent() {
    let source = "def f():\n# note\n    return 1";
    assert_eq!(analyze(&Snippet::new(1, source)).unwrap().functions, vec!["f"]);
}

#[test]
fn test_syntax_rule_failure_isolated_in_batch() {
    let corpus = Corpus::new(["if x:\npass", "def ok(): pass"]);
    let results = AnalyzeCorpusUseCase::new(PythonAnalyzer::new()).execute_batch(&corpus);
    assert!(results[0].is_err());
    assert_eq!(results[1].as_ref().unwrap().functions, vec!["ok"]);
}
