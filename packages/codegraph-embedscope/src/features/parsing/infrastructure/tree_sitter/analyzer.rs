//! Tree-sitter Python analyzer
//!
//! Traversal is an explicit pre-order DFS over named nodes: the order of
//! every collected fact is part of the contract, not a property of a
//! library walker.

use ::tree_sitter::{Node, Parser as TSParser, Tree};
use tracing::debug;

use super::languages::python::{self, fields, node_kinds, ASYNC_KEYWORD};
use super::syntax_check;
use crate::config::AnalysisConfig;
use crate::features::corpus::Snippet;
use crate::features::parsing::domain::{ParseError, StructuralFacts};
use crate::features::parsing::ports::StructuralAnalyzer;
use crate::shared::models::Location;

/// Python structural analyzer
#[derive(Debug, Clone, Default)]
pub struct PythonAnalyzer {
    /// Also record the first symbol of `from m import a, b` statements
    capture_from_imports: bool,
}

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            capture_from_imports: config.capture_from_imports,
        }
    }

    pub fn with_from_imports(mut self, enabled: bool) -> Self {
        self.capture_from_imports = enabled;
        self
    }

    fn parse_tree(&self, snippet: &Snippet) -> Result<Tree, ParseError> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| {
                ParseError::new(snippet.index, format!("Failed to set language: {}", e))
            })?;

        parser
            .parse(&snippet.text, None)
            .ok_or_else(|| ParseError::new(snippet.index, "parser produced no tree"))
    }

    /// Single pre-order pass collecting all fact categories
    fn collect(&self, root: Node<'_>, source: &str, facts: &mut StructuralFacts) {
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            match node.kind() {
                node_kinds::FUNCTION_DEF if !is_async(node) => {
                    if let Some(name) = field_text(node, fields::NAME, source) {
                        facts.functions.push(name);
                    }
                }
                node_kinds::CLASS_DEF => {
                    if let Some(name) = field_text(node, fields::NAME, source) {
                        facts.classes.push(name);
                    }
                }
                node_kinds::IMPORT_STATEMENT => {
                    if let Some(name) = first_imported_name(node, source) {
                        facts.imports.push(name);
                    }
                }
                node_kinds::IMPORT_FROM_STATEMENT if self.capture_from_imports => {
                    if let Some(name) = first_imported_name(node, source) {
                        facts.imports.push(name);
                    }
                }
                node_kinds::FOR_STATEMENT if is_async(node) => {}
                node_kinds::TRY_STATEMENT if has_except_group(node) => {}
                kind => {
                    if let Some(pattern) = python::control_pattern(kind) {
                        facts.control_patterns.push(pattern);
                    }
                }
            }

            // Reverse push keeps left-to-right visiting order
            for i in (0..node.named_child_count()).rev() {
                if let Some(child) = node.named_child(i) {
                    stack.push(child);
                }
            }
        }
    }
}

impl StructuralAnalyzer for PythonAnalyzer {
    fn analyze(&self, snippet: &Snippet) -> Result<StructuralFacts, ParseError> {
        let tree = self.parse_tree(snippet)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(syntax_error(root, snippet.index));
        }
        if let Some(err) = syntax_check::check(root, &snippet.text, snippet.index) {
            return Err(err);
        }

        let mut facts = StructuralFacts::new(snippet.index);
        self.collect(root, &snippet.text, &mut facts);

        debug!(
            "snippet {}: {} functions, {} classes, {} imports, {} control patterns",
            snippet.index,
            facts.functions.len(),
            facts.classes.len(),
            facts.imports.len(),
            facts.control_patterns.len()
        );

        Ok(facts)
    }

    fn language_name(&self) -> &'static str {
        "python"
    }
}

/// `async def` and `async for` are distinct constructs from their sync forms
fn is_async(node: Node<'_>) -> bool {
    node.child(0)
        .is_some_and(|first| first.kind() == ASYNC_KEYWORD)
}

/// `try ... except*` is a distinct construct from a plain `try`
fn has_except_group(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .any(|c| c.kind() == node_kinds::EXCEPT_GROUP_CLAUSE);
    found
}

fn node_text<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    source.get(node.byte_range())
}

fn field_text(node: Node<'_>, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|n| node_text(n, source))
        .map(str::to_string)
}

/// First name of an import statement, alias stripped
///
/// `import os.path as p, sys` yields `os.path`; `from m import a, b` yields `a`;
/// `from m import *` yields `*`.
fn first_imported_name(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let first = node
        .children_by_field_name(fields::NAME, &mut cursor)
        .next();

    match first {
        Some(name) if name.kind() == node_kinds::ALIASED_IMPORT => name
            .child_by_field_name(fields::NAME)
            .and_then(|dotted| dotted_name(dotted, source)),
        Some(name) => dotted_name(name, source),
        None => {
            let mut cursor = node.walk();
            let has_wildcard = node
                .named_children(&mut cursor)
                .any(|c| c.kind() == node_kinds::WILDCARD_IMPORT);
            has_wildcard.then(|| "*".to_string())
        }
    }
}

/// Join dotted-name segments, dropping any whitespace around the dots
fn dotted_name(node: Node<'_>, source: &str) -> Option<String> {
    if node.kind() != node_kinds::DOTTED_NAME {
        return node_text(node, source).map(str::to_string);
    }

    let mut cursor = node.walk();
    let parts: Vec<&str> = node
        .named_children(&mut cursor)
        .filter_map(|part| node_text(part, source))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}

/// Build a ParseError pointing at the first ERROR/MISSING node in pre-order
fn syntax_error(root: Node<'_>, snippet_index: usize) -> ParseError {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing '{}'", node.kind())
            } else {
                "invalid syntax".to_string()
            };
            return ParseError::new(snippet_index, message)
                .with_location(Location::new(pos.row as u32 + 1, pos.column as u32));
        }

        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                if child.has_error() || child.is_missing() {
                    stack.push(child);
                }
            }
        }
    }

    ParseError::new(snippet_index, "invalid syntax")
}
