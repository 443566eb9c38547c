//! Structural facts extracted from one snippet
//!
//! Every sequence is in pre-order depth-first traversal order. Duplicates are
//! kept: a name appears once per defining node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Control-flow construct category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    For,
    If,
    While,
    Try,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::For => "For",
            PatternKind::If => "If",
            PatternKind::While => "While",
            PatternKind::Try => "Try",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-snippet structural record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralFacts {
    pub snippet_index: usize,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub imports: Vec<String>,
    pub control_patterns: Vec<PatternKind>,
}

impl StructuralFacts {
    pub fn new(snippet_index: usize) -> Self {
        Self {
            snippet_index,
            ..Default::default()
        }
    }

    /// True when no fact of any category was found
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
            && self.classes.is_empty()
            && self.imports.is_empty()
            && self.control_patterns.is_empty()
    }

    /// Control pattern tags as strings, in traversal order
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.control_patterns.iter().map(PatternKind::as_str).collect()
    }
}
