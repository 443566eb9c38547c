//! Python-specific tree-sitter configuration

use crate::features::parsing::domain::PatternKind;

/// Python node kinds for quick lookup
pub mod node_kinds {
    pub const FUNCTION_DEF: &str = "function_definition";
    pub const CLASS_DEF: &str = "class_definition";
    pub const IMPORT_STATEMENT: &str = "import_statement";
    pub const IMPORT_FROM_STATEMENT: &str = "import_from_statement";
    pub const ALIASED_IMPORT: &str = "aliased_import";
    pub const DOTTED_NAME: &str = "dotted_name";
    pub const WILDCARD_IMPORT: &str = "wildcard_import";
    pub const IF_STATEMENT: &str = "if_statement";
    pub const ELIF_CLAUSE: &str = "elif_clause";
    pub const FOR_STATEMENT: &str = "for_statement";
    pub const WHILE_STATEMENT: &str = "while_statement";
    pub const TRY_STATEMENT: &str = "try_statement";
    pub const EXCEPT_GROUP_CLAUSE: &str = "except_group_clause";
    pub const BLOCK: &str = "block";
    pub const COMMENT: &str = "comment";
    pub const PRINT_STATEMENT: &str = "print_statement";
    pub const EXEC_STATEMENT: &str = "exec_statement";
    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const NAMED_EXPRESSION: &str = "named_expression";
    pub const DELETE_STATEMENT: &str = "delete_statement";
    pub const IDENTIFIER: &str = "identifier";
    pub const ATTRIBUTE: &str = "attribute";
    pub const SUBSCRIPT: &str = "subscript";
    pub const TUPLE: &str = "tuple";
    pub const LIST: &str = "list";
    pub const EXPRESSION_LIST: &str = "expression_list";
    pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
    pub const INTEGER: &str = "integer";
}

/// Anonymous keyword marking `async def` / `async for`
pub const ASYNC_KEYWORD: &str = "async";

/// Field names used when reading definitions
pub mod fields {
    pub const NAME: &str = "name";
}

/// Map a node kind to its control-flow tag
///
/// An `elif` is a nested conditional, so it counts as its own `If`.
/// Comprehension `for` clauses and conditional expressions are not statements
/// and never match.
pub fn control_pattern(kind: &str) -> Option<PatternKind> {
    match kind {
        node_kinds::FOR_STATEMENT => Some(PatternKind::For),
        node_kinds::IF_STATEMENT | node_kinds::ELIF_CLAUSE => Some(PatternKind::If),
        node_kinds::WHILE_STATEMENT => Some(PatternKind::While),
        node_kinds::TRY_STATEMENT => Some(PatternKind::Try),
        _ => None,
    }
}
