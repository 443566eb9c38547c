//! Python 3 checks tree-sitter does not enforce
//!
//! The grammar is deliberately permissive: it still accepts Python 2
//! statements, unindented suites and a few expression forms the Python 3
//! compiler rejects. This pass finds the first such node in pre-order.

use ::tree_sitter::Node;

use super::languages::python::node_kinds;
use crate::features::parsing::domain::ParseError;
use crate::shared::models::Location;

/// Offending node and the message to report
struct Violation<'t> {
    node: Node<'t>,
    message: &'static str,
}

/// First Python 3 violation under `root`, if any
pub(super) fn check(root: Node<'_>, source: &str, snippet_index: usize) -> Option<ParseError> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if let Some(violation) = violation(node, source) {
            let pos = violation.node.start_position();
            return Some(
                ParseError::new(snippet_index, violation.message)
                    .with_location(Location::new(pos.row as u32 + 1, pos.column as u32)),
            );
        }

        for i in (0..node.named_child_count()).rev() {
            if let Some(child) = node.named_child(i) {
                stack.push(child);
            }
        }
    }

    None
}

fn violation<'t>(node: Node<'t>, source: &str) -> Option<Violation<'t>> {
    let message = match node.kind() {
        node_kinds::PRINT_STATEMENT => "Missing parentheses in call to 'print'",
        node_kinds::EXEC_STATEMENT => "Missing parentheses in call to 'exec'",
        node_kinds::BLOCK => return block_violation(node),
        node_kinds::EXPRESSION_STATEMENT => {
            let walrus = node
                .named_child(0)
                .filter(|c| c.kind() == node_kinds::NAMED_EXPRESSION)?;
            return Some(Violation {
                node: walrus,
                message: "invalid syntax: unparenthesized ':=' statement",
            });
        }
        node_kinds::DELETE_STATEMENT => {
            let target = code_children(node).find(|c| !is_delete_target(*c))?;
            return Some(Violation {
                node: invalid_delete_target(target),
                message: "cannot delete expression",
            });
        }
        node_kinds::INTEGER => integer_message(source.get(node.byte_range())?)?,
        _ => return None,
    };

    Some(Violation { node, message })
}

/// A suite must be non-empty and, when on its own line, indented past its header
///
/// Position is taken from the first statement: comments inside a suite may
/// sit at any column.
fn block_violation(block: Node<'_>) -> Option<Violation<'_>> {
    let Some(first) = code_children(block).next() else {
        return Some(Violation {
            node: block,
            message: "expected an indented block",
        });
    };

    let header = block.parent()?.start_position();
    let start = first.start_position();
    if start.row > header.row && start.column <= header.column {
        return Some(Violation {
            node: first,
            message: "expected an indented block",
        });
    }

    None
}

/// `del` accepts names, attributes, subscripts and tuples/lists of those
fn is_delete_target(node: Node<'_>) -> bool {
    match node.kind() {
        node_kinds::IDENTIFIER | node_kinds::ATTRIBUTE | node_kinds::SUBSCRIPT => true,
        node_kinds::TUPLE
        | node_kinds::LIST
        | node_kinds::EXPRESSION_LIST
        | node_kinds::PARENTHESIZED_EXPRESSION => code_children(node).all(is_delete_target),
        _ => false,
    }
}

/// Innermost node that makes `target` undeletable
fn invalid_delete_target(target: Node<'_>) -> Node<'_> {
    let mut current = target;
    while let Some(inner) = code_children(current).find(|c| !is_delete_target(*c)) {
        if !matches!(
            current.kind(),
            node_kinds::TUPLE
                | node_kinds::LIST
                | node_kinds::EXPRESSION_LIST
                | node_kinds::PARENTHESIZED_EXPRESSION
        ) {
            break;
        }
        current = inner;
    }
    current
}

/// Python 2 integer forms: `0777` octals and the `L` long suffix
///
/// Imaginary literals (`0777j`) and all-zero literals (`00`, `0_0`) are valid.
fn integer_message(text: &str) -> Option<&'static str> {
    if text.ends_with(['j', 'J']) {
        return None;
    }
    if text.ends_with(['l', 'L']) {
        return Some("invalid decimal literal");
    }

    let mut chars = text.chars();
    let leading_zero = chars.next() == Some('0');
    let decimal_tail = text.len() > 1 && chars.all(|c| c.is_ascii_digit() || c == '_');
    let has_nonzero = text.chars().any(|c| matches!(c, '1'..='9'));

    (leading_zero && decimal_tail && has_nonzero).then_some(
        "leading zeros in decimal integer literals are not permitted; use an 0o prefix for octal integers",
    )
}

/// Named children, skipping comments
fn code_children<'t>(node: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    (0..node.named_child_count())
        .filter_map(move |i| node.named_child(i))
        .filter(|c| c.kind() != node_kinds::COMMENT)
}
