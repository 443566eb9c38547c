//! Rebuild source text from a token stream
//!
//! Gaps between tokens are filled from their recorded positions: spaces for
//! column gaps, backslash continuations for skipped rows. Indentation strings
//! from INDENT tokens are replayed at the start of each line. The result
//! tokenizes back to the same `(kind, text)` sequence, though whitespace may
//! differ from the original.

use crate::features::lexical::domain::{TokenKind, TokenStream};

pub fn untokenize(stream: &TokenStream) -> String {
    let mut out = String::new();
    let mut indents: Vec<&str> = Vec::new();
    let mut prev_row = 1u32;
    let mut prev_col = 0u32;
    let mut start_of_line = false;

    for token in stream.iter() {
        match token.kind {
            TokenKind::Encoding | TokenKind::EndMarker => continue,
            TokenKind::Indent => {
                indents.push(token.text.as_str());
                continue;
            }
            TokenKind::Dedent => {
                indents.pop();
                prev_row = token.span.end_line;
                prev_col = token.span.end_col;
                continue;
            }
            TokenKind::Newline | TokenKind::Nl => start_of_line = true,
            _ if start_of_line => {
                if let Some(indent) = indents.last() {
                    let width = indent.chars().count() as u32;
                    if token.span.start_col >= width {
                        out.push_str(indent);
                        prev_col = width;
                    }
                }
                start_of_line = false;
            }
            _ => {}
        }

        let (row, col) = (token.span.start_line, token.span.start_col);
        if row > prev_row {
            for _ in prev_row..row {
                out.push_str("\\\n");
            }
            prev_col = 0;
        }
        if col > prev_col {
            out.extend(std::iter::repeat(' ').take((col - prev_col) as usize));
        }

        out.push_str(&token.text);
        prev_row = token.span.end_line;
        prev_col = token.span.end_col;

        if matches!(token.kind, TokenKind::Newline | TokenKind::Nl) {
            prev_row += 1;
            prev_col = 0;
        }
    }

    out
}
