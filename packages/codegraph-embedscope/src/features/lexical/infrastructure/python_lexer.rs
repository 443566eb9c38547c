//! Incremental Python lexer
//!
//! Emits tokens in text order as an iterator. Layout tokens follow the
//! conventional Python rules:
//!
//! - NEWLINE ends a logical line; NL marks blank lines, comment-only lines
//!   and line breaks inside brackets
//! - INDENT/DEDENT are produced only at logical line starts outside brackets
//! - tabs advance the indentation column to the next multiple of 8
//! - at EOF a NEWLINE with empty text is synthesized when the last line has
//!   code but no line break, then open indents are closed, then ENDMARKER
//!
//! The iterator is fused after the first error.

use std::collections::VecDeque;

use super::keywords::{is_keyword, is_string_prefix, OPERATORS};
use crate::features::lexical::domain::{LexError, LexErrorKind, Token, TokenKind};
use crate::shared::models::Span;

const TAB_SIZE: usize = 8;
const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

/// Python lexer over a byte-encoded snippet
pub struct PythonLexer<'a> {
    snippet_index: usize,
    src: &'a str,
    pos: usize,
    /// 1-based current line
    line: u32,
    /// Byte offset where the current line starts
    line_start: usize,
    indents: Vec<usize>,
    paren_depth: usize,
    /// Previous physical line ended with a backslash
    continued: bool,
    at_line_start: bool,
    pending: VecDeque<Token>,
    state: State,
    decode_error: Option<LexError>,
}

impl<'a> PythonLexer<'a> {
    pub fn new(snippet_index: usize, bytes: &'a [u8]) -> Self {
        let (src, decode_error) = match std::str::from_utf8(bytes) {
            Ok(src) => (src, None),
            Err(e) => (
                "",
                Some(LexError::new(
                    snippet_index,
                    e.valid_up_to(),
                    LexErrorKind::InvalidUtf8,
                )),
            ),
        };

        let start = if src.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };

        Self {
            snippet_index,
            src,
            pos: start,
            line: 1,
            line_start: start,
            indents: vec![0],
            paren_depth: 0,
            continued: false,
            at_line_start: true,
            pending: VecDeque::new(),
            state: State::Start,
            decode_error,
        }
    }

    fn error(&self, offset: usize, kind: LexErrorKind) -> LexError {
        LexError::new(self.snippet_index, offset, kind)
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    /// Character column of `offset` on the current line
    fn column(&self, offset: usize) -> u32 {
        self.src[self.line_start..offset].chars().count() as u32
    }

    fn push(&mut self, kind: TokenKind, start: usize, start_line: u32, start_col: u32) {
        let span = Span::new(start_line, start_col, self.line, self.column(self.pos));
        let text = &self.src[start..self.pos];
        self.pending.push_back(Token::new(kind, text, start, span));
    }

    /// Push a token for `start..self.pos` that lies on the current line
    fn push_here(&mut self, kind: TokenKind, start: usize) {
        let col = self.column(start);
        self.push(kind, start, self.line, col);
    }

    fn push_empty(&mut self, kind: TokenKind, line: u32, col: u32) {
        let span = Span::new(line, col, line, col);
        self.pending.push_back(Token::new(kind, "", self.pos, span));
    }

    /// Length of the line break at `self.pos`, if any
    fn newline_len(&self) -> Option<usize> {
        match self.peek(0) {
            Some(b'\r') if self.peek(1) == Some(b'\n') => Some(2),
            Some(b'\r') | Some(b'\n') => Some(1),
            _ => None,
        }
    }

    fn start_next_line(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
        self.at_line_start = true;
    }

    /// Advance the scan until at least one token is pending or input ends
    fn step(&mut self) -> Result<(), LexError> {
        if self.at_line_start {
            if self.paren_depth == 0 && !self.continued {
                return self.logical_line_start();
            }
            if self.pos >= self.src.len() {
                return Err(self.error(self.pos, LexErrorKind::EofInMultiLineStatement));
            }
            self.continued = false;
            self.at_line_start = false;
        }
        self.scan_token()
    }

    /// Measure indentation, handle blank/comment-only lines, emit INDENT/DEDENT
    fn logical_line_start(&mut self) -> Result<(), LexError> {
        if self.pos >= self.src.len() {
            self.finish(false);
            return Ok(());
        }

        let bytes = self.bytes();
        let mut column = 0usize;
        let mut p = self.pos;
        while let Some(&b) = bytes.get(p) {
            match b {
                b' ' => column += 1,
                b'\t' => column = (column / TAB_SIZE + 1) * TAB_SIZE,
                b'\x0c' => column = 0,
                _ => break,
            }
            p += 1;
        }

        // Whitespace-only trailing line
        if p >= self.src.len() {
            self.pos = p;
            self.finish(false);
            return Ok(());
        }

        match bytes[p] {
            b'#' => {
                self.pos = p;
                let start = self.pos;
                self.skip_to_line_end();
                self.push_here(TokenKind::Comment, start);
                self.emit_line_break(TokenKind::Nl);
                return Ok(());
            }
            b'\r' | b'\n' => {
                self.pos = p;
                self.emit_line_break(TokenKind::Nl);
                return Ok(());
            }
            _ => {}
        }

        let indent_col = self.column(p);
        let top = self.indents.last().copied().unwrap_or(0);
        let line_start = self.line_start;
        self.pos = p;

        if column > top {
            self.indents.push(column);
            self.push(TokenKind::Indent, line_start, self.line, 0);
        } else if column < top {
            while column < self.indents.last().copied().unwrap_or(0) {
                self.indents.pop();
                self.push_empty(TokenKind::Dedent, self.line, indent_col);
            }
            if self.indents.last().copied().unwrap_or(0) != column {
                return Err(self.error(p, LexErrorKind::InconsistentDedent));
            }
        }

        self.at_line_start = false;
        Ok(())
    }

    /// Emit NEWLINE/NL for the break at `self.pos` (empty text at EOF)
    fn emit_line_break(&mut self, kind: TokenKind) {
        let start = self.pos;
        match self.newline_len() {
            Some(len) => {
                self.pos += len;
                let col = self.column(start);
                let span = Span::new(self.line, col, self.line, col + len as u32);
                self.pending
                    .push_back(Token::new(kind, &self.src[start..self.pos], start, span));
                self.start_next_line();
            }
            None => {
                let col = self.column(start);
                self.push_empty(kind, self.line, col);
                // Nothing left: the next step finishes the stream
                self.at_line_start = true;
            }
        }
    }

    fn skip_to_line_end(&mut self) {
        while let Some(b) = self.peek(0) {
            if b == b'\r' || b == b'\n' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Close the stream: optional NEWLINE, pending DEDENTs, ENDMARKER
    fn finish(&mut self, needs_newline: bool) {
        if needs_newline {
            let col = self.column(self.pos);
            self.push_empty(TokenKind::Newline, self.line, col);
        }
        let end_line = self.line + 1;
        while self.indents.len() > 1 {
            self.indents.pop();
            self.push_empty(TokenKind::Dedent, end_line, 0);
        }
        self.push_empty(TokenKind::EndMarker, end_line, 0);
        self.state = State::Done;
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        while matches!(self.peek(0), Some(b' ') | Some(b'\t') | Some(b'\x0c')) {
            self.pos += 1;
        }

        let Some(b) = self.peek(0) else {
            if self.paren_depth > 0 {
                return Err(self.error(self.pos, LexErrorKind::EofInMultiLineStatement));
            }
            self.finish(true);
            return Ok(());
        };

        match b {
            b'\r' | b'\n' => {
                let kind = if self.paren_depth > 0 {
                    TokenKind::Nl
                } else {
                    TokenKind::Newline
                };
                self.emit_line_break(kind);
            }
            b'#' => {
                let start = self.pos;
                self.skip_to_line_end();
                self.push_here(TokenKind::Comment, start);
            }
            b'\\' => self.line_continuation()?,
            b'0'..=b'9' => self.scan_number(),
            b'.' if matches!(self.peek(1), Some(b'0'..=b'9')) => self.scan_number(),
            b'"' | b'\'' => {
                let start = self.pos;
                self.scan_string(start)?;
            }
            _ => {
                let ch = self.src[self.pos..].chars().next().unwrap_or('\0');
                if ch == '_' || ch.is_alphabetic() {
                    self.scan_name()?;
                } else if !self.scan_operator() {
                    return Err(self.error(self.pos, LexErrorKind::InvalidCharacter(ch)));
                }
            }
        }
        Ok(())
    }

    fn line_continuation(&mut self) -> Result<(), LexError> {
        let backslash = self.pos;
        self.pos += 1;
        match self.newline_len() {
            Some(len) => {
                self.pos += len;
                self.start_next_line();
                self.continued = true;
                Ok(())
            }
            None if self.pos >= self.src.len() => {
                Err(self.error(backslash, LexErrorKind::EofInMultiLineStatement))
            }
            None => Err(self.error(backslash, LexErrorKind::StrayBackslash)),
        }
    }

    fn eat_digits(&mut self, radix_digit: fn(u8) -> bool) {
        while let Some(b) = self.peek(0) {
            if radix_digit(b) || b == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_number(&mut self) {
        let start = self.pos;
        let prefixed = self.peek(0) == Some(b'0')
            && matches!(
                self.peek(1),
                Some(b'x') | Some(b'X') | Some(b'o') | Some(b'O') | Some(b'b') | Some(b'B')
            );

        if prefixed {
            self.pos += 2;
            self.eat_digits(|b| b.is_ascii_hexdigit());
        } else {
            self.eat_digits(|b| b.is_ascii_digit());
            if self.peek(0) == Some(b'.') {
                self.pos += 1;
                self.eat_digits(|b| b.is_ascii_digit());
            }
            if matches!(self.peek(0), Some(b'e') | Some(b'E')) {
                let signed = matches!(self.peek(1), Some(b'+') | Some(b'-'));
                let digit_at = if signed { 2 } else { 1 };
                if matches!(self.peek(digit_at), Some(b'0'..=b'9')) {
                    self.pos += digit_at;
                    self.eat_digits(|b| b.is_ascii_digit());
                }
            }
            if matches!(self.peek(0), Some(b'j') | Some(b'J')) {
                self.pos += 1;
            }
        }

        self.push_here(TokenKind::Number, start);
    }

    fn scan_name(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        self.pos = self.src[start..]
            .char_indices()
            .find(|(_, ch)| !(*ch == '_' || ch.is_alphanumeric()))
            .map(|(i, _)| start + i)
            .unwrap_or(self.src.len());

        let word = &self.src[start..self.pos];
        if is_string_prefix(word) && matches!(self.peek(0), Some(b'"') | Some(b'\'')) {
            return self.scan_string(start);
        }

        let kind = if is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Name
        };
        self.push_here(kind, start);
        Ok(())
    }

    /// Scan a string literal whose prefix starts at `start` and quote at `self.pos`
    fn scan_string(&mut self, start: usize) -> Result<(), LexError> {
        let start_line = self.line;
        let start_col = self.column(start);
        let quote = self.bytes()[self.pos];
        let triple = self.peek(1) == Some(quote) && self.peek(2) == Some(quote);

        self.pos += if triple { 3 } else { 1 };

        loop {
            let Some(b) = self.peek(0) else {
                let kind = if triple {
                    LexErrorKind::UnterminatedTripleQuotedString
                } else {
                    LexErrorKind::UnterminatedString
                };
                return Err(self.error(start, kind));
            };

            match b {
                b'\\' => {
                    self.pos += 1;
                    match self.newline_len() {
                        Some(len) => {
                            self.pos += len;
                            self.line += 1;
                            self.line_start = self.pos;
                        }
                        None => {
                            if let Some(ch) = self.src[self.pos..].chars().next() {
                                self.pos += ch.len_utf8();
                            }
                        }
                    }
                }
                b'\r' | b'\n' => {
                    if !triple {
                        return Err(self.error(start, LexErrorKind::UnterminatedString));
                    }
                    self.pos += self.newline_len().unwrap_or(1);
                    self.line += 1;
                    self.line_start = self.pos;
                }
                _ if b == quote => {
                    if !triple {
                        self.pos += 1;
                        break;
                    }
                    if self.peek(1) == Some(quote) && self.peek(2) == Some(quote) {
                        self.pos += 3;
                        break;
                    }
                    self.pos += 1;
                }
                _ => {
                    let ch_len = self.src[self.pos..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    self.pos += ch_len;
                }
            }
        }

        self.push(TokenKind::String, start, start_line, start_col);
        Ok(())
    }

    fn scan_operator(&mut self) -> bool {
        let rest = &self.src[self.pos..];
        let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) else {
            return false;
        };

        match *op {
            "(" | "[" | "{" => self.paren_depth += 1,
            ")" | "]" | "}" => self.paren_depth = self.paren_depth.saturating_sub(1),
            _ => {}
        }

        let start = self.pos;
        self.pos += op.len();
        self.push_here(TokenKind::Op, start);
        true
    }
}

impl<'a> Iterator for PythonLexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(err) = self.decode_error.take() {
                self.pending.clear();
                self.state = State::Done;
                return Some(Err(err));
            }

            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            match self.state {
                State::Done => return None,
                State::Start => {
                    self.state = State::Running;
                    let span = Span::new(0, 0, 0, 0);
                    return Some(Ok(Token::new(TokenKind::Encoding, "utf-8", 0, span)));
                }
                State::Running => {
                    if let Err(err) = self.step() {
                        self.pending.clear();
                        self.state = State::Done;
                        return Some(Err(err));
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for PythonLexer<'_> {}
