//! Line parser for GEDCOM
//!
//! Enforces the per-line grammar over the token stream:
//!
//! ```text
//! line := Level ( Pointer Tag | Tag Xref? Value? )
//! ```
//!
//! Supports error recovery: a line that breaks the grammar is reported once
//! and parsing resumes on the next line.

use super::errors::SyntaxError;
use super::token::{Token, TokenKind, TokenMap};
use crate::base::Span;

/// One parsed GEDCOM line, before nesting is reconstructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub level: u32,
    pub tokens: TokenMap,
    /// Union of the spans of `tokens`
    pub span: Span,
}

impl LineRecord {
    fn new(level: Token) -> Self {
        // Digit runs too long for u32 fall back to the root level
        let value = level.value.parse().unwrap_or(0);
        let span = level.span;
        let mut tokens = TokenMap::new();
        tokens.insert(level);
        Self {
            level: value,
            tokens,
            span,
        }
    }

    fn push(&mut self, token: Token) {
        self.span = self.span.cover(token.span);
        self.tokens.insert(token);
    }
}

/// Parse result containing the line records and any grammar errors
#[derive(Debug, Clone, Default)]
pub struct LineParse {
    pub records: Vec<LineRecord>,
    pub errors: Vec<SyntaxError>,
}

impl LineParse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a token stream into line records
pub fn parse_lines(tokens: &[Token]) -> LineParse {
    let mut parser = Parser::default();
    for line in tokens.chunk_by(|a, b| a.span.start.line == b.span.start.line) {
        parser.parse_line(line);
    }
    tracing::debug!(
        records = parser.records.len(),
        errors = parser.errors.len(),
        "parsed lines"
    );
    LineParse {
        records: parser.records,
        errors: parser.errors,
    }
}

/// The parser state
#[derive(Default)]
struct Parser {
    records: Vec<LineRecord>,
    errors: Vec<SyntaxError>,
}

/// Position within the tokens of a single line
struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            let token = self.tokens[self.pos].clone();
            self.pos += 1;
            Some(token)
        } else {
            None
        }
    }
}

impl Parser {
    fn parse_line(&mut self, line: &[Token]) {
        let mut cursor = Cursor::new(line);

        let Some(level) = cursor.eat(TokenKind::Level) else {
            // Without a level the line cannot be placed in the hierarchy
            if let Some(first) = cursor.current() {
                self.errors.push(
                    SyntaxError::grammar(
                        format!("expected LEVEL at start of line, found {}", first.kind),
                        first.span,
                    )
                    .with_hint("every GEDCOM line starts with its nesting level"),
                );
            }
            return;
        };
        let mut record = LineRecord::new(level);

        if let Some(pointer) = cursor.eat(TokenKind::Pointer) {
            record.push(pointer);
            match cursor.eat(TokenKind::Tag) {
                Some(tag) => record.push(tag),
                None => {
                    self.expected("TAG after pointer", &cursor, &record);
                    self.records.push(record);
                    return;
                }
            }
        } else if let Some(tag) = cursor.eat(TokenKind::Tag) {
            record.push(tag);
            if let Some(xref) = cursor.eat(TokenKind::Xref) {
                record.push(xref);
            }
            if let Some(value) = cursor.eat(TokenKind::Value) {
                record.push(value);
            }
        } else {
            self.expected("POINTER or TAG", &cursor, &record);
            self.records.push(record);
            return;
        }

        if let Some(extra) = cursor.current() {
            self.errors.push(SyntaxError::grammar(
                format!("unexpected {} after end of line", extra.kind),
                extra.span,
            ));
        }
        self.records.push(record);
    }

    /// Report a missing token; anchored at the offending token, or at the
    /// record so far when the line ended early
    fn expected(&mut self, what: &str, cursor: &Cursor<'_>, record: &LineRecord) {
        let error = match cursor.current() {
            Some(found) => SyntaxError::grammar(
                format!("expected {}, found {}", what, found.kind),
                found.span,
            ),
            None => SyntaxError::grammar(
                format!("expected {}, found end of line", what),
                record.span,
            ),
        };
        self.errors.push(error);
    }
}
