//! Logos-based modal lexer for GEDCOM lines
//!
//! Each lexer mode is its own logos token enum; the driver switches between
//! them with [`logos::Lexer::morph`]:
//!
//! ```text
//! main ── Level ──────────────► main
//! main ── Pointer ────────────► hasPointer ── Tag ──► main
//! main ── Tag ────────────────► hasNotPointer ── Xref ──► afterXref ── Value ──► main
//!                                             └─ Value ─────────────────────────► main
//! any  ── Newline ────────────► main
//! ```

use logos::Logos;
use std::ops::Range;
use text_size::{TextRange, TextSize};

use super::errors::SyntaxError;
use super::token::{Token, TokenKind};
use crate::base::{LineIndex, OriginBase};

/// Tokens and lexical errors of one document, both in source order
#[derive(Debug, Clone, Default)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<SyntaxError>,
}

/// Tokens recognized at the start of a line and after a pointer declaration's tag
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum MainToken {
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[0-9]+", priority = 10)]
    Level,

    #[regex(r"@[A-Za-z0-9_]+@")]
    Pointer,

    #[regex(r"[A-Z0-9_]+")]
    Tag,
}

/// After `Level Pointer`: only the record tag may follow
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum PointerModeToken {
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[A-Z0-9_]+")]
    Tag,
}

/// After `Level Tag`: an optional xref usage, then the line value
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum NoPointerModeToken {
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"@[A-Za-z0-9_]+@", priority = 10)]
    Xref,

    // Text that merely starts with '@' (calendar escapes such as `@#DJULIAN@`,
    // an unterminated `@abc`) is a value. A complete `@id@` always lexes
    // longer as an Xref than any value alternative starting at the same '@'.
    #[regex(
        r"[^ \t\r\n@][^\r\n]*|@[^A-Za-z0-9_\r\n][^\r\n]*|@[A-Za-z0-9_]+[^@A-Za-z0-9_\r\n][^\r\n]*|@[A-Za-z0-9_]*"
    )]
    Value,
}

/// After an xref usage: the rest of the line is the value
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum ValueModeToken {
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[^ \t\r\n][^\r\n]*")]
    Value,
}

const BYTE_ORDER_MARK: char = '\u{feff}';

enum Mode<'a> {
    Main(logos::Lexer<'a, MainToken>),
    HasPointer(logos::Lexer<'a, PointerModeToken>),
    HasNotPointer(logos::Lexer<'a, NoPointerModeToken>),
    AfterXref(logos::Lexer<'a, ValueModeToken>),
}

/// Tokenize a whole document.
///
/// Never fails: runs of characters no token accepts are reported as one
/// lexical error each and skipped. A leading byte order mark is not part of
/// the document, and columns on the first line do not count it.
pub fn tokenize(text: &str, origin: OriginBase) -> LexResult {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut sink = TokenSink::new(text, origin);
    let mut mode = Mode::Main(MainToken::lexer(text));

    loop {
        mode = match mode {
            Mode::Main(mut lex) => match lex.next() {
                None => break,
                Some(Ok(MainToken::Newline)) => Mode::Main(lex),
                Some(Ok(MainToken::Level)) => {
                    sink.token(TokenKind::Level, lex.slice(), lex.span());
                    Mode::Main(lex)
                }
                Some(Ok(MainToken::Pointer)) => {
                    sink.token(TokenKind::Pointer, lex.slice(), lex.span());
                    Mode::HasPointer(lex.morph())
                }
                Some(Ok(MainToken::Tag)) => {
                    sink.token(TokenKind::Tag, lex.slice(), lex.span());
                    Mode::HasNotPointer(lex.morph())
                }
                Some(Err(())) => {
                    sink.unexpected(lex.span());
                    Mode::Main(lex)
                }
            },
            Mode::HasPointer(mut lex) => match lex.next() {
                None => break,
                Some(Ok(PointerModeToken::Newline)) => Mode::Main(lex.morph()),
                Some(Ok(PointerModeToken::Tag)) => {
                    sink.token(TokenKind::Tag, lex.slice(), lex.span());
                    Mode::Main(lex.morph())
                }
                Some(Err(())) => {
                    sink.unexpected(lex.span());
                    Mode::HasPointer(lex)
                }
            },
            Mode::HasNotPointer(mut lex) => match lex.next() {
                None => break,
                Some(Ok(NoPointerModeToken::Newline)) => Mode::Main(lex.morph()),
                Some(Ok(NoPointerModeToken::Xref)) => {
                    sink.token(TokenKind::Xref, lex.slice(), lex.span());
                    Mode::AfterXref(lex.morph())
                }
                Some(Ok(NoPointerModeToken::Value)) => {
                    sink.token(TokenKind::Value, lex.slice(), lex.span());
                    Mode::Main(lex.morph())
                }
                Some(Err(())) => {
                    sink.unexpected(lex.span());
                    Mode::HasNotPointer(lex)
                }
            },
            Mode::AfterXref(mut lex) => match lex.next() {
                None => break,
                Some(Ok(ValueModeToken::Newline)) => Mode::Main(lex.morph()),
                Some(Ok(ValueModeToken::Value)) => {
                    sink.token(TokenKind::Value, lex.slice(), lex.span());
                    Mode::Main(lex.morph())
                }
                Some(Err(())) => {
                    sink.unexpected(lex.span());
                    Mode::AfterXref(lex)
                }
            },
        };
    }

    let result = sink.finish();
    tracing::debug!(
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "tokenized document"
    );
    result
}

/// Collects tokens and coalesces adjacent unrecognized input into single errors
struct TokenSink<'a> {
    text: &'a str,
    index: LineIndex<'a>,
    origin: OriginBase,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
    pending: Option<Range<usize>>,
}

impl<'a> TokenSink<'a> {
    fn new(text: &'a str, origin: OriginBase) -> Self {
        Self {
            text,
            index: LineIndex::new(text),
            origin,
            tokens: Vec::new(),
            errors: Vec::new(),
            pending: None,
        }
    }

    fn text_range(range: &Range<usize>) -> TextRange {
        TextRange::new(
            TextSize::new(range.start as u32),
            TextSize::new(range.end as u32),
        )
    }

    fn token(&mut self, kind: TokenKind, slice: &str, range: Range<usize>) {
        self.flush_pending();
        let span = self
            .origin
            .shift_span(self.index.span(Self::text_range(&range)));
        self.tokens.push(Token::new(kind, slice, span));
    }

    fn unexpected(&mut self, range: Range<usize>) {
        match &mut self.pending {
            Some(pending) if pending.end == range.start => pending.end = range.end,
            _ => {
                self.flush_pending();
                self.pending = Some(range);
            }
        }
    }

    fn flush_pending(&mut self) {
        let Some(range) = self.pending.take() else {
            return;
        };
        let skipped = &self.text[range.clone()];
        let first = skipped.chars().next().unwrap_or_default();
        let span = self
            .origin
            .shift_span(self.index.span(Self::text_range(&range)));
        let message = format!(
            "unexpected character {:?}, skipped {} character(s)",
            first,
            skipped.chars().count()
        );
        self.errors.push(SyntaxError::lexical(message, span));
    }

    fn finish(mut self) -> LexResult {
        self.flush_pending();
        LexResult {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}
