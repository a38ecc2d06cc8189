//! Syntax error types
//!
//! Both recoverable channels of the front end report through [`SyntaxError`]:
//! - lexical errors (unrecognized characters, skipped and reported)
//! - grammar errors (a line that does not match `Level (Pointer Tag | Tag Xref? Value?)`)

use std::fmt;

use serde::Serialize;

use crate::base::Span;

/// Which front-end stage produced a syntax error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxErrorKind {
    /// The tokenizer met characters no token of the current mode accepts
    Lexical,
    /// The line parser met a token sequence the line grammar rejects
    Grammar,
}

impl SyntaxErrorKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical error",
            Self::Grammar => "grammar error",
        }
    }
}

/// A recoverable syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location, already translated to the configured origin
    pub span: Span,
    /// Producing stage
    pub kind: SyntaxErrorKind,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl SyntaxError {
    /// Create a new syntax error with minimal information
    pub fn new(message: impl Into<String>, span: Span, kind: SyntaxErrorKind) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            hint: None,
        }
    }

    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span, SyntaxErrorKind::Lexical)
    }

    pub fn grammar(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span, SyntaxErrorKind::Grammar)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.span.start.line,
            self.span.start.character,
            self.kind.as_str(),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  hint: {}", hint)?;
        }
        Ok(())
    }
}
