//! Diagnostics: schema validation reporting.
//!
//! Every non-fatal problem found in a document ends up as a [`Diagnostic`]:
//! syntax errors from the front end are converted here, and the validation
//! engine reports through a [`DiagnosticCollector`].

use std::fmt;

use serde::Serialize;

use crate::base::Span;
use crate::parser::{SyntaxError, SyntaxErrorKind};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
        }
    }
}

/// Stable diagnostic codes.
///
/// The string forms returned by [`DiagnosticCode::as_str`] are part of the
/// public contract; editor integrations match on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCode {
    /// Tag not permitted under its parent type
    UnknownTag,
    /// Node without a tag, or a required child tag absent
    MissingTag,
    /// Required value absent
    MissingValue,
    /// Value of the wrong shape
    IncorrectValue,
    /// Value outside its enumeration
    ShouldBeSetValue,
    /// Xref missing or naming no declared pointer
    MissingRef,
    /// Tag repeated beyond its maximum
    ManyOccurrences,
    /// Unrecognized characters in the source
    Lexer,
    /// Line does not match the line grammar
    Parser,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownTag => "UnknownTag",
            Self::MissingTag => "MissingTag",
            Self::MissingValue => "MissingValue",
            Self::IncorrectValue => "IncorrectValue",
            Self::ShouldBeSetValue => "ShouldBeSetValue",
            Self::MissingRef => "MissingRef",
            Self::ManyOccurrences => "ManyOccurrences",
            Self::Lexer => "Lexer",
            Self::Parser => "Parser",
        }
    }

    /// Severity the code is reported with
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnknownTag | Self::Lexer | Self::Parser => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub severity: Severity,
    /// Source range, in the document's configured origin.
    pub span: Span,
    /// Optional suggestion for fixing the problem.
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with the code's default severity.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            severity: code.default_severity(),
            span,
            hint: None,
        }
    }

    /// Set the hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(error: SyntaxError) -> Self {
        let code = match error.kind {
            SyntaxErrorKind::Lexical => DiagnosticCode::Lexer,
            SyntaxErrorKind::Grammar => DiagnosticCode::Parser,
        };
        Self {
            code,
            message: error.message,
            severity: code.default_severity(),
            span: error.span,
            hint: error.hint,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {}",
            self.span.start.line, self.span.start.character, self.code, self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  hint: {}", hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during validation.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add every diagnostic from `other`, keeping their order.
    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(other);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector, returning diagnostics in report order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
