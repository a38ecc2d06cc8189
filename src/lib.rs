//! # gedcom-lsp-core
//!
//! Core library for GEDCOM parsing, AST construction, and schema validation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (folding, semantic tokens, hover)
//!   ↓
//! validate  → Schema validation, Diagnostic/Severity
//!   ↓
//! schema    → Versioned schema model (GEDCOM 5.5.1 / 7.0)
//!   ↓
//! syntax    → Arena AST, hierarchy builder, pointer/xref indices
//!   ↓
//! parser    → Logos lexer, line parser, SyntaxError
//!   ↓
//! base      → Primitives (Span/Position, OriginBase, LineIndex)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use gedcom::{DocumentConfig, parse_and_validate};
//!
//! let doc = parse_and_validate("0 HEAD\n1 GEDC\n2 VERS 7.0\n0 TRLR\n", &DocumentConfig::default())
//!     .unwrap();
//! assert!(doc.diagnostics.is_empty());
//! assert_eq!(doc.ast.roots().len(), 2);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → schema → validate → ide)
// ============================================================================

/// Foundation types: Span/Position, OriginBase, LineIndex
pub mod base;

/// Parser: Logos lexer, line parser, syntax errors
pub mod parser;

/// Syntax: arena AST and hierarchy reconstruction
pub mod syntax;

/// Schema: versioned validation tables
pub mod schema;

/// Validation engine and diagnostics
pub mod validate;

/// IDE features: folding, semantic tokens, hover
pub mod ide;

mod document;
mod error;

// Re-export foundation types
pub use base::{OriginBase, Position, Span};

// Re-export the pipeline
pub use document::{DocumentConfig, GedcomDocument, parse_and_validate};
pub use error::GedcomError;
pub use schema::{Schema, SchemaError, SchemaVersion};
pub use syntax::{Ast, Node, NodeId};
pub use validate::{Diagnostic, DiagnosticCode, Severity};
