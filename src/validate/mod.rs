//! Schema validation
//!
//! Checks a built [`Ast`](crate::syntax::Ast) against a [`Schema`](crate::schema::Schema):
//! tag placement, occurrence bounds, payload shape and xref resolution.
//! Results are plain [`Diagnostic`]s; nothing here fails.

mod diagnostics;
mod engine;
mod payload;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector, Severity};
pub use engine::Validator;
