//! Fatal error types.
//!
//! Everything recoverable is reported as data (syntax errors and
//! diagnostics). Only contract breaches end a call with `Err`.

use thiserror::Error;

use crate::schema::SchemaError;
use crate::syntax::NodeId;

/// Errors that abort a whole parse/validate call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GedcomError {
    /// A node was found among its own ancestors while building the hierarchy.
    #[error("AST cycle detected at node {node} (line {line})")]
    Cycle { node: NodeId, line: u32 },

    /// A built-in schema could not be loaded.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl GedcomError {
    /// Check if this is a structural-integrity failure
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}
