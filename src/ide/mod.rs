//! IDE features: High-level APIs for LSP handlers.
//!
//! Each function corresponds to an LSP request and works on a built
//! [`Ast`](crate::syntax::Ast), optionally with a [`Schema`](crate::schema::Schema).
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at LSP boundary
//!
//! Go-to-definition and find-references live on
//! [`GedcomDocument`](crate::GedcomDocument) because they need its indices.

mod folding;
mod hover;
mod semantic_tokens;

pub use folding::{FoldingRange, folding_ranges};
pub use hover::{HoverResult, hover, resolve_type};
pub use semantic_tokens::{SemanticToken, TokenType, encode, modifiers, semantic_tokens};
