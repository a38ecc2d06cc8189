//! Front end for GEDCOM text
//!
//! This module turns raw text into ordered line records:
//! - **logos** for modal lexing (see [`lexer`])
//! - a small line-grammar parser with per-line recovery (see [`parser`])
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos, mode switching) → Tokens + lexical errors
//!     ↓
//! Line parser → LineRecords + grammar errors
//!     ↓
//! Hierarchy builder (crate::syntax) → AST
//! ```

#[allow(clippy::module_inception)]
mod parser;

mod errors;
mod lexer;
mod token;

pub use errors::{SyntaxError, SyntaxErrorKind};
pub use lexer::{LexResult, tokenize};
pub use parser::{LineParse, LineRecord, parse_lines};
pub use token::{Token, TokenKind, TokenMap};
