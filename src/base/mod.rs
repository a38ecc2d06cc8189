//! Foundation types for the GEDCOM toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`Span`] - Line/character positions for tokens, nodes and diagnostics
//! - [`OriginBase`] - Zero- or one-based coordinate numbering
//! - [`LineIndex`] - Byte offset to line/character conversion
//!
//! This module has NO dependencies on other modules of the crate.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{OriginBase, Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
