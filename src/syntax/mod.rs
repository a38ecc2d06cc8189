//! Syntax tree for GEDCOM documents
//!
//! The AST is an arena of [`Node`]s addressed by [`NodeId`]. Each node is
//! one logical line; children are the lines nested beneath it.

mod builder;
mod node;

pub use builder::{HierarchyBuilder, PointerIndex, SyntaxTree, XrefIndex, build_tree};
pub use node::{Ast, Node, NodeId};
