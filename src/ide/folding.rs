//! Folding ranges: one foldable region per node with substructure.

use serde::Serialize;

use crate::syntax::{Ast, NodeId};

/// A foldable line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldingRange {
    pub start_line: u32,
    pub end_line: u32,
}

/// Folding ranges for every node that has children, parent before children.
pub fn folding_ranges(ast: &Ast) -> Vec<FoldingRange> {
    let mut ranges = Vec::new();
    collect(ast, ast.roots(), &mut ranges);
    ranges
}

fn collect(ast: &Ast, nodes: &[NodeId], out: &mut Vec<FoldingRange>) {
    for &id in nodes {
        let node = &ast[id];
        if !node.has_children() {
            continue;
        }
        let span = node.span();
        out.push(FoldingRange {
            start_line: span.start.line,
            end_line: span.end.line,
        });
        collect(ast, node.children(), out);
    }
}
