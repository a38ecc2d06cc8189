//! Hierarchy reconstruction from flat line records.
//!
//! GEDCOM encodes nesting only through level numbers. The builder keeps a
//! stack of open ancestors: each new node pops every entry at the same or a
//! deeper level, then becomes a child of what remains on top (or a root when
//! the stack is empty). Parent spans are widened so a node's span always
//! covers all of its descendants.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::node::{Ast, Node, NodeId};
use crate::base::OriginBase;
use crate::error::GedcomError;
use crate::parser::{LineRecord, Token};

/// Pointer declarations (`@id@`, with delimiters) to the nodes declaring them
pub type PointerIndex = IndexMap<SmolStr, Vec<NodeId>>;

/// Xref usages (`@id@`, with delimiters) to every token that uses them
pub type XrefIndex = IndexMap<SmolStr, Vec<Token>>;

/// A built AST with its cross-reference indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub ast: Ast,
    pub pointer_index: PointerIndex,
    pub xref_index: XrefIndex,
}

/// Incremental, stack-based hierarchy builder
#[derive(Debug)]
pub struct HierarchyBuilder {
    ast: Ast,
    stack: Vec<NodeId>,
    pointer_index: PointerIndex,
    xref_index: XrefIndex,
}

impl HierarchyBuilder {
    pub fn new(origin: OriginBase) -> Self {
        Self {
            ast: Ast::new(origin),
            stack: Vec::new(),
            pointer_index: PointerIndex::default(),
            xref_index: XrefIndex::default(),
        }
    }

    pub fn push_record(&mut self, record: LineRecord) -> Result<NodeId, GedcomError> {
        self.push(Node::from_record(record))
    }

    /// Place one node into the hierarchy
    pub fn push(&mut self, node: Node) -> Result<NodeId, GedcomError> {
        let id = NodeId::new(self.ast.nodes.len());
        self.ast.nodes.push(node);
        self.ensure_acyclic(id)?;

        let level = self.ast[id].level;
        while self
            .stack
            .last()
            .is_some_and(|&top| self.ast[top].level >= level)
        {
            self.stack.pop();
        }

        match self.stack.last().copied() {
            None => {
                self.ast.nodes[id.index()].parent = None;
                self.ast.roots.push(id);
            }
            Some(parent) => {
                self.ast.nodes[id.index()].parent = Some(parent);
                self.ast.nodes[parent.index()].children.push(id);
                self.widen_ancestors(id)?;
            }
        }
        self.stack.push(id);
        self.index(id);

        tracing::trace!(node = %id, level, "placed node");
        Ok(id)
    }

    pub fn finish(self) -> SyntaxTree {
        tracing::debug!(
            nodes = self.ast.len(),
            roots = self.ast.roots.len(),
            pointers = self.pointer_index.len(),
            xrefs = self.xref_index.len(),
            "built hierarchy"
        );
        SyntaxTree {
            ast: self.ast,
            pointer_index: self.pointer_index,
            xref_index: self.xref_index,
        }
    }

    /// Fail if `id` is reachable from its own parent chain. A chain longer
    /// than the arena can only come from a loop elsewhere, so that fails too.
    fn ensure_acyclic(&self, id: NodeId) -> Result<(), GedcomError> {
        let mut current = self.ast.get(id).and_then(Node::parent);
        let mut steps = 0;
        while let Some(ancestor) = current {
            if ancestor == id || steps > self.ast.nodes.len() {
                return Err(self.cycle(id));
            }
            steps += 1;
            current = self.ast.get(ancestor).and_then(Node::parent);
        }
        Ok(())
    }

    /// Extend every ancestor's end to cover the span of `id`
    fn widen_ancestors(&mut self, id: NodeId) -> Result<(), GedcomError> {
        let end = self.ast[id].span.end;
        let mut current = self.ast[id].parent;
        let mut steps = 0;
        while let Some(ancestor) = current {
            if ancestor == id || steps > self.ast.nodes.len() {
                return Err(self.cycle(id));
            }
            steps += 1;
            let Some(node) = self.ast.nodes.get_mut(ancestor.index()) else {
                break;
            };
            if node.span.end < end {
                node.span.end = end;
            }
            current = node.parent;
        }
        Ok(())
    }

    fn index(&mut self, id: NodeId) {
        let node = &self.ast[id];
        if let Some(pointer) = node.tokens.pointer() {
            self.pointer_index
                .entry(pointer.value.clone())
                .or_default()
                .push(id);
        }
        if let Some(xref) = node.tokens.xref() {
            self.xref_index
                .entry(xref.value.clone())
                .or_default()
                .push(xref.clone());
        }
    }

    fn cycle(&self, id: NodeId) -> GedcomError {
        let line = self
            .ast
            .get(id)
            .map(|n| n.span.start.line)
            .unwrap_or_default();
        tracing::debug!(node = %id, line, "cycle in node hierarchy");
        GedcomError::Cycle { node: id, line }
    }
}

/// Build the hierarchy for a whole record stream
pub fn build_tree(
    records: impl IntoIterator<Item = LineRecord>,
    origin: OriginBase,
) -> Result<SyntaxTree, GedcomError> {
    let mut builder = HierarchyBuilder::new(origin);
    for record in records {
        builder.push_record(record)?;
    }
    Ok(builder.finish())
}
