//! AST node types.
//!
//! Nodes live in an arena owned by [`Ast`]. Children are owned through the
//! arena by index; `parent` is a plain back-reference used for range
//! propagation and lookups, never for ownership.

use std::fmt;
use std::ops::Index;

use serde::Serialize;

use crate::base::{OriginBase, Position, Span};
use crate::parser::{LineRecord, Token, TokenKind, TokenMap};

/// Index of a node inside its [`Ast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One logical GEDCOM line plus its nested substructure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub(crate) level: u32,
    pub(crate) tokens: TokenMap,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) span: Span,
}

impl Node {
    /// Create a detached node; its span starts as the union of its tokens
    pub fn new(level: u32, tokens: TokenMap) -> Self {
        let span = tokens.span().unwrap_or_default();
        Self {
            level,
            tokens,
            children: Vec::new(),
            parent: None,
            span,
        }
    }

    pub fn from_record(record: LineRecord) -> Self {
        Self {
            level: record.level,
            tokens: record.tokens,
            children: Vec::new(),
            parent: None,
            span: record.span,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    pub fn token(&self, kind: TokenKind) -> Option<&Token> {
        self.tokens.get(kind)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Bounding box of the line and all of its descendants
    pub fn span(&self) -> Span {
        self.span
    }

    /// Tag letters, if the line carried a tag
    pub fn tag(&self) -> Option<&str> {
        self.tokens.tag().map(|t| t.value.as_str())
    }

    /// Trimmed line value; `None` when absent or blank
    pub fn value(&self) -> Option<&str> {
        self.tokens
            .value()
            .map(|t| t.value.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn pointer(&self) -> Option<&str> {
        self.tokens.pointer().map(|t| t.value.as_str())
    }

    pub fn xref(&self) -> Option<&str> {
        self.tokens.xref().map(|t| t.value.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-backed forest of GEDCOM nodes, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ast {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) origin: OriginBase,
}

impl Ast {
    pub(crate) fn new(origin: OriginBase) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            origin,
        }
    }

    /// Top-level (level 0 or unattached) nodes, in document order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Coordinate origin the spans of this tree are expressed in
    pub fn origin(&self) -> OriginBase {
        self.origin
    }

    /// All nodes with their ids, in document order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    /// Ancestors of `id`, nearest first. Stops after as many steps as there
    /// are nodes, so a corrupted parent chain cannot loop forever.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.get(id).and_then(Node::parent);
        let mut budget = self.nodes.len();
        std::iter::from_fn(move || {
            let next = current?;
            if budget == 0 {
                return None;
            }
            budget -= 1;
            current = self.get(next).and_then(Node::parent);
            Some(next)
        })
    }

    /// The deepest node whose bounding box contains `position`
    pub fn node_at(&self, position: Position) -> Option<NodeId> {
        let mut found = None;
        let mut candidates = self.roots.as_slice();
        while let Some(&hit) = candidates
            .iter()
            .find(|&&id| self[id].span.contains(position))
        {
            found = Some(hit);
            candidates = &self[hit].children;
        }
        found
    }

    /// The token under `position`, with the node carrying it
    pub fn token_at(&self, position: Position) -> Option<(NodeId, &Token)> {
        let id = self.node_at(position)?;
        self[id]
            .tokens
            .iter()
            .find(|t| t.span.contains(position))
            .map(|t| (id, t))
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
