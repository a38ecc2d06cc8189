//! Hover: schema information for the line under the cursor.

use serde::Serialize;

use crate::base::{Position, Span};
use crate::schema::{Cardinality, Schema, TypeId};
use crate::syntax::{Ast, NodeId};

/// Result of a hover request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverResult {
    /// Markdown contents to display.
    pub contents: String,
    /// The range the hover applies to (the tag token).
    pub span: Span,
    pub type_id: TypeId,
    pub cardinality: Cardinality,
}

/// Resolve the schema type of a node by walking its tag path from the root.
///
/// Returns `None` when some tag on the path is not allowed under its parent.
pub fn resolve_type(schema: &Schema, ast: &Ast, id: NodeId) -> Option<(TypeId, Cardinality)> {
    let mut path: Vec<NodeId> = ast.ancestors(id).collect();
    path.reverse();
    path.push(id);

    let mut resolved = (TypeId::root(), Cardinality { min: 0, max: None });
    for node in path {
        let tag = ast[node].tag()?;
        let rule = schema.substructure_rules(&resolved.0)?.get(tag)?;
        resolved = (rule.type_id.clone(), rule.cardinality);
    }
    Some(resolved)
}

/// Get hover information for the node at `position`.
pub fn hover(schema: &Schema, ast: &Ast, position: Position) -> Option<HoverResult> {
    let id = ast.node_at(position)?;
    let tag = ast[id].tokens().tag()?;
    let (type_id, cardinality) = resolve_type(schema, ast, id)?;

    let mut contents = format!("**{}**", tag.value);
    if let Some(label) = schema.label(&type_id) {
        contents.push_str(&format!(" ({})", label));
    }
    contents.push_str(&format!("\n\n`{}`\n\nCardinality: `{}`", type_id, cardinality));
    if let Some(values) = schema.enumeration_set(&type_id) {
        contents.push_str(&format!("\n\nAllowed values: {}", values.join(", ")));
    }

    Some(HoverResult {
        contents,
        span: tag.span,
        type_id,
        cardinality,
    })
}
