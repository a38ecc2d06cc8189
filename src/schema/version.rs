//! Schema version selection from the header's `GEDC.VERS` value

use serde::Serialize;

use crate::syntax::{Ast, Node};

/// Built-in GEDCOM schema versions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SchemaVersion {
    /// GEDCOM 5.5.1 (legacy)
    Gedcom551,
    /// GEDCOM 7.0 (current)
    #[default]
    Gedcom70,
}

impl SchemaVersion {
    /// Select a schema from a `VERS` value such as `7.0` or `5.5.1`.
    ///
    /// Only the major component matters; anything that is not major
    /// version 5 resolves to the current schema.
    pub fn from_version_str(vers: &str) -> Self {
        match vers.trim().split('.').next().map(str::trim) {
            Some("5") => Self::Gedcom551,
            _ => Self::Gedcom70,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gedcom551 => "5.5.1",
            Self::Gedcom70 => "7.0",
        }
    }
}

/// Determine the schema version from `HEAD.GEDC.VERS`
pub fn detect_version(ast: &Ast) -> SchemaVersion {
    let vers = ast
        .roots()
        .iter()
        .map(|&id| &ast[id])
        .find(|n| n.tag() == Some("HEAD"))
        .and_then(|head| child(ast, head, "GEDC"))
        .and_then(|gedc| child(ast, gedc, "VERS"))
        .and_then(Node::value);

    let version = vers.map_or(SchemaVersion::default(), SchemaVersion::from_version_str);
    tracing::debug!(declared = ?vers, resolved = version.as_str(), "resolved schema version");
    version
}

fn child<'a>(ast: &'a Ast, node: &Node, tag: &str) -> Option<&'a Node> {
    node.children()
        .iter()
        .map(|&id| &ast[id])
        .find(|n| n.tag() == Some(tag))
}
