//! The top-level pipeline: text in, AST plus diagnostics out.

use serde::Serialize;

use crate::base::{OriginBase, Position, Span};
use crate::error::GedcomError;
use crate::parser::{TokenKind, parse_lines, tokenize};
use crate::schema::{Schema, SchemaVersion, detect_version};
use crate::syntax::{Ast, NodeId, PointerIndex, XrefIndex, build_tree};
use crate::validate::{Diagnostic, DiagnosticCollector, Severity, Validator};

/// Options for one parse/validate call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentConfig {
    /// Coordinate origin of every reported position
    pub origin_base: OriginBase,
    /// Force a schema instead of reading `HEAD.GEDC.VERS`
    pub schema_version: Option<SchemaVersion>,
}

impl DocumentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin_base(mut self, origin_base: OriginBase) -> Self {
        self.origin_base = origin_base;
        self
    }

    pub fn with_schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = Some(version);
        self
    }
}

/// A parsed and validated GEDCOM document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GedcomDocument {
    pub ast: Ast,
    /// `@id@` → declaring nodes, in first-declaration order
    pub pointer_index: PointerIndex,
    /// `@id@` → every xref token using it, in document order
    pub xref_index: XrefIndex,
    /// Lexical, then grammar, then schema diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Schema the document was validated against
    pub version: SchemaVersion,
}

impl GedcomDocument {
    /// Nodes declaring `id` (delimiters included, e.g. `@I1@`)
    pub fn declarations(&self, id: &str) -> &[NodeId] {
        self.pointer_index
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Go to declaration: spans of the pointer tokens declaring the
    /// identifier under `position` (an xref usage or a pointer itself)
    pub fn definition_of(&self, position: Position) -> Vec<Span> {
        let Some(id) = self.identifier_at(position) else {
            return Vec::new();
        };
        self.declarations(id)
            .iter()
            .filter_map(|&node| self.ast[node].tokens().pointer())
            .map(|token| token.span)
            .collect()
    }

    /// Find usages: spans of every xref naming the identifier under `position`
    pub fn references_to(&self, position: Position) -> Vec<Span> {
        let Some(id) = self.identifier_at(position) else {
            return Vec::new();
        };
        self.xref_index
            .get(id)
            .map(|tokens| tokens.iter().map(|t| t.span).collect())
            .unwrap_or_default()
    }

    fn identifier_at(&self, position: Position) -> Option<&str> {
        let (_, token) = self.ast.token_at(position)?;
        matches!(token.kind, TokenKind::Pointer | TokenKind::Xref).then_some(token.value.as_str())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Parse `text` into a hierarchy and validate it against the resolved schema.
///
/// Malformed input never fails the call; it shows up in
/// [`GedcomDocument::diagnostics`]. Only a corrupted node hierarchy or an
/// unloadable built-in schema returns `Err`.
pub fn parse_and_validate(
    text: &str,
    config: &DocumentConfig,
) -> Result<GedcomDocument, GedcomError> {
    let lexed = tokenize(text, config.origin_base);
    let parsed = parse_lines(&lexed.tokens);
    let tree = build_tree(parsed.records, config.origin_base)?;

    let version = config
        .schema_version
        .unwrap_or_else(|| detect_version(&tree.ast));
    let schema = Schema::builtin(version)?;

    let mut diagnostics = DiagnosticCollector::new();
    diagnostics.extend(lexed.errors.into_iter().map(Diagnostic::from));
    diagnostics.extend(parsed.errors.into_iter().map(Diagnostic::from));
    diagnostics.extend(Validator::new(schema, &tree.ast, &tree.pointer_index).validate_document());

    tracing::debug!(
        version = version.as_str(),
        nodes = tree.ast.len(),
        diagnostics = diagnostics.diagnostics().len(),
        "parsed and validated document"
    );

    Ok(GedcomDocument {
        ast: tree.ast,
        pointer_index: tree.pointer_index,
        xref_index: tree.xref_index,
        diagnostics: diagnostics.finish(),
        version,
    })
}
