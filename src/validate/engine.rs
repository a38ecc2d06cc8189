//! Schema-driven validation over a built AST.

use crate::base::Span;
use crate::schema::{Schema, TypeId};
use crate::syntax::{Ast, NodeId, PointerIndex};

use super::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector};
use super::payload::check_payload;

/// Occurrences still owed (`min`) and still allowed (`max`) for one rule
#[derive(Debug, Clone, Copy)]
struct Remaining {
    min: u32,
    max: Option<u32>,
}

/// Validates sibling lists against the child tables of a [`Schema`].
///
/// Walks parent before children and siblings left to right, so the
/// diagnostic order is fully determined by the document.
pub struct Validator<'a> {
    schema: &'a Schema,
    ast: &'a Ast,
    pointers: &'a PointerIndex,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a Schema, ast: &'a Ast, pointers: &'a PointerIndex) -> Self {
        Self {
            schema,
            ast,
            pointers,
        }
    }

    /// Validate the whole document, starting at the roots
    pub fn validate_document(&self) -> Vec<Diagnostic> {
        self.validate(self.ast.roots(), &TypeId::root(), None)
    }

    /// Validate `nodes` as the children of `parent` (typed `parent_type`)
    pub fn validate(
        &self,
        nodes: &[NodeId],
        parent_type: &TypeId,
        parent: Option<NodeId>,
    ) -> Vec<Diagnostic> {
        let mut collector = DiagnosticCollector::new();
        self.validate_into(&mut collector, nodes, parent_type, parent);
        tracing::debug!(
            errors = collector.error_count(),
            warnings = collector.warning_count(),
            "validated document"
        );
        collector.finish()
    }

    fn validate_into(
        &self,
        out: &mut DiagnosticCollector,
        nodes: &[NodeId],
        parent_type: &TypeId,
        parent: Option<NodeId>,
    ) {
        let Some(rules) = self.schema.substructure_rules(parent_type) else {
            tracing::trace!(type_id = %parent_type, "opaque type, children not checked");
            return;
        };
        let mut remaining: Vec<Remaining> = rules
            .values()
            .map(|rule| Remaining {
                min: rule.cardinality.min,
                max: rule.cardinality.max,
            })
            .collect();
        let context = self.context_name(parent_type);

        for &id in nodes {
            let node = &self.ast[id];

            let Some(tag_token) = node.tokens().tag() else {
                out.add(Diagnostic::new(
                    DiagnosticCode::MissingTag,
                    "Missing required tag",
                    Span::empty(node.span().start),
                ));
                continue;
            };
            let tag = tag_token.value.as_str();

            let Some((index, _, rule)) = rules.get_full(tag) else {
                tracing::trace!(tag, parent = context, "unknown tag");
                out.add(Diagnostic::new(
                    DiagnosticCode::UnknownTag,
                    format!("Unknown tag {} in {}", tag, context),
                    tag_token.span,
                ));
                continue;
            };

            let counter = &mut remaining[index];
            match counter.max {
                Some(0) => out.add(
                    Diagnostic::new(
                        DiagnosticCode::ManyOccurrences,
                        format!("Too many occurrences of {} in {}", tag, context),
                        tag_token.span,
                    )
                    .with_hint(format!("cardinality of {} here is {}", tag, rule.cardinality)),
                ),
                Some(ref mut max) => *max -= 1,
                None => {}
            }
            counter.min = counter.min.saturating_sub(1);

            if let Some(diagnostic) = check_payload(self.schema, &rule.type_id, node, self.pointers) {
                out.add(diagnostic);
            }

            self.validate_into(out, node.children(), &rule.type_id, Some(id));
        }

        let anchor = match parent {
            Some(parent) => self.ast[parent].span(),
            None => Span::empty(self.ast.origin().origin()),
        };
        for ((tag, _), counter) in rules.iter().zip(&remaining) {
            if counter.min > 0 {
                out.add(Diagnostic::new(
                    DiagnosticCode::MissingTag,
                    format!("Missing required tag {} in {}", tag, context),
                    anchor,
                ));
            }
        }
    }

    /// How a parent type is named in messages
    fn context_name(&self, type_id: &TypeId) -> &'a str {
        if type_id.is_root() {
            return "root";
        }
        self.schema
            .tag_of(type_id)
            .map_or("parent", |tag| tag.as_str())
    }
}
