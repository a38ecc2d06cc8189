//! Parsing and assertion helpers shared by integration tests.

use gedcom::syntax::Ast;
use gedcom::{
    Diagnostic, DiagnosticCode, DocumentConfig, GedcomDocument, OriginBase, parse_and_validate,
};

/// Parse with default configuration (zero-based, detected version).
pub fn parse(text: &str) -> GedcomDocument {
    parse_and_validate(text, &DocumentConfig::default()).expect("document should build")
}

/// Parse with one-based coordinates.
pub fn parse_one_based(text: &str) -> GedcomDocument {
    let config = DocumentConfig::new().with_origin_base(OriginBase::One);
    parse_and_validate(text, &config).expect("document should build")
}

pub fn codes(doc: &GedcomDocument) -> Vec<DiagnosticCode> {
    doc.diagnostics.iter().map(|d| d.code).collect()
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  {}", d))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert a document produces no diagnostics at all.
pub fn assert_clean(text: &str) {
    let doc = parse(text);
    assert!(
        doc.diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        doc.diagnostics.len(),
        render(&doc.diagnostics)
    );
}

/// Assert every node's span covers the spans of all its descendants.
pub fn assert_ranges_dominate(ast: &Ast) {
    for (id, node) in ast.iter() {
        for ancestor in ast.ancestors(id) {
            let outer = ast[ancestor].span();
            assert!(
                outer.end >= node.span().end && outer.start <= node.span().start,
                "node {} is not covered by ancestor {}",
                id,
                ancestor
            );
        }
    }
}

/// Assert each node's children are exactly the following run of lines one
/// level deeper (valid for documents without level jumps).
pub fn assert_children_contiguous(ast: &Ast) {
    let nodes: Vec<_> = ast.iter().collect();
    for (index, (_, node)) in nodes.iter().enumerate() {
        let expected: Vec<_> = nodes[index + 1..]
            .iter()
            .take_while(|(_, n)| n.level() > node.level())
            .filter(|(_, n)| n.level() == node.level() + 1)
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(node.children(), expected.as_slice());
    }
}
