//! End-to-end validation scenarios.

use gedcom::{DiagnosticCode, Severity, Span};
use rstest::rstest;

use crate::helpers::document_helpers::*;
use crate::helpers::gedcom_fixtures::*;

// =============================================================================
// CLEAN DOCUMENTS
// =============================================================================

#[test]
fn test_minimal_documents_are_clean() {
    assert_clean(MINIMAL_70);
    assert_clean(MINIMAL_551);
    assert_clean(LINKED_FAMILY);
}

#[test]
fn test_empty_records_are_clean() {
    assert_clean("0 HEAD\n1 GEDC\n2 VERS 7.0\n0 @i1@ INDI\n0 TRLR\n");
    assert_clean("0 HEAD\n1 GEDC\n2 VERS 7.0\n0 @f1@ FAM\n0 TRLR\n");
}

#[test]
fn test_byte_order_mark_is_clean() {
    assert_clean(&format!("\u{feff}{}", MINIMAL_70));
}

#[test]
fn test_standard_documents_are_clean() {
    assert_clean(STANDARD_70);
    assert_clean(STANDARD_551);
}

#[rstest]
#[case::adoption("1 ADOP\n2 FAMC @F1@\n3 ADOP HUSB")]
#[case::baptism("1 BAPM\n2 DATE 1 JAN 1900")]
#[case::census("1 CENS\n2 DATE 1900")]
#[case::emigration("1 EMIG\n2 PLAC Hamburg")]
#[case::immigration("1 IMMI Y")]
#[case::naturalization("1 NATU\n2 DATE 1905")]
#[case::probate("1 PROB\n2 DATE 1950")]
#[case::will("1 WILL Y")]
#[case::generic_event("1 EVEN\n2 TYPE Custom")]
#[case::residence("1 RESI\n2 ADDR 1 Main Street")]
#[case::education("1 EDUC College")]
#[case::title("1 TITL Sir")]
#[case::religion("1 RELI Quaker")]
#[case::fact("1 FACT Left-handed\n2 TYPE Handedness")]
#[case::identifier("1 IDNO 42\n2 TYPE Parish")]
#[case::marriages("1 NMR 2")]
#[case::name_translation("1 NAME John /Doe/\n2 TRAN Jon /Doe/\n3 LANG no")]
#[case::non_event("1 NO MARR\n2 DATE FROM 1900 TO 1910")]
#[case::ordinance("1 BAPL\n2 TEMP SLAKE\n2 STAT COMPLETED\n3 DATE 1 JAN 1990")]
fn test_individual_structures_are_known(#[case] lines: &str) {
    assert_clean(&individual_with(&format!("{}\n1 FAMC @F1@\n0 @F1@ FAM", lines)));
}

#[rstest]
#[case::engagement("1 ENGA\n2 DATE 1877")]
#[case::banns("1 MARB\n2 DATE 1877")]
#[case::contract("1 MARC Y")]
#[case::license("1 MARL Y")]
#[case::settlement("1 MARS Y")]
#[case::divorce_filing("1 DIVF\n2 DATE 1901")]
#[case::residence("1 RESI\n2 PLAC Boston")]
#[case::generic_event("1 EVEN\n2 TYPE Housewarming")]
#[case::fact("1 FACT Farmers\n2 TYPE Occupation")]
#[case::spouse_ages("1 MARR\n2 HUSB\n3 AGE 28y\n2 WIFE\n3 AGE 24y")]
fn test_family_structures_are_known(#[case] lines: &str) {
    assert_clean(&family_with(lines));
}

#[test]
fn test_generic_event_requires_type() {
    let doc = parse(&individual_with("1 EVEN Founded a company"));
    assert_eq!(codes(&doc), vec![DiagnosticCode::MissingTag]);
    assert_eq!(doc.diagnostics[0].message, "Missing required tag TYPE in EVEN");
}

#[test]
fn test_name_translation_requires_language() {
    let doc = parse(&individual_with("1 NAME John /Doe/\n2 TRAN Jon /Doe/"));
    assert_eq!(codes(&doc), vec![DiagnosticCode::MissingTag]);
    assert_eq!(doc.diagnostics[0].message, "Missing required tag LANG in TRAN");
}

// =============================================================================
// BOOLEAN FLAGS
// =============================================================================

#[test]
fn test_marriage_flag_accepts_y() {
    assert_clean(&family_with("1 MARR Y"));
}

#[test]
fn test_marriage_flag_rejects_other_values() {
    let doc = parse(&family_with("1 MARR incorrect_value"));
    assert_eq!(codes(&doc), vec![DiagnosticCode::IncorrectValue]);
    assert_eq!(doc.diagnostics[0].span, Span::from_coords(4, 7, 4, 22));
}

#[test]
fn test_empty_flag_needs_substructure() {
    assert_clean(&family_with("1 MARR\n2 DATE 1 JAN 1900"));

    let doc = parse(&family_with("1 MARR"));
    assert_eq!(codes(&doc), vec![DiagnosticCode::IncorrectValue]);
    assert_eq!(doc.diagnostics[0].span, Span::from_coords(4, 2, 4, 6));
}

// =============================================================================
// REFERENCES
// =============================================================================

#[test]
fn test_undeclared_wife_is_the_only_error() {
    let doc = parse(DANGLING_WIFE);
    assert_eq!(codes(&doc), vec![DiagnosticCode::MissingRef]);
    assert_eq!(doc.diagnostics[0].span, Span::from_coords(8, 7, 8, 22));
    assert!(doc.diagnostics[0].message.contains("WIFE"));
}

#[test]
fn test_one_based_coordinates() {
    let doc = parse_one_based(DANGLING_WIFE);
    assert_eq!(doc.diagnostics[0].span, Span::from_coords(9, 8, 9, 23));

    let doc = parse_one_based("0 INDI\n");
    let missing: Vec<_> = doc
        .diagnostics
        .iter()
        .filter(|d| d.code == DiagnosticCode::MissingTag)
        .collect();
    assert_eq!(missing.len(), 2);
    assert!(missing.iter().all(|d| d.span == Span::from_coords(1, 1, 1, 1)));
}

// =============================================================================
// ENUMERATIONS
// =============================================================================

#[test]
fn test_sex_outside_enumeration() {
    let doc = parse(&individual_with("1 SEX NON_ENUM_TAG"));
    assert_eq!(codes(&doc), vec![DiagnosticCode::ShouldBeSetValue]);
    assert!(doc.diagnostics[0].message.contains("[M, F, X, U]"));
}

#[test]
fn test_sex_inside_enumeration() {
    assert_clean(&individual_with("1 SEX M"));
}

// =============================================================================
// STRUCTURE
// =============================================================================

#[test]
fn test_missing_header_and_trailer() {
    let doc = parse("0 @I1@ INDI\n");
    let messages: Vec<_> = doc.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["Missing required tag HEAD in root", "Missing required tag TRLR in root"]
    );
}

#[test]
fn test_missing_required_child_anchors_at_parent() {
    let doc = parse("0 HEAD\n1 GEDC\n0 TRLR\n");
    assert_eq!(codes(&doc), vec![DiagnosticCode::MissingTag]);
    assert_eq!(doc.diagnostics[0].span, Span::from_coords(1, 0, 1, 6));
}

#[test]
fn test_unknown_tag_is_a_warning() {
    let doc = parse(&individual_with("1 _HOBBY fishing\n2 NOTE not checked"));
    assert_eq!(codes(&doc), vec![DiagnosticCode::UnknownTag]);
    assert_eq!(doc.diagnostics[0].severity, Severity::Warning);
    assert!(!doc.has_errors());
}

#[test]
fn test_repeated_singleton() {
    let doc = parse(&individual_with("1 SEX M\n1 SEX F\n1 SEX U"));
    assert_eq!(
        codes(&doc),
        vec![DiagnosticCode::ManyOccurrences, DiagnosticCode::ManyOccurrences]
    );
}

#[test]
fn test_tagless_line_is_missing_tag() {
    let doc = parse(&individual_with("1 @P@"));
    assert_eq!(codes(&doc), vec![DiagnosticCode::Parser, DiagnosticCode::MissingTag]);
    assert_eq!(doc.diagnostics[1].span, Span::from_coords(4, 0, 4, 0));
}

#[test]
fn test_diagnostics_are_deterministic() {
    let text = "0 HEAD\n1 FOO\n0 @I1@ INDI\n1 SEX Q\n1 FAMS @F9@\nbroken\n";
    assert_eq!(parse(text).diagnostics, parse(text).diagnostics);
}
