//! Folding ranges tests for the IDE layer.

use gedcom::ide::{FoldingRange, folding_ranges};

use crate::helpers::document_helpers::*;
use crate::helpers::gedcom_fixtures::*;

fn range(start_line: u32, end_line: u32) -> FoldingRange {
    FoldingRange { start_line, end_line }
}

#[test]
fn test_folding_ranges_for_linked_family() {
    let doc = parse(LINKED_FAMILY);
    assert_eq!(
        folding_ranges(&doc.ast),
        vec![
            range(0, 2),
            range(1, 2),
            range(3, 6),
            range(7, 10),
            range(11, 15),
            range(13, 14),
            range(16, 20),
        ]
    );
}

#[test]
fn test_leaf_lines_do_not_fold() {
    let doc = parse("0 TRLR\n0 @I1@ INDI\n");
    assert!(folding_ranges(&doc.ast).is_empty());
}

#[test]
fn test_folding_range_has_lines() {
    let doc = parse(DANGLING_WIFE);
    for range in folding_ranges(&doc.ast) {
        assert!(
            range.end_line > range.start_line,
            "Folding range should span more than one line"
        );
    }
}
