//! Semantic token tests for the IDE layer.

use gedcom::ide::{SemanticToken, TokenType, encode, modifiers, semantic_tokens};
use rstest::rstest;

use crate::helpers::document_helpers::*;
use crate::helpers::gedcom_fixtures::*;

fn tokens(text: &str) -> Vec<SemanticToken> {
    semantic_tokens(&parse(text).ast)
}

#[test]
fn test_every_token_is_reported() {
    let tokens = tokens(LINKED_FAMILY);
    assert_eq!(tokens.len(), 62);
    assert_eq!(encode(&tokens).len(), 62 * 5);

    let declarations = tokens
        .iter()
        .filter(|t| t.modifiers == modifiers::DECLARATION)
        .count();
    let references = tokens
        .iter()
        .filter(|t| t.modifiers == modifiers::REFERENCE)
        .count();
    assert_eq!(declarations, 4);
    assert_eq!(references, 6);
}

#[test]
fn test_tokens_in_document_order() {
    let tokens = tokens(LINKED_FAMILY);
    for pair in tokens.windows(2) {
        assert!(
            (pair[0].line, pair[0].col) < (pair[1].line, pair[1].col),
            "{:?} should precede {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[rstest]
#[case("0 NOTE plain", 5)]
#[case("0 NOTE héllo", 5)]
#[case("0 NOTE a😀b", 4)]
fn test_value_length_in_utf16(#[case] text: &str, #[case] expected: u32) {
    let value = tokens(text)
        .into_iter()
        .find(|t| t.token_type == TokenType::String)
        .unwrap();
    assert_eq!(value.length, expected);
}

#[test]
fn test_legend_indices() {
    for (index, name) in TokenType::LEGEND.iter().enumerate() {
        let token_type = match *name {
            "number" => TokenType::Number,
            "variable" => TokenType::Variable,
            "keyword" => TokenType::Keyword,
            "string" => TokenType::String,
            "comment" => TokenType::Comment,
            _ => TokenType::Unknown,
        };
        assert_eq!(token_type.to_lsp_index() as usize, index);
    }
    assert_eq!(modifiers::LEGEND[2], "reference");
}

#[test]
fn test_encoding_across_lines() {
    let data = encode(&tokens("0 @I1@ INDI\n1 FAMS @F1@\n"));
    assert_eq!(
        data,
        vec![
            0, 0, 1, 0, 0, // 0
            0, 2, 4, 1, modifiers::DECLARATION, // @I1@
            0, 5, 4, 2, 0, // INDI
            1, 0, 1, 0, 0, // 1
            0, 2, 4, 2, 0, // FAMS
            0, 5, 4, 1, modifiers::REFERENCE, // @F1@
        ]
    );
}
