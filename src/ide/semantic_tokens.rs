//! Semantic tokens: syntax highlighting straight from the token stream.
//!
//! Every token of every node is reported in document order. The legend
//! matches what editor clients register for GEDCOM:
//!
//! | token  | type       | modifiers     |
//! |--------|------------|---------------|
//! | LEVEL  | `number`   |               |
//! | POINTER| `variable` | `declaration` |
//! | XREF   | `variable` | `reference`   |
//! | TAG    | `keyword`  |               |
//! | VALUE  | `string`   |               |

use serde::Serialize;

use crate::parser::{Token, TokenKind};
use crate::syntax::{Ast, NodeId};

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenType {
    Number,
    Variable,
    Keyword,
    String,
    Comment,
    Unknown,
}

impl TokenType {
    /// Legend order, as registered with the client.
    pub const LEGEND: [&'static str; 6] =
        ["number", "variable", "keyword", "string", "comment", "unknown"];

    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        match self {
            TokenType::Number => 0,
            TokenType::Variable => 1,
            TokenType::Keyword => 2,
            TokenType::String => 3,
            TokenType::Comment => 4,
            TokenType::Unknown => 5,
        }
    }
}

impl From<TokenKind> for TokenType {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Level => TokenType::Number,
            TokenKind::Pointer | TokenKind::Xref => TokenType::Variable,
            TokenKind::Tag => TokenType::Keyword,
            TokenKind::Value => TokenType::String,
        }
    }
}

/// Modifier bit set (`declaration = 1`, `readonly = 2`, `reference = 4`).
pub mod modifiers {
    pub const LEGEND: [&str; 3] = ["declaration", "readonly", "reference"];

    pub const DECLARATION: u32 = 1 << 0;
    pub const READONLY: u32 = 1 << 1;
    pub const REFERENCE: u32 = 1 << 2;
}

/// A semantic token for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticToken {
    pub line: u32,
    pub col: u32,
    /// Length in UTF-16 code units
    pub length: u32,
    pub token_type: TokenType,
    pub modifiers: u32,
}

impl From<&Token> for SemanticToken {
    fn from(token: &Token) -> Self {
        let modifiers = match token.kind {
            TokenKind::Pointer => modifiers::DECLARATION,
            TokenKind::Xref => modifiers::REFERENCE,
            _ => 0,
        };
        let span = token.span;
        Self {
            line: span.start.line,
            col: span.start.character,
            length: span.end.character.saturating_sub(span.start.character),
            token_type: token.kind.into(),
            modifiers,
        }
    }
}

/// Get semantic tokens for a document, in document order.
pub fn semantic_tokens(ast: &Ast) -> Vec<SemanticToken> {
    let mut tokens = Vec::new();
    collect(ast, ast.roots(), &mut tokens);
    tokens
}

fn collect(ast: &Ast, nodes: &[NodeId], out: &mut Vec<SemanticToken>) {
    for &id in nodes {
        let node = &ast[id];
        out.extend(node.tokens().iter().map(SemanticToken::from));
        collect(ast, node.children(), out);
    }
}

/// Relative encoding used on the wire: five integers per token
/// (`deltaLine`, `deltaStart`, `length`, `tokenType`, `tokenModifiers`).
pub fn encode(tokens: &[SemanticToken]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * 5);
    let (mut line, mut col) = (0, 0);
    for token in tokens {
        let delta_line = token.line.saturating_sub(line);
        let delta_col = if delta_line == 0 {
            token.col.saturating_sub(col)
        } else {
            token.col
        };
        data.extend([
            delta_line,
            delta_col,
            token.length,
            token.token_type.to_lsp_index(),
            token.modifiers,
        ]);
        line = token.line;
        col = token.col;
    }
    data
}
