//! Token types shared by the lexer, the line parser and the AST.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smol_str::SmolStr;

use crate::base::Span;

/// The five token kinds of a GEDCOM line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TokenKind {
    Level,
    Pointer,
    Tag,
    Xref,
    Value,
}

impl TokenKind {
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Level,
        TokenKind::Pointer,
        TokenKind::Tag,
        TokenKind::Xref,
        TokenKind::Value,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Level => "LEVEL",
            TokenKind::Pointer => "POINTER",
            TokenKind::Tag => "TAG",
            TokenKind::Xref => "XREF",
            TokenKind::Value => "VALUE",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: SmolStr,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }
}

/// At most one token per kind, as carried by a line record or a node.
///
/// Inserting a kind that is already present replaces it: the last
/// occurrence on a line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    slots: [Option<Token>; 5],
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: Token) -> Option<Token> {
        let slot = token.kind.slot();
        self.slots[slot].replace(token)
    }

    pub fn get(&self, kind: TokenKind) -> Option<&Token> {
        self.slots[kind.slot()].as_ref()
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn level(&self) -> Option<&Token> {
        self.get(TokenKind::Level)
    }

    pub fn pointer(&self) -> Option<&Token> {
        self.get(TokenKind::Pointer)
    }

    pub fn tag(&self) -> Option<&Token> {
        self.get(TokenKind::Tag)
    }

    pub fn xref(&self) -> Option<&Token> {
        self.get(TokenKind::Xref)
    }

    pub fn value(&self) -> Option<&Token> {
        self.get(TokenKind::Value)
    }

    /// Tokens present, ordered by kind (which is also their order on a well-formed line)
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Union of the spans of all present tokens
    pub fn span(&self) -> Option<Span> {
        self.iter().map(|t| t.span).reduce(Span::cover)
    }
}

impl Serialize for TokenMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for token in self.iter() {
            map.serialize_entry(token.kind.as_str(), token)?;
        }
        map.end()
    }
}

impl FromIterator<Token> for TokenMap {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut map = TokenMap::new();
        for token in iter {
            map.insert(token);
        }
        map
    }
}
