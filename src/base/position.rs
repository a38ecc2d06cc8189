/// Position tracking for tokens, nodes and diagnostics
///
/// Stores the source location (line/character) of AST elements for editor
/// features like hover, folding and diagnostics. Characters are counted in
/// UTF-16 code units, as editor protocols expect.
use serde::Serialize;

/// A half-open span representing a range in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code
///
/// Ordering is line-major, then character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Numbering origin for lines and characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OriginBase {
    /// First line and first character are 0 (editor protocols)
    #[default]
    Zero,
    /// First line and first character are 1 (human-facing tools)
    One,
}

impl OriginBase {
    /// The value added to every zero-based coordinate
    pub fn offset(self) -> u32 {
        match self {
            OriginBase::Zero => 0,
            OriginBase::One => 1,
        }
    }

    /// The first position of a document in this coordinate system
    pub fn origin(self) -> Position {
        Position::new(self.offset(), self.offset())
    }

    /// Translate a zero-based position into this coordinate system
    pub fn shift(self, position: Position) -> Position {
        Position::new(
            position.line + self.offset(),
            position.character + self.offset(),
        )
    }

    /// Translate a zero-based span into this coordinate system
    pub fn shift_span(self, span: Span) -> Span {
        Span::new(self.shift(span.start), self.shift(span.end))
    }
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width span at `position`
    pub fn empty(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Create a span from line/character coordinates
    pub fn from_coords(
        start_line: u32,
        start_character: u32,
        end_line: u32,
        end_character: u32,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_character),
            end: Position::new(end_line, end_character),
        }
    }

    /// Smallest span covering both `self` and `other`
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Check if a position falls within this span (end inclusive, for cursor lookups)
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}
