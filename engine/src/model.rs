//! The `Element` and `Cell` types shared across components C–H (§3).

use crate::geometry::Rectangle;

/// One glyph run as reported by the PDF text layer, with a corrected height
/// (§4.D). Lives only within a single page's extraction (§3 Lifecycle).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub rect: Rectangle,
    pub text: String,
}

impl Element {
    pub fn new(rect: Rectangle, text: impl Into<String>) -> Self {
        Self { rect, text: text.into() }
    }
}

/// A grid cell: a rectangle plus the elements bound to it, in reading order.
/// Cells are disjoint by construction from a valid grid, though the
/// reconstructor may emit near-duplicates the binder's ≥50% rule tolerates.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub rect: Rectangle,
    pub elements: Vec<Element>,
}

impl Cell {
    pub fn new(rect: Rectangle) -> Self {
        Self { rect, elements: Vec::new() }
    }

    /// Concatenation of this cell's element texts, in binding order, with no
    /// separator — the form heading discovery (§4.G.2) matches regexes
    /// against.
    pub fn concatenated_text(&self) -> String {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }

    /// Space-joined element texts with internal whitespace runs collapsed to
    /// a single space, trimmed — the form record fields use (§4.H).
    pub fn joined_text(&self) -> String {
        let joined = self
            .elements
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        joined.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
