//! Layer data structures extracted from a keymap source.

use crate::constants::KEY_COUNT;
use serde::Serialize;
use std::ops::Range;

/// One `[NAME] = LAYOUT(...)` table found in a keymap source.
///
/// Layers are built by [`crate::parser::parse_layers`] and only live for a
/// single parse/render/patch pass.
///
/// # Validation
///
/// - A layer is renderable only when it holds exactly [`KEY_COUNT`] tokens
/// - Tokens are stored raw; abbreviation happens at render time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    /// Identifier between the brackets (e.g., "_QWERTY", "4")
    pub name: String,
    /// Raw keycode tokens in table order (e.g., "KC_A", "LCTL(KC_C)")
    pub tokens: Vec<String>,
    /// Zero-based line index of the declaration
    pub line: usize,
    /// Byte range of the `[NAME] = LAYOUT(` header, ending just past `(`
    #[serde(skip)]
    pub declaration: Range<usize>,
}

impl Layer {
    /// Creates a new layer.
    pub fn new(
        name: impl Into<String>,
        tokens: Vec<String>,
        line: usize,
        declaration: Range<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            tokens,
            line,
            declaration,
        }
    }

    /// Number of keycode tokens in the table.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the table matches the physical key count.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.tokens.len() == KEY_COUNT
    }

    /// The canonical declaration header written back by the patcher.
    #[must_use]
    pub fn header(&self) -> String {
        format!("[{}] = LAYOUT(", self.name)
    }
}
