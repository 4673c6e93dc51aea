//! Parsing for QMK keymap sources.
//!
//! This module extracts the `[NAME] = LAYOUT(...)` layer tables from
//! `keymap.c` files.

pub mod keymap;

// Re-export commonly used functions
pub use keymap::{parse_keymap, parse_layers};
