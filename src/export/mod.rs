//! Diagram export for keymap layers.
//!
//! This module renders the ASCII keyboard diagrams that are written back into
//! keymap sources as layer comments.

pub mod keyboard_renderer;

pub use keyboard_renderer::{center_label, layer_labels, render_layer_diagram};
