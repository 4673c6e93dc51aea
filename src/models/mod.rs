//! Data models for keymap layers.
//!
//! Models are designed to be independent of parsing and rendering logic.

pub mod layer;

pub use layer::Layer;
