//! Keymap Diagram Library
//!
//! This library parses the `[NAME] = LAYOUT(...)` tables of QMK keymap
//! sources, abbreviates their keycodes and renders the ASCII layer diagrams
//! kept in the comments above each table.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod keycode_db;
pub mod models;
pub mod parser;
pub mod services;
