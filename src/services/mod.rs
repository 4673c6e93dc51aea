//! Service layer for business logic.
//!
//! This module contains services that coordinate parsing, rendering and
//! file I/O for keymap sources.

pub mod keymap_patcher;

// Re-export commonly used types and functions
pub use keymap_patcher::{
    update_file, update_str, NoLayersFound, PatchOutcome, PatchSummary, SkipReason, SkippedLayer,
};
