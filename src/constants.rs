//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed keyboard geometry.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "keymap-diagram";

/// Number of physical keys on the supported split layout (Lily58).
pub const KEY_COUNT: usize = 58;

/// Width of a single key cell in the rendered diagram.
pub const CELL_WIDTH: usize = 7;
