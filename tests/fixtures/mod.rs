//! Shared test fixtures for keymap tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A real Lily58 keymap with five layers, all with a diagram comment above.
pub const LILY58_KEYMAP: &str = include_str!("lily58_keymap.c");

/// Layer names declared in [`LILY58_KEYMAP`], in source order.
pub const LILY58_LAYERS: [&str; 5] = ["_QWERTY", "_LOWER", "_RAISE", "_ADJUST", "4"];

/// Returns `count` distinct keycodes: letters first, then digits and F-keys.
pub fn test_keycodes(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i {
            0..=25 => format!("KC_{}", (b'A' + i as u8) as char),
            26..=35 => format!("KC_{}", i - 26),
            _ => format!("KC_F{}", i - 35),
        })
        .collect()
}

/// Formats keycodes as a Lily58-shaped `LAYOUT(...)` body, one row per line.
pub fn layout_body(keycodes: &[String]) -> String {
    let rows: Vec<String> = keycodes
        .chunks(12)
        .map(|row| format!("  {}", row.join(", ")))
        .collect();
    format!("\n{}\n)", rows.join(",\n"))
}

/// Builds a keymap source with one layer per `(name, keycodes)` pair, each
/// preceded by `comment`.
pub fn test_keymap(layers: &[(&str, Vec<String>)], comment: &str) -> String {
    let mut source = String::from(
        "#include QMK_KEYBOARD_H\n\nconst uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {\n\n",
    );
    let declarations: Vec<String> = layers
        .iter()
        .map(|(name, keycodes)| {
            format!("{}\n[{}] = LAYOUT({}", comment, name, layout_body(keycodes))
        })
        .collect();
    source.push_str(&declarations.join(",\n"));
    source.push_str("\n};\n");
    source
}

/// Returns the `LAYOUT(...)` bodies of a source, used to check they survive edits.
pub fn layout_bodies(source: &str) -> Vec<&str> {
    source
        .split("LAYOUT(")
        .skip(1)
        .map(|rest| rest.split_once(')').map_or(rest, |(body, _)| body))
        .collect()
}

/// Writes keymap source into a fresh temp dir.
///
/// Returns the file path and the `TempDir`, which must be kept alive.
pub fn create_temp_keymap_file(source: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let keymap_path = temp_dir.path().join("keymap.c");
    write_keymap_file(source, &keymap_path);
    (keymap_path, temp_dir)
}

/// Writes keymap source to a path.
pub fn write_keymap_file(source: &str, path: &Path) {
    fs::write(path, source).expect("Failed to write keymap file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_keycodes() {
        let keycodes = test_keycodes(58);
        assert_eq!(keycodes.len(), 58);
        assert_eq!(keycodes[0], "KC_A");
        assert_eq!(keycodes[26], "KC_0");
        assert_eq!(keycodes[36], "KC_F1");
        assert_eq!(keycodes[57], "KC_F22");
    }

    #[test]
    fn test_fixture_keymap_shape() {
        let source = test_keymap(&[("_BASE", test_keycodes(58))], "/* old */");
        assert!(source.contains("/* old */\n[_BASE] = LAYOUT(\n  KC_A, KC_B"));
        assert_eq!(layout_bodies(&source).len(), 1);
    }
}
