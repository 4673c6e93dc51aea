//! Keymap comment patching.
//!
//! This module rewrites a keymap source so that every renderable layer is
//! preceded by a freshly generated diagram comment. Edits are collected as
//! (span, replacement) pairs against the original text and applied in one
//! pass, so earlier edits never shift the offsets of later ones.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::constants::KEY_COUNT;
use crate::export::render_layer_diagram;
use crate::models::Layer;
use crate::parser;

/// Returned when a keymap source holds no layer declarations at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLayersFound;

impl fmt::Display for NoLayersFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No layers found!")
    }
}

impl std::error::Error for NoLayersFound {}

/// Why a layer was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The table does not hold exactly 58 keys
    KeyCount(usize),
    /// No `/* ... */` block directly above the declaration
    MissingComment,
    /// The comment above overlaps an earlier edit
    Overlap,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyCount(count) => {
                write!(f, "expected {KEY_COUNT} keycodes, found {count}")
            }
            Self::MissingComment => write!(f, "no comment block above the declaration"),
            Self::Overlap => write!(f, "comment block overlaps a previous layer"),
        }
    }
}

/// A layer that was not rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLayer {
    /// Layer name
    pub name: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of patching keymap text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// The rebuilt source text
    pub content: String,
    /// Names of layers whose comment was regenerated, in source order
    pub updated: Vec<String>,
    /// Layers left untouched
    pub skipped: Vec<SkippedLayer>,
}

/// Result of patching a keymap file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchSummary {
    /// Names of layers whose comment was regenerated, in source order
    pub updated: Vec<String>,
    /// Layers left untouched
    pub skipped: Vec<SkippedLayer>,
    /// False when the file already matched and was not rewritten
    pub written: bool,
}

/// A pending replacement of `span` in the original text.
#[derive(Debug)]
struct Edit {
    span: Range<usize>,
    replacement: String,
}

/// Regenerates the layer comments of a keymap file in place.
///
/// # Errors
///
/// Returns errors for:
/// - Unreadable file
/// - [`NoLayersFound`] when the file has no layer declarations (the file is
///   not modified)
/// - Write or rename failures
pub fn update_file(path: &Path) -> Result<PatchSummary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;

    let outcome = update_str(&content)?;

    let written = outcome.content != content;
    if written {
        atomic_write(path, &outcome.content)?;
        info!(path = %path.display(), layers = outcome.updated.len(), "Wrote keymap");
    } else {
        debug!(path = %path.display(), "Keymap already up to date");
    }

    Ok(PatchSummary {
        updated: outcome.updated,
        skipped: outcome.skipped,
        written,
    })
}

/// Regenerates the layer comments of keymap source text.
///
/// Each renderable layer's preceding comment, up to and including the
/// `LAYOUT(` of its declaration, is replaced by the new diagram followed by a
/// canonical `[NAME] = LAYOUT(` header. Everything after the opening
/// parenthesis is preserved byte for byte.
pub fn update_str(content: &str) -> Result<PatchOutcome> {
    let layers = parser::parse_layers(content)?;
    if layers.is_empty() {
        return Err(NoLayersFound.into());
    }

    let mut edits: Vec<Edit> = Vec::new();
    let mut updated = Vec::new();
    let mut skipped = Vec::new();

    for layer in &layers {
        match plan_edit(content, layer) {
            Ok(edit) => {
                if edits.last().is_some_and(|prev| edit.span.start < prev.span.end) {
                    warn!(layer = %layer.name, "Comment block overlaps previous layer, skipping");
                    skipped.push(skip(layer, SkipReason::Overlap));
                    continue;
                }
                updated.push(layer.name.clone());
                edits.push(edit);
            }
            Err(reason) => {
                debug!(layer = %layer.name, %reason, "Skipping layer");
                skipped.push(skip(layer, reason));
            }
        }
    }

    Ok(PatchOutcome {
        content: apply_edits(content, &edits),
        updated,
        skipped,
    })
}

fn skip(layer: &Layer, reason: SkipReason) -> SkippedLayer {
    SkippedLayer {
        name: layer.name.clone(),
        reason,
    }
}

/// Builds the replacement for one layer, or says why there is none.
fn plan_edit(content: &str, layer: &Layer) -> std::result::Result<Edit, SkipReason> {
    let diagram = render_layer_diagram(&layer.name, &layer.tokens)
        .ok_or(SkipReason::KeyCount(layer.key_count()))?;
    let start = preceding_comment_start(content, layer.declaration.start)
        .ok_or(SkipReason::MissingComment)?;

    Ok(Edit {
        span: start..layer.declaration.end,
        replacement: format!("{}\n{}", diagram, layer.header()),
    })
}

/// Finds the `/*` opening the comment that directly precedes `declaration_start`.
///
/// Only whitespace may separate the comment's `*/` from the declaration.
fn preceding_comment_start(content: &str, declaration_start: usize) -> Option<usize> {
    let before = content[..declaration_start].trim_end();
    let body = before.strip_suffix("*/")?;
    body.rfind("/*")
}

/// Rebuilds the text in a single pass over edits sorted by position.
fn apply_edits(content: &str, edits: &[Edit]) -> String {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;
    for edit in edits {
        output.push_str(&content[cursor..edit.span.start]);
        output.push_str(&edit.replacement);
        cursor = edit.span.end;
    }
    output.push_str(&content[cursor..]);
    output
}

/// Performs an atomic file write using temp file + rename pattern.
///
/// The target file is never left half written:
/// 1. Resolve symlinks so the real file is replaced, not the link
/// 2. Write to a temporary file next to it with the same permissions
/// 3. Rename it over the target
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let target = std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve keymap path: {}", path.display()))?;
    let permissions = std::fs::metadata(&target)
        .with_context(|| format!("Failed to read metadata: {}", target.display()))?
        .permissions();

    let file_name = target
        .file_name()
        .with_context(|| format!("Not a file path: {}", target.display()))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = target.with_file_name(temp_name);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;
    std::fs::set_permissions(&temp_path, permissions)
        .with_context(|| format!("Failed to set permissions: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, &target)
        .with_context(|| format!("Failed to rename temporary file to: {}", target.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(count: usize) -> String {
        (0..count)
            .map(|i| format!("KC_{}", i % 10))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[test]
    fn test_preceding_comment_start() {
        let src = "/* a */ /* b */\n  [_X] = LAYOUT(";
        let decl = src.find('[').unwrap();
        assert_eq!(preceding_comment_start(src, decl), Some(8));

        let src = "/* a */ int x;\n[_X] = LAYOUT(";
        assert_eq!(preceding_comment_start(src, src.find('[').unwrap()), None);

        let src = "[_X] = LAYOUT(";
        assert_eq!(preceding_comment_start(src, 0), None);
    }

    #[test]
    fn test_apply_edits_single_pass() {
        let edits = vec![
            Edit {
                span: 0..3,
                replacement: "A".to_string(),
            },
            Edit {
                span: 6..9,
                replacement: "BB".to_string(),
            },
        ];
        assert_eq!(apply_edits("abcdefghij", &edits), "AdefBBj");
        assert_eq!(apply_edits("abc", &[]), "abc");
    }

    #[test]
    fn test_update_replaces_comment_and_keeps_table() {
        let body = format!("{})", table(58));
        let src = format!("{{\n  /* old */ [_BASE] = LAYOUT({}\n}};\n", body);
        let outcome = update_str(&src).unwrap();

        assert_eq!(outcome.updated, vec!["_BASE"]);
        assert!(outcome.skipped.is_empty());
        assert!(!outcome.content.contains("/* old */"));
        assert!(outcome.content.starts_with("{\n  /* _BASE\n * ,---"));
        assert!(outcome.content.contains(" */\n[_BASE] = LAYOUT("));
        assert!(outcome.content.ends_with(&format!("[_BASE] = LAYOUT({}\n}};\n", body)));
    }

    #[test]
    fn test_update_is_idempotent() {
        let src = format!("/* x */\n[_A] = LAYOUT({})\n/**/ [_B] = LAYOUT({})\n", table(58), table(58));
        let first = update_str(&src).unwrap();
        let second = update_str(&first.content).unwrap();
        assert_eq!(first.content, second.content);
        assert_eq!(second.updated, vec!["_A", "_B"]);
    }

    #[test]
    fn test_update_skips_wrong_key_count() {
        let src = format!("/* keep */\n[_A] = LAYOUT({})\n", table(57));
        let outcome = update_str(&src).unwrap();
        assert_eq!(outcome.content, src);
        assert_eq!(
            outcome.skipped,
            vec![SkippedLayer {
                name: "_A".to_string(),
                reason: SkipReason::KeyCount(57),
            }]
        );
    }

    #[test]
    fn test_update_skips_missing_comment() {
        let src = format!("int x;\n[_A] = LAYOUT({})\n", table(58));
        let outcome = update_str(&src).unwrap();
        assert_eq!(outcome.content, src);
        assert_eq!(outcome.skipped[0].reason, SkipReason::MissingComment);
    }

    #[test]
    fn test_update_no_layers() {
        let err = update_str("int main(void) { return 0; }\n").unwrap_err();
        assert!(err.downcast_ref::<NoLayersFound>().is_some());
        assert_eq!(err.to_string(), "No layers found!");
    }

    #[test]
    fn test_update_skips_overlapping_comment() {
        // The `*/` trailing _A's table closes a span opened by _A's own comment
        let src = format!(
            "/* a */\n[_A] = LAYOUT({}) // note */\n[_B] = LAYOUT({})\n",
            table(58),
            table(58)
        );
        let outcome = update_str(&src).unwrap();

        assert_eq!(outcome.updated, vec!["_A"]);
        assert_eq!(
            outcome.skipped,
            vec![SkippedLayer {
                name: "_B".to_string(),
                reason: SkipReason::Overlap,
            }]
        );
        assert!(outcome.content.starts_with("/* _A\n"));
        assert!(outcome.content.contains(" // note */\n[_B] = LAYOUT("));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::KeyCount(59).to_string(),
            format!("expected {KEY_COUNT} keycodes, found 59")
        );
        assert_eq!(
            SkipReason::Overlap.to_string(),
            "comment block overlaps a previous layer"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("keymap.c");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();

        atomic_write(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
