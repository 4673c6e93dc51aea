//! QMK keymap source parsing.
//!
//! This module finds the `[NAME] = LAYOUT(...)` tables inside a `keymap.c`
//! and extracts their keycode tokens. Declaration headers are located with a
//! regex; the table bodies are walked by a depth-counting scanner because
//! tables nest parentheses (`LCTL(KC_C)`, `LT(1, KC_SPC)`) and span lines.

use crate::models::Layer;
use anyhow::{Context, Result};
use regex::Regex;
use std::iter::Peekable;
use std::path::Path;
use std::str::CharIndices;
use tracing::debug;

/// Matches a layer declaration header such as `[_QWERTY] = LAYOUT(`.
const DECLARATION_PATTERN: &str = r"\[\s*(_?[0-9A-Z_]+)\s*\]\s*=\s*LAYOUT\s*\(";

/// Builds the declaration header regex.
pub(crate) fn declaration_regex() -> Result<Regex> {
    Regex::new(DECLARATION_PATTERN).context("Failed to compile layer declaration pattern")
}

/// Reads a keymap source file and parses its layers.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or not a regular file
/// - Unreadable file contents
pub fn parse_keymap(path: &Path) -> Result<Vec<Layer>> {
    if !path.is_file() {
        anyhow::bail!("Keymap file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;

    parse_layers(&content)
        .with_context(|| format!("Failed to parse keymap file: {}", path.display()))
}

/// Parses every layer table from keymap source text.
///
/// Layers are returned in source order. A declaration with an empty table
/// is dropped; tables with the wrong number of keys are kept so callers can
/// report them (see [`Layer::is_renderable`]).
pub fn parse_layers(content: &str) -> Result<Vec<Layer>> {
    let declaration = declaration_regex()?;
    let line_starts = line_offsets(content);
    let mut layers = Vec::new();

    let mut line_idx = 0;
    while line_idx < line_starts.len() {
        let line_start = line_starts[line_idx];
        let line_end = line_starts
            .get(line_idx + 1)
            .copied()
            .unwrap_or(content.len());
        let line = &content[line_start..line_end];

        let Some(captures) = declaration.captures(line) else {
            line_idx += 1;
            continue;
        };

        let header = captures.get(0).context("Declaration match without span")?;
        let name = &captures[1];
        let header_span = line_start + header.start()..line_start + header.end();

        let table = scan_table(content, header_span.end);
        debug!(
            layer = name,
            line = line_idx,
            keys = table.tokens.len(),
            "Found layer declaration"
        );

        if !table.tokens.is_empty() {
            layers.push(Layer::new(name, table.tokens, line_idx, header_span));
        }

        // Resume after the line holding the closing parenthesis
        let close_line = line_of(&line_starts, table.end.saturating_sub(1));
        line_idx = close_line.max(line_idx) + 1;
    }

    Ok(layers)
}

/// Result of scanning one `LAYOUT(...)` body.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TableScan {
    /// Top-level comma separated tokens, trimmed
    tokens: Vec<String>,
    /// Byte offset just past the closing parenthesis (or end of input)
    end: usize,
}

/// Scans a table body starting right after its opening parenthesis.
///
/// Splits on commas at depth 1 only and stops once the depth returns to
/// zero. Comments inside the table are skipped.
fn scan_table(content: &str, body_start: usize) -> TableScan {
    let mut chars = content[body_start..].char_indices().peekable();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 1;
    let mut end = content.len();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '/' if matches!(chars.peek(), Some((_, '/'))) => skip_line_comment(&mut chars),
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                skip_block_comment(&mut chars);
            }
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    end = body_start + idx + ch.len_utf8();
                    break;
                }
                current.push(ch);
            }
            ',' if depth == 1 => push_token(&mut tokens, &mut current),
            _ => current.push(ch),
        }
    }
    push_token(&mut tokens, &mut current);

    TableScan { tokens, end }
}

fn push_token(tokens: &mut Vec<String>, current: &mut String) {
    let token = current.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
    current.clear();
}

fn skip_line_comment(chars: &mut Peekable<CharIndices<'_>>) {
    for (_, ch) in chars.by_ref() {
        if ch == '\n' {
            break;
        }
    }
}

fn skip_block_comment(chars: &mut Peekable<CharIndices<'_>>) {
    while let Some((_, ch)) = chars.next() {
        if ch == '*' && matches!(chars.peek(), Some((_, '/'))) {
            chars.next();
            break;
        }
    }
}

/// Byte offset of the start of every line.
fn line_offsets(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    offsets.extend(
        content
            .match_indices('\n')
            .map(|(idx, _)| idx + 1)
            .filter(|&start| start < content.len()),
    );
    offsets
}

/// Index of the line containing byte `offset`.
fn line_of(line_starts: &[usize], offset: usize) -> usize {
    line_starts
        .partition_point(|&start| start <= offset)
        .saturating_sub(1)
}
