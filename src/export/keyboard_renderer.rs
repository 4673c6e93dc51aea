//! Keyboard diagram renderer for keymap comments.
//!
//! Generates the ASCII diagram placed in the C comment above each
//! `LAYOUT(...)` table. The geometry is the fixed 58-key Lily58 split:
//! two 6x4 blocks, one inner key per half on the bottom row and four thumb
//! keys per half.

use crate::constants::{CELL_WIDTH, KEY_COUNT};
use crate::keycode_db::abbreviate;

/// Placeholder for a key cell inside [`TEMPLATE`].
const SLOT: &str = "{}";

/// Diagram body, one entry per line, without the ` * ` comment prefix.
///
/// Each [`SLOT`] is filled with a centred label, in the key order given by
/// [`SLOT_ORDER`].
const TEMPLATE: &[&str] = &[
    r",-----------------------------------------------.                    ,-----------------------------------------------.",
    r"|{}|{}|{}|{}|{}|{}|                    |{}|{}|{}|{}|{}|{}|",
    r"|-------+-------+-------+-------+-------+-------|                    |-------+-------+-------+-------+-------+-------|",
    r"|{}|{}|{}|{}|{}|{}|                    |{}|{}|{}|{}|{}|{}|",
    r"|-------+-------+-------+-------+-------+-------|                    |-------+-------+-------+-------+-------+-------|",
    r"|{}|{}|{}|{}|{}|{}|-------.    ,-------|{}|{}|{}|{}|{}|{}|",
    r"|-------+-------+-------+-------+-------+-------|{}|    |{}|-------+-------+-------+-------+-------+-------|",
    r"|{}|{}|{}|{}|{}|{}|-------|    |-------|{}|{}|{}|{}|{}|{}|",
    r"`-----------------------------------------------/       /    \       \-----------------------------------------------'",
    r"                        |{}|{}|{}| /{}/\{}\ |{}|{}|{}|",
    r"                        |       |       |       |/       /  \       \|       |       |       |",
    r"                        `-----------------------'--------'  '--------'-----------------------'",
];

/// Key index drawn in each template slot, top to bottom, left to right.
///
/// Table order in `LAYOUT(...)` is row by row with the two inner keys
/// (42, 43) in the middle of the fourth row, but the diagram draws them on
/// the separator line above that row.
pub const SLOT_ORDER: [usize; KEY_COUNT] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, //
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, //
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, //
    42, 43, //
    36, 37, 38, 39, 40, 41, 44, 45, 46, 47, 48, 49, //
    50, 51, 52, 53, 54, 55, 56, 57,
];

/// Renders the diagram comment for one layer.
///
/// Returns `None` unless `tokens` holds exactly [`KEY_COUNT`] keycodes.
/// The result starts with `/* NAME` and ends with ` */`, without a trailing
/// newline.
///
/// # Example
///
/// ```text
/// /* _QWERTY
///  * ,-----------------------------------------------.                    ,------...
///  * |  NUM  |   1   |   2   |   3   |   4   |   5   |                    |   6  ...
/// ```
pub fn render_layer_diagram<S: AsRef<str>>(name: &str, tokens: &[S]) -> Option<String> {
    if tokens.len() != KEY_COUNT {
        return None;
    }
    let labels = layer_labels(tokens);
    Some(render_labels(name, &labels))
}

/// Abbreviates every token of a layer.
pub fn layer_labels<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|token| abbreviate(token.as_ref())).collect()
}

/// Fills the template with already abbreviated labels.
fn render_labels(name: &str, labels: &[String]) -> String {
    let mut slots = SLOT_ORDER.iter().map(|&key| labels[key].as_str());
    let mut lines = Vec::with_capacity(TEMPLATE.len() + 2);

    lines.push(format!("/* {name}"));
    for template_line in TEMPLATE {
        let mut parts = template_line.split(SLOT);
        let mut line = String::from(" * ");
        line.push_str(parts.next().unwrap_or_default());
        for part in parts {
            line.push_str(&center_label(slots.next().unwrap_or_default()));
            line.push_str(part);
        }
        lines.push(line);
    }
    lines.push(" */".to_string());

    lines.join("\n")
}

/// Centres a label in a [`CELL_WIDTH`] cell.
///
/// Odd padding puts the extra space on the right. Labels wider than the
/// cell are clipped.
pub fn center_label(label: &str) -> String {
    let clipped: String = label.chars().take(CELL_WIDTH).collect();
    let padding = CELL_WIDTH - clipped.chars().count();
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), clipped, " ".repeat(right))
}
