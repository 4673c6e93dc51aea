//! Keycode abbreviation for diagram cells.
//!
//! Turns a raw keycode token from a `LAYOUT(...)` table into the short label
//! drawn inside a 7-character diagram cell. Resolution is a fixed chain of
//! rules; the first rule that matches wins and the last one always matches.

use super::{
    lookup, EXACT_LABELS, LAYER_ACTION_PREFIXES, MODIFIER_CODES, MOUSE_PREFIXES,
    ONE_SHOT_PREFIX, SPECIAL_LABELS, STRIPPED_PREFIXES,
};

/// Longest label returned unchanged by the fallback rule.
const MAX_PLAIN_LEN: usize = 6;

/// Characters kept when the fallback rule truncates a label.
const TRUNCATED_LEN: usize = 5;

/// Abbreviates a keycode token for display.
///
/// Never fails: unknown tokens fall through to prefix stripping and finally
/// to truncation.
///
/// # Examples
///
/// ```
/// use keymap_diagram::keycode_db::abbreviate;
///
/// assert_eq!(abbreviate("KC_LSFT"), "LShift");
/// assert_eq!(abbreviate("LCTL(KC_C)"), "C+C");
/// assert_eq!(abbreviate("MS_BTN1"), "MB1");
/// assert_eq!(abbreviate("_______"), "___");
/// ```
pub fn abbreviate(keycode: &str) -> String {
    let keycode = keycode.trim();

    if let Some(label) = lookup(EXACT_LABELS, keycode) {
        return label.to_string();
    }

    // Function keys: KC_F1 .. KC_F24
    if let Some(number) = keycode.strip_prefix("KC_F").filter(|n| is_digits(n)) {
        return format!("F{number}");
    }

    // Numpad digits: KC_P0 .. KC_P9
    if let Some(digit) = keycode
        .strip_prefix("KC_P")
        .filter(|d| d.len() == 1 && is_digits(d))
    {
        return format!("P{digit}");
    }

    if is_layer_action(keycode) || keycode.starts_with(ONE_SHOT_PREFIX) {
        return keycode.to_string();
    }

    if let Some(label) = abbreviate_modifier(keycode) {
        return label;
    }

    if let Some(button) = mouse_button(keycode) {
        return format!("MB{button}");
    }

    if let Some(label) = lookup(SPECIAL_LABELS, keycode) {
        return label.to_string();
    }

    if let Some(rest) = STRIPPED_PREFIXES
        .iter()
        .find_map(|prefix| keycode.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
    {
        return rest.to_string();
    }

    truncate(keycode)
}

/// Returns true for layer-switching keycodes such as `MO(1)` or `LT(2, KC_A)`.
pub fn is_layer_action(keycode: &str) -> bool {
    LAYER_ACTION_PREFIXES
        .iter()
        .any(|prefix| keycode.starts_with(prefix))
}

/// Handles `LCTL(inner)` style wrappers, e.g. `LCTL(KC_C)` -> `C+C`.
fn abbreviate_modifier(keycode: &str) -> Option<String> {
    let (name, rest) = keycode.split_once('(')?;
    let code = lookup(MODIFIER_CODES, name)?;
    let inner = rest.strip_suffix(')')?;
    if inner.trim().is_empty() {
        return None;
    }
    Some(format!("{}+{}", code, abbreviate(inner)))
}

/// Extracts the button number from `MS_BTN1` / `KC_BTN1`.
fn mouse_button(keycode: &str) -> Option<&str> {
    MOUSE_PREFIXES
        .iter()
        .filter_map(|prefix| keycode.strip_prefix(prefix))
        .filter_map(|rest| rest.strip_prefix("BTN"))
        .find(|digit| digit.len() == 1 && is_digits(digit))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn truncate(keycode: &str) -> String {
    if keycode.chars().count() <= MAX_PLAIN_LEN {
        return keycode.to_string();
    }
    let mut label: String = keycode.chars().take(TRUNCATED_LEN).collect();
    label.push('.');
    label
}
