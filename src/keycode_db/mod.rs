//! QMK keycode tables and display abbreviations.
//!
//! This module holds the static lookup tables used to turn raw keycode
//! tokens into the short labels drawn inside diagram cells. The resolution
//! logic itself lives in [`display`].

pub mod display;

pub use display::abbreviate;

/// Keys with a fixed short label: navigation, modifiers, punctuation and the
/// no-op / transparent placeholders.
pub const EXACT_LABELS: &[(&str, &str)] = &[
    ("KC_NO", "NO"),
    ("KC_TRNS", "TRNS"),
    ("KC_ESC", "ESC"),
    ("KC_TAB", "Tab"),
    ("KC_LSFT", "LShift"),
    ("KC_RSFT", "RShift"),
    ("KC_LCTL", "LCTRL"),
    ("KC_RCTL", "RCTRL"),
    ("KC_LALT", "LALT"),
    ("KC_RALT", "RALT"),
    ("KC_LGUI", "LGUI"),
    ("KC_RGUI", "RGUI"),
    ("KC_SPC", "Space"),
    ("KC_ENT", "Enter"),
    ("KC_BSPC", "BackSP"),
    ("KC_DEL", "Delete"),
    ("KC_HOME", "Home"),
    ("KC_END", "End"),
    ("KC_PGUP", "PgUp"),
    ("KC_PGDN", "PgDn"),
    ("KC_UP", "Up"),
    ("KC_DOWN", "Down"),
    ("KC_LEFT", "Left"),
    ("KC_RGHT", "Right"),
    ("KC_NUM", "NUM"),
    ("KC_GRV", "`"),
    ("KC_MINS", "-"),
    ("KC_EQL", "="),
    ("KC_BSLS", "\\"),
    ("KC_LBRC", "["),
    ("KC_RBRC", "]"),
    ("KC_SCLN", ";"),
    ("KC_QUOT", "'"),
    ("KC_COMM", ","),
    ("KC_DOT", "."),
    ("KC_SLSH", "/"),
    ("KC_EXLM", "!"),
    ("KC_AT", "@"),
    ("KC_HASH", "#"),
    ("KC_DLR", "$"),
    ("KC_PERC", "%"),
    ("KC_CIRC", "^"),
    ("KC_AMPR", "&"),
    ("KC_ASTR", "*"),
    ("KC_LPRN", "("),
    ("KC_RPRN", ")"),
    ("KC_UNDS", "_"),
    ("KC_PLUS", "+"),
    ("KC_LCBR", "{"),
    ("KC_RCBR", "}"),
    ("KC_PIPE", "|"),
    ("KC_TILD", "~"),
    ("KC_LT", "<"),
    ("KC_GT", ">"),
    ("XXXXXXX", "X"),
    ("_______", "___"),
];

/// Media, lighting and caps-word keys.
pub const SPECIAL_LABELS: &[(&str, &str)] = &[
    ("KC_MPLY", "PLAY"),
    ("KC_MPRV", "PREV"),
    ("KC_MNXT", "NEXT"),
    ("KC_MUTE", "MUTE"),
    ("KC_VOLU", "VOL+"),
    ("KC_VOLD", "VOL-"),
    ("RGB_TOG", "RGB"),
    ("RGB_HUI", "HUE+"),
    ("RGB_HUD", "HUE-"),
    ("RGB_SAI", "SAT+"),
    ("RGB_SAD", "SAT-"),
    ("RGB_VAI", "VAL+"),
    ("RGB_VAD", "VAL-"),
    ("RGB_MOD", "MODE"),
    ("UG_TOGG", "UG_TG"),
    ("CW_TOGG", "CW_TG"),
];

/// Modifier wrappers and the one-letter code used in `<code>+<key>` labels.
pub const MODIFIER_CODES: &[(&str, &str)] = &[
    ("LCTL", "C"),
    ("RCTL", "C"),
    ("LSFT", "S"),
    ("RSFT", "S"),
    ("LALT", "A"),
    ("RALT", "A"),
    ("LGUI", "G"),
    ("RGUI", "G"),
];

/// Layer-switching wrappers. Their source text is used as the label.
pub const LAYER_ACTION_PREFIXES: &[&str] =
    &["MO(", "TG(", "LT(", "TO(", "TT(", "OSL(", "DF(", "LM("];

/// Prefix shared by one-shot modifier keys (`OS_LSFT`, ...), shown verbatim.
pub const ONE_SHOT_PREFIX: &str = "OS_";

/// Prefixes dropped from otherwise unknown keycodes.
pub const STRIPPED_PREFIXES: &[&str] = &["KC_", "QK_"];

/// Prefixes that may precede `BTN<n>` for mouse buttons.
pub const MOUSE_PREFIXES: &[&str] = &["MS_", "KC_"];

/// Looks up `keycode` in one of the static tables.
pub fn lookup(table: &[(&'static str, &'static str)], keycode: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(code, _)| *code == keycode)
        .map(|(_, label)| *label)
}
