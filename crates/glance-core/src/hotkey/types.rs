use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::SourceWindowRef;

/// Modifier keys. Stored in a `BTreeSet` so binding comparison and
/// serialization are order-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Command,
    Option,
    Control,
    Shift,
}

impl Modifier {
    /// Conventional glyph for chord display.
    pub fn glyph(&self) -> &'static str {
        match self {
            Modifier::Command => "\u{2318}",
            Modifier::Option => "\u{2325}",
            Modifier::Control => "\u{2303}",
            Modifier::Shift => "\u{21e7}",
        }
    }
}

/// A recorded hotkey: a key code plus modifier set, bound to a window
/// title. The chord namespace is global - two bindings with the same
/// chord conflict even when they target different titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyBinding {
    pub key_code: u16,
    pub modifiers: BTreeSet<Modifier>,
    pub target_title: String,
}

impl HotkeyBinding {
    pub fn new(
        key_code: u16,
        modifiers: impl IntoIterator<Item = Modifier>,
        target_title: impl Into<String>,
    ) -> Self {
        Self {
            key_code,
            modifiers: modifiers.into_iter().collect(),
            target_title: target_title.into(),
        }
    }

    /// Whether this binding shares its chord with another.
    pub fn same_chord(&self, other: &HotkeyBinding) -> bool {
        self.key_code == other.key_code && self.modifiers == other.modifiers
    }

    /// Human-readable chord, e.g. `⌘⌥K` or `⌃⇧#120`.
    pub fn chord_label(&self) -> String {
        let mut label = String::new();
        for m in &self.modifiers {
            label.push_str(m.glyph());
        }
        label.push_str(&key_name(self.key_code));
        label
    }
}

/// Display name for common ANSI virtual key codes; unknown codes fall
/// back to the raw number.
fn key_name(key_code: u16) -> String {
    let name = match key_code {
        0 => "A",
        1 => "S",
        2 => "D",
        3 => "F",
        4 => "H",
        5 => "G",
        6 => "Z",
        7 => "X",
        8 => "C",
        9 => "V",
        11 => "B",
        12 => "Q",
        13 => "W",
        14 => "E",
        15 => "R",
        16 => "Y",
        17 => "T",
        31 => "O",
        32 => "U",
        34 => "I",
        35 => "P",
        37 => "L",
        38 => "J",
        40 => "K",
        45 => "N",
        46 => "M",
        36 => "Return",
        48 => "Tab",
        49 => "Space",
        53 => "Esc",
        _ => return format!("#{key_code}"),
    };
    name.to_string()
}

/// Outcome of resolving a binding against a catalog snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Exactly one window carries the target title.
    Resolved(SourceWindowRef),
    /// More than one window carries the target title; the caller must
    /// surface a warning rather than pick one silently.
    Ambiguous(usize),
    /// No window carries the target title; the binding is stale and
    /// activation is a no-op.
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_label_renders_glyphs_and_key() {
        let binding = HotkeyBinding::new(40, [Modifier::Command, Modifier::Option], "Inbox");
        assert_eq!(binding.chord_label(), "\u{2318}\u{2325}K");
    }

    #[test]
    fn chord_label_unknown_key_uses_raw_code() {
        let binding = HotkeyBinding::new(120, [Modifier::Control], "Inbox");
        assert_eq!(binding.chord_label(), "\u{2303}#120");
    }

    #[test]
    fn modifier_order_does_not_matter() {
        let a = HotkeyBinding::new(1, [Modifier::Shift, Modifier::Command], "X");
        let b = HotkeyBinding::new(1, [Modifier::Command, Modifier::Shift], "X");
        assert!(a.same_chord(&b));
    }

    #[test]
    fn binding_round_trips_through_json() {
        let binding = HotkeyBinding::new(40, [Modifier::Command], "Inbox");
        let json = serde_json::to_string(&binding).unwrap();
        let back: HotkeyBinding = serde_json::from_str(&json).unwrap();
        assert_eq!(binding, back);
    }
}
