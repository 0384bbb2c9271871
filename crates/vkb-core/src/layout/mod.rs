//! Key layout table for the virtual keyboard.
//!
//! The layout is an ordered, read-only list of [`KeyDescriptor`]s.  Each
//! descriptor carries the key's DOM `KeyboardEvent.code` string (for example
//! `"KeyA"` or `"ShiftLeft"`), the visual row it belongs to, and either a
//! display name (for special keys such as Tab or Ctrl) or the characters it
//! prints in every supported [`Language`].
//!
//! # Why store the shifted glyph explicitly? (for beginners)
//!
//! For letters, Shift simply produces the uppercase form.  For every other
//! key there is no rule: Shift + `2` is `@` on an English layout but `"` on
//! a Russian one.  Storing both glyphs per language makes the table the
//! single source of truth; nothing is derived by case-folding except the
//! caps-lock rendering of the base glyph.

pub mod standard;

use crate::domain::language::Language;

/// The characters a printable key produces in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Character produced with no modifiers.
    pub base: char,
    /// Character produced while Shift is held.
    pub shifted: char,
}

/// What a key does when it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A non-printable key.  It shows `name` and applies a fixed control
    /// action (or nothing) to the text buffer.
    Special {
        /// Label rendered on the button.
        name: &'static str,
    },
    /// A key that appends a character to the text buffer.
    Printable {
        /// Glyphs for [`Language::En`].
        en: Glyphs,
        /// Glyphs for [`Language::Ru`].
        ru: Glyphs,
    },
}

/// One entry of the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDescriptor {
    /// Unique key code (DOM `KeyboardEvent.code` vocabulary).
    pub code: &'static str,
    /// Row grouping used for visual placement.
    pub row: u8,
    /// Special or printable behaviour.
    pub kind: KeyKind,
}

impl KeyDescriptor {
    /// Builds a printable key from `(base, shifted)` pairs for each language.
    pub const fn printable(
        code: &'static str,
        row: u8,
        en: (char, char),
        ru: (char, char),
    ) -> Self {
        Self {
            code,
            row,
            kind: KeyKind::Printable {
                en: Glyphs { base: en.0, shifted: en.1 },
                ru: Glyphs { base: ru.0, shifted: ru.1 },
            },
        }
    }

    /// Builds a special (non-printable) key.
    pub const fn special(code: &'static str, row: u8, name: &'static str) -> Self {
        Self {
            code,
            row,
            kind: KeyKind::Special { name },
        }
    }

    /// Returns `true` for keys that do not print a glyph.
    pub fn is_special(&self) -> bool {
        matches!(self.kind, KeyKind::Special { .. })
    }

    /// Returns the display name of a special key, `None` for printable keys.
    pub fn name(&self) -> Option<&'static str> {
        match self.kind {
            KeyKind::Special { name } => Some(name),
            KeyKind::Printable { .. } => None,
        }
    }

    /// Returns the glyph pair for `language`, `None` for special keys.
    pub fn glyphs(&self, language: Language) -> Option<Glyphs> {
        match self.kind {
            KeyKind::Special { .. } => None,
            KeyKind::Printable { en, ru } => Some(match language {
                Language::En => en,
                Language::Ru => ru,
            }),
        }
    }

    /// Returns the text this key shows (and types) under the given modifiers.
    ///
    /// - Special keys always show their name.
    /// - Shift selects the shifted glyph and takes precedence over caps-lock.
    /// - Caps-lock alone uppercases the *base* glyph; it never consults the
    ///   shifted glyph, so caps-lock + `1` is still `1`.
    pub fn label(&self, language: Language, shift: bool, caps_lock: bool) -> String {
        match (self.name(), self.glyphs(language)) {
            (Some(name), _) => name.to_string(),
            (None, Some(glyphs)) if shift => glyphs.shifted.to_string(),
            (None, Some(glyphs)) if caps_lock => glyphs.base.to_uppercase().collect(),
            (None, Some(glyphs)) => glyphs.base.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// An ordered, immutable key layout.
///
/// `Layout` is a cheap `Copy` handle around a `'static` slice, so every
/// controller can hold its own copy without allocation.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    keys: &'static [KeyDescriptor],
}

impl Layout {
    /// Wraps an arbitrary static key table.
    pub const fn new(keys: &'static [KeyDescriptor]) -> Self {
        Self { keys }
    }

    /// Returns the built-in 64-key English/Russian layout.
    pub fn standard() -> Self {
        Self::new(standard::STANDARD_KEYS)
    }

    /// All descriptors in table order.
    pub fn keys(&self) -> &'static [KeyDescriptor] {
        self.keys
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Looks up a descriptor by its exact key code.
    pub fn find(&self, code: &str) -> Option<&'static KeyDescriptor> {
        self.keys.iter().find(|key| key.code == code)
    }

    /// Returns `true` if `code` is present in the table.
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Splits the table into visual rows.
    ///
    /// A new row starts whenever a descriptor's `row` differs from the
    /// previous one, so rows appear in table order.
    pub fn rows(&self) -> Vec<&'static [KeyDescriptor]> {
        let keys = self.keys;
        let mut rows = Vec::new();
        let mut start = 0;
        for i in 1..=keys.len() {
            if i == keys.len() || keys[i].row != keys[start].row {
                rows.push(&keys[start..i]);
                start = i;
            }
        }
        rows
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
