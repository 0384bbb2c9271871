//! The built-in English (QWERTY) / Russian (ЙЦУКЕН) key table.
//!
//! Keys are listed row by row, left to right, exactly as they are drawn.
//! Each printable entry gives `(base, shifted)` for English, then Russian.

use super::KeyDescriptor;

const fn p(code: &'static str, row: u8, en: (char, char), ru: (char, char)) -> KeyDescriptor {
    KeyDescriptor::printable(code, row, en, ru)
}

const fn s(code: &'static str, row: u8, name: &'static str) -> KeyDescriptor {
    KeyDescriptor::special(code, row, name)
}

/// The standard 64-key layout.
pub static STANDARD_KEYS: &[KeyDescriptor] = &[
    // Row 0: digits
    p("Backquote", 0, ('`', '~'), ('ё', 'Ё')),
    p("Digit1", 0, ('1', '!'), ('1', '!')),
    p("Digit2", 0, ('2', '@'), ('2', '"')),
    p("Digit3", 0, ('3', '#'), ('3', '№')),
    p("Digit4", 0, ('4', '$'), ('4', ';')),
    p("Digit5", 0, ('5', '%'), ('5', '%')),
    p("Digit6", 0, ('6', '^'), ('6', ':')),
    p("Digit7", 0, ('7', '&'), ('7', '?')),
    p("Digit8", 0, ('8', '*'), ('8', '*')),
    p("Digit9", 0, ('9', '('), ('9', '(')),
    p("Digit0", 0, ('0', ')'), ('0', ')')),
    p("Minus", 0, ('-', '_'), ('-', '_')),
    p("Equal", 0, ('=', '+'), ('=', '+')),
    s("Backspace", 0, "Backspace"),
    // Row 1: top letter row
    s("Tab", 1, "Tab"),
    p("KeyQ", 1, ('q', 'Q'), ('й', 'Й')),
    p("KeyW", 1, ('w', 'W'), ('ц', 'Ц')),
    p("KeyE", 1, ('e', 'E'), ('у', 'У')),
    p("KeyR", 1, ('r', 'R'), ('к', 'К')),
    p("KeyT", 1, ('t', 'T'), ('е', 'Е')),
    p("KeyY", 1, ('y', 'Y'), ('н', 'Н')),
    p("KeyU", 1, ('u', 'U'), ('г', 'Г')),
    p("KeyI", 1, ('i', 'I'), ('ш', 'Ш')),
    p("KeyO", 1, ('o', 'O'), ('щ', 'Щ')),
    p("KeyP", 1, ('p', 'P'), ('з', 'З')),
    p("BracketLeft", 1, ('[', '{'), ('х', 'Х')),
    p("BracketRight", 1, (']', '}'), ('ъ', 'Ъ')),
    p("Backslash", 1, ('\\', '|'), ('\\', '/')),
    s("Delete", 1, "Del"),
    // Row 2: home row
    s("CapsLock", 2, "CapsLock"),
    p("KeyA", 2, ('a', 'A'), ('ф', 'Ф')),
    p("KeyS", 2, ('s', 'S'), ('ы', 'Ы')),
    p("KeyD", 2, ('d', 'D'), ('в', 'В')),
    p("KeyF", 2, ('f', 'F'), ('а', 'А')),
    p("KeyG", 2, ('g', 'G'), ('п', 'П')),
    p("KeyH", 2, ('h', 'H'), ('р', 'Р')),
    p("KeyJ", 2, ('j', 'J'), ('о', 'О')),
    p("KeyK", 2, ('k', 'K'), ('л', 'Л')),
    p("KeyL", 2, ('l', 'L'), ('д', 'Д')),
    p("Semicolon", 2, (';', ':'), ('ж', 'Ж')),
    p("Quote", 2, ('\'', '"'), ('э', 'Э')),
    s("Enter", 2, "Enter"),
    // Row 3: bottom letter row
    s("ShiftLeft", 3, "Shift"),
    p("KeyZ", 3, ('z', 'Z'), ('я', 'Я')),
    p("KeyX", 3, ('x', 'X'), ('ч', 'Ч')),
    p("KeyC", 3, ('c', 'C'), ('с', 'С')),
    p("KeyV", 3, ('v', 'V'), ('м', 'М')),
    p("KeyB", 3, ('b', 'B'), ('и', 'И')),
    p("KeyN", 3, ('n', 'N'), ('т', 'Т')),
    p("KeyM", 3, ('m', 'M'), ('ь', 'Ь')),
    p("Comma", 3, (',', '<'), ('б', 'Б')),
    p("Period", 3, ('.', '>'), ('ю', 'Ю')),
    p("Slash", 3, ('/', '?'), ('.', ',')),
    s("ArrowUp", 3, "▲"),
    s("ShiftRight", 3, "Shift"),
    // Row 4: modifiers and space bar
    s("ControlLeft", 4, "Ctrl"),
    s("MetaLeft", 4, "Win"),
    s("AltLeft", 4, "Alt"),
    s("Space", 4, ""),
    s("AltRight", 4, "Alt"),
    s("ArrowLeft", 4, "◄"),
    s("ArrowDown", 4, "▼"),
    s("ArrowRight", 4, "►"),
    s("ControlRight", 4, "Ctrl"),
];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::Language;
    use crate::layout::Layout;
    use std::collections::HashSet;

    #[test]
    fn test_standard_layout_has_64_keys_in_5_rows() {
        let layout = Layout::standard();
        assert_eq!(layout.len(), 64);
        assert_eq!(layout.rows().len(), 5);
    }

    #[test]
    fn test_standard_codes_are_unique() {
        let codes: HashSet<&str> = STANDARD_KEYS.iter().map(|k| k.code).collect();
        assert_eq!(codes.len(), STANDARD_KEYS.len(), "duplicate key code in table");
    }

    #[test]
    fn test_standard_rows_are_non_decreasing() {
        // Rows are listed top to bottom; a regression would split a row in two.
        assert!(STANDARD_KEYS.windows(2).all(|w| w[0].row <= w[1].row));
    }

    #[test]
    fn test_standard_control_keys_are_special() {
        let layout = Layout::standard();
        for code in [
            "Backspace",
            "Tab",
            "Enter",
            "Space",
            "CapsLock",
            "ShiftLeft",
            "ShiftRight",
            "ControlLeft",
            "AltLeft",
            "MetaLeft",
            "Delete",
        ] {
            assert!(layout.find(code).unwrap().is_special(), "{code} must be special");
        }
    }

    #[test]
    fn test_standard_russian_glyphs_for_non_letter_keys() {
        let layout = Layout::standard();
        let three = layout.find("Digit3").unwrap().glyphs(Language::Ru).unwrap();
        assert_eq!(three.shifted, '№');
        let slash = layout.find("Slash").unwrap().glyphs(Language::Ru).unwrap();
        assert_eq!((slash.base, slash.shifted), ('.', ','));
    }

    #[test]
    fn test_standard_letters_shift_to_uppercase() {
        // For letters the shift table agrees with uppercasing in both languages.
        for key in STANDARD_KEYS.iter().filter(|k| k.code.starts_with("Key")) {
            for lang in [Language::En, Language::Ru] {
                let g = key.glyphs(lang).unwrap();
                assert_eq!(g.base.to_uppercase().collect::<String>(), g.shifted.to_string());
            }
        }
    }
}
