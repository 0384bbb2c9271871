//! Render state owned by the keyboard controller.
//!
//! The controller keeps one [`ButtonView`] per key code and updates it in
//! place on every state change.  A presentation layer (the WebSocket
//! service, a test, a terminal UI) only ever reads this structure; it never
//! has to search a widget tree to find the button for a code.

use std::collections::HashMap;

use crate::layout::Layout;

/// What a single on-screen key currently looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    /// The text drawn on the key.
    pub label: String,
    /// Whether the key is highlighted (held, or caps-lock on).
    pub active: bool,
}

/// The whole keyboard's render state.
#[derive(Debug, Clone)]
pub struct KeyboardView {
    /// Key codes per visual row, in table order.
    rows: Vec<Vec<&'static str>>,
    /// Render handle for every key code in the layout.
    buttons: HashMap<&'static str, ButtonView>,
}

impl KeyboardView {
    /// Builds one row per run of equal `row` values and one blank button per
    /// descriptor.  Labels are filled in by the controller's first refresh.
    pub fn build(layout: &Layout) -> Self {
        let rows = layout
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|key| key.code).collect())
            .collect();
        let buttons = layout
            .keys()
            .iter()
            .map(|key| {
                (
                    key.code,
                    ButtonView {
                        label: String::new(),
                        active: false,
                    },
                )
            })
            .collect();
        Self { rows, buttons }
    }

    /// Key codes grouped by row.
    pub fn rows(&self) -> &[Vec<&'static str>] {
        &self.rows
    }

    /// Returns the render handle for `code`, if the layout has that key.
    pub fn button(&self, code: &str) -> Option<&ButtonView> {
        self.buttons.get(code)
    }

    pub(crate) fn button_mut(&mut self, code: &str) -> Option<&mut ButtonView> {
        self.buttons.get_mut(code)
    }

    /// Iterates `(code, button)` in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ButtonView)> + '_ {
        self.rows
            .iter()
            .flatten()
            .filter_map(move |code| self.buttons.get(code).map(|b| (*code, b)))
    }

    /// Codes of every highlighted key, in layout order.
    pub fn active_codes(&self) -> Vec<&'static str> {
        self.iter().filter(|(_, b)| b.active).map(|(code, _)| code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mirrors_layout_rows() {
        // Arrange
        let layout = Layout::standard();

        // Act
        let view = KeyboardView::build(&layout);

        // Assert
        assert_eq!(view.rows().len(), 5);
        assert_eq!(view.rows()[0][0], "Backquote");
        assert_eq!(view.rows()[4].last(), Some(&"ControlRight"));
        assert_eq!(view.iter().count(), layout.len());
    }

    #[test]
    fn test_build_starts_with_nothing_active() {
        let view = KeyboardView::build(&Layout::standard());
        assert!(view.active_codes().is_empty());
    }

    #[test]
    fn test_button_lookup_unknown_code_is_none() {
        let view = KeyboardView::build(&Layout::standard());
        assert!(view.button("F13").is_none());
        assert!(view.button("KeyA").is_some());
    }
}
