//! The text buffer that mirrors the page's text area.

/// The fixed effect a special key has on the text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Remove the last character (Backspace).
    DeleteLast,
    /// Append `\t` (Tab).
    InsertTab,
    /// Append `\n` (Enter).
    InsertNewline,
    /// Append a space (Space).
    InsertSpace,
    /// Leave the buffer unchanged (every other special key).
    None,
}

impl ControlAction {
    /// Maps a special key's code to its action.
    pub fn for_code(code: &str) -> Self {
        match code {
            "Backspace" => ControlAction::DeleteLast,
            "Tab" => ControlAction::InsertTab,
            "Enter" => ControlAction::InsertNewline,
            "Space" => ControlAction::InsertSpace,
            _ => ControlAction::None,
        }
    }
}

/// Accumulated output of the keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Appends typed text.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Applies a control action in place.
    pub fn apply(&mut self, action: ControlAction) {
        match action {
            ControlAction::DeleteLast => {
                self.text.pop();
            }
            ControlAction::InsertTab => self.text.push('\t'),
            ControlAction::InsertNewline => self.text.push('\n'),
            ControlAction::InsertSpace => self.text.push(' '),
            ControlAction::None => {}
        }
    }

    /// Consumes the buffer and returns its contents.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self { text: s.to_string() }
    }
}
