use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::autocomplete::InputSurface;

/// Single-line text input backed by a textarea
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    /// Feed a key to the textarea, returning true if the text changed
    ///
    /// Keys that would insert a line break are dropped so the input stays on one line.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let is_newline = key.code == KeyCode::Enter
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
        if is_newline {
            return false;
        }

        let before = self.text().to_string();
        self.textarea.input(key);
        self.text() != before
    }
}

impl InputSurface for InputState {
    fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
