use std::time::Instant;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click;
use super::state::{App, ExitAction};
use crate::autocomplete::KeyOutcome;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        self.dispatch_key(key, now);
        self.apply_selections();
    }

    /// Handle mouse events; only the left button press does anything
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = self.layout_regions.region_at(mouse.column, mouse.row);
            mouse_click::handle_press(self, region, now);
            self.apply_selections();
        }
    }

    fn dispatch_key(&mut self, key: KeyEvent, now: Instant) {
        // Global keys take precedence over the focused widget
        if self.handle_global_keys(key, now) {
            return;
        }

        let field = &mut self.fields[self.focus];
        if field.controller.on_key(key.code, &mut field.input) == KeyOutcome::Consumed {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.exit = Some(ExitAction::Cancel);
            }
            KeyCode::Enter => self.handle_enter(now),
            _ => self.handle_text_key(key, now),
        }
    }

    /// Handle keys that work regardless of widget state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.exit = Some(ExitAction::Cancel);
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.exit = Some(ExitAction::Submit);
                true
            }
            KeyCode::Tab if !ctrl => {
                self.focus_next(now);
                true
            }
            KeyCode::BackTab => {
                self.focus_previous(now);
                true
            }
            _ => false,
        }
    }

    /// Enter with the dropdown closed: advance to the next field, or submit from
    /// the last one once every field has a selection
    fn handle_enter(&mut self, now: Instant) {
        if self.focus + 1 < self.fields.len() {
            self.focus_next(now);
        } else if self.all_selected() {
            self.exit = Some(ExitAction::Submit);
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent, now: Instant) {
        let field = &mut self.fields[self.focus];
        if field.input.handle_key(key) {
            field.selection = None;
            field.controller.on_text_changed(field.input.text(), now);
        }
    }

    /// Handle pasted text as if it were typed in one go
    pub fn handle_paste_event(&mut self, text: String, now: Instant) {
        let field = &mut self.fields[self.focus];
        // Pasted line breaks would split the single-line input
        let single_line = text.replace(['\r', '\n'], " ");
        if single_line.is_empty() {
            return;
        }
        field.input.textarea.insert_str(&single_line);
        field.selection = None;
        field.controller.on_text_changed(field.input.text(), now);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
