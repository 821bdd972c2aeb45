use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::autocomplete::render_dropdown;
use crate::input::render_field;

const FIELD_HEIGHT: u16 = 3;
const KEY_HINTS: &str = "↑↓ select · Enter accept · Tab next field · Ctrl+S done · Esc quit";

impl App {
    /// Render the UI
    ///
    /// Inputs are stacked top to bottom with the status line at the bottom. Open
    /// dropdowns are drawn last so they sit on top of the inputs below them, with
    /// the focused field's dropdown topmost.
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));

        let areas = Layout::vertical(constraints).split(frame.area());
        let status_area = areas[areas.len() - 1];

        self.layout_regions.clear();

        for (index, field) in self.fields.iter_mut().enumerate() {
            let area = areas[index];
            render_field(
                &mut field.input,
                frame,
                area,
                &field.name,
                index == self.focus,
                field.selection.is_some(),
            );
            self.layout_regions.inputs.push(area);
        }

        let draw_order = (0..self.fields.len())
            .filter(|i| *i != self.focus)
            .chain(std::iter::once(self.focus));
        for index in draw_order {
            let state = self.fields[index].controller.state();
            if let Some(layout) =
                render_dropdown(state, frame, areas[index], self.max_visible_rows)
            {
                self.layout_regions.dropdowns.push((index, layout));
            }
        }

        self.render_status(frame, status_area);
    }

    /// Render the status line: focused field, widget phase, key hints
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let field = self.focused();
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", field.name),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", field.controller.phase()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
