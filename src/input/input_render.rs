//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::InputState;

/// Render one location input with a focus-aware border
///
/// `committed` adds a check mark to the title once a suggestion has been accepted.
pub fn render_field(
    input: &mut InputState,
    frame: &mut Frame,
    area: Rect,
    name: &str,
    focused: bool,
    committed: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut title_spans = vec![Span::raw(format!(" {} ", name))];
    if committed {
        title_spans.push(Span::styled("✓ ", Style::default().fg(Color::Green)));
    }

    input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border_color)),
    );

    // Hide the cursor in unfocused fields
    let cursor_style = if focused {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default()
    };
    input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
