//! Autocomplete dropdown rendering
//!
//! Draws the suggestion rows directly below the input field. Rows are rebuilt from
//! the controller state on every frame.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::AutocompleteState;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_OFFSET_X: u16 = 1;
const MARKER_WIDTH: usize = 2;
const SELECTED_MARKER: &str = "► ";
const PLAIN_MARKER: &str = "  ";

/// Where the dropdown was drawn, for mouse hit-testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownLayout {
    pub area: Rect,
    /// Suggestion index and screen row of every visible row
    pub rows: Vec<(usize, Rect)>,
}

impl DropdownLayout {
    /// Suggestion index of the row under a screen position
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(_, rect)| popup::contains(*rect, column, row))
            .map(|(index, _)| *index)
    }
}

/// First suggestion index shown, keeping the highlighted row inside the window
pub fn scroll_offset(selected: Option<usize>, visible_rows: usize) -> usize {
    match selected {
        Some(index) if visible_rows > 0 && index >= visible_rows => index + 1 - visible_rows,
        _ => 0,
    }
}

/// Render the dropdown below `input_area`, returning its layout when open
pub fn render_dropdown(
    state: &AutocompleteState,
    frame: &mut Frame,
    input_area: Rect,
    max_visible_rows: usize,
) -> Option<DropdownLayout> {
    let suggestions = state.suggestions();
    if suggestions.is_empty() || max_visible_rows == 0 {
        return None;
    }

    let visible_count = suggestions.len().min(max_visible_rows);
    let popup_height = visible_count as u16 + POPUP_BORDER_HEIGHT;
    let popup_area = popup::popup_below_anchor(
        input_area,
        input_area.width,
        popup_height,
        POPUP_OFFSET_X,
        frame.area(),
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let inner = popup::inset_rect(popup_area, 1, 1);
    let shown = visible_count.min(inner.height as usize);
    let offset = scroll_offset(state.selected_index(), shown);
    let label_width = (inner.width as usize).saturating_sub(MARKER_WIDTH);

    let mut rows = Vec::with_capacity(shown);
    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(shown)
        .enumerate()
        .map(|(line, (index, suggestion))| {
            rows.push((
                index,
                Rect {
                    x: inner.x,
                    y: inner.y + line as u16,
                    width: inner.width,
                    height: 1,
                },
            ));

            let label = truncate_to_width(&suggestion.label, label_width);
            let line = if state.selected_index() == Some(index) {
                // Pad so the highlight spans the whole row
                let padding = " ".repeat(label_width.saturating_sub(label.width()));
                Line::from(Span::styled(
                    format!("{}{}{}", SELECTED_MARKER, label, padding),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{}{}", PLAIN_MARKER, label),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let title = if suggestions.len() > shown {
        format!(" {}-{} of {} ", offset + 1, offset + shown, suggestions.len())
    } else {
        " Suggestions ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);

    Some(DropdownLayout {
        area: popup_area,
        rows,
    })
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
