//! Mouse press handling
//!
//! Presses on a dropdown row commit that suggestion. Presses on another field's input
//! move focus there. Acting on the press rather than the release keeps a row press
//! ahead of the blur-triggered close.

use std::time::Instant;

use super::state::App;
use crate::layout::Region;

/// Handle left mouse button press for the given region
pub fn handle_press(app: &mut App, region: Option<Region>, now: Instant) {
    match region {
        Some(Region::DropdownRow { field, row }) => press_dropdown_row(app, field, row),
        Some(Region::Input(field)) => app.focus_field(field, now),
        // Dropdown borders and empty space: no behavior
        _ => {}
    }
}

fn press_dropdown_row(app: &mut App, field: usize, row: usize) {
    if let Some(field) = app.fields.get_mut(field) {
        field.controller.on_row_press(row, &mut field.input);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
