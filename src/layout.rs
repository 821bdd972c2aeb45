//! Layout module for tracking UI component regions
//!
//! Records where each input and dropdown was drawn on the last frame so mouse
//! presses can be routed to the component under the pointer.

use ratatui::layout::Rect;

use crate::autocomplete::DropdownLayout;
use crate::widgets::popup;

/// Component under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Text input of a field
    Input(usize),
    /// A suggestion row in a field's dropdown
    DropdownRow { field: usize, row: usize },
    /// Dropdown border or title, which does nothing when pressed
    DropdownChrome(usize),
}

/// Screen areas from the most recent render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub inputs: Vec<Rect>,
    /// Dropdowns in draw order; later entries are on top
    pub dropdowns: Vec<(usize, DropdownLayout)>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        self.inputs.clear();
        self.dropdowns.clear();
    }

    /// Find the component at a screen position
    ///
    /// Dropdowns are checked topmost first since they overlap the inputs below them.
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        for (field, dropdown) in self.dropdowns.iter().rev() {
            if let Some(index) = dropdown.row_at(column, row) {
                return Some(Region::DropdownRow {
                    field: *field,
                    row: index,
                });
            }
            if popup::contains(dropdown.area, column, row) {
                return Some(Region::DropdownChrome(*field));
            }
        }

        self.inputs
            .iter()
            .position(|area| popup::contains(*area, column, row))
            .map(Region::Input)
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
