use super::suggestion::Suggestion;

/// Result set and highlight of one dropdown
///
/// `selected` is either `None` or a valid index into `suggestions`. The dropdown
/// is open exactly when `suggestions` is non-empty.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the result set wholesale and clear the highlight
    pub fn update_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.selected = None;
    }

    /// Close the dropdown and forget the result set
    pub fn hide(&mut self) {
        self.suggestions.clear();
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Highlight index as the widget's signed form: -1 when nothing is highlighted
    #[cfg(test)]
    pub fn selected_position(&self) -> isize {
        self.selected.map_or(-1, |i| i as isize)
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.suggestions.get(i))
    }

    /// Move the highlight down one row, stopping at the last row
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move the highlight up one row, stopping at the first row
    ///
    /// With nothing highlighted this highlights the first row.
    pub fn select_previous(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Highlight a specific row, ignoring out-of-range indices
    #[cfg(test)]
    pub fn select(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.selected = Some(index);
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
