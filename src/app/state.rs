use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use crate::autocomplete::{AutocompleteController, Suggestion};
use crate::config::AutocompleteConfig;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::lookup::{FieldDispatcher, LookupHandle, LookupResponse};

/// How the app was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// Print the selections (Ctrl+S, or Enter once every field is filled)
    Submit,
    /// Leave without output (Esc, Ctrl+C)
    Cancel,
}

/// One labelled location input with its own autocomplete widget
pub struct LocationField {
    pub name: String,
    pub input: InputState,
    pub controller: AutocompleteController<FieldDispatcher>,
    /// Last committed suggestion; cleared when the text is edited afterwards
    pub selection: Option<Suggestion>,
}

/// Application state
pub struct App {
    pub fields: Vec<LocationField>,
    /// Index of the focused field
    pub focus: usize,
    pub exit: Option<ExitAction>,
    pub max_visible_rows: usize,
    pub layout_regions: LayoutRegions,
    response_rx: Receiver<LookupResponse>,
    selection_rx: Receiver<(usize, Suggestion)>,
}

impl App {
    /// Create the app with one field per name, all sharing one lookup worker
    pub fn new(
        names: Vec<String>,
        config: &AutocompleteConfig,
        handle: LookupHandle,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        let (selection_tx, selection_rx) = mpsc::channel();

        let fields = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| LocationField {
                name,
                input: InputState::new(),
                controller: AutocompleteController::new(
                    config,
                    FieldDispatcher::new(index, handle.clone()),
                    selection_callback(index, selection_tx.clone()),
                ),
                selection: None,
            })
            .collect();

        Self {
            fields,
            focus: 0,
            exit: None,
            max_visible_rows: config.max_visible_rows,
            layout_regions: LayoutRegions::default(),
            response_rx,
            selection_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.exit.is_some()
    }

    pub fn focused(&self) -> &LocationField {
        &self.fields[self.focus]
    }

    pub fn all_selected(&self) -> bool {
        self.fields.iter().all(|f| f.selection.is_some())
    }

    /// Field names paired with their committed suggestions, in field order
    pub fn selections(&self) -> Vec<(String, Option<Suggestion>)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.selection.clone()))
            .collect()
    }

    /// Move focus to `index`, blurring the field that had it
    pub fn focus_field(&mut self, index: usize, now: Instant) {
        if index == self.focus || index >= self.fields.len() {
            return;
        }
        self.fields[self.focus].controller.on_blur(now);
        self.focus = index;
        self.fields[index].controller.on_focus();
    }

    pub fn focus_next(&mut self, now: Instant) {
        let next = (self.focus + 1) % self.fields.len();
        self.focus_field(next, now);
    }

    pub fn focus_previous(&mut self, now: Instant) {
        let previous = (self.focus + self.fields.len() - 1) % self.fields.len();
        self.focus_field(previous, now);
    }

    /// Route a lookup outcome to the field that asked for it
    pub fn apply_response(&mut self, response: LookupResponse) {
        match self.fields.get_mut(response.field) {
            Some(field) => {
                let latest = field.controller.dispatcher().last_request_id();
                if response.request_id == latest {
                    log::debug!(
                        "Response #{} for field '{}' ({:?})",
                        response.request_id,
                        field.name,
                        response.query
                    );
                } else {
                    log::debug!(
                        "Stale response #{} for field '{}' ({:?}), latest is #{}",
                        response.request_id,
                        field.name,
                        response.query,
                        latest
                    );
                }
                field
                    .controller
                    .on_fetch_result(&response.query, response.outcome);
            }
            None => log::warn!("Response for unknown field {}", response.field),
        }
    }

    /// Record suggestions committed since the last call
    pub fn apply_selections(&mut self) {
        while let Ok((index, suggestion)) = self.selection_rx.try_recv() {
            if let Some(field) = self.fields.get_mut(index) {
                log::debug!("Field '{}' committed {:?}", field.name, suggestion.label);
                field.selection = Some(suggestion);
            }
        }
    }

    /// Advance the app to `now`: apply arrived responses, then fire due timers
    pub fn tick(&mut self, now: Instant) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.apply_response(response);
        }

        for field in &mut self.fields {
            field.controller.poll_timers(now);
        }
    }
}

fn selection_callback(
    index: usize,
    tx: Sender<(usize, Suggestion)>,
) -> impl FnMut(&Suggestion) + 'static {
    move |suggestion: &Suggestion| {
        if tx.send((index, suggestion.clone())).is_err() {
            log::warn!("Selection channel closed, dropped {:?}", suggestion.label);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
