//! Autocomplete controller
//!
//! Binds one input surface to one dropdown. Text changes are debounced into lookups,
//! arrow keys move the highlight, Enter or a row press commits a suggestion, and blur
//! closes the dropdown after a short grace period.
//!
//! The controller never touches the terminal or the network directly. Lookups go out
//! through a [`QueryDispatcher`], text is written back through an [`InputSurface`], and
//! results come back in through [`AutocompleteController::on_fetch_result`]. The host
//! calls [`AutocompleteController::poll_timers`] on every tick of its event loop.

use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyCode;

use super::debouncer::Debouncer;
use super::state::AutocompleteState;
use super::suggestion::Suggestion;
use crate::config::AutocompleteConfig;
use crate::lookup::LookupError;

/// Sends a lookup for a trimmed query
///
/// Fire-and-forget: the outcome is delivered later via `on_fetch_result`. Returns
/// false if the lookup could not be sent at all.
pub trait QueryDispatcher {
    fn dispatch(&mut self, query: &str) -> bool;
}

/// The text input a controller is bound to
pub trait InputSurface {
    fn set_text(&mut self, text: &str);
}

/// Whether the controller consumed a key or left it for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

/// Coarse lifecycle of the widget, for status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Fetching,
    Open,
    Navigating,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Idle => "idle",
            Phase::Debouncing => "typing",
            Phase::Fetching => "searching",
            Phase::Open => "suggestions",
            Phase::Navigating => "selecting",
        };
        write!(f, "{}", label)
    }
}

type SelectCallback = Box<dyn FnMut(&Suggestion)>;

pub struct AutocompleteController<D: QueryDispatcher> {
    state: AutocompleteState,
    debouncer: Debouncer<String>,
    blur_deadlines: Vec<Instant>,
    /// Cleared by `on_blur`, set again by `on_focus`
    focused: bool,
    blur_grace: Duration,
    min_query_chars: usize,
    dispatcher: D,
    on_select: SelectCallback,
    /// Query of the most recent dispatch still awaiting a response
    in_flight: Option<String>,
}

impl<D: QueryDispatcher> AutocompleteController<D> {
    pub fn new(
        config: &AutocompleteConfig,
        dispatcher: D,
        on_select: impl FnMut(&Suggestion) + 'static,
    ) -> Self {
        Self {
            state: AutocompleteState::new(),
            debouncer: Debouncer::from_millis(config.debounce_ms),
            blur_deadlines: Vec::new(),
            focused: true,
            blur_grace: Duration::from_millis(config.blur_grace_ms),
            min_query_chars: config.min_query_chars,
            dispatcher,
            on_select: Box::new(on_select),
            in_flight: None,
        }
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn is_open(&self) -> bool {
        self.state.is_visible()
    }

    pub fn phase(&self) -> Phase {
        if self.debouncer.is_pending() {
            Phase::Debouncing
        } else if self.state.is_visible() {
            if self.state.selected_index().is_some() {
                Phase::Navigating
            } else {
                Phase::Open
            }
        } else if self.in_flight.is_some() {
            Phase::Fetching
        } else {
            Phase::Idle
        }
    }

    /// Handle the input's text changing to `text`
    pub fn on_text_changed(&mut self, text: &str, now: Instant) {
        let query = text.trim();

        if query.chars().count() < self.min_query_chars {
            self.debouncer.cancel();
            self.in_flight = None;
            self.state.hide();
            return;
        }

        self.debouncer.schedule(query.to_string(), now);
    }

    /// Handle a key press while the input has focus
    pub fn on_key(&mut self, code: KeyCode, input: &mut impl InputSurface) -> KeyOutcome {
        if !self.state.is_visible() {
            return KeyOutcome::Ignored;
        }

        match code {
            KeyCode::Down => {
                self.state.select_next();
                KeyOutcome::Consumed
            }
            KeyCode::Up => {
                self.state.select_previous();
                KeyOutcome::Consumed
            }
            KeyCode::Enter => {
                if let Some(suggestion) = self.state.selected().cloned() {
                    self.commit(suggestion, input);
                }
                KeyOutcome::Consumed
            }
            KeyCode::Esc => {
                self.state.hide();
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Handle a pointer press on a rendered row
    ///
    /// Bound to the press phase so it runs before a pending blur close.
    pub fn on_row_press(&mut self, index: usize, input: &mut impl InputSurface) {
        if let Some(suggestion) = self.state.suggestions().get(index).cloned() {
            self.commit(suggestion, input);
        }
    }

    /// Handle the input losing focus: close after the grace period
    pub fn on_blur(&mut self, now: Instant) {
        self.focused = false;
        self.blur_deadlines.push(now + self.blur_grace);
    }

    /// Handle the input gaining focus again
    ///
    /// Blur timers already running still close the dropdown when they come due.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Fire any timers that are due at `now`
    pub fn poll_timers(&mut self, now: Instant) {
        if let Some(query) = self.debouncer.take_due(now) {
            log::debug!("Dispatching lookup for {:?}", query);
            if self.dispatcher.dispatch(&query) {
                self.in_flight = Some(query);
            } else {
                self.in_flight = None;
                self.state.hide();
            }
        }

        let before = self.blur_deadlines.len();
        self.blur_deadlines.retain(|deadline| *deadline > now);
        if self.blur_deadlines.len() != before {
            self.state.hide();
        }
    }

    /// Apply the outcome of a lookup
    ///
    /// Responses are applied in arrival order, so a late response for an older query
    /// can replace newer results.
    pub fn on_fetch_result(&mut self, query: &str, outcome: Result<Vec<Suggestion>, LookupError>) {
        if self.in_flight.as_deref() == Some(query) {
            self.in_flight = None;
        } else {
            log::debug!(
                "Applying out-of-order response for {:?} (latest: {:?})",
                query,
                self.in_flight
            );
        }

        match outcome {
            // Blurred and past its grace period: nothing would ever close it again
            Ok(_) if !self.focused && self.blur_deadlines.is_empty() => {
                log::debug!("Lookup for {:?} arrived after blur, keeping dropdown closed", query);
                self.state.hide();
            }
            Ok(suggestions) => {
                log::debug!("Lookup for {:?} returned {} results", query, suggestions.len());
                self.state.update_suggestions(suggestions);
            }
            Err(e) => {
                log::debug!("Lookup for {:?} failed: {}", query, e);
                self.state.hide();
            }
        }
    }

    fn commit(&mut self, suggestion: Suggestion, input: &mut impl InputSurface) {
        input.set_text(&suggestion.label);
        self.state.hide();
        (self.on_select)(&suggestion);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
