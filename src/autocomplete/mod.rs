pub mod autocomplete_render;
mod controller;
mod debouncer;
mod state;
mod suggestion;

pub use autocomplete_render::{DropdownLayout, render_dropdown};
pub use controller::{AutocompleteController, InputSurface, KeyOutcome, Phase, QueryDispatcher};
pub use debouncer::Debouncer;
pub use state::AutocompleteState;
pub use suggestion::{Suggestion, SuggestionResponse};
