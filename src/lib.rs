//! Terminal location picker
//!
//! Each location field is an autocomplete widget: typing is debounced into lookups
//! against a suggestion endpoint, the results are shown in a keyboard-navigable
//! dropdown, and the accepted suggestion is reported back with every field the
//! server sent.

pub mod app;
pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod lookup;
pub mod output;
pub mod widgets;
