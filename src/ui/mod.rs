//! UI layer: the ratatui rendering adapter over the domain state.

pub mod event_source;
mod input_field;
pub mod shell;
mod styles;
mod terminal;
mod transcript_rendering;
mod view;
