//! Domain layer: pure interaction state, no I/O and no rendering.

pub mod events;
pub mod interaction;
pub mod shell_state;
pub mod text_field_state;
pub mod transcript;
