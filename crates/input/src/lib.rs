//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] commands and
//! front-end requests (difficulty choice, quit). Auto-repeat is left to the
//! terminal: repeated key presses arrive as repeated events.

pub mod map;

pub use blockfall_types as types;

pub use map::{difficulty_for_key, handle_key_event, interpret, should_quit, InputEvent};
