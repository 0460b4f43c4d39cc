//! Terminal front end for the block-fall game.
//!
//! Rendering is split in two steps: [`view`] lays a `GameSnapshot` out into a
//! [`Canvas`] with no I/O, and [`terminal`] flushes that canvas to a real
//! terminal through crossterm. Board cells are drawn two characters wide.

pub mod canvas;
pub mod terminal;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::{Canvas, Glyph, Rgb, Style};
pub use terminal::{changed_runs, encode_diff_into, encode_full_into, TerminalSession};
pub use view::{format_clock, format_speed, BoardView, Viewport};
