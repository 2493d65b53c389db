//! Keyboard input mapping.
//!
//! Maps `crossterm` key events into [`blockfall_types::GameIntent`]s.
//! Input is strictly discrete: one key press is one intent, with no
//! auto-repeat layer on top. Exact bindings are a UI concern, not part
//! of the engine contract.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
