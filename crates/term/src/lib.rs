//! Terminal rendering for blockfall.
//!
//! Split into a pure layer and an I/O layer:
//! - [`fb`]: an in-memory framebuffer of styled glyphs
//! - [`game_view`]: renders a [`blockfall_core::GameSnapshot`] into a
//!   framebuffer
//! - [`renderer`]: diff-flushes framebuffers to the terminal through
//!   crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
