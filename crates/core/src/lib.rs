//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is exercised without a terminal or timer
//! - **Fast**: Zero-allocation board storage and line clearing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with row scanning and compaction
//! - [`engine`]: the falling-piece state machine (spawn, move, rotate,
//!   land, clear, score, pause, restart)
//! - [`piece`]: shape matrices for the seven tetrominoes and clockwise
//!   matrix rotation
//! - [`rng`]: deterministic uniform piece generation
//! - [`snapshot`]: read-only view for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered at the top row in their
//!   canonical orientation.
//! - Piece selection is an independent uniform choice among the seven
//!   kinds; repeats are allowed (no 7-bag randomizer).
//! - Rotation is a plain clockwise matrix rotation with no wall kicks.
//! - A blocked downward move lands the piece: its cells merge into the
//!   board, complete rows clear at 100 points each, and the next piece
//!   spawns. A spawn that immediately collides ends the game.
//! - Hard drop awards 2 points per row of distance.
//!
//! # Example
//!
//! ```
//! use blockfall_core::BoardEngine;
//! use blockfall_types::GameIntent;
//!
//! let mut engine = BoardEngine::new(12345);
//! engine.step(); // spawn the first piece
//!
//! engine.apply_intent(GameIntent::MoveRight);
//! engine.apply_intent(GameIntent::Rotate);
//! engine.apply_intent(GameIntent::HardDrop);
//!
//! assert!(engine.score() > 0); // hard drop always awards points here
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::BoardEngine;
pub use piece::{template, Piece, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::{GameSnapshot, NextPreview};
