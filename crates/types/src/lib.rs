//! Shared data types and constants.
//!
//! Pure data structures with no external dependencies, usable in any
//! context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared row |
//! | `HARD_DROP_POINTS_PER_ROW` | 2 | Bonus per row of hard-drop distance |
//!
//! # Timing
//!
//! `DROP_INTERVAL_MS` (1000ms) is the gravity interval. The drop timer
//! is owned by the runner, not the engine; it must be stopped whenever
//! the game leaves [`GameStatus::Playing`] and re-armed on re-entry.

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds (one row per second)
pub const DROP_INTERVAL_MS: u64 = 1000;

/// Points awarded per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points awarded per row of hard-drop distance
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// The seven tetromino piece kinds
///
/// The kind doubles as the color token stored in board cells:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a landed piece of that kind
pub type Cell = Option<PieceKind>;

/// Game lifecycle status
///
/// Transitions:
/// - `Playing` <-> `Paused` via the pause toggle
/// - `Playing` -> `GameOver` when a spawned piece immediately collides
/// - any state -> `Playing` via restart
///
/// `Paused` and `GameOver` both suspend all movement; intents other
/// than pause-toggle and restart are no-ops outside `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}

/// Player intents that drive the engine
///
/// Each intent maps to one engine operation. Invalid intents (e.g.
/// movement while paused) are rejected silently, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Instantly drop piece to its lowest valid position
    HardDrop,
    /// Rotate piece 90 degrees clockwise
    Rotate,
    /// Toggle pause state
    TogglePause,
    /// Reset board, pieces, score, and status
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_dimensions() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
    }

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn status_transitions() {
        assert!(GameStatus::Playing.is_playing());
        assert!(!GameStatus::Paused.is_playing());
        assert!(!GameStatus::GameOver.is_playing());
    }
}
