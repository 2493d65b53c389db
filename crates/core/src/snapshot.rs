//! Read-only render view of the engine state.
//!
//! A snapshot is computed fresh for every frame; building it never
//! mutates the stored board. The grid carries the landed cells with
//! the active piece's in-bounds sub-cells already overlaid.

use crate::piece::Shape;
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The upcoming piece, for the preview box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPreview {
    pub kind: PieceKind,
    pub shape: Shape,
}

/// Everything the rendering layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Board contents with the active piece overlaid, row-major
    pub grid: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub next: Option<NextPreview>,
    pub score: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status.is_playing()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            next: None,
            score: 0,
            status: GameStatus::Playing,
        }
    }
}
