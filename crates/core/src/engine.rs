//! Engine module - the falling-piece state machine
//!
//! `BoardEngine` owns the playfield, the active and next pieces, the
//! score, and the lifecycle status. All operations run to completion on
//! the calling thread; the gravity timer and keyboard events live in
//! the calling layer and drive the engine through [`GameIntent`]s.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::snapshot::{GameSnapshot, NextPreview};
use crate::types::{
    GameIntent, GameStatus, BOARD_HEIGHT, BOARD_WIDTH, HARD_DROP_POINTS_PER_ROW, LINE_CLEAR_POINTS,
};

/// The board/piece engine: spawn, move, rotate, collide, merge,
/// line-clear, and score.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    status: GameStatus,
    generator: PieceGenerator,
}

impl BoardEngine {
    /// Create a fresh engine with the given RNG seed
    ///
    /// No piece exists yet; the first gravity [`step`](Self::step)
    /// spawns it.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            score: 0,
            status: GameStatus::Playing,
            generator: PieceGenerator::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Collision test for a piece at an offset from its position
    ///
    /// A filled sub-cell collides if its absolute x leaves `[0, W)`, its
    /// absolute y reaches the bottom bound, or it overlaps an occupied
    /// board cell. Negative y (above the visible board) is never itself
    /// a collision.
    fn collides(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.shape.filled_offsets().any(|(cx, cy)| {
            let x = piece.x + dx + cx;
            let y = piece.y + dy + cy;
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.board.is_occupied(x, y)
        })
    }

    /// Gravity tick entry point
    ///
    /// Spawns the first piece when none exists (game start and after
    /// restart), otherwise attempts a one-row drop. No-op unless
    /// status is `Playing`.
    pub fn step(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        if self.active.is_none() {
            return self.spawn_next();
        }
        self.try_shift(0, 1)
    }

    /// Promote the next piece to active and refill the preview
    ///
    /// On the very first call both pieces are generated. The freshly
    /// assigned active piece is collision-tested at its spawn position;
    /// if it collides the game is over and nothing is merged.
    pub fn spawn_next(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }

        let incoming = match self.next.take() {
            Some(piece) => piece,
            None => Piece::spawn(self.generator.draw()),
        };
        self.next = Some(Piece::spawn(self.generator.draw()));
        self.active = Some(incoming);

        if self.collides(&incoming, 0, 0) {
            // The blocked piece stays visible in the snapshot overlay.
            self.status = GameStatus::GameOver;
            return false;
        }

        true
    }

    /// Attempt to translate the active piece by (dx, dy)
    ///
    /// A blocked horizontal move is rejected with no effect. A blocked
    /// downward move means the piece has landed and triggers the
    /// landing sequence. Returns true only when the piece moved.
    pub fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        if !self.collides(&piece, dx, dy) {
            self.active = Some(Piece {
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
            return true;
        }

        if dy > 0 {
            self.land();
        }

        false
    }

    /// Attempt to rotate the active piece 90 degrees clockwise
    ///
    /// The anchor stays fixed and no offset search is performed; a
    /// rotation that collides is rejected outright.
    pub fn try_rotate(&mut self) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let rotated = Piece {
            shape: piece.shape.rotated_cw(),
            ..piece
        };
        if self.collides(&rotated, 0, 0) {
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// Drop the active piece to its lowest valid position and land it
    ///
    /// Awards 2 points per row of drop distance on top of any
    /// line-clear score. Returns the drop distance.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.status.is_playing() {
            return 0;
        }
        let Some(piece) = self.active else {
            return 0;
        };

        let mut distance: i8 = 0;
        while !self.collides(&piece, 0, distance + 1) {
            distance += 1;
        }

        if distance > 0 {
            self.active = Some(Piece {
                y: piece.y + distance,
                ..piece
            });
        }
        self.score += HARD_DROP_POINTS_PER_ROW * distance as u32;

        self.land();
        distance as u32
    }

    /// Landing sequence: merge, clear complete rows, score, respawn
    fn land(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .merge(piece.shape.filled_offsets(), piece.x, piece.y, piece.kind);

        let cleared = self.board.clear_full_rows();
        self.score += LINE_CLEAR_POINTS * cleared.len() as u32;

        self.spawn_next();
    }

    /// Flip between Playing and Paused; no-op when the game is over
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                true
            }
            GameStatus::GameOver => false,
        }
    }

    /// Reset board, pieces, score, and status
    ///
    /// The next gravity step spawns the first piece of the new game.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.status = GameStatus::Playing;
    }

    /// Apply a player intent
    pub fn apply_intent(&mut self, intent: GameIntent) -> bool {
        match intent {
            GameIntent::MoveLeft => self.try_shift(-1, 0),
            GameIntent::MoveRight => self.try_shift(1, 0),
            GameIntent::SoftDrop => self.try_shift(0, 1),
            GameIntent::HardDrop => self.hard_drop() > 0,
            GameIntent::Rotate => self.try_rotate(),
            GameIntent::TogglePause => self.toggle_pause(),
            GameIntent::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Build a read-only view for rendering
    ///
    /// The grid holds the landed cells with the active piece's in-bounds
    /// sub-cells overlaid; the stored board is never mutated by this.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            row.copy_from_slice(&self.board.cells()[start..start + BOARD_WIDTH as usize]);
        }

        if let Some(piece) = self.active {
            for (cx, cy) in piece.shape.filled_offsets() {
                let x = piece.x + cx;
                let y = piece.y + cy;
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    grid[y as usize][x as usize] = Some(piece.kind);
                }
            }
        }

        GameSnapshot {
            grid,
            next: self.next.map(|piece| NextPreview {
                kind: piece.kind,
                shape: piece.shape,
            }),
            score: self.score,
            status: self.status,
        }
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
