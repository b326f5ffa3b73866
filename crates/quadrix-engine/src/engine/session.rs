use std::{mem, time::Duration};

use rand::{Rng as _, SeedableRng as _, prelude::StdRng};

use crate::{
    PieceCollisionError,
    core::{
        board::{Board, LockedCells},
        piece::Piece,
    },
};

use super::{config::GameConfig, line_clear::clear_lines};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Normal play: a current and a next piece are active.
    Falling,
    /// Terminal: a locked cell reached the topmost row.
    GameOver,
}

/// A discrete player input event. Events arrive in per-frame batches and are
/// dispatched in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// The per-frame state machine tying timer-driven gravity to discrete player
/// input.
///
/// The session exclusively owns the current and next piece, the locked
/// cells, and the score for the duration of one game. Rejected moves and
/// rotations are handled by deterministic rollback and never surfaced to the
/// player; the only terminal condition is [`SessionState::GameOver`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use quadrix_engine::{GameConfig, GameSession, Input};
///
/// let mut session = GameSession::new(GameConfig::default());
/// session.step(Duration::from_millis(16), &[Input::MoveLeft, Input::Rotate]);
/// let board = session.render_board();
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    locked: LockedCells,
    current: Piece,
    next: Piece,
    score: usize,
    fall_timer: Duration,
    state: SessionState,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session seeded from the OS random source.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a session with an explicit RNG, for deterministic runs.
    #[must_use]
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let current = draw_piece(&config, &mut rng);
        let next = draw_piece(&config, &mut rng);
        Self {
            config,
            locked: LockedCells::new(),
            current,
            next,
            score: 0,
            fall_timer: Duration::ZERO,
            state: SessionState::Falling,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    #[must_use]
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    #[must_use]
    pub fn locked_cells(&self) -> &LockedCells {
        &self.locked
    }

    /// Returns the board projection with the falling piece overlaid, for
    /// rendering. The overlay is never written back into the locked cells.
    #[must_use]
    pub fn render_board(&self) -> Board {
        let mut board = self.board();
        board.overlay(&self.current);
        board
    }

    fn board(&self) -> Board {
        Board::project(self.config.cols(), self.config.rows(), &self.locked)
    }

    /// Advances the simulation by one frame.
    ///
    /// Accumulates `dt` into the fall timer; when the timer reaches the fall
    /// interval, gravity attempts to move the current piece down one row, and
    /// a rejected gravity step marks the piece for locking (the timer resets
    /// either way). Input events are then dispatched in arrival order with
    /// rollback on rejection. A failed soft drop does *not* trigger locking;
    /// only the gravity step can. Locking merges the piece into the locked
    /// cells, promotes the next piece, clears full rows, and awards 10 points
    /// per cleared row. The game-over check runs once per frame, after
    /// locking.
    pub fn step(&mut self, dt: Duration, inputs: &[Input]) {
        if self.state.is_game_over() {
            return;
        }

        let board = self.board();
        let mut lock_piece = false;

        self.fall_timer += dt;
        if self.fall_timer >= self.config.fall_interval() {
            self.fall_timer = Duration::ZERO;
            if self.try_translate(&board, 0, 1).is_err() {
                lock_piece = true;
            }
        }

        for &input in inputs {
            match input {
                Input::MoveLeft => _ = self.try_translate(&board, -1, 0),
                Input::MoveRight => _ = self.try_translate(&board, 1, 0),
                Input::SoftDrop => _ = self.try_translate(&board, 0, 1),
                Input::Rotate => _ = self.try_rotate(&board),
            }
        }

        if lock_piece {
            self.lock_current();
        }

        if self.locked.occupies_top_row() {
            self.state = SessionState::GameOver;
        }
    }

    /// Re-initializes the full session state in place: locked cells cleared,
    /// score reset, fresh random pieces. The RNG stream continues rather
    /// than reseeding.
    pub fn reset(&mut self) {
        self.locked.clear();
        self.current = draw_piece(&self.config, &mut self.rng);
        self.next = draw_piece(&self.config, &mut self.rng);
        self.score = 0;
        self.fall_timer = Duration::ZERO;
        self.state = SessionState::Falling;
    }

    fn try_translate(
        &mut self,
        board: &Board,
        dx: i32,
        dy: i32,
    ) -> Result<(), PieceCollisionError> {
        self.current.translate(dx, dy);
        if board.is_valid(&self.current) {
            Ok(())
        } else {
            self.current.translate(-dx, -dy);
            Err(PieceCollisionError)
        }
    }

    fn try_rotate(&mut self, board: &Board) -> Result<(), PieceCollisionError> {
        self.current.rotate();
        if board.is_valid(&self.current) {
            Ok(())
        } else {
            self.current.rotate_back();
            Err(PieceCollisionError)
        }
    }

    /// Merges the current piece into the locked cells (cells above the board
    /// are silently dropped), spawns the replacement, clears lines, and
    /// scores them.
    fn lock_current(&mut self) {
        for (x, y) in self.current.occupied_cells() {
            if y >= 0 {
                self.locked.insert(x, y, self.current.color());
            }
        }
        let fresh = draw_piece(&self.config, &mut self.rng);
        self.current = mem::replace(&mut self.next, fresh);

        let cleared = clear_lines(&self.config, &mut self.locked);
        self.score += cleared * 10;
    }
}

/// Draws a fresh piece: uniform over the 7 shapes and, independently,
/// uniform over the 7 palette colors. No spawn validation is performed.
fn draw_piece(config: &GameConfig, rng: &mut StdRng) -> Piece {
    Piece::spawn(rng.random(), rng.random(), config.cols())
}
