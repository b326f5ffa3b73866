//! Game orchestration built on the core data structures.
//!
//! - [`GameConfig`] - Immutable board dimensions and gravity interval
//! - [`GameSession`] - The per-frame state machine: gravity, input dispatch,
//!   locking, scoring, game-over detection
//! - [`clear_lines`] - Full-row detection and downward compaction
//!
//! # Game Flow
//!
//! 1. Construct a [`GameSession`] from a [`GameConfig`]
//! 2. Each frame, feed elapsed time and the batch of input events to
//!    [`GameSession::step`]
//! 3. Render from [`GameSession::render_board`] (locked cells plus the
//!    falling piece overlay)
//! 4. Repeat until the session state is game over; call
//!    [`GameSession::reset`] to start a fresh session in place

pub use self::{config::*, line_clear::*, session::*};

mod config;
mod line_clear;
mod session;
