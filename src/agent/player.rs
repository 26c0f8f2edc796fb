//! Player trait: the seam between the engine core and whatever orchestrates
//! turns.
//!
//! A player is any entity that can produce a move for the side to move on a
//! board: the search agent, a human at a console, a replay reader. The
//! orchestrating controller owns the authoritative board; it hands the player
//! a reference, receives a move back, and applies the move itself.
//!
//! `next_move` is intentionally synchronous. The search blocks until done and
//! a human player would block on input; a turn-based loop needs nothing more.

use crate::game_repr::{Board, Error, Move};

pub trait Player {
    /// Produce the next move for the side to move on `board`. Must not
    /// mutate the caller's board; implementations that need a scratch copy
    /// clone it. Fails with `Error::NoLegalMove` on a decided position.
    fn next_move(&mut self, board: &Board) -> Result<Move, Error>;

    /// Display name, used for logging and console output.
    fn name(&self) -> &str {
        "Player"
    }
}
