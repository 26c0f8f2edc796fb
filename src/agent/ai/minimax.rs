// Minimax search with alpha-beta pruning.
//
// The search mutates one board in place: each candidate move is applied,
// searched, and undone before the next sibling is considered. Apply must be
// followed by exactly one matching undo before control returns to the parent
// frame; the board is a shared scratchpad for the duration of one
// `select_move` call and nothing else may touch it.
//
// `sense` is +1 when maximizing for white and -1 when minimizing for black.
// A candidate replaces the recorded best on a >= (maximizing) or <=
// (minimizing) improvement, so the last equally-good move in enumeration
// order wins. Only the root frame records its chosen move.

use super::evaluation::static_score;
use crate::game_repr::{Board, Color, Error, Move};
use log::debug;

/// A position magnitude indicating a win: positive for white, negative for
/// black. Strictly below the search-window sentinel so comparisons against
/// the window stay well ordered.
pub const WINNING_VALUE: i32 = i32::MAX - 1;

/// A magnitude greater than any position value; initial window bound.
pub const INFTY: i32 = i32::MAX;

/// Choose a move for the side to move on `board`. Searches a private clone
/// to a depth derived from the move count; the caller's board is untouched.
/// Fails with `Error::NoLegalMove` if the position is already decided.
pub fn select_move(board: &Board) -> Result<Move, Error> {
    let mut scratch = board.clone();
    let depth = max_depth(scratch.num_moves());
    let sense = match scratch.turn() {
        Color::White => 1,
        Color::Black => -1,
    };

    let mut searcher = Searcher { best: None };
    let value = searcher.find_move(&mut scratch, depth, true, sense, -INFTY, INFTY)?;
    let mv = searcher.best.ok_or(Error::NoLegalMove(board.turn()))?;
    debug!(
        "selected {mv} (depth {depth}, value {value}, {} moves played)",
        board.num_moves()
    );
    Ok(mv)
}

/// Heuristic maximum search depth for a position with `num_moves` moves
/// played. Tunable policy, not a rule of the game.
fn max_depth(num_moves: usize) -> u32 {
    match num_moves {
        n if n < 20 => 1,
        n if n < 30 => 2,
        n if n < 40 => 3,
        n if n < 50 => 4,
        _ => 5,
    }
}

/// Holds the move recorded at the root of the current search. Nothing
/// persists across `select_move` calls.
struct Searcher {
    best: Option<Move>,
}

impl Searcher {
    /// Evaluate `board` to `depth` plies within the (alpha, beta) window,
    /// recording the best move found iff `save_move` (true only at the
    /// root). Returns the position value from white's perspective.
    ///
    /// Errors cannot occur for moves drawn from `legal_moves()`; they are
    /// propagated rather than masked so a board-contract violation surfaces
    /// at the call site instead of corrupting the search.
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: u32,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, Error> {
        if depth == 0 || board.winner().is_some() {
            return Ok(static_score(board));
        }

        let moves: Vec<Move> = board.legal_moves().collect();
        let mut current = None;
        let mut optimal = if sense == 1 { -INFTY } else { INFTY };

        for mv in moves {
            board.make_move(mv)?;
            let value = self.find_move(board, depth - 1, false, -sense, alpha, beta)?;
            board.undo()?;

            if sense == 1 {
                if value >= optimal {
                    current = Some(mv);
                    optimal = value;
                    alpha = alpha.max(value);
                    if beta <= alpha {
                        break;
                    }
                }
            } else if value <= optimal {
                current = Some(mv);
                optimal = value;
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
        }

        if save_move {
            self.best = current;
        }
        Ok(optimal)
    }
}
