// Static position evaluation.
//
// A decided position scores the full winning magnitude for the winner.
// Anything else scores white's mobility: the number of legal moves white has,
// whoever's turn it is. Counting only white's moves (rather than the
// difference of both sides' mobility) is a deliberate, documented asymmetry
// kept for parity with existing play; treat it as a tunable policy.

use super::minimax::WINNING_VALUE;
use crate::game_repr::{Board, Color};

/// Heuristic value of `board` from white's perspective.
pub fn static_score(board: &Board) -> i32 {
    match board.winner() {
        Some(Color::White) => WINNING_VALUE,
        Some(Color::Black) => -WINNING_VALUE,
        None => board.legal_moves_for(Color::White).count() as i32,
    }
}
