// Automated player - depth-limited minimax with alpha-beta pruning.
//
// Key properties:
// - Deterministic: the same position always yields the same move. Ties are
//   broken by enumeration order (the last equally-best move wins).
// - The search depth grows with the move count: spears accumulate as the
//   game progresses, the branching factor shrinks, and deeper search
//   becomes affordable.
// - Operates on a private clone of the caller's board, mutated in place via
//   the make/undo stack discipline.

mod ai_player;
mod evaluation;
mod minimax;

pub use ai_player::AiPlayer;
pub use evaluation::static_score;
pub use minimax::{select_move, INFTY, WINNING_VALUE};
