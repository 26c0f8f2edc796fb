use super::moves::Move;
use super::piece::Color;

/// Everything the engine can refuse to do. All errors are synchronous and
/// reported to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("square out of bounds: col {col}, row {row}")]
    SquareOutOfBounds { col: i32, row: i32 },

    #[error("malformed square designation `{0}`")]
    MalformedSquare(String),

    #[error("malformed move `{0}`")]
    MalformedMove(String),

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("cannot undo past the initial position")]
    EmptyHistory,

    #[error("{0:?} has no legal move")]
    NoLegalMove(Color),
}
