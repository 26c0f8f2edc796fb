use super::errors::Error;
use super::moves::Move;
use super::piece::{Cell, Color};
use super::square::{Direction, Square, Squares, NUM_SQUARES, SIZE};
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Initial queen placement, as linear indices.
const WHITE_START: [usize; 4] = [3, 6, 30, 39]; // d1, g1, a4, j4
const BLACK_START: [usize; 4] = [60, 69, 93, 96]; // a7, j7, d10, g10

/// The authoritative state of one game: the grid, whose turn it is and the
/// stack of moves that produced the position. The stack makes `undo` a strict
/// inverse of `make_move`; replaying it from the initial layout reproduces
/// the grid exactly.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [Cell; NUM_SQUARES],
    turn: Color,
    history: Vec<Move>,
    /// Cached derived value: the opponent of a side to move that has no
    /// legal reply. Refreshed by every `put`.
    winner: Option<Color>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the fixed initial layout, white to move.
    pub fn new() -> Board {
        let mut board = Board {
            grid: [Cell::Empty; NUM_SQUARES],
            turn: Color::White,
            history: Vec::new(),
            winner: None,
        };
        for idx in WHITE_START {
            board.grid[idx] = Cell::Queen(Color::White);
        }
        for idx in BLACK_START {
            board.grid[idx] = Cell::Queen(Color::Black);
        }
        board
    }

    /// The side whose move it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The number of moves made (and not undone) so far.
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// The winner of the current position, or `None` if the game is not yet
    /// decided. The side to move loses exactly when it has no legal move.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn get(&self, sq: Square) -> Cell {
        self.grid[sq.index()]
    }

    /// Write `cell` at `sq` directly. Every `put` re-derives the cached
    /// winner, which is a legal-move-existence probe over the grid; callers
    /// composing several `put`s pay that probe on each one.
    pub fn put(&mut self, cell: Cell, sq: Square) {
        self.grid[sq.index()] = cell;
        self.refresh_winner();
    }

    fn refresh_winner(&mut self) {
        let stuck = self.legal_moves_for(self.turn).next().is_none();
        self.winner = stuck.then(|| self.turn.opposite());
    }

    /// A square can be moved through (or onto) iff it is empty, except that
    /// `as_empty` is treated as empty regardless of its contents.
    fn passable(&self, sq: Square, as_empty: Option<Square>) -> bool {
        Some(sq) == as_empty || self.get(sq).is_empty()
    }

    /// True iff from -> to is an unblocked queen move, ignoring the contents
    /// of `as_empty` if it lies on the line. The exception square supports
    /// spear throwing: validation happens before the queen's origin is
    /// physically vacated, so the origin is passed as `as_empty` for the
    /// spear leg.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        if !from.is_queen_move(to) {
            return false;
        }
        let dir = from.direction_to(to);
        let mut steps = 1;
        loop {
            match from.queen_move(dir, steps) {
                Some(sq) if sq == to => return self.passable(sq, as_empty),
                Some(sq) if self.passable(sq, as_empty) => steps += 1,
                _ => return false,
            }
        }
    }

    /// True iff `from` holds a queen of the side to move.
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.get(from) == Cell::Queen(self.turn)
    }

    /// True iff from -> to is a legal first leg, ignoring spear throwing.
    pub fn is_legal_to(&self, from: Square, to: Square) -> bool {
        self.is_legal_from(from) && self.is_unblocked_move(from, to, None)
    }

    /// True iff the full move is legal in the current position. The spear
    /// leg treats the origin as already vacated.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_to(mv.from(), mv.to())
            && self.is_unblocked_move(mv.to(), mv.spear(), Some(mv.from()))
    }

    /// Apply `mv`: relocate the queen, clear its origin, place the spear,
    /// record the move, and pass the turn. An illegal move is rejected with
    /// `Error::IllegalMove` and leaves the board untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<(), Error> {
        if !self.is_legal(mv) {
            return Err(Error::IllegalMove(mv));
        }
        let queen = self.get(mv.from());
        self.put(queen, mv.to());
        self.put(Cell::Empty, mv.from());
        self.put(Cell::Spear, mv.spear());
        self.history.push(mv);
        self.turn = self.turn.opposite();
        self.refresh_winner();
        Ok(())
    }

    /// Undo the last move, restoring the grid, turn and move count exactly.
    /// Fails with `Error::EmptyHistory` on the initial position.
    pub fn undo(&mut self) -> Result<Move, Error> {
        let mv = self.history.pop().ok_or(Error::EmptyHistory)?;
        self.turn = self.turn.opposite();
        // The spear may sit on the vacated origin; clear it before the queen
        // is put back.
        self.put(Cell::Empty, mv.spear());
        let queen = self.get(mv.to());
        self.put(queen, mv.from());
        self.put(Cell::Empty, mv.to());
        Ok(mv)
    }

    /// Squares reachable by an unblocked queen move from `from`, treating
    /// `as_empty` (if any) as empty. Pays no attention to what sits on
    /// `from` itself. Yields in direction-index order, nearest squares
    /// first; single pass.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom {
            board: self,
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }

    /// All legal moves for the side to move. Lazy and single pass; ask for a
    /// fresh iterator to restart.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        self.legal_moves_for(self.turn)
    }

    /// All legal moves for `side`, regardless of whose turn it is. The
    /// enumeration order is fixed: origins in square-index order, then
    /// destinations and spear targets each in direction-then-distance order.
    pub fn legal_moves_for(&self, side: Color) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            side,
            origins: Square::all(),
            dests: None,
            spears: None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "   ")?;
            for col in 0..SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.grid[row * SIZE + col].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lazy sweep of the squares a queen on `from` can reach.
pub struct ReachableFrom<'a> {
    board: &'a Board,
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: u32,
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while self.dir < Direction::ALL.len() {
            self.steps += 1;
            if let Some(sq) = self.from.queen_move(Direction::ALL[self.dir], self.steps) {
                // Every nearer square in this direction was already seen to
                // be passable, so passability of `sq` alone decides.
                if self.board.passable(sq, self.as_empty) {
                    return Some(sq);
                }
            }
            self.dir += 1;
            self.steps = 0;
        }
        None
    }
}

/// Lazy enumeration of full moves: origin scan, destination sweep, spear
/// sweep, composed in that nesting order.
pub struct LegalMoves<'a> {
    board: &'a Board,
    side: Color,
    origins: Squares,
    dests: Option<(Square, ReachableFrom<'a>)>,
    spears: Option<(Square, Square, ReachableFrom<'a>)>,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let Some((from, to, throws)) = self.spears.as_mut() {
                if let Some(spear) = throws.next() {
                    return Some(Move::new(*from, *to, spear));
                }
                self.spears = None;
            }
            if let Some((from, dests)) = self.dests.as_mut() {
                if let Some(to) = dests.next() {
                    let from = *from;
                    // The vacated origin counts as empty for spear throwing.
                    self.spears = Some((from, to, self.board.reachable_from(to, Some(from))));
                    continue;
                }
                self.dests = None;
            }
            let board = self.board;
            let side = self.side;
            let from = self.origins.find(|&sq| board.get(sq) == Cell::Queen(side))?;
            self.dests = Some((from, board.reachable_from(from, None)));
        }
    }
}
