use super::errors::Error;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// The number of squares on a side of the board. Fixed by the rules, not
/// configurable.
pub const SIZE: usize = 10;

/// Total number of squares.
pub const NUM_SQUARES: usize = SIZE * SIZE;

/// Canonical text forms ("a1" .. "j10"), built once and shared so that
/// `Square::name` can hand out `&'static str` without allocating.
static NAMES: Lazy<Vec<String>> = Lazy::new(|| {
    (0..NUM_SQUARES)
        .map(|i| format!("{}{}", (b'a' + (i % SIZE) as u8) as char, i / SIZE + 1))
        .collect()
});

/// One of the eight compass directions a queen can move in, in the fixed
/// enumeration order that move generation sweeps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in index order 0..7.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit step (dcol, drow) for one move in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }
}

/// A position on the board, numbered 0 (a1, lower-left) to 99 (j10,
/// upper-right). Squares are cheap `Copy` keys over a fixed registry of 100
/// valid positions; equality is integer comparison. Clients obtain squares
/// through the factories (`sq`, `from_index`, `FromStr`), which reject
/// anything off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// The square at (col, row), counted from zero, or an error if either
    /// coordinate is off the board.
    pub fn sq(col: i32, row: i32) -> Result<Square, Error> {
        if Self::exists(col, row) {
            Ok(Square((row * SIZE as i32 + col) as u8))
        } else {
            Err(Error::SquareOutOfBounds { col, row })
        }
    }

    /// The square with linear index `index` (row * 10 + col).
    pub fn from_index(index: usize) -> Result<Square, Error> {
        if index < NUM_SQUARES {
            Ok(Square(index as u8))
        } else {
            Err(Error::SquareOutOfBounds {
                col: (index % SIZE) as i32,
                row: (index / SIZE) as i32,
            })
        }
    }

    /// True iff (col, row) designates a square on the board.
    pub fn exists(col: i32, row: i32) -> bool {
        (0..SIZE as i32).contains(&col) && (0..SIZE as i32).contains(&row)
    }

    /// All squares in stable index order (a1, b1, .., j10). This is the scan
    /// order move enumeration visits origins in.
    pub fn all() -> Squares {
        Squares { next: 0 }
    }

    /// Column 0..9, where 0 is column "a".
    pub fn col(self) -> usize {
        self.0 as usize % SIZE
    }

    /// Row 0..9, where 0 is the bottom row.
    pub fn row(self) -> usize {
        self.0 as usize / SIZE
    }

    /// Linear index 0..99.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Canonical text form, e.g. "a4".
    pub fn name(self) -> &'static str {
        &NAMES[self.index()]
    }

    /// True iff self -> to is a queen move: distinct squares on a common
    /// rank, file or exact diagonal. Ignores the contents of the board.
    pub fn is_queen_move(self, to: Square) -> bool {
        if self == to {
            return false;
        }
        let dc = (to.col() as i32 - self.col() as i32).abs();
        let dr = (to.row() as i32 - self.row() as i32).abs();
        dc == 0 || dr == 0 || dc == dr
    }

    /// The compass direction of the queen move self -> to.
    ///
    /// Precondition: `self.is_queen_move(to)`. Checked only in debug builds;
    /// this sits on the move-generation hot path.
    pub fn direction_to(self, to: Square) -> Direction {
        debug_assert!(self.is_queen_move(to));
        let dc = (to.col() as i32 - self.col() as i32).signum();
        let dr = (to.row() as i32 - self.row() as i32).signum();
        match (dc, dr) {
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, -1) => Direction::SouthEast,
            (0, -1) => Direction::South,
            (-1, -1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            _ => Direction::NorthWest,
        }
    }

    /// The square `steps` > 0 squares away in direction `dir`, or `None` if
    /// that runs off the board.
    pub fn queen_move(self, dir: Direction, steps: u32) -> Option<Square> {
        let (dc, dr) = dir.delta();
        let col = self.col() as i32 + dc * steps as i32;
        let row = self.row() as i32 + dr * steps as i32;
        Self::exists(col, row).then(|| Square((row * SIZE as i32 + col) as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parses the canonical designation: a column letter a..j followed by a
    /// row number 1..10.
    fn from_str(s: &str) -> Result<Self, Error> {
        let malformed = || Error::MalformedSquare(s.to_string());
        let bytes = s.as_bytes();
        if !(2..=3).contains(&bytes.len()) {
            return Err(malformed());
        }
        let col = match bytes[0] {
            c @ b'a'..=b'j' => (c - b'a') as i32,
            _ => return Err(malformed()),
        };
        let row: i32 = s[1..].parse().map_err(|_| malformed())?;
        if !(1..=SIZE as i32).contains(&row) {
            return Err(malformed());
        }
        Square::sq(col, row - 1)
    }
}

/// Iterator over all squares in index order.
#[derive(Debug, Clone)]
pub struct Squares {
    next: u8,
}

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if (self.next as usize) < NUM_SQUARES {
            let sq = Square(self.next);
            self.next += 1;
            Some(sq)
        } else {
            None
        }
    }
}
