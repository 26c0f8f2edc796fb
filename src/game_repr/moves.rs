use super::errors::Error;
use super::square::Square;
use std::fmt;
use std::str::FromStr;

/// One full turn: relocate the queen at `from` to `to`, then throw a spear
/// from `to` to `spear`. Well-formed only if both legs are queen moves; the
/// board decides whether the move is actually legal in a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    spear: Square,
}

impl Move {
    pub fn new(from: Square, to: Square, spear: Square) -> Move {
        Move { from, to, spear }
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn spear(&self) -> Square {
        self.spear
    }
}

impl fmt::Display for Move {
    /// Canonical notation, e.g. "d1-d2(d3)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let malformed = || Error::MalformedMove(s.to_string());
        let body = s.strip_suffix(')').ok_or_else(malformed)?;
        let (legs, spear) = body.split_once('(').ok_or_else(malformed)?;
        let (from, to) = legs.split_once('-').ok_or_else(malformed)?;
        Ok(Move::new(from.parse()?, to.parse()?, spear.parse()?))
    }
}
