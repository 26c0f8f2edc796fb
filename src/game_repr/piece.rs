#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Contents of one board square. Spears never leave the board once thrown
/// (except when a move is undone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Queen(Color),
    Spear,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn is_queen(&self) -> bool {
        matches!(self, Cell::Queen(_))
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Queen(Color::White) => 'W',
            Cell::Queen(Color::Black) => 'B',
            Cell::Spear => 'S',
        }
    }
}
