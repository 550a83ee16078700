use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Unit coordinate delta (dx, dy); y grows downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (0, -1),
            Move::Down => (0, 1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

/// One chromosome gene: a directional attempt, or a move that was discarded in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gene {
    Move(Move),
    Blocked,
}

impl Gene {
    pub fn is_blocked(self) -> bool {
        matches!(self, Gene::Blocked)
    }

    pub fn symbol(self) -> char {
        match self {
            Gene::Move(m) => m.symbol(),
            Gene::Blocked => 'X',
        }
    }
}

impl From<Move> for Gene {
    fn from(m: Move) -> Self {
        Gene::Move(m)
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Maze cell classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
    Start,
    End,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '1' => Some(Cell::Wall),
            '0' => Some(Cell::Open),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => '1',
            Cell::Open => '0',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// Grid coordinate (column, row), 0-indexed. Signed so off-grid neighbours are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn step(self, m: Move) -> Position {
        let (dx, dy) = m.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
