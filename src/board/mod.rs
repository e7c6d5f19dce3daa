//! Board representation for Shashki

pub mod board;
pub mod state;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use state::GameState;

/// Smallest supported board edge
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest supported board edge
pub const MAX_BOARD_SIZE: usize = 12;

/// Player colors. White moves first and starts on the bottom rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Index into per-side counters
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Row delta of a forward step for this side's men
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which this side's men are promoted
    #[inline]
    pub fn promotion_row(self, size: usize) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => (size - 1) as u8,
        }
    }

    /// Sign of this side in Black-positive scores
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::White => -1.0,
            Side::Black => 1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// Content of a playable square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl Occupant {
    /// Side owning the piece, `None` for an empty square
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Occupant::Empty => None,
            Occupant::Man(side) | Occupant::King(side) => Some(side),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Occupant::King(_))
    }

    #[inline]
    pub fn is_man(self) -> bool {
        matches!(self, Occupant::Man(_))
    }
}

/// Square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Only squares with an odd coordinate sum hold pieces
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four diagonal directions as (row, col) deltas
pub const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
