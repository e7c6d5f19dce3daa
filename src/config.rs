//! Game and engine configuration

use std::fmt;
use std::str::FromStr;

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Board dimensions for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    pawn_rows: usize,
}

impl GameConfig {
    /// Validate a board size and pawn-row count.
    ///
    /// # Example
    ///
    /// ```
    /// use shashki::GameConfig;
    ///
    /// assert!(GameConfig::new(10, 4).is_ok());
    /// assert!(GameConfig::new(8, 4).is_err()); // armies would touch
    /// assert!(GameConfig::new(7, 2).is_err());
    /// ```
    pub fn new(board_size: usize, pawn_rows: usize) -> Result<Self, ConfigError> {
        if board_size % 2 != 0 || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::BoardSize { size: board_size });
        }
        let max = board_size / 2 - 1;
        if pawn_rows == 0 || pawn_rows > max {
            return Err(ConfigError::PawnRows {
                rows: pawn_rows,
                size: board_size,
                max,
            });
        }
        Ok(Self {
            board_size,
            pawn_rows,
        })
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[inline]
    pub fn pawn_rows(&self) -> usize {
        self.pawn_rows
    }

    /// Men per side at the start
    #[inline]
    pub fn pieces_per_side(&self) -> usize {
        self.board_size * self.pawn_rows / 2
    }
}

impl Default for GameConfig {
    /// Classic 8x8 board with three rows of men
    fn default() -> Self {
        Self {
            board_size: 8,
            pawn_rows: 3,
        }
    }
}

/// Search strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Fixed search depth in plies
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}
