//! N×N grid of occupants

use super::{Occupant, Side, Square, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Game board. Row 0 is Black's back rank, row `size - 1` is White's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Occupant>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: usize) -> Self {
        assert!(
            size % 2 == 0 && (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} out of range"
        );
        Self {
            size,
            cells: vec![Occupant::Empty; size * size],
        }
    }

    /// Create a board in the starting position with `pawn_rows` rows of men per side
    pub fn standard(size: usize, pawn_rows: usize) -> Self {
        let mut board = Self::new(size);
        assert!(pawn_rows >= 1 && pawn_rows < size / 2, "pawn rows {pawn_rows} out of range");

        let squares: Vec<Square> = board.playable_squares().collect();
        for sq in squares {
            let row = sq.row as usize;
            if row < pawn_rows {
                board.place(sq, Occupant::Man(Side::Black));
            } else if row >= size - pawn_rows {
                board.place(sq, Occupant::Man(Side::White));
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        assert!(
            (sq.row as usize) < self.size && (sq.col as usize) < self.size,
            "square {sq} outside a {0}x{0} board",
            self.size
        );
        sq.row as usize * self.size + sq.col as usize
    }

    /// Get occupant at square
    #[inline]
    pub fn get(&self, sq: Square) -> Occupant {
        self.cells[self.index(sq)]
    }

    /// Place an occupant (no bookkeeping)
    #[inline]
    pub fn place(&mut self, sq: Square, occupant: Occupant) {
        debug_assert!(sq.is_playable() || occupant.is_empty());
        let idx = self.index(sq);
        self.cells[idx] = occupant;
    }

    /// Empty a square
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.place(sq, Occupant::Empty);
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Square at signed coordinates, `None` when off the board
    #[inline]
    pub fn square(&self, row: i32, col: i32) -> Option<Square> {
        let size = self.size as i32;
        if row >= 0 && row < size && col >= 0 && col < size {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Step `distance` squares from `sq` along `(dr, dc)`
    #[inline]
    pub fn step(&self, sq: Square, (dr, dc): (i32, i32), distance: i32) -> Option<Square> {
        self.square(sq.row as i32 + dr * distance, sq.col as i32 + dc * distance)
    }

    /// All playable squares in row-major order
    pub fn playable_squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.size).flat_map(move |row| {
            (1 - row % 2..self.size)
                .step_by(2)
                .map(move |col| Square::new(row as u8, col as u8))
        })
    }

    /// Playable squares of one row
    pub fn row_squares(&self, row: usize) -> impl Iterator<Item = Square> + '_ {
        (1 - row % 2..self.size)
            .step_by(2)
            .map(move |col| Square::new(row as u8, col as u8))
    }

    /// Count (pieces, kings) of a side by scanning the grid
    pub fn census(&self, side: Side) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(pieces, kings), occ| match *occ {
            Occupant::Man(s) if s == side => (pieces + 1, kings),
            Occupant::King(s) if s == side => (pieces + 1, kings + 1),
            _ => (pieces, kings),
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let sq = Square::new(row as u8, col as u8);
                let ch = match self.get(sq) {
                    Occupant::Empty if sq.is_playable() => '.',
                    Occupant::Empty => ' ',
                    Occupant::Man(Side::White) => 'w',
                    Occupant::King(Side::White) => 'W',
                    Occupant::Man(Side::Black) => 'b',
                    Occupant::King(Side::Black) => 'B',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
