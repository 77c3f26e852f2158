use std::fmt;

use crate::error::{ChessError, Result};

pub const BOARD_SIZE: u8 = 8;

/// A square on the board. Row 0 is rank 1 and col 0 is file 'a'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Result<Self> {
        if Self::is_valid(row, col) {
            Ok(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::OutOfRange { row, col })
        }
    }

    /// Internal constructor for coordinates already known to be on the board.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Position { row, col }
    }

    pub fn is_valid(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// The square `(d_row, d_col)` away, or `None` when that falls off the board.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Position> {
        Position::new(self.row as i32 + d_row, self.col as i32 + d_col).ok()
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(&self) -> char {
        (b'1' + self.row) as char
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    pub fn from_algebraic(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidNotation(format!(
                "square must be two characters: {:?}",
                s
            )));
        }

        let col = bytes[0] as i32 - b'a' as i32;
        let row = bytes[1] as i32 - b'1' as i32;

        Position::new(row, col)
            .map_err(|_| ChessError::InvalidNotation(format!("square out of bounds: {:?}", s)))
    }

    /// Every square, rank 1 first, file 'a' first within a rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::at(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
