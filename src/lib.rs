//! Rules of standard chess: board state, move legality, check, checkmate and
//! stalemate detection, with FEN, coordinate (LAN) and SAN notation.

pub mod board;
pub mod color;
pub mod error;
pub mod r#move;
pub mod outcome;
pub mod pieces;
pub mod position;
pub mod rules;
pub mod san;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use board::{Board, EnPassantInFen, STANDARD_FEN};
pub use color::Color;
pub use error::{ChessError, Result};
pub use outcome::GameOutcome;
pub use pieces::{Occupant, Piece, PieceType};
pub use position::Position;
pub use r#move::{CastleSide, Move, MoveFlags};
