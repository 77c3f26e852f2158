use crate::color::Color;
use crate::error::{ChessError, Result};
use crate::pieces::{Piece, PieceType};
use crate::position::Position;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        const DOUBLE_PUSH = 0b00000001;
        const EN_PASSANT = 0b00000010;
        const CASTLE = 0b00000100;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column the king lands on.
    pub fn king_dst_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column the rook starts from.
    pub fn rook_src_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on.
    pub fn rook_dst_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    pub fn to_san(&self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }

    /// Recognizes `O-O`/`0-0`/`o-o` and the queenside forms, with or
    /// without the hyphens.
    pub fn from_token(token: &str) -> Option<Self> {
        let normalized: String = token
            .chars()
            .filter(|c| *c != '-')
            .map(|c| if c == '0' { 'o' } else { c.to_ascii_lowercase() })
            .collect();

        match normalized.as_str() {
            "oo" => Some(CastleSide::Kingside),
            "ooo" => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// A move from one square to another.
///
/// A move built from text or coordinates only carries what the caller knows.
/// The board fills in the rest (en passant, castling, captured piece) when it
/// accepts the move, and the copy it appends to its history is the complete
/// record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub flags: MoveFlags,
    pub promotion: Option<PieceType>,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            flags: MoveFlags::empty(),
            promotion: None,
            captured: None,
        }
    }

    pub fn with_promotion(from: Position, to: Position, promotion: PieceType) -> Self {
        Move {
            promotion: Some(promotion),
            ..Move::new(from, to)
        }
    }

    /// The castling move for `color`; the king's home rank comes from the color.
    pub fn castle(color: Color, side: CastleSide) -> Self {
        let row = color.home_row();
        Move {
            flags: MoveFlags::CASTLE,
            ..Move::new(Position::at(row, 4), Position::at(row, side.king_dst_col()))
        }
    }

    pub fn is_castling(&self) -> bool {
        self.flags.contains(MoveFlags::CASTLE)
    }

    pub fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    pub fn is_double_push(&self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PUSH)
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || self.is_en_passant()
    }

    /// Side of a castling move, judged by the king's destination column.
    pub fn castle_side(&self) -> Option<CastleSide> {
        if !self.is_castling() {
            return None;
        }
        if self.to.col() > self.from.col() {
            Some(CastleSide::Kingside)
        } else {
            Some(CastleSide::Queenside)
        }
    }

    /// Origin, destination and promotion agree; flags and capture snapshots
    /// are ignored.
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }

    /// Parses coordinate notation (`e2e4`, `e7e8q`, `e2-e4`, `e4xd5`) or a
    /// castling token for `color`.
    pub fn from_lan(lan: &str, color: Color) -> Result<Self> {
        if let Some(side) = CastleSide::from_token(lan.trim()) {
            return Ok(Move::castle(color, side));
        }

        let stripped: String = lan
            .trim()
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| !matches!(c, '-' | 'x' | ':'))
            .collect();

        if !stripped.is_ascii() {
            return Err(ChessError::InvalidNotation(format!(
                "non-ASCII move text: {:?}",
                lan
            )));
        }

        let (squares, promotion) = match stripped.len() {
            5 => {
                let promo_char = stripped.chars().last().unwrap_or(' ');
                (&stripped[..4], PieceType::from_promotion_char(promo_char))
            }
            _ => (stripped.as_str(), None),
        };

        if squares.len() != 4 {
            return Err(ChessError::InvalidNotation(format!(
                "expected four coordinate characters: {:?}",
                lan
            )));
        }

        let from = Position::from_algebraic(&squares[0..2])?;
        let to = Position::from_algebraic(&squares[2..4])?;

        Ok(Move {
            promotion,
            ..Move::new(from, to)
        })
    }

    pub fn to_lan(&self) -> String {
        let mut lan = format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic());

        if let Some(promo) = self.promotion {
            lan.push(promo.to_char());
        }

        lan
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lan())
    }
}
