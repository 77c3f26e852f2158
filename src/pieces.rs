use std::fmt;

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Promotion choices, in the order legal move lists offer them.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    pub fn to_char(&self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Case-insensitive inverse of [`PieceType::to_char`].
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Maps a promotion letter (q, r, b, n in either case) to its type.
    pub fn from_promotion_char(c: char) -> Option<Self> {
        Self::from_char(c).filter(|pt| pt.is_promotion_target())
    }

    pub fn is_promotion_target(&self) -> bool {
        Self::PROMOTIONS.contains(self)
    }

    pub fn is_slider(&self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    pub fn material_value(&self) -> u32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// FEN letter: lowercase for Black, uppercase for White.
    pub fn to_fen_char(&self) -> char {
        let c = self.piece_type.to_char();

        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        PieceType::from_char(c).map(|piece_type| Piece::new(piece_type, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// A piece standing on a square, plus the board's record of whether it has
/// moved since the game began. Castling rights and the pawn double push read
/// the flag; the piece value itself stays immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub piece: Piece,
    pub has_moved: bool,
}

impl Occupant {
    pub fn new(piece: Piece) -> Self {
        Occupant {
            piece,
            has_moved: false,
        }
    }

    pub fn moved(piece: Piece) -> Self {
        Occupant {
            piece,
            has_moved: true,
        }
    }

    pub fn is(&self, piece_type: PieceType, color: Color) -> bool {
        self.piece.piece_type == piece_type && self.piece.color == color
    }
}
