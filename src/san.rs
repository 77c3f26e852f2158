//! Standard Algebraic Notation.
//!
//! Encoding needs the position before the move (for the piece letter and
//! disambiguation); check and mate markers additionally need the position
//! after it, which is why [`Board::move_to_san`] plays the move on a clone.

use crate::board::Board;
use crate::pieces::PieceType;
use crate::position::Position;
use crate::r#move::{CastleSide, Move};

impl Move {
    /// SAN for this move in `board`'s current position, without a check or
    /// mate marker.
    pub fn to_san(&self, board: &Board) -> String {
        let color = board
            .get_piece(&self.from)
            .map_or(board.turn(), |piece| piece.color);
        let mv = board.resolve_move(self, color).unwrap_or(*self);

        if let Some(side) = mv.castle_side() {
            return side.to_san().to_string();
        }

        let Some(piece) = board.get_piece(&mv.from) else {
            return mv.to_lan();
        };

        let mut san = String::new();

        if piece.piece_type == PieceType::Pawn {
            if mv.is_capture() {
                san.push(mv.from.file_char());
            }
        } else {
            san.push(piece.piece_type.to_char().to_ascii_uppercase());
            san.push_str(&disambiguation(board, &mv, piece.piece_type));
        }

        if mv.is_capture() {
            san.push('x');
        }

        san.push_str(&mv.to.to_algebraic());

        if let Some(promotion) = mv.promotion {
            san.push('=');
            san.push(promotion.to_char().to_ascii_uppercase());
        }

        san
    }

    /// Reads SAN against `board`'s legal moves for the side to move.
    ///
    /// Lenient about check/mate markers, annotation glyphs, `x`, and where a
    /// disambiguating file or rank appears. Returns `None` when no legal move
    /// matches so callers can try another notation.
    pub fn parse_san(san: &str, board: &Board) -> Option<Move> {
        let text = san.trim().trim_end_matches(['+', '#', '!', '?']);
        if text.is_empty() || !text.is_ascii() {
            return None;
        }

        if let Some(side) = CastleSide::from_token(text) {
            return Some(Move::castle(board.turn(), side));
        }

        let (body, promotion) = split_promotion(text)?;

        let (piece_type, rest) = match body.chars().next() {
            Some(c) if c.is_ascii_uppercase() => {
                let piece_type = PieceType::from_char(c).filter(|pt| *pt != PieceType::Pawn)?;
                (piece_type, &body[1..])
            }
            _ => (PieceType::Pawn, body),
        };

        let is_capture = rest.contains(['x', ':']);
        let rest: String = rest
            .chars()
            .filter(|c| !matches!(c, 'x' | ':' | '-'))
            .collect();
        if rest.len() < 2 {
            return None;
        }

        let (hint, dst) = rest.split_at(rest.len() - 2);
        if !hint.bytes().all(|b| matches!(b, b'a'..=b'h' | b'1'..=b'8')) {
            return None;
        }
        let to = Position::from_algebraic(dst).ok()?;
        let file_hint = hint.bytes().find(|b| (b'a'..=b'h').contains(b)).map(|b| b - b'a');
        let rank_hint = hint.bytes().find(|b| (b'1'..=b'8').contains(b)).map(|b| b - b'1');

        board
            .legal_moves()
            .into_iter()
            .find(|m| {
                m.to == to
                    && board
                        .get_piece(&m.from)
                        .is_some_and(|p| p.piece_type == piece_type)
                    && file_hint.is_none_or(|f| m.from.col() == f)
                    && rank_hint.is_none_or(|r| m.from.row() == r)
                    && (!is_capture || m.is_capture())
                    && (promotion.is_none() || m.promotion == promotion)
            })
            .map(|m| Move {
                promotion: promotion.or(m.promotion),
                ..m
            })
    }
}

/// Splits `e8=Q` (or the bare `e8Q`) into the move body and promotion piece.
/// `None` for a malformed promotion suffix.
fn split_promotion(text: &str) -> Option<(&str, Option<PieceType>)> {
    if let Some((body, suffix)) = text.split_once('=') {
        let mut chars = suffix.chars();
        let promotion = PieceType::from_promotion_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        return Some((body, Some(promotion)));
    }

    let bytes = text.as_bytes();
    if bytes.len() >= 3 && bytes[bytes.len() - 2].is_ascii_digit() {
        let last = bytes[bytes.len() - 1] as char;
        if last.is_ascii_uppercase() {
            let promotion = PieceType::from_promotion_char(last)?;
            return Some((&text[..text.len() - 1], Some(promotion)));
        }
    }

    Some((text, None))
}

/// The shortest origin hint that tells `mv` apart from other legal moves of
/// the same piece type to the same square: nothing, the file, the rank, or
/// the whole square.
fn disambiguation(board: &Board, mv: &Move, piece_type: PieceType) -> String {
    let color = board.get_piece(&mv.from).map_or(board.turn(), |p| p.color);
    let rivals: Vec<Position> = board
        .legal_moves_for(color)
        .into_iter()
        .filter(|m| {
            m.to == mv.to
                && m.from != mv.from
                && board
                    .get_piece(&m.from)
                    .is_some_and(|p| p.piece_type == piece_type)
        })
        .map(|m| m.from)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|r| r.col() != mv.from.col()) {
        mv.from.file_char().to_string()
    } else if rivals.iter().all(|r| r.row() != mv.from.row()) {
        mv.from.rank_char().to_string()
    } else {
        mv.from.to_algebraic()
    }
}

impl Board {
    /// SAN for `mv` including a trailing `+` or `#` when it gives check or
    /// mate. `None` if the move is illegal for the side to move.
    pub fn move_to_san(&self, mv: &Move) -> Option<String> {
        let resolved = self.resolve_move(mv, self.turn())?;
        let mut san = resolved.to_san(self);

        let mut scratch = self.clone();
        scratch.commit(resolved);

        let opponent = self.turn().opposite();
        if scratch.is_checkmate(opponent) {
            san.push('#');
        } else if scratch.is_in_check(opponent) {
            san.push('+');
        }

        Some(san)
    }
}
