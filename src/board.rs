use arrayvec::ArrayVec;

use crate::color::Color;
use crate::error::{ChessError, Result};
use crate::pieces::{Occupant, Piece, PieceType};
use crate::position::{BOARD_SIZE, Position};
use crate::r#move::{CastleSide, Move};
use std::fmt;

pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// How the en passant field of a produced FEN is written.
///
/// Some external evaluators reject FENs whose en passant square is set, so
/// the default writes "-" even when a target exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnPassantInFen {
    #[default]
    Omit,
    Include,
}

/// Fixed 8x8 storage of occupied squares, indexed by row then column.
///
/// `Copy`, so legality checks simulate a move on a scratch grid rather than
/// touching the board they are asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Grid {
    cells: [[Option<Occupant>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Grid {
    pub(crate) fn empty() -> Self {
        Grid {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    pub(crate) fn get(&self, pos: &Position) -> Option<Occupant> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    pub(crate) fn set(&mut self, pos: &Position, occupant: Option<Occupant>) {
        self.cells[pos.row() as usize][pos.col() as usize] = occupant;
    }

    pub(crate) fn piece(&self, pos: &Position) -> Option<Piece> {
        self.get(pos).map(|o| o.piece)
    }

    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        Position::all().filter_map(|pos| self.get(&pos).map(|o| (pos, o)))
    }

    /// Relocates pieces for an already validated move. Handles the en passant
    /// victim, the castling rook and promotion, and marks movers as moved.
    pub(crate) fn apply(&mut self, mv: &Move) {
        let Some(mut mover) = self.get(&mv.from) else {
            return;
        };

        if mv.is_en_passant() {
            self.set(&Position::at(mv.from.row(), mv.to.col()), None);
        }

        if let Some(side) = mv.castle_side() {
            let row = mv.from.row();
            let rook_from = Position::at(row, side.rook_src_col());
            if let Some(mut rook) = self.get(&rook_from) {
                rook.has_moved = true;
                self.set(&rook_from, None);
                self.set(&Position::at(row, side.rook_dst_col()), Some(rook));
            }
        }

        self.set(&mv.from, None);
        mover.has_moved = true;
        if let Some(promotion) = mv.promotion {
            mover = Occupant::moved(Piece::new(promotion, mover.piece.color));
        }
        self.set(&mv.to, Some(mover));
    }
}

/// A chess position plus the game bookkeeping needed to continue it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) grid: Grid,
    turn: Color,
    history: Vec<Move>,
    en_passant: Option<Position>,

    // Fullmove number and side to move when the board was set up; later
    // fullmove numbers are derived from the history length.
    initial_fullmove: u32,
    initial_turn: Color,

    en_passant_in_fen: EnPassantInFen,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for color in [Color::White, Color::Black] {
            for (col, piece_type) in back_rank.iter().enumerate() {
                board.set_piece(
                    &Position::at(color.home_row(), col as u8),
                    Some(Piece::new(*piece_type, color)),
                );
                board.set_piece(
                    &Position::at(color.pawn_row(), col as u8),
                    Some(Piece::new(PieceType::Pawn, color)),
                );
            }
        }

        board
    }

    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Board {
            grid: Grid::empty(),
            turn: Color::White,
            history: Vec::new(),
            en_passant: None,
            initial_fullmove: 1,
            initial_turn: Color::White,
            en_passant_in_fen: EnPassantInFen::default(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = ArrayVec::<&str, 6>::new();
        for part in fen.split_whitespace() {
            parts
                .try_push(part)
                .map_err(|_| ChessError::InvalidFen(format!("too many fields: {:?}", fen)))?;
        }

        // Placement, side, castling and en passant are required; the clocks
        // may be left off.
        if parts.len() != 4 && parts.len() != 6 {
            return Err(ChessError::InvalidFen(format!(
                "expected 4 or 6 fields, got {}",
                parts.len()
            )));
        }

        let mut board = Board::empty();
        board.load_placement(parts[0])?;

        board.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid side to move: {:?}",
                    other
                )));
            }
        };
        board.initial_turn = board.turn;

        board.load_castling(parts[2])?;

        board.en_passant = match parts[3] {
            "-" => None,
            square => {
                let target = Position::from_algebraic(square).map_err(|_| {
                    ChessError::InvalidFen(format!("invalid en passant square: {:?}", square))
                })?;
                // The square a pawn of the side not to move just skipped.
                let mover = board.turn.opposite();
                if target.row() as i32 != mover.pawn_row() as i32 + mover.forward() {
                    return Err(ChessError::InvalidFen(format!(
                        "en passant square {:?} is on the wrong rank",
                        square
                    )));
                }
                Some(target)
            }
        };

        if parts.len() == 6 {
            // Halfmove clock is validated but not tracked.
            parts[4].parse::<u32>().map_err(|_| {
                ChessError::InvalidFen(format!("invalid halfmove clock: {:?}", parts[4]))
            })?;

            board.initial_fullmove = match parts[5].parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid fullmove number: {:?}",
                        parts[5]
                    )));
                }
            };
        }

        Ok(board)
    }

    fn load_placement(&mut self, placement: &str) -> Result<()> {
        let rows: ArrayVec<&str, 8> = placement.split('/').take(8).collect();

        if rows.len() != 8 || placement.split('/').count() != 8 {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, got {}",
                placement.split('/').count()
            )));
        }

        for (row_idx, row_str) in rows.iter().enumerate() {
            let row = BOARD_SIZE - 1 - row_idx as u8;
            let mut col: u8 = 0;

            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(ChessError::InvalidFen(format!(
                            "zero empty-square count in rank {}",
                            row + 1
                        )));
                    }
                    col = col.saturating_add(skip as u8);
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col >= BOARD_SIZE {
                        return Err(ChessError::InvalidFen(format!(
                            "rank {} has too many squares",
                            row + 1
                        )));
                    }
                    // Only pawns on their starting rank are known not to have
                    // moved; castling rights unmark kings and rooks afterwards.
                    let unmoved = piece.piece_type == PieceType::Pawn
                        && row == piece.color.pawn_row();
                    let occupant = Occupant {
                        piece,
                        has_moved: !unmoved,
                    };
                    self.grid.set(&Position::at(row, col), Some(occupant));
                    col += 1;
                } else {
                    return Err(ChessError::InvalidFen(format!("invalid character: {:?}", c)));
                }
            }

            if col != BOARD_SIZE {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has wrong number of squares",
                    row + 1
                )));
            }
        }

        Ok(())
    }

    fn load_castling(&mut self, rights: &str) -> Result<()> {
        if rights == "-" {
            return Ok(());
        }

        for c in rights.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::Kingside),
                'Q' => (Color::White, CastleSide::Queenside),
                'k' => (Color::Black, CastleSide::Kingside),
                'q' => (Color::Black, CastleSide::Queenside),
                _ => {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid castling rights: {:?}",
                        rights
                    )));
                }
            };

            // A right without its king and rook in place cannot be honored.
            let row = color.home_row();
            let king_pos = Position::at(row, 4);
            let rook_pos = Position::at(row, side.rook_src_col());
            if let (Some(mut king), Some(mut rook)) = (self.grid.get(&king_pos), self.grid.get(&rook_pos))
            {
                if king.is(PieceType::King, color) && rook.is(PieceType::Rook, color) {
                    king.has_moved = false;
                    rook.has_moved = false;
                    self.grid.set(&king_pos, Some(king));
                    self.grid.set(&rook_pos, Some(rook));
                }
            }
        }

        Ok(())
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Piece> {
        self.grid.piece(pos)
    }

    /// The piece on `pos` together with its has-moved record.
    pub fn occupant(&self, pos: &Position) -> Option<Occupant> {
        self.grid.get(pos)
    }

    /// Places `piece` (as never having moved) or clears the square.
    pub fn set_piece(&mut self, pos: &Position, piece: Option<Piece>) {
        self.grid.set(pos, piece.map(Occupant::new));
    }

    /// Removes every piece and resets the game bookkeeping (history, en
    /// passant target, move counters) to that of [`Board::empty`]. The FEN
    /// output setting is kept.
    pub fn clear(&mut self) {
        *self = Board {
            en_passant_in_fen: self.en_passant_in_fen,
            ..Board::empty()
        };
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Applied moves in game order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    pub fn en_passant_in_fen(&self) -> EnPassantInFen {
        self.en_passant_in_fen
    }

    pub fn set_en_passant_in_fen(&mut self, mode: EnPassantInFen) {
        self.en_passant_in_fen = mode;
    }

    pub fn fullmove_number(&self) -> u32 {
        let offset = match self.initial_turn {
            Color::White => 0,
            Color::Black => 1,
        };
        let played = u32::try_from((self.history.len() + offset) / 2).unwrap_or(u32::MAX);
        self.initial_fullmove.saturating_add(played)
    }

    pub fn pieces(&self, color: Color) -> Vec<(Position, Piece)> {
        self.grid
            .occupied()
            .filter(|(_, o)| o.piece.color == color)
            .map(|(pos, o)| (pos, o.piece))
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.grid.find_king(color)
    }

    pub fn material_value(&self, color: Color) -> u32 {
        self.pieces(color)
            .iter()
            .map(|(_, piece)| piece.piece_type.material_value())
            .sum()
    }

    /// Validates `mv` for the side to move and applies it.
    ///
    /// Returns: whether the move was legal and applied. An illegal move
    /// leaves the board untouched.
    #[hotpath::measure]
    pub fn make_move(&mut self, mv: &Move) -> bool {
        match self.resolve_move(mv, self.turn) {
            Some(resolved) => {
                self.commit(resolved);
                true
            }
            None => false,
        }
    }

    /// Applies a move returned by `resolve_move` for the side to move.
    pub(crate) fn commit(&mut self, mv: Move) {
        self.grid.apply(&mv);

        self.en_passant = if mv.is_double_push() {
            let ep_row = (mv.from.row() + mv.to.row()) / 2;
            Some(Position::at(ep_row, mv.from.col()))
        } else {
            None
        };

        self.history.push(mv);
        self.turn = self.turn.opposite();
    }

    /// Reads move text the way a player types it: SAN first, then
    /// coordinate notation for the side to move.
    pub fn parse_move(&self, text: &str) -> Result<Move> {
        match Move::parse_san(text, self) {
            Some(mv) => Ok(mv),
            None => Move::from_lan(text, self.turn),
        }
    }

    /// Parses and applies move text, returning the move as recorded in the
    /// history.
    pub fn play(&mut self, text: &str) -> Result<Move> {
        let mv = self.parse_move(text)?;
        let resolved = self
            .resolve_move(&mv, self.turn)
            .ok_or_else(|| ChessError::IllegalMove(text.trim().to_string()))?;
        self.commit(resolved);
        Ok(resolved)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for row in (0..BOARD_SIZE).rev() {
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.get_piece(&Position::at(row, col)) {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }

            if row > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.turn.fen_char());

        fen.push(' ');
        fen.push_str(&self.castling_fen());

        fen.push(' ');
        match (self.en_passant_in_fen, self.en_passant) {
            (EnPassantInFen::Include, Some(ep)) => fen.push_str(&ep.to_algebraic()),
            _ => fen.push('-'),
        }

        // Halfmove clock is not tracked.
        fen.push_str(" 0 ");
        fen.push_str(&self.fullmove_number().to_string());

        fen
    }

    /// Castling availability derived from the has-moved records of kings and
    /// rooks on their home squares.
    fn castling_fen(&self) -> String {
        let mut rights = String::new();

        for color in [Color::White, Color::Black] {
            let row = color.home_row();
            let king_home = self
                .grid
                .get(&Position::at(row, 4))
                .is_some_and(|o| o.is(PieceType::King, color) && !o.has_moved);
            if !king_home {
                continue;
            }

            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                let rook_home = self
                    .grid
                    .get(&Position::at(row, side.rook_src_col()))
                    .is_some_and(|o| o.is(PieceType::Rook, color) && !o.has_moved);
                if rook_home {
                    let c = match side {
                        CastleSide::Kingside => 'k',
                        CastleSide::Queenside => 'q',
                    };
                    rights.push(match color {
                        Color::White => c.to_ascii_uppercase(),
                        Color::Black => c,
                    });
                }
            }
        }

        if rights.is_empty() {
            rights.push('-');
        }
        rights
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.get_piece(&Position::at(row, col)) {
                    write!(f, "{} ", piece.to_fen_char())?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{} ", (b'a' + col) as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).expect("test square")
    }

    #[test]
    fn test_standard_board_fen() {
        let board = Board::new();
        assert_eq!(board.to_fen(), STANDARD_FEN);
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.fullmove_number(), 1);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_board_standard_position() {
        let board = Board::new();

        assert_eq!(
            board.get_piece(&sq("a1")),
            Some(Piece::new(PieceType::Rook, Color::White))
        );
        assert_eq!(
            board.get_piece(&sq("e1")),
            Some(Piece::new(PieceType::King, Color::White))
        );
        assert_eq!(
            board.get_piece(&sq("d8")),
            Some(Piece::new(PieceType::Queen, Color::Black))
        );

        for col in 0..8 {
            assert_eq!(
                board.get_piece(&Position::at(1, col)),
                Some(Piece::new(PieceType::Pawn, Color::White))
            );
            assert_eq!(
                board.get_piece(&Position::at(6, col)),
                Some(Piece::new(PieceType::Pawn, Color::Black))
            );
            for row in 2..6 {
                assert_eq!(board.get_piece(&Position::at(row, col)), None);
            }
        }

        assert!(
            board
                .occupant(&sq("e1"))
                .is_some_and(|o| !o.has_moved)
        );
    }

    #[test]
    fn test_board_piece_placement() {
        let mut board = Board::empty();
        let king = Piece::new(PieceType::King, Color::White);
        let pos = sq("e1");

        board.set_piece(&pos, Some(king));
        assert_eq!(board.get_piece(&pos), Some(king));
        assert_eq!(board.find_king(Color::White), Some(pos));
        assert_eq!(board.find_king(Color::Black), None);

        board.set_piece(&pos, None);
        assert_eq!(board.get_piece(&pos), None);
    }

    #[test]
    fn test_fen_after_e4() {
        let mut board = Board::new();
        assert!(board.make_move(&Move::new(sq("e2"), sq("e4"))));

        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
        assert_eq!(board.en_passant_target(), Some(sq("e3")));

        board.set_en_passant_in_fen(EnPassantInFen::Include);
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn test_fullmove_number_follows_history() {
        let mut board = Board::new();
        for (text, expected) in [("e4", 1), ("e5", 2), ("Nf3", 2), ("Nc6", 3)] {
            board.play(text).expect("legal opening move");
            assert_eq!(board.fullmove_number(), expected, "after {}", text);
        }
        assert!(board.to_fen().ends_with(" 0 3"));
    }

    #[test]
    fn test_castling_rights_follow_moved_pieces() {
        let mut board = Board::new();
        for text in ["Nf3", "Nf6", "Rg1", "Rg8"] {
            board.play(text).expect("legal move");
        }
        assert!(board.to_fen().contains(" w Qq - "));

        for text in ["Rh1", "Rh8"] {
            board.play(text).expect("legal move");
        }
        // Returning the rook does not restore the right.
        assert!(board.to_fen().contains(" w Qq - "));
    }

    #[test]
    fn test_from_fen_roundtrip() {
        for fen in [
            STANDARD_FEN,
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            "4k3/8/8/8/8/8/8/4K3 b - - 0 42",
            "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3",
            "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 10",
        ] {
            let board = Board::from_fen(fen).expect("valid FEN");
            assert_eq!(board.to_fen(), fen);
        }
    }

    #[test]
    fn test_from_fen_fullmove_after_black_start() {
        let mut board =
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 42").expect("valid FEN");
        assert!(board.make_move(&Move::new(sq("e8"), sq("d8"))));
        assert_eq!(board.fullmove_number(), 43);
        assert!(board.make_move(&Move::new(sq("e1"), sq("d1"))));
        assert_eq!(board.fullmove_number(), 43);
    }

    #[test]
    fn test_from_fen_without_clocks() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").expect("four-field FEN");
        assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn test_from_fen_reads_en_passant() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("valid FEN");
        assert_eq!(board.en_passant_target(), Some(sq("d6")));
        assert!(board.to_fen().contains(" w - - "));
    }

    #[test]
    fn test_from_fen_rejects_en_passant_on_wrong_rank() {
        for fen in [
            "4k3/8/8/8/4P3/8/8/4K3 w - e4 0 1",
            "4k3/8/8/8/4P3/8/8/4K3 b - e6 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d3 0 2",
        ] {
            assert!(
                matches!(Board::from_fen(fen), Err(ChessError::InvalidFen(_))),
                "expected {:?} to be rejected",
                fen
            );
        }

        let board = Board::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("valid FEN");
        assert_eq!(board.en_passant_target(), Some(sq("e3")));
    }

    #[test]
    fn test_fullmove_number_saturates() {
        let mut board =
            Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 4294967295").expect("valid FEN");
        assert!(board.make_move(&Move::new(sq("e1"), sq("d1"))));
        assert!(board.make_move(&Move::new(sq("e8"), sq("d8"))));
        assert_eq!(board.fullmove_number(), u32::MAX);
        assert_eq!(board.to_fen(), "3k4/8/8/8/8/8/8/3K4 w - - 0 4294967295");
    }

    #[test]
    fn test_clear_resets_bookkeeping() {
        let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 30").expect("valid FEN");
        board.set_en_passant_in_fen(EnPassantInFen::Include);
        assert!(board.make_move(&Move::new(sq("e1"), sq("d1"))));

        board.clear();
        assert_eq!(board.pieces(Color::White).len(), 0);
        assert_eq!(board.pieces(Color::Black).len(), 0);
        assert!(board.history().is_empty());
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.en_passant_in_fen(), EnPassantInFen::Include);
        assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn test_from_fen_invalid() {
        for fen in [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppXppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - a 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ] {
            assert!(
                matches!(Board::from_fen(fen), Err(ChessError::InvalidFen(_))),
                "expected {:?} to be rejected",
                fen
            );
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new();
        let mut scratch = board.clone();
        assert!(scratch.make_move(&Move::new(sq("g1"), sq("f3"))));
        assert_eq!(board.to_fen(), STANDARD_FEN);
        assert_ne!(scratch.to_fen(), STANDARD_FEN);
        assert!(board.occupant(&sq("g1")).is_some_and(|o| !o.has_moved));
    }

    #[test]
    fn test_material_value() {
        let board = Board::new();
        assert_eq!(board.material_value(Color::White), 39);
        assert_eq!(board.material_value(Color::Black), 39);
        assert_eq!(Board::empty().material_value(Color::White), 0);
    }

    #[test]
    fn test_play_reports_errors() {
        let mut board = Board::new();
        assert!(matches!(
            board.play("e2e5"),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(matches!(
            board.play("hello"),
            Err(ChessError::InvalidNotation(_))
        ));
        assert_eq!(board.to_fen(), STANDARD_FEN);

        let mv = board.play("e2e4").expect("coordinate move");
        assert!(mv.is_double_push());
        assert_eq!(board.last_move(), Some(&mv));
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "8 r n b q k b n r ");
        assert_eq!(lines[7], "1 R N B Q K B N R ");
        assert_eq!(lines[8], "  a b c d e f g h ");
    }
}
