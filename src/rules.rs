use arrayvec::ArrayVec;

use crate::board::{Board, Grid};
use crate::color::Color;
use crate::outcome::GameOutcome;
use crate::pieces::{Occupant, Piece, PieceType};
use crate::position::Position;
use crate::r#move::{CastleSide, Move, MoveFlags};

impl Grid {
    pub(crate) fn find_king(&self, color: Color) -> Option<Position> {
        self.occupied()
            .find(|(_, o)| o.is(PieceType::King, color))
            .map(|(pos, _)| pos)
    }

    /// Whether every square strictly between `src` and `dst` is empty.
    /// Only meaningful for squares sharing a rank, file or diagonal.
    fn is_path_clear(&self, src: &Position, dst: &Position) -> bool {
        let row_step = (dst.row() as i32 - src.row() as i32).signum();
        let col_step = (dst.col() as i32 - src.col() as i32).signum();

        let mut current = *src;
        loop {
            current = match current.offset(row_step, col_step) {
                Some(next) => next,
                None => return false,
            };
            if current == *dst {
                return true;
            }
            if self.get(&current).is_some() {
                return false;
            }
        }
    }

    /// Movement geometry of every piece except the pawn, including path
    /// clearance for sliders. Occupancy of `dst` is the caller's concern.
    fn reaches(&self, src: &Position, piece_type: PieceType, dst: &Position) -> bool {
        let row_diff = (dst.row() as i32 - src.row() as i32).abs();
        let col_diff = (dst.col() as i32 - src.col() as i32).abs();

        if row_diff == 0 && col_diff == 0 {
            return false;
        }

        let shape = match piece_type {
            PieceType::Knight => {
                return (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2);
            }
            PieceType::King => return row_diff <= 1 && col_diff <= 1,
            PieceType::Bishop => row_diff == col_diff,
            PieceType::Rook => row_diff == 0 || col_diff == 0,
            PieceType::Queen => row_diff == col_diff || row_diff == 0 || col_diff == 0,
            PieceType::Pawn => return false,
        };

        shape && self.is_path_clear(src, dst)
    }

    fn attacks(&self, src: &Position, piece: &Piece, dst: &Position) -> bool {
        match piece.piece_type {
            PieceType::Pawn => {
                dst.row() as i32 - src.row() as i32 == piece.color.forward()
                    && (dst.col() as i32 - src.col() as i32).abs() == 1
            }
            other => self.reaches(src, other, dst),
        }
    }

    pub(crate) fn is_square_attacked(&self, square: &Position, by_color: Color) -> bool {
        self.occupied()
            .filter(|(_, o)| o.piece.color == by_color)
            .any(|(pos, o)| self.attacks(&pos, &o.piece, square))
    }

    /// `false` when `color` has no king on the grid.
    pub(crate) fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(&king, color.opposite()))
    }
}

impl Board {
    /// Whether `mv` is legal for `color` in the current position.
    #[hotpath::measure]
    pub fn is_valid_move(&self, mv: &Move, color: Color) -> bool {
        self.resolve_move(mv, color).is_some()
    }

    /// Validates `mv` for `color` and returns it completed: castling, en
    /// passant and double push flags set, the captured piece recorded, and a
    /// missing promotion defaulted to a queen. `None` if the move is illegal.
    ///
    /// A king stepping two files from its home square is read as castling, so
    /// coordinate moves like `e1g1` are accepted.
    pub fn resolve_move(&self, mv: &Move, color: Color) -> Option<Move> {
        let mover = self.grid.get(&mv.from)?;
        if mover.piece.color != color || mv.from == mv.to {
            return None;
        }

        let target = self.grid.piece(&mv.to);
        if target.is_some_and(|t| t.color == color) {
            return None;
        }

        let castle_side = if mv.is_castling() {
            mv.castle_side()
        } else {
            self.implied_castle_side(mv, &mover)
        };
        if let Some(side) = castle_side {
            let castle = Move::castle(color, side);
            if mv.from != castle.from || mv.to != castle.to || mv.promotion.is_some() {
                return None;
            }
            return self.can_castle(color, side).then_some(castle);
        }

        let mut resolved = Move::new(mv.from, mv.to);
        resolved.captured = target;

        match mover.piece.piece_type {
            PieceType::Pawn => {
                resolved.flags = self.pawn_move_flags(mv, &mover)?;
                if resolved.flags.contains(MoveFlags::EN_PASSANT) {
                    resolved.captured = self.grid.piece(&Position::at(mv.from.row(), mv.to.col()));
                }

                if mv.to.row() == color.opposite().home_row() {
                    let promotion = mv.promotion.unwrap_or(PieceType::Queen);
                    if !promotion.is_promotion_target() {
                        return None;
                    }
                    resolved.promotion = Some(promotion);
                } else if mv.promotion.is_some() {
                    return None;
                }
            }
            other => {
                if mv.promotion.is_some() || !self.grid.reaches(&mv.from, other, &mv.to) {
                    return None;
                }
            }
        }

        // Play the move on a scratch grid and reject it if it leaves the
        // mover's king attacked. This covers pins and moving into check.
        let mut scratch = self.grid;
        scratch.apply(&resolved);
        if scratch.is_in_check(color) {
            return None;
        }

        Some(resolved)
    }

    fn implied_castle_side(&self, mv: &Move, mover: &Occupant) -> Option<CastleSide> {
        let color = mover.piece.color;
        let home = Position::at(color.home_row(), 4);
        if mover.piece.piece_type != PieceType::King
            || mv.from != home
            || mv.to.row() != home.row()
        {
            return None;
        }

        match mv.to.col() as i32 - home.col() as i32 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Pawn geometry: single push, double push from the starting rank,
    /// diagonal capture, and en passant onto the current target square.
    fn pawn_move_flags(&self, mv: &Move, pawn: &Occupant) -> Option<MoveFlags> {
        let color = pawn.piece.color;
        let forward = color.forward();
        let row_diff = mv.to.row() as i32 - mv.from.row() as i32;
        let col_diff = mv.to.col() as i32 - mv.from.col() as i32;
        let target = self.grid.piece(&mv.to);

        if col_diff == 0 {
            if target.is_some() {
                return None;
            }
            if row_diff == forward {
                return Some(MoveFlags::empty());
            }
            let between = mv.from.offset(forward, 0)?;
            if row_diff == 2 * forward
                && !pawn.has_moved
                && mv.from.row() == color.pawn_row()
                && self.grid.get(&between).is_none()
            {
                return Some(MoveFlags::DOUBLE_PUSH);
            }
            return None;
        }

        if col_diff.abs() != 1 || row_diff != forward {
            return None;
        }

        if target.is_some_and(|t| t.color != color) {
            return Some(MoveFlags::empty());
        }

        let victim_square = Position::at(mv.from.row(), mv.to.col());
        let victim_is_pawn = self
            .grid
            .piece(&victim_square)
            .is_some_and(|p| p.piece_type == PieceType::Pawn && p.color != color);
        if target.is_none() && self.en_passant_target() == Some(mv.to) && victim_is_pawn {
            return Some(MoveFlags::EN_PASSANT);
        }

        None
    }

    /// King and rook unmoved and in place, king not in check, the squares
    /// between them empty, and the squares the king crosses and lands on not
    /// attacked.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let row = color.home_row();

        let king_ready = self
            .grid
            .get(&Position::at(row, 4))
            .is_some_and(|o| o.is(PieceType::King, color) && !o.has_moved);
        let rook_ready = self
            .grid
            .get(&Position::at(row, side.rook_src_col()))
            .is_some_and(|o| o.is(PieceType::Rook, color) && !o.has_moved);
        if !king_ready || !rook_ready {
            return false;
        }

        if self.is_in_check(color) {
            return false;
        }

        let (between, king_path): (&[u8], &[u8]) = match side {
            CastleSide::Kingside => (&[5, 6], &[5, 6]),
            CastleSide::Queenside => (&[1, 2, 3], &[3, 2]),
        };

        if between
            .iter()
            .any(|col| self.grid.get(&Position::at(row, *col)).is_some())
        {
            return false;
        }

        !king_path
            .iter()
            .any(|col| self.is_square_attacked(&Position::at(row, *col), color.opposite()))
    }

    #[hotpath::measure]
    pub fn is_square_attacked(&self, square: &Position, by_color: Color) -> bool {
        self.grid.is_square_attacked(square, by_color)
    }

    /// `false` when `color` has no king on the board.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.grid.is_in_check(color)
    }

    /// Every origin/destination pair for `color`'s pieces, with pawn moves
    /// onto the last rank expanded into each promotion choice. Castling is
    /// reached through the king's two-file destinations.
    fn candidate_moves(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        let last_row = color.opposite().home_row();

        self.pieces(color).into_iter().flat_map(move |(from, piece)| {
            Position::all().flat_map(move |to| {
                let promotions: ArrayVec<Option<PieceType>, 4> =
                    if piece.piece_type == PieceType::Pawn && to.row() == last_row {
                        PieceType::PROMOTIONS.iter().copied().map(Some).collect()
                    } else {
                        std::iter::once(None).collect()
                    };

                promotions.into_iter().map(move |promotion| Move {
                    promotion,
                    ..Move::new(from, to)
                })
            })
        })
    }

    /// All legal moves for `color`, each completed as by `resolve_move`.
    #[hotpath::measure]
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.candidate_moves(color)
            .filter_map(|mv| self.resolve_move(&mv, color))
            .collect()
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.turn())
    }

    pub fn legal_moves_from(&self, src: &Position) -> Vec<Move> {
        match self.get_piece(src) {
            Some(piece) => self
                .legal_moves_for(piece.color)
                .into_iter()
                .filter(|mv| mv.from == *src)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.candidate_moves(color)
            .any(|mv| self.resolve_move(&mv, color).is_some())
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Checkmate or stalemate of the side to move.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        let turn = self.turn();
        if self.has_any_legal_move(turn) {
            return None;
        }

        if self.is_in_check(turn) {
            // The side to move is checkmated, so the other side wins
            Some(match turn {
                Color::White => GameOutcome::BlackWin,
                Color::Black => GameOutcome::WhiteWin,
            })
        } else {
            Some(GameOutcome::Stalemate)
        }
    }
}
