#![cfg(feature = "board-pleco")]
use crate::board::{self, Color, Move, PieceType, Rules, Square, SpecialMove};
use crate::error::{Error, Result};
use pleco::{BitMove, Board as PlecoBoard, Piece, PieceType as PlecoPieceType, Player, SQ};

/// Rules adapter over pleco's make/unmake board. A counter of applied
/// moves guards `undo_last_move` so unpaired undos surface as errors
/// instead of corrupting pleco's internal history.
pub struct PlecoRules {
    board: PlecoBoard,
    applied: usize,
}

impl PlecoRules {
    pub fn startpos() -> Self {
        Self { board: PlecoBoard::start_pos(), applied: 0 }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let board =
            PlecoBoard::from_fen(fen).map_err(|e| Error::InvalidFen(format!("{fen}: {e:?}")))?;
        Ok(Self { board, applied: 0 })
    }

    fn square_of(sq: SQ) -> Square {
        Square::from_index(sq.0)
    }

    fn color_of(player: Player) -> Color {
        match player {
            Player::White => Color::White,
            Player::Black => Color::Black,
        }
    }

    fn piece_type_of(piece: Piece) -> Option<PieceType> {
        match piece.type_of() {
            PlecoPieceType::P => Some(PieceType::Pawn),
            PlecoPieceType::N => Some(PieceType::Knight),
            PlecoPieceType::B => Some(PieceType::Bishop),
            PlecoPieceType::R => Some(PieceType::Rook),
            PlecoPieceType::Q => Some(PieceType::Queen),
            PlecoPieceType::K => Some(PieceType::King),
            _ => None,
        }
    }
}

impl Rules for PlecoRules {
    type Desc = BitMove;

    fn legal_moves(&self) -> Vec<BitMove> {
        self.board.generate_moves().iter().copied().collect()
    }

    fn apply_move(&mut self, desc: &BitMove) -> Result<Move> {
        let mv = *desc;
        if !self.board.pseudo_legal_move(mv) || !self.board.legal_move(mv) {
            return Err(Error::IllegalMove(mv.to_string()));
        }
        let from = Self::square_of(mv.get_src());
        let to = Self::square_of(mv.get_dest());
        let piece = Self::piece_type_of(self.board.piece_at_sq(mv.get_src()))
            .ok_or(Error::EmptySquare(from))?;
        let captured = if mv.is_capture() {
            // An empty destination on a capture means en passant.
            Some(Self::piece_type_of(self.board.piece_at_sq(mv.get_dest())).unwrap_or(PieceType::Pawn))
        } else {
            None
        };
        let color = Self::color_of(self.board.turn());
        let special = if mv.is_promo() { Some(SpecialMove::Promotion) } else { None };
        self.board.apply_move(mv);
        self.applied += 1;
        Ok(Move { from, to, piece, captured, color, special })
    }

    fn undo_last_move(&mut self) -> Result<()> {
        if self.applied == 0 {
            return Err(Error::NothingToUndo);
        }
        self.board.undo_move();
        self.applied -= 1;
        Ok(())
    }

    fn load_position(&mut self, fen: &str) -> Result<()> {
        self.board =
            PlecoBoard::from_fen(fen).map_err(|e| Error::InvalidFen(format!("{fen}: {e:?}")))?;
        self.applied = 0;
        Ok(())
    }

    fn serialize_position(&self) -> String {
        self.board.fen()
    }

    fn place_piece(&mut self, sq: Square, piece: PieceType, color: Color) -> Result<()> {
        let fen = board::with_square_set(&self.serialize_position(), sq, Some((piece, color)))?;
        self.load_position(&fen)
    }

    fn remove_piece(&mut self, sq: Square) -> Result<()> {
        let fen = board::with_square_set(&self.serialize_position(), sq, None)?;
        self.load_position(&fen)
    }

    fn side_to_move(&self) -> Color {
        Self::color_of(self.board.turn())
    }

    fn piece_at(&self, sq: Square) -> Option<(PieceType, Color)> {
        let piece = self.board.piece_at_sq(SQ(sq.row * 8 + sq.col));
        if piece == Piece::None {
            return None;
        }
        Self::piece_type_of(piece).map(|p| (p, Self::color_of(piece.player_lossy())))
    }
}
