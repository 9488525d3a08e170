use crate::board::{self, Color, Move, PieceType, Rules, Square, SpecialMove};
use crate::error::{Error, Result};
use cozy_chess::{Board as CozyBoard, Color as CozyColor, File, Move as CozyMove, Piece, Rank};

/// Rules adapter over cozy-chess. The backend is copy-make, so undo is a
/// stack of pre-move snapshots; `load_position` starts a fresh history.
#[derive(Clone, Debug)]
pub struct CozyRules {
    board: CozyBoard,
    stack: Vec<CozyBoard>,
}

impl CozyRules {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), stack: Vec::with_capacity(16) }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let board = CozyBoard::from_fen(fen, false)
            .map_err(|e| Error::InvalidFen(format!("{fen}: {e:?}")))?;
        Ok(Self { board, stack: Vec::with_capacity(16) })
    }

    fn square_of(sq: cozy_chess::Square) -> Square {
        Square { row: sq.rank() as u8, col: sq.file() as u8 }
    }

    fn cozy_square(sq: Square) -> cozy_chess::Square {
        cozy_chess::Square::new(File::index(sq.col as usize), Rank::index(sq.row as usize))
    }

    fn color_of(color: CozyColor) -> Color {
        match color {
            CozyColor::White => Color::White,
            CozyColor::Black => Color::Black,
        }
    }

    fn piece_type_of(piece: Piece) -> PieceType {
        match piece {
            Piece::Pawn => PieceType::Pawn,
            Piece::Knight => PieceType::Knight,
            Piece::Bishop => PieceType::Bishop,
            Piece::Rook => PieceType::Rook,
            Piece::Queen => PieceType::Queen,
            Piece::King => PieceType::King,
        }
    }
}

impl Rules for CozyRules {
    type Desc = CozyMove;

    fn legal_moves(&self) -> Vec<CozyMove> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply_move(&mut self, desc: &CozyMove) -> Result<Move> {
        let mv = *desc;
        let from = Self::square_of(mv.from);
        let piece = self
            .board
            .piece_on(mv.from)
            .map(Self::piece_type_of)
            .ok_or(Error::EmptySquare(from))?;
        // cozy-chess encodes castling as the king taking its own rook. The
        // record reports the king's true destination and no capture, the
        // same quiet king move pleco reports.
        let castling = piece == PieceType::King
            && self.board.color_on(mv.to) == Some(self.board.side_to_move());
        let to = if castling {
            let col = if (mv.to.file() as u8) > (mv.from.file() as u8) { 6 } else { 2 };
            Square::new(from.row, col)
        } else {
            Self::square_of(mv.to)
        };
        let captured = if castling {
            None
        } else {
            match self.board.piece_on(mv.to) {
                Some(p) => Some(Self::piece_type_of(p)),
                // A pawn landing on an empty square of a different file is
                // an en passant capture.
                None if piece == PieceType::Pawn && mv.from.file() != mv.to.file() => {
                    Some(PieceType::Pawn)
                }
                None => None,
            }
        };
        let color = Self::color_of(self.board.side_to_move());
        let special = mv.promotion.map(|_| SpecialMove::Promotion);
        let before = self.board.clone();
        self.board
            .try_play(mv)
            .map_err(|_| Error::IllegalMove(mv.to_string()))?;
        self.stack.push(before);
        Ok(Move { from, to, piece, captured, color, special })
    }

    fn undo_last_move(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(board) => {
                self.board = board;
                Ok(())
            }
            None => Err(Error::NothingToUndo),
        }
    }

    fn load_position(&mut self, fen: &str) -> Result<()> {
        self.board = CozyBoard::from_fen(fen, false)
            .map_err(|e| Error::InvalidFen(format!("{fen}: {e:?}")))?;
        self.stack.clear();
        Ok(())
    }

    fn serialize_position(&self) -> String {
        format!("{}", self.board)
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
        Self::color_of(self.board.side_to_move())
    }

    fn piece_at(&self, sq: Square) -> Option<(PieceType, Color)> {
        let csq = Self::cozy_square(sq);
        let piece = self.board.piece_on(csq)?;
        let color = self.board.color_on(csq)?;
        Some((Self::piece_type_of(piece), Self::color_of(color)))
    }
}
