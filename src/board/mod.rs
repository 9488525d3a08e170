//! Core data model and the rules-engine boundary.
//!
//! The engine never implements chess rules itself. Move legality, check and
//! mate detection, position bookkeeping: all of it lives behind the
//! [`Rules`] trait, with one adapter per board backend.

pub mod cozy;
pub mod pleco;

use crate::error::{Error, Result};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

    pub const fn idx(self) -> usize {
        self as usize
    }

    fn fen_char(self, color: Color) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A board coordinate. Row 0 is White's home rank (rank 1), matching the
/// orientation the base piece-square tables are authored for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    pub fn from_index(idx: u8) -> Square {
        Square { row: idx / 8, col: idx % 8 }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, (b'1' + self.row) as char)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialMove {
    Promotion,
}

/// A fully populated move record, produced by the rules engine when a move
/// is applied. The core only ever reads these fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceType,
    pub captured: Option<PieceType>,
    pub color: Color,
    pub special: Option<SpecialMove>,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.special == Some(SpecialMove::Promotion) {
            // The session always realizes promotions as queens.
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// The rules-engine contract the search depends on.
///
/// `Desc` is the backend's own opaque move descriptor; the search hands it
/// back unmodified. `undo_last_move` must exactly invert the most recent
/// `apply_move`, and calling it with nothing applied is a fatal
/// precondition violation, not a recoverable state.
pub trait Rules {
    type Desc: Copy + PartialEq + fmt::Display;

    /// Legal moves for the current position, in the backend's stable
    /// enumeration order.
    fn legal_moves(&self) -> Vec<Self::Desc>;

    /// Applies a legal move and returns the populated move record.
    fn apply_move(&mut self, desc: &Self::Desc) -> Result<Move>;

    /// Restores the position to immediately before the last `apply_move`.
    fn undo_last_move(&mut self) -> Result<()>;

    fn load_position(&mut self, fen: &str) -> Result<()>;

    fn serialize_position(&self) -> String;

    /// Direct piece placement; only the promotion-correction path uses it.
    fn place_piece(&mut self, sq: Square, piece: PieceType, color: Color) -> Result<()>;

    /// Direct piece removal; only the promotion-correction path uses it.
    fn remove_piece(&mut self, sq: Square) -> Result<()>;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, sq: Square) -> Option<(PieceType, Color)>;
}

/// Rewrites one square of a FEN string, leaving every other field alone.
/// Both backends realize `place_piece`/`remove_piece` through this: edit
/// the serialized form, then reload it.
pub(crate) fn with_square_set(
    fen: &str,
    sq: Square,
    occupant: Option<(PieceType, Color)>,
) -> Result<String> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or_else(|| Error::InvalidFen(fen.to_string()))?;
    let rest: Vec<&str> = fields.collect();

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(Error::InvalidFen(fen.to_string()));
    }

    // FEN lists rank 8 first; our rows count up from rank 1.
    let mut grid = [[None::<char>; 8]; 8];
    for (i, rank) in ranks.iter().enumerate() {
        let row = 7 - i;
        let mut col = 0usize;
        for c in rank.chars() {
            if let Some(n) = c.to_digit(10) {
                col += n as usize;
            } else {
                if col >= 8 {
                    return Err(Error::InvalidFen(fen.to_string()));
                }
                grid[row][col] = Some(c);
                col += 1;
            }
        }
        if col != 8 {
            return Err(Error::InvalidFen(fen.to_string()));
        }
    }

    grid[sq.row as usize][sq.col as usize] = occupant.map(|(p, c)| p.fen_char(c));

    let mut out = String::with_capacity(fen.len() + 1);
    for row in (0..8).rev() {
        let mut empty = 0u32;
        for col in 0..8 {
            match grid[row][col] {
                Some(c) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(c);
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if row > 0 {
            out.push('/');
        }
    }
    for field in rest {
        out.push(' ');
        out.push_str(field);
    }
    Ok(out)
}
