//! Piece-square tables and material weights.
//!
//! The base tables are authored from White's point of view with row 0 at
//! White's home rank. They are process-wide constants; sessions derive
//! per-color copies and never touch these.

use crate::board::{Color, PieceType, Square};

pub type Grid = [[i32; 8]; 8];

/// Material weight in centipawns. The king's weight is nominal; a legal
/// rules engine never produces a king capture.
pub const fn material(piece: PieceType) -> i32 {
    match piece {
        PieceType::Pawn => 100,
        PieceType::Knight => 320,
        PieceType::Bishop => 330,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 20_000,
    }
}

const PAWN: Grid = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT: Grid = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP: Grid = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK: Grid = [
    [0, 0, 0, 5, 5, 0, 0, 0],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const QUEEN: Grid = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING: Grid = [
    [20, 30, 10, 0, 0, 10, 30, 20],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
];

/// One 8x8 grid of positional weights per piece type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSquareTable {
    grids: [Grid; 6],
}

pub const BASE_TABLES: PieceSquareTable =
    PieceSquareTable { grids: [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING] };

impl PieceSquareTable {
    pub fn get(&self, piece: PieceType, sq: Square) -> i32 {
        self.grids[piece.idx()][sq.row as usize][sq.col as usize]
    }

    /// Deep copy with every grid's row order flipped (row i <-> row 7-i),
    /// columns untouched: the same positional preferences viewed from the
    /// opposite edge of the board. Self-inverse.
    pub fn reversed(&self) -> PieceSquareTable {
        let mut grids = self.grids;
        for grid in &mut grids {
            grid.reverse();
        }
        PieceSquareTable { grids }
    }
}

/// The two table sets a session scores with: one for the engine's own
/// pieces, one for the opponent's. Built once at session initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerspectiveTables {
    pub own: PieceSquareTable,
    pub opp: PieceSquareTable,
}

impl PerspectiveTables {
    pub fn for_color(color: Color) -> PerspectiveTables {
        match color {
            Color::White => PerspectiveTables { own: BASE_TABLES, opp: BASE_TABLES },
            Color::Black => {
                let reversed = BASE_TABLES.reversed();
                PerspectiveTables { own: reversed.clone(), opp: reversed }
            }
        }
    }

    /// Positional weight of `piece` at `sq`, looked up in the own or the
    /// opponent table depending on whose piece it is.
    pub fn positional(&self, mine: bool, piece: PieceType, sq: Square) -> i32 {
        if mine {
            self.own.get(piece, sq)
        } else {
            self.opp.get(piece, sq)
        }
    }
}
