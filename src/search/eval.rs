//! Incremental move evaluation.
//!
//! Scores are signed centipawns from the engine's own point of view and
//! are carried along the search path; each move adjusts the previous score
//! in O(1) instead of rescanning the board.

use crate::board::{Color, Move, PieceType, SpecialMove};
use crate::search::psqt::{material, PerspectiveTables};

#[inline]
fn signed(mine: bool, value: i32) -> i32 {
    if mine {
        value
    } else {
        -value
    }
}

/// Returns the score after `mv`, given the score immediately before it.
///
/// Exactly one branch applies per move: promotion, capture, or quiet. A
/// capture is scored by the captured piece alone; the capturing piece's
/// own positional change is not part of the delta.
pub fn evaluate_move(tables: &PerspectiveTables, own: Color, mv: &Move, prev: i32) -> i32 {
    let mine = mv.color == own;
    match (mv.special, mv.captured) {
        (Some(SpecialMove::Promotion), _) => {
            // The pawn is replaced by a queen. Own promotions score the new
            // queen at the origin square; opponent promotions keep the
            // pawn's table entry for the landing square.
            let gained = material(PieceType::Queen)
                + if mine {
                    tables.positional(true, PieceType::Queen, mv.from)
                } else {
                    tables.positional(false, PieceType::Pawn, mv.to)
                };
            let lost = material(PieceType::Pawn) + tables.positional(mine, PieceType::Pawn, mv.from);
            prev + signed(mine, gained - lost)
        }
        (None, Some(captured)) => {
            prev + signed(mine, material(captured) + tables.positional(mine, captured, mv.to))
        }
        (None, None) => {
            let delta = tables.positional(mine, mv.piece, mv.to)
                - tables.positional(mine, mv.piece, mv.from);
            prev + signed(mine, delta)
        }
    }
}
