use crate::board::{Color, Square};
use thiserror::Error;

/// Errors crossing the rules-engine boundary or raised by session misuse.
///
/// All of these are precondition violations in the sense of the search
/// contract: the search never catches them, it unwinds and hands them to
/// the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move descriptor: {0}")]
    IllegalMove(String),

    #[error("undo requested with no applied move pending")]
    NothingToUndo,

    #[error("square {0} is empty")]
    EmptySquare(Square),

    #[error("it is the engine's ({0:?}) turn, not the opponent's")]
    WrongSide(Color),
}

pub type Result<T> = std::result::Result<T, Error>;
