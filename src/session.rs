//! Per-game state: assigned color, perspective tables, and the running
//! score carried across the real (non-hypothetical) moves of the game.

use crate::board::{Color, Move, PieceType, Rules, SpecialMove, Square};
use crate::error::{Error, Result};
use crate::search::alphabeta::{SearchConfig, Searcher};
use crate::search::eval::evaluate_move;
use crate::search::psqt::PerspectiveTables;
use log::debug;

pub struct Session<R: Rules> {
    rules: R,
    color: Color,
    tables: PerspectiveTables,
    score: i32,
    config: SearchConfig,
}

impl<R: Rules> Session<R> {
    /// Starts a session for `color` on the rules engine's current
    /// position. The perspective tables are derived here, once, and the
    /// running score starts at zero. Depth is clamped to at least one ply
    /// so a `None` from the search always means no legal moves.
    pub fn new(rules: R, color: Color, config: SearchConfig) -> Self {
        let config = SearchConfig { depth: config.depth.max(1) };
        Self { rules, color, tables: PerspectiveTables::for_color(color), score: 0, config }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The running evaluation from the engine's own point of view.
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Applies an opponent move to the position and folds it into the
    /// running score. Rejected outright when it is the engine's turn.
    pub fn record_opponent_move(&mut self, desc: &R::Desc) -> Result<Move> {
        if self.rules.side_to_move() == self.color {
            return Err(Error::WrongSide(self.color));
        }
        let mv = self.rules.apply_move(desc)?;
        self.score = evaluate_move(&self.tables, self.color, &mv, self.score);
        debug!("opponent played {mv}, running score {}", self.score);
        Ok(mv)
    }

    /// Searches at the configured depth, plays the best move found, and
    /// folds it into the running score. Returns `None` when the engine has
    /// no legal moves; whether that is mate or stalemate is the rules
    /// engine's concern.
    pub fn choose_own_move(&mut self) -> Result<Option<Move>> {
        let mut searcher = Searcher::new(&self.tables, self.color);
        let outcome = searcher.search_root(&mut self.rules, self.config.depth, self.score)?;
        let Some(desc) = outcome.best else {
            debug!("no legal moves for {:?}", self.color);
            return Ok(None);
        };
        let mv = self.rules.apply_move(&desc)?;
        self.score = evaluate_move(&self.tables, self.color, &mv, self.score);
        if mv.special == Some(SpecialMove::Promotion) {
            self.realize_promotion(mv.to)?;
        }
        debug!(
            "playing {mv}, search value {}, running score {}, {} nodes",
            outcome.value, self.score, outcome.nodes
        );
        Ok(Some(mv))
    }

    /// The engine always promotes to a queen. After placing the piece
    /// directly, the position is serialized and reloaded so the rules
    /// engine's internal bookkeeping stays consistent with the board.
    fn realize_promotion(&mut self, sq: Square) -> Result<()> {
        self.rules.remove_piece(sq)?;
        self.rules.place_piece(sq, PieceType::Queen, self.color)?;
        let fen = self.rules.serialize_position();
        self.rules.load_position(&fen)
    }
}
