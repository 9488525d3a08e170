use crate::board::{Color, Rules};
use crate::error::Result;
use crate::search::eval::evaluate_move;
use crate::search::psqt::PerspectiveTables;

/// Search knobs. Depth is a fixed ply budget per search, not a time
/// control; 3 matches the reference behavior.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SearchOutcome<D> {
    pub best: Option<D>,
    pub value: i32,
    pub nodes: u64,
}

/// Depth-bounded minimax with alpha-beta pruning over the rules engine's
/// mutable position. Strict apply-before-recurse / undo-after discipline:
/// at any moment the pending applies match the recursion depth exactly.
pub struct Searcher<'a> {
    tables: &'a PerspectiveTables,
    color: Color,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(tables: &'a PerspectiveTables, color: Color) -> Self {
        Self { tables, color, nodes: 0 }
    }

    /// Runs a maximizing search with full-width bounds from the current
    /// position, carrying `score` as the evaluation entering the root.
    pub fn search_root<R: Rules>(
        &mut self,
        rules: &mut R,
        depth: u32,
        score: i32,
    ) -> Result<SearchOutcome<R::Desc>> {
        self.nodes = 0;
        let (best, value) = self.node(rules, depth, score, true, i32::MIN, i32::MAX)?;
        Ok(SearchOutcome { best, value, nodes: self.nodes })
    }

    fn node<R: Rules>(
        &mut self,
        rules: &mut R,
        depth: u32,
        score: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<(Option<R::Desc>, i32)> {
        self.nodes += 1;
        let moves = rules.legal_moves();
        if depth == 0 || moves.is_empty() {
            // Leaf: the score accumulated on the path here stands; there
            // is no static re-evaluation.
            return Ok((None, score));
        }

        let mut best = None;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        for desc in moves {
            let mv = rules.apply_move(&desc)?;
            let child_score = evaluate_move(self.tables, self.color, &mv, score);
            let (_, value) = self.node(rules, depth - 1, child_score, !maximizing, alpha, beta)?;
            rules.undo_last_move()?;

            // Strict improvement only: ties keep the first-seen move.
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best = Some(desc);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best = Some(desc);
                }
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }
        debug_assert!(best.is_some(), "non-leaf node must settle on a move");
        Ok((best, best_value))
    }
}
