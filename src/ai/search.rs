use crate::ai::eval::PositionalEvaluator;
use crate::board::Board;
use crate::game::MoveSelector;
use crate::types::{Position, Side};

/// Search parameters carried by the agent instead of ambient globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search depth in plies.
    pub depth: u8,
    /// Whether alpha-beta pruning is active. Pruning never changes the
    /// chosen move, only the number of states expanded.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            alpha_beta: true,
        }
    }
}

/// Result of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub position: Position,
    /// Evaluation of the chosen line from the agent's perspective.
    pub score: i32,
    /// States expanded below the root, for diagnostics.
    pub nodes: u64,
}

/// Fixed-depth adversarial search for one side.
///
/// The evaluation perspective is pinned to the agent's side for the
/// whole search; whether a ply maximizes or minimizes follows from
/// whose turn it is at that ply, never from flipping the evaluator's
/// sign.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    side: Side,
    config: SearchConfig,
    evaluator: PositionalEvaluator,
    nodes: u64,
}

impl SearchAgent {
    pub fn new(side: Side, config: SearchConfig) -> Self {
        Self {
            side,
            config,
            evaluator: PositionalEvaluator,
            nodes: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Flips between plain minimax and alpha-beta without touching any
    /// other agent state.
    pub fn toggle_alpha_beta(&mut self) {
        self.config.alpha_beta = !self.config.alpha_beta;
    }

    pub fn alpha_beta_active(&self) -> bool {
        self.config.alpha_beta
    }

    /// Picks the best move for the agent's side, or `None` when it has
    /// no legal move and the caller must pass.
    ///
    /// Candidates are explored in row-major order and ties break toward
    /// the first one, so the choice is fully deterministic. With pruning
    /// active the root threads its running best as alpha but never cuts
    /// a root candidate, which keeps the chosen move identical to plain
    /// minimax.
    pub fn choose_move(&mut self, board: &Board) -> Option<SearchOutcome> {
        self.nodes = 0;

        let moves = board.legal_moves(self.side);
        let child_depth = self.config.depth.saturating_sub(1);
        let mut best: Option<(Position, i32)> = None;
        let mut alpha = i32::MIN;

        for position in moves {
            let mut next = *board;
            next.place(position, self.side);

            let score = if self.config.alpha_beta {
                self.alpha_beta(&next, self.side.opponent(), child_depth, alpha, i32::MAX)
            } else {
                self.minimax(&next, self.side.opponent(), child_depth)
            };

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
            alpha = alpha.max(score);
        }

        best.map(|(position, score)| SearchOutcome {
            position,
            score,
            nodes: self.nodes,
        })
    }

    fn minimax(&mut self, board: &Board, to_move: Side, depth: u8) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board, self.side);
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            if !board.has_any_legal_move(to_move.opponent()) {
                // True game over, not a pass.
                return self.evaluator.evaluate(board, self.side);
            }
            return self.minimax(board, to_move.opponent(), depth - 1);
        }

        let maximizing = to_move == self.side;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for position in moves {
            let mut next = *board;
            next.place(position, to_move);
            let score = self.minimax(&next, to_move.opponent(), depth - 1);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        to_move: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board, self.side);
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            if !board.has_any_legal_move(to_move.opponent()) {
                return self.evaluator.evaluate(board, self.side);
            }
            return self.alpha_beta(board, to_move.opponent(), depth - 1, alpha, beta);
        }

        let maximizing = to_move == self.side;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for position in moves {
            let mut next = *board;
            next.place(position, to_move);
            let score = self.alpha_beta(&next, to_move.opponent(), depth - 1, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

impl MoveSelector for SearchAgent {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        debug_assert_eq!(side, self.side, "agent asked to move for the wrong side");
        self.choose_move(board).map(|outcome| outcome.position)
    }
}
