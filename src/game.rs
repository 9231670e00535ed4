use crate::board::{Board, mask_to_positions};
use crate::error::GameError;
use crate::types::{Cell, GameOutcome, Position, Side, TraceRecord};

/// Source of moves for one side: a search agent, a scripted player, a
/// remote peer. The session-driving loop asks the selector and applies
/// whatever it returns.
pub trait MoveSelector {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position>;
}

/// Baseline selector: the first legal move in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        board.legal_moves(side).into_iter().next()
    }
}

/// The authoritative game state: one board, the side to move, and the
/// terminal flag. Mutated only by a legal move or an explicit pass;
/// terminal once neither side has a legal move.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Side,
    game_over: bool,
    last_pass: bool,
    flipped: Vec<Position>,
}

impl GameSession {
    /// Starts at the standard opening, Dark to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::Dark,
            game_over: false,
            last_pass: false,
            flipped: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Whether the previous mutation was a pass rather than a move.
    pub fn last_was_pass(&self) -> bool {
        self.last_pass
    }

    /// Discs flipped by the last applied move, empty after a pass.
    pub fn last_flipped(&self) -> &[Position] {
        &self.flipped
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board.has_any_legal_move(self.to_move)
    }

    /// Legal moves for the side to move, row-major.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.to_move)
    }

    /// Applies a move for the side to move, switches the turn, and
    /// returns the trace record for the external recorder.
    pub fn play(&mut self, position: Position) -> Result<TraceRecord, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let (row, col) = (usize::from(position.row), usize::from(position.col));
        if self.board.get(row, col) != Cell::Empty {
            return Err(GameError::OccupiedCell { position });
        }

        let side = self.to_move;
        let flips = self.board.place(position, side);
        if flips == 0 {
            return Err(GameError::IllegalMove { position });
        }

        self.last_pass = false;
        self.flipped = mask_to_positions(flips);
        self.to_move = side.opponent();
        self.update_game_over();

        Ok(TraceRecord {
            side,
            position,
            board: self.board.to_array().to_vec(),
        })
    }

    /// Passes the turn. Only permitted when the side to move has no
    /// legal move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if self.has_legal_moves() {
            return Err(GameError::IllegalPass);
        }

        self.last_pass = true;
        self.flipped.clear();
        self.to_move = self.to_move.opponent();
        self.update_game_over();

        Ok(())
    }

    /// Returns `(dark_count, light_count)`; valid in any state.
    pub fn score(&self) -> (u8, u8) {
        self.board.count()
    }

    /// The final result, or `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.game_over {
            return None;
        }

        let (dark_count, light_count) = self.board.count();
        let winner = match dark_count.cmp(&light_count) {
            std::cmp::Ordering::Greater => Some(Side::Dark),
            std::cmp::Ordering::Less => Some(Side::Light),
            std::cmp::Ordering::Equal => None,
        };

        Some(GameOutcome {
            winner,
            dark_count,
            light_count,
        })
    }

    fn update_game_over(&mut self) {
        if !self.board.has_any_legal_move(Side::Dark) && !self.board.has_any_legal_move(Side::Light)
        {
            self.game_over = true;
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, to_move: Side) {
        self.board = board;
        self.to_move = to_move;
        self.game_over = false;
        self.last_pass = false;
        self.flipped.clear();
        self.update_game_over();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
