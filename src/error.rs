use thiserror::Error;

use crate::types::Position;

/// Rule and input violations. All variants are recoverable at the prompt
/// boundary: the caller re-prompts or re-selects and the session state is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Input is not a column letter followed by a row digit.
    #[error(
        "invalid move format {input:?}: expected a column letter followed by a row digit, e.g. \"A1\""
    )]
    MalformedMoveInput { input: String },

    /// Well-formed input naming a cell outside the 8x8 grid.
    #[error("move {input:?} is off the board: columns are A-H, rows are 1-8")]
    OutOfRangeMove { input: String },

    /// The target cell already holds a disc.
    #[error("cannot play {position}: the cell is already occupied")]
    OccupiedCell { position: Position },

    /// The move flips no opposing discs in any direction.
    #[error("{position} is not a legal move")]
    IllegalMove { position: Position },

    /// A pass was attempted while legal moves exist.
    #[error("cannot pass while legal moves are available")]
    IllegalPass,

    /// The session already reached a terminal position.
    #[error("the game is already over")]
    GameOver,
}
