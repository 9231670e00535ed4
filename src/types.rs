use std::fmt;

use serde::Serialize;

use crate::error::GameError;

const BOARD_SIZE: usize = 8;

/// One of the two players. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => write!(f, "Dark"),
            Side::Light => write!(f, "Light"),
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl From<Side> for Cell {
    fn from(side: Side) -> Cell {
        match side {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

/// A board coordinate, row and column each in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Parses the console move encoding: a column letter `A`-`H`
    /// (case-insensitive) followed by a row digit `1`-`8`.
    ///
    /// Contract:
    /// - Anything but exactly one letter and one digit is `MalformedMoveInput`.
    /// - A letter past `H` or the digits `0`/`9` is `OutOfRangeMove`.
    pub fn parse(input: &str) -> Result<Position, GameError> {
        let &[col_ch, row_ch] = input.as_bytes() else {
            return Err(GameError::MalformedMoveInput {
                input: input.to_string(),
            });
        };
        if !col_ch.is_ascii_alphabetic() || !row_ch.is_ascii_digit() {
            return Err(GameError::MalformedMoveInput {
                input: input.to_string(),
            });
        }

        let col = i32::from(col_ch.to_ascii_uppercase()) - i32::from(b'A');
        let row = i32::from(row_ch) - i32::from(b'1');
        if !(0..BOARD_SIZE as i32).contains(&col) || !(0..BOARD_SIZE as i32).contains(&row) {
            return Err(GameError::OutOfRangeMove {
                input: input.to_string(),
            });
        }

        Ok(Position {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Row-major bit index into a 64-cell board mask.
    pub fn index(self) -> usize {
        usize::from(self.row) * BOARD_SIZE + usize::from(self.col)
    }

    pub fn from_index(index: usize) -> Position {
        debug_assert!(index < BOARD_SIZE * BOARD_SIZE, "index out of range: {index}");
        Position {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

/// Final result after the game reaches a terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    /// `None` means the disc counts are tied.
    pub winner: Option<Side>,
    pub dark_count: u8,
    pub light_count: u8,
}

/// Record emitted after every successfully applied move, for an external
/// trace recorder to log or persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    pub side: Side,
    pub position: Position,
    /// Board snapshot after the move, 64 row-major cells.
    /// Contract: 0 = empty, 1 = dark, 2 = light.
    pub board: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_corners_case_insensitively() {
        assert_eq!(Position::parse("A1").unwrap(), Position { row: 0, col: 0 });
        assert_eq!(Position::parse("H8").unwrap(), Position { row: 7, col: 7 });
        assert_eq!(Position::parse("a8").unwrap(), Position { row: 7, col: 0 });
        assert_eq!(Position::parse("h1").unwrap(), Position { row: 0, col: 7 });
        assert_eq!(Position::parse("d3").unwrap(), Position { row: 2, col: 3 });
    }

    #[test]
    fn parse_rejects_wrong_shapes_as_malformed() {
        for input in ["", "A", "A12", "1A", "11", "AA", "D 3", "é3"] {
            assert!(matches!(
                Position::parse(input),
                Err(GameError::MalformedMoveInput { .. })
            ));
        }
    }

    #[test]
    fn parse_rejects_valid_shapes_off_the_board_as_out_of_range() {
        for input in ["I1", "Z5", "A0", "A9", "i9"] {
            assert!(matches!(
                Position::parse(input),
                Err(GameError::OutOfRangeMove { .. })
            ));
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for index in 0..64 {
            let position = Position::from_index(index);
            assert_eq!(Position::parse(&position.to_string()).unwrap(), position);
        }
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(Position { row: 0, col: 0 }.index(), 0);
        assert_eq!(Position { row: 0, col: 7 }.index(), 7);
        assert_eq!(Position { row: 1, col: 0 }.index(), 8);
        assert_eq!(Position { row: 7, col: 7 }.index(), 63);
    }
}
