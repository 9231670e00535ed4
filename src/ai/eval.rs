use crate::board::Board;
use crate::types::{Cell, Side};

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];
const CORNER_WEIGHT: f64 = 10.0;
const DISC_WEIGHT: f64 = 0.01;

/// Static positional heuristic: corner ownership dominates, mobility
/// breaks positional ties, raw disc count only nudges.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalEvaluator;

impl PositionalEvaluator {
    /// Scores the board for `side`, higher is better for `side`.
    ///
    /// Terminal positions (neither side can move) score as the plain
    /// disc difference, on the same scale as the material term.
    pub fn evaluate(&self, board: &Board, side: Side) -> i32 {
        let opponent = side.opponent();

        let (dark_count, light_count) = board.count();
        let (own_discs, opp_discs) = match side {
            Side::Dark => (i32::from(dark_count), i32::from(light_count)),
            Side::Light => (i32::from(light_count), i32::from(dark_count)),
        };

        let own_mobility = board.legal_mask(side).count_ones() as i32;
        let opp_mobility = board.legal_mask(opponent).count_ones() as i32;
        if own_mobility == 0 && opp_mobility == 0 {
            return own_discs - opp_discs;
        }

        let own_cell = Cell::from(side);
        let opp_cell = Cell::from(opponent);
        let mut own_corners = 0;
        let mut opp_corners = 0;
        for (row, col) in CORNERS {
            let cell = board.get(row, col);
            if cell == own_cell {
                own_corners += 1;
            } else if cell == opp_cell {
                opp_corners += 1;
            }
        }

        let score = CORNER_WEIGHT * f64::from(own_corners - opp_corners)
            + f64::from(own_mobility - opp_mobility)
            + DISC_WEIGHT * f64::from(own_discs - opp_discs);
        score.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_WIDTH: usize = 8;

    fn bit(row: usize, col: usize) -> u64 {
        1u64 << (row * BOARD_WIDTH + col)
    }

    #[test]
    fn opening_position_is_balanced_for_both_sides() {
        let board = Board::new();
        let evaluator = PositionalEvaluator;

        assert_eq!(evaluator.evaluate(&board, Side::Dark), 0);
        assert_eq!(evaluator.evaluate(&board, Side::Light), 0);
    }

    #[test]
    fn corner_ownership_dominates_the_score() {
        // Dark holds a1, light holds only b1: dark can extend along the
        // row, light cannot move at all.
        let board = Board::from_bitboards(bit(0, 0), bit(0, 1));
        let evaluator = PositionalEvaluator;

        // 10 for the corner, +1 mobility edge, disc term rounds away.
        assert_eq!(evaluator.evaluate(&board, Side::Dark), 11);
        assert_eq!(evaluator.evaluate(&board, Side::Light), -11);
    }

    #[test]
    fn score_is_antisymmetric_between_the_sides() {
        let mut board = Board::new();
        board.place(
            crate::types::Position { row: 2, col: 3 },
            Side::Dark,
        );
        let evaluator = PositionalEvaluator;

        assert_eq!(
            evaluator.evaluate(&board, Side::Dark),
            -evaluator.evaluate(&board, Side::Light),
        );
    }

    #[test]
    fn terminal_board_scores_as_the_disc_difference() {
        let evaluator = PositionalEvaluator;

        let all_dark = Board::from_bitboards(u64::MAX, 0);
        assert_eq!(evaluator.evaluate(&all_dark, Side::Dark), 64);
        assert_eq!(evaluator.evaluate(&all_dark, Side::Light), -64);

        // 32/32 split, no legal moves left.
        let split = Board::from_bitboards(u32::MAX as u64, u64::MAX ^ u32::MAX as u64);
        assert_eq!(evaluator.evaluate(&split, Side::Dark), 0);
    }

    #[test]
    fn disc_term_only_nudges_the_score() {
        // Blocked-in-a-corner shape shifted one cell off the corner:
        // dark on b2, light on c2. No corners involved.
        let board = Board::from_bitboards(bit(1, 1), bit(1, 2));
        let evaluator = PositionalEvaluator;

        // Dark's single move (d2) vs light's single move (a2): mobility
        // cancels, discs cancel, corners are empty.
        assert_eq!(evaluator.evaluate(&board, Side::Dark), 0);
    }
}
