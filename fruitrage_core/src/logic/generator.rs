use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate};

pub struct MoveGenerator;

impl MoveGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Enumerates every legal move on `board`: one per connected component,
    /// anchored at the component's first cell in row-major scan order.
    /// Cells claimed by an earlier group are skipped, so the returned moves
    /// partition the occupied cells. Empty on a cleared board, which is the
    /// search's terminal signal rather than an error.
    #[must_use]
    pub fn generate_moves(&self, board: &Board) -> Vec<Move> {
        let n = board.size();
        let mut claimed = vec![false; n * n];
        let mut moves = Vec::with_capacity(16);

        for row in 0..n {
            for col in 0..n {
                let at = BoardCoordinate::new(row, col);
                if claimed[row * n + col] || board.fruit_at(at).is_none() {
                    continue;
                }
                let cells = board.find_group(at);
                for cell in &cells {
                    claimed[cell.row * n + cell.col] = true;
                }
                moves.push(Move { anchor: at, cells });
            }
        }
        moves
    }

    /// True when at least one legal move exists. Any occupied cell belongs
    /// to some group, so this is an occupancy check.
    #[must_use]
    pub fn has_legal_moves(&self, board: &Board) -> bool {
        board.position_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).expect("valid board")
    }

    #[test]
    fn test_one_move_per_component() {
        // 0112
        // 1102
        // 0012
        // 0022
        let b = board(&["0112", "1102", "0012", "0022"]);
        let moves = MoveGenerator::new().generate_moves(&b);

        let anchors: Vec<BoardCoordinate> = moves.iter().map(|mv| mv.anchor).collect();
        assert_eq!(
            anchors,
            vec![
                BoardCoordinate::new(0, 0),
                BoardCoordinate::new(0, 1),
                BoardCoordinate::new(0, 3),
                BoardCoordinate::new(1, 2),
                BoardCoordinate::new(2, 0),
                BoardCoordinate::new(2, 2),
            ]
        );

        // The group under anchor (0, 1): both 1s of row 0 plus the two
        // leading 1s of row 1.
        let ones = moves.iter().find(|mv| mv.anchor == BoardCoordinate::new(0, 1));
        assert_eq!(ones.map(|mv| mv.cells.len()), Some(4));
    }

    #[test]
    fn test_moves_partition_occupied_cells() {
        let b = board(&["0112", "1102", "0012", "0022"]);
        let moves = MoveGenerator::new().generate_moves(&b);

        let mut seen = HashSet::new();
        for mv in &moves {
            assert!(!mv.cells.is_empty());
            for cell in &mv.cells {
                assert!(seen.insert(*cell), "cell claimed twice");
            }
        }
        assert_eq!(seen.len(), b.position_count());
    }

    #[test]
    fn test_anchor_is_scan_order_first_cell_of_group() {
        let b = board(&["*00", "00*", "***"]);
        let moves = MoveGenerator::new().generate_moves(&b);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].anchor, BoardCoordinate::new(0, 1));
        assert_eq!(moves[0].cells.len(), 4);
    }

    #[test]
    fn test_cleared_board_has_no_moves() {
        let b = Board::empty(3).expect("valid size");
        let generator = MoveGenerator::new();
        assert!(generator.generate_moves(&b).is_empty());
        assert!(!generator.has_legal_moves(&b));
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let b = board(&["120", "201", "012"]);
        let generator = MoveGenerator::new();
        let first = generator.generate_moves(&b);
        let second = generator.generate_moves(&b);
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
    }
}
