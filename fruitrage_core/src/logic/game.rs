use crate::engine::Move;
use crate::logic::board::Board;
use serde::{Deserialize, Serialize};

/// The two movers. `One` moves first and owns the positive side of the
/// differential score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// One node payload of the game tree: a board, the differential score
/// accumulated on the way here, and the move that produced this state from
/// its parent (absent at the root).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub score: i32,
    pub last_move: Option<Move>,
}

impl GameState {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            score: 0,
            last_move: None,
        }
    }

    /// Plays `mv` for `player`: the child owns a settled copy of the board,
    /// and the score shifts by the squared group size, positive for
    /// `Player::One`, negative for `Player::Two`.
    #[must_use]
    pub fn apply_move(&self, mv: &Move, player: Player) -> Self {
        let mut board = self.board.clone();
        board.remove_group(&mv.cells);
        board.apply_gravity();

        let gain = mv.gain();
        let score = match player {
            Player::One => self.score + gain,
            Player::Two => self.score - gain,
        };

        Self {
            board,
            score,
            last_move: Some(mv.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::BoardCoordinate;
    use crate::logic::generator::MoveGenerator;

    fn state(rows: &[&str]) -> GameState {
        GameState::new(Board::from_rows(rows).expect("valid board"))
    }

    fn move_at(state: &GameState, row: usize, col: usize) -> Move {
        let at = BoardCoordinate::new(row, col);
        MoveGenerator::new()
            .generate_moves(&state.board)
            .into_iter()
            .find(|mv| mv.anchor == at)
            .expect("move exists at anchor")
    }

    #[test]
    fn test_gain_is_squared_group_size() {
        let root = state(&["001", "011", "111"]);
        let ones = move_at(&root, 0, 2);
        assert_eq!(ones.cells.len(), 6);
        assert_eq!(ones.gain(), 36);

        let zeros = move_at(&root, 0, 0);
        assert_eq!(zeros.cells.len(), 3);
        assert_eq!(zeros.gain(), 9);
    }

    #[test]
    fn test_score_sign_follows_player() {
        let root = state(&["00", "11"]);
        let mv = move_at(&root, 0, 0);

        let as_one = root.apply_move(&mv, Player::One);
        assert_eq!(as_one.score, 4);
        let as_two = root.apply_move(&mv, Player::Two);
        assert_eq!(as_two.score, -4);

        // Gains accumulate on the single differential score.
        let reply = move_at(&as_one, 1, 0);
        assert_eq!(as_one.apply_move(&reply, Player::Two).score, 0);
    }

    #[test]
    fn test_child_board_is_settled_and_independent() {
        let root = state(&["01", "01"]);
        let mv = move_at(&root, 0, 0);
        let child = root.apply_move(&mv, Player::One);

        assert_eq!(child.board.rows(), vec!["*1", "*1"]);
        assert_eq!(child.last_move.as_ref().map(|m| m.anchor), Some(mv.anchor));
        // Parent board is untouched.
        assert_eq!(root.board.rows(), vec!["01", "01"]);
    }

    #[test]
    fn test_larger_group_always_outscores_smaller() {
        for size in 1..=25_i32 {
            assert!(size * size < (size + 1) * (size + 1));
        }
        // And through the move type itself: 5 zeros vs 4 ones.
        let root = state(&["000", "011", "011"]);
        assert!(move_at(&root, 0, 0).gain() > move_at(&root, 1, 1).gain());
    }
}
