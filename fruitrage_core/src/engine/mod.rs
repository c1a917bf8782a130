use crate::logic::board::BoardCoordinate;
use crate::logic::game::GameState;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod search;

#[cfg(test)]
mod bench_test;

/// A legal move: the scan-order-first cell of a connected same-fruit group
/// and every cell the move removes. The anchor alone is enough to re-derive
/// the cell set from the board the move was generated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub anchor: BoardCoordinate,
    pub cells: Vec<BoardCoordinate>,
}

impl Move {
    /// Points awarded for playing this move: the square of the group size.
    /// The nonlinearity is the game's central scoring rule.
    #[must_use]
    pub fn gain(&self) -> i32 {
        let size = self.cells.len() as i32;
        size * size
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub top_k: usize,
    pub nodes: u32,
    pub leaves: u32,
}

pub trait Searcher {
    /// Runs one top-level search from `root`. Returns the chosen move, its
    /// backed-up differential score, and the search counters, or `None`
    /// when the root has no legal move.
    fn search(&mut self, root: &GameState) -> Option<(Move, i32, SearchStats)>;
}
