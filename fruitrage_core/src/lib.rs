//! Adversarial move search for the two-player fruit-elimination game.

pub mod engine;
pub mod logic;

use engine::config::{EngineConfig, SearchLimits};
use engine::search::AlphaBetaEngine;
use engine::{Move, SearchStats, Searcher};
use logic::board::Board;
use logic::game::{GameState, Player};
use logic::generator::MoveGenerator;
use serde::{Deserialize, Serialize};

/// Outcome of one top-level decision: the chosen move, the board after
/// playing it as the first mover, and the backed-up differential score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub mv: Move,
    pub board: Board,
    pub score: i32,
    pub stats: SearchStats,
}

/// Picks the best move for the first mover on `board` given the remaining
/// wall-clock budget in seconds. Returns `None` when the board has no legal
/// move — a terminal position the caller must handle, not an error.
///
/// The budget is consumed as a number only; the engine never reads clocks.
#[must_use]
pub fn decide_move(board: &Board, remaining_seconds: f64) -> Option<Decision> {
    decide_move_with_config(board, remaining_seconds, &EngineConfig::default())
}

/// `decide_move` with optional depth / top-K overrides applied on top of
/// the adaptive limits.
#[must_use]
pub fn decide_move_with_config(
    board: &Board,
    remaining_seconds: f64,
    config: &EngineConfig,
) -> Option<Decision> {
    if !MoveGenerator::new().has_legal_moves(board) {
        return None;
    }

    let limits = config.apply(SearchLimits::for_position(board, remaining_seconds));
    let root = GameState::new(board.clone());

    let mut engine = AlphaBetaEngine::new(limits);
    let (mv, score, stats) = engine.search(&root)?;

    let next = root.apply_move(&mv, Player::One);
    log::debug!(
        "chose ({}, {}) removing {} cells, backed-up score {score}",
        mv.anchor.row,
        mv.anchor.col,
        mv.cells.len()
    );

    Some(Decision {
        mv,
        board: next.board,
        score,
        stats,
    })
}
