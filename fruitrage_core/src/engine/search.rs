use crate::engine::config::SearchLimits;
use crate::engine::{Move, SearchStats, Searcher};
use crate::logic::game::{GameState, Player};
use crate::logic::generator::MoveGenerator;

/// Minimax with alpha-beta pruning over the shared differential score.
///
/// Children are ordered by their immediate score before expansion and then
/// truncated to the branch bound. The truncation can discard moves plain
/// alpha-beta would have kept; that trade of optimality for tractability is
/// part of the engine's contract and must survive any refactor.
pub struct AlphaBetaEngine {
    limits: SearchLimits,
    generator: MoveGenerator,
    nodes_searched: u32,
    leaf_count: u32,
}

/// Value backed up by one recursive call: the best reachable score and the
/// move at this level that reaches it (`None` at a leaf).
struct SearchOutcome {
    score: i32,
    mv: Option<Move>,
}

impl AlphaBetaEngine {
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            generator: MoveGenerator::new(),
            nodes_searched: 0,
            leaf_count: 0,
        }
    }

    fn max_value(&mut self, state: &GameState, mut alpha: i32, beta: i32, depth: u8) -> SearchOutcome {
        self.nodes_searched += 1;

        let moves = self.generator.generate_moves(&state.board);
        if moves.is_empty() || depth >= self.limits.depth {
            self.leaf_count += 1;
            return SearchOutcome {
                score: state.score,
                mv: None,
            };
        }

        let mut children: Vec<GameState> = moves
            .iter()
            .map(|mv| state.apply_move(mv, Player::One))
            .collect();
        // Most promising first. The sort is stable, so equal scores keep
        // generation order and the first one wins ties.
        children.sort_by(|a, b| b.score.cmp(&a.score));
        children.truncate(self.limits.top_k);

        let mut best = SearchOutcome {
            score: i32::MIN,
            mv: None,
        };
        for child in children {
            let reply = self.min_value(&child, alpha, beta, depth + 1);
            if reply.score > best.score {
                best = SearchOutcome {
                    score: reply.score,
                    mv: child.last_move,
                };
            }
            if best.score >= beta {
                return best;
            }
            alpha = alpha.max(best.score);
        }
        best
    }

    fn min_value(&mut self, state: &GameState, alpha: i32, mut beta: i32, depth: u8) -> SearchOutcome {
        self.nodes_searched += 1;

        let moves = self.generator.generate_moves(&state.board);
        if moves.is_empty() || depth >= self.limits.depth {
            self.leaf_count += 1;
            return SearchOutcome {
                score: state.score,
                mv: None,
            };
        }

        let mut children: Vec<GameState> = moves
            .iter()
            .map(|mv| state.apply_move(mv, Player::Two))
            .collect();
        children.sort_by(|a, b| a.score.cmp(&b.score));
        children.truncate(self.limits.top_k);

        let mut best = SearchOutcome {
            score: i32::MAX,
            mv: None,
        };
        for child in children {
            let reply = self.max_value(&child, alpha, beta, depth + 1);
            if reply.score < best.score {
                best = SearchOutcome {
                    score: reply.score,
                    mv: child.last_move,
                };
            }
            if best.score <= alpha {
                return best;
            }
            beta = beta.min(best.score);
        }
        best
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, root: &GameState) -> Option<(Move, i32, SearchStats)> {
        self.nodes_searched = 0;
        self.leaf_count = 0;

        let outcome = self.max_value(root, i32::MIN, i32::MAX, 0);

        let stats = SearchStats {
            depth: self.limits.depth,
            top_k: self.limits.top_k,
            nodes: self.nodes_searched,
            leaves: self.leaf_count,
        };
        log::debug!(
            "search done: score={}, nodes={}, leaves={}",
            outcome.score,
            stats.nodes,
            stats.leaves
        );
        outcome.mv.map(|mv| (mv, outcome.score, stats))
    }
}
