#[cfg(test)]
mod tests {
    use crate::engine::config::SearchLimits;
    use crate::engine::search::AlphaBetaEngine;
    use crate::engine::Searcher;
    use crate::logic::board::{Board, BoardCoordinate};
    use crate::logic::game::GameState;

    /// Deterministic dense board with clustered fruit, a stand-in for a
    /// midgame position.
    fn midgame_board(n: usize) -> Board {
        let mut board = Board::empty(n).expect("valid size");
        for row in 0..n {
            for col in 0..n {
                let fruit = ((row / 2) * 3 + (col / 2) * 5) % 4;
                board.set_fruit(BoardCoordinate::new(row, col), Some(fruit as u8));
            }
        }
        board
    }

    #[test]
    fn bench_midgame_ten_by_ten() {
        println!("--- Benchmarking 10x10 midgame ---");
        let board = midgame_board(10);
        let state = GameState::new(board.clone());

        let limits = SearchLimits::for_position(&board, 80.0);
        let mut engine = AlphaBetaEngine::new(limits);

        let start = std::time::Instant::now();
        let result = engine.search(&state);
        let duration = start.elapsed();

        let Some((mv, score, stats)) = result else {
            panic!("search returned no move on a dense board");
        };
        println!(
            "move ({}, {}), score {score}, stats: {stats:?}",
            mv.anchor.row, mv.anchor.col
        );
        println!("Time taken: {duration:?}");
        let nps = (f64::from(stats.nodes) / duration.as_secs_f64()) as u64;
        println!("NPS: {nps}");
    }

    #[test]
    fn bench_emergency_limits_stay_cheap() {
        let board = midgame_board(20);
        let state = GameState::new(board.clone());

        let limits = SearchLimits::for_position(&board, 5.0);
        assert_eq!(limits.depth, 1);

        let mut engine = AlphaBetaEngine::new(limits);
        let result = engine.search(&state);
        let Some((_, _, stats)) = result else {
            panic!("search returned no move on a dense board");
        };
        // One ply over at most top_k children.
        assert!(stats.nodes <= 1 + stats.top_k as u32);
    }
}
