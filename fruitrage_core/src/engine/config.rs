use crate::logic::board::Board;
use crate::logic::generator::MoveGenerator;
use serde::{Deserialize, Serialize};

/// Ply limit before the size/phase table adjusts it.
const DEFAULT_DEPTH: u8 = 3;

/// Branch-bound sentinel. A 26×26 board holds at most 676 cells, so 999
/// never truncates until a time band lowers it.
const TOP_K_UNBOUNDED: usize = 999;

/// Per-decision search budget: ply limit and branch bound ("top-K").
/// Derived once from the root board and the remaining wall-clock budget,
/// read-only for the duration of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    pub depth: u8,
    pub top_k: usize,
}

impl SearchLimits {
    /// Derives the limits from board side, tile density (legal moves per
    /// occupied cell) and remaining seconds.
    ///
    /// The thresholds are tuned values carried as-is. Band order matters:
    /// a time band may only tighten the depth picked by the size table,
    /// never raise it, and the first matching band wins.
    #[must_use]
    pub fn for_position(board: &Board, remaining_seconds: f64) -> Self {
        let n = board.size();
        let position_size = board.position_count();
        let action_size = MoveGenerator::new().generate_moves(board).len();
        let density = action_size as f32 / position_size as f32;

        // "Early game" = few tiles cleared yet; how close counts as few
        // scales with board area and density.
        let area = (n * n) as f64;
        let diff = if density > 0.95 {
            (area * 0.01) as usize
        } else if density > 0.9 {
            (area * 0.02) as usize
        } else {
            (area * 0.05) as usize
        };
        let in_first_steps = n * n - position_size < diff;

        let mut depth = DEFAULT_DEPTH;
        if n <= 4 {
            depth = 6;
        } else if n <= 6 {
            depth = 5;
        } else if n <= 10 {
            depth = 4;
        } else if n <= 15 {
            if in_first_steps {
                depth = 4;
            }
        } else {
            depth = 3;
        }

        let mut top_k = TOP_K_UNBOUNDED;
        if remaining_seconds < 10.0 {
            // Near-exhausted budget; a small board never gets this low, so
            // assume a large one and take the cheapest search that still
            // returns a move.
            depth = 1;
            top_k = 10;
        } else if remaining_seconds < 70.0 && n < 20 {
            depth = depth.min(3);
            top_k = 50;
        } else if remaining_seconds < 100.0 && n < 20 {
            depth = depth.min(3);
        } else if remaining_seconds < 15.0 && n >= 20 {
            depth = depth.min(2);
            top_k = 30;
        } else if remaining_seconds < 50.0 && n >= 20 {
            depth = depth.min(3);
            top_k = 50;
        } else if remaining_seconds < 100.0 && n >= 20 {
            depth = depth.min(3);
            top_k = 100;
        } else if remaining_seconds < 200.0 && n >= 20 {
            depth = depth.min(3);
            top_k = 200;
        }

        log::debug!(
            "limits: depth={depth}, top_k={top_k} (n={n}, positions={position_size}, \
             actions={action_size}, density={density:.3}, remaining={remaining_seconds}s)"
        );

        Self { depth, top_k }
    }
}

/// Optional overrides for experimentation, loaded from JSON. Absent fields
/// keep the controller's computed values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: Option<u8>,
    pub top_k: Option<usize>,
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    #[must_use]
    pub fn apply(&self, limits: SearchLimits) -> SearchLimits {
        SearchLimits {
            depth: self.depth.unwrap_or(limits.depth),
            top_k: self.top_k.unwrap_or(limits.top_k),
        }
    }
}
