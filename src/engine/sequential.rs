use super::{candidates, is_alive_next, Engine};
use crate::Grid;

/// Single-threaded engine: builds the candidate set, then classifies it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEngine;

impl Engine for SequentialEngine {
    fn next_generation(&self, grid: &Grid) -> Grid {
        let candidates = candidates(grid);
        let next = candidates
            .iter()
            .copied()
            .filter(|&cell| is_alive_next(grid, cell))
            .collect::<Grid>();
        tracing::trace!(
            candidates = candidates.len(),
            population = next.population(),
            "sequential generation"
        );
        next
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
