use super::{candidates, is_alive_next, Engine};
use crate::{Coordinate, Grid};

/// Below this many candidates spawning threads costs more than it saves.
const MIN_CANDIDATES_PER_WORKER: usize = 1 << 10;

/// Engine that splits the candidate set across scoped worker threads.
///
/// Every worker reads the same `&Grid` and classifies a disjoint slice of
/// candidates, so the partial results are merged by a plain union.
#[derive(Debug, Clone, Copy)]
pub struct ThreadedEngine {
    workers: usize,
}

impl ThreadedEngine {
    /// `workers == 0` is treated as a single worker.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// One worker per available CPU.
    pub fn with_available_parallelism() -> Self {
        Self::new(std::thread::available_parallelism().map_or(1, |n| n.get()))
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for ThreadedEngine {
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}

impl Engine for ThreadedEngine {
    fn next_generation(&self, grid: &Grid) -> Grid {
        let candidates = candidates(grid).into_iter().collect::<Vec<_>>();
        let workers = self
            .workers
            .min(candidates.len().div_ceil(MIN_CANDIDATES_PER_WORKER))
            .max(1);
        let chunk_size = candidates.len().div_ceil(workers).max(1);

        let mut next = Grid::new();
        std::thread::scope(|s| {
            let handles = candidates
                .chunks(chunk_size)
                .map(|chunk| {
                    s.spawn(move || {
                        chunk
                            .iter()
                            .copied()
                            .filter(|&cell| is_alive_next(grid, cell))
                            .collect::<Vec<Coordinate>>()
                    })
                })
                .collect::<Vec<_>>();
            for handle in handles {
                match handle.join() {
                    Ok(part) => next.extend(part),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
        });

        tracing::trace!(
            workers,
            candidates = candidates.len(),
            population = next.population(),
            "threaded generation"
        );
        next
    }

    fn name(&self) -> &'static str {
        "threaded"
    }
}
