mod sequential;
mod threaded;

pub use sequential::SequentialEngine;
pub use threaded::ThreadedEngine;

use crate::{Coordinate, Grid};
use ahash::AHashSet as HashSet;

/// Advances a [`Grid`] by one generation under the B3/S23 rule.
///
/// The source grid is borrowed immutably for the whole call, so engines may
/// read it from several threads; the result is a new, independently owned grid.
pub trait Engine {
    /// Returns the next generation of `grid`.
    fn next_generation(&self, grid: &Grid) -> Grid;

    /// Short name used in logs and benchmarks.
    fn name(&self) -> &'static str;
}

/// B3/S23: a live cell survives with 2 or 3 neighbors, a dead one is born with 3.
#[inline]
pub fn survives(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Live cells together with all of their neighbors.
///
/// No cell outside this set can change state in one generation.
pub(crate) fn candidates(grid: &Grid) -> HashSet<Coordinate> {
    let mut result = HashSet::with_capacity(grid.population() * 9);
    for cell in grid.iter() {
        result.insert(cell);
        result.extend(cell.neighbors());
    }
    result
}

/// Whether `cell` is alive in the generation after `grid`.
#[inline]
pub(crate) fn is_alive_next(grid: &Grid, cell: Coordinate) -> bool {
    survives(
        grid.contains(cell),
        grid.count_live_neighbors(cell.x, cell.y),
    )
}
