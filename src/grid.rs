use crate::{Engine, SequentialEngine};
use ahash::AHashSet as HashSet;
use rand::{Rng, SeedableRng};

/// Offsets of the eight cells at Chebyshev distance 1.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position on the `i64 x i64` plane.
///
/// Ordering is lexicographic by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shifts the coordinate by `(dx, dy)`.
    ///
    /// Returns `None` if the result leaves the representable range:
    /// there are no cells beyond the edge of the plane.
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Iterates over the neighbors that exist on the plane (8 except at the range limits).
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Sparse set of live cells.
///
/// Presence means alive, absence means dead. The grid never shrinks to a
/// window: cells may sit anywhere on the `i64` plane, and advancing a
/// generation returns a fresh grid instead of mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: HashSet<Coordinate>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid with cells in `[0, side) x [0, side)`, each alive with
    /// probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(side: u32, fill_rate: f64, seed: Option<u64>) -> Self {
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut grid = Self::new();
        for y in 0..side as i64 {
            for x in 0..side as i64 {
                if rng.gen_bool(fill_rate) {
                    grid.set(x, y);
                }
            }
        }
        grid
    }

    /// Marks the cell alive. Setting a live cell again is a no-op.
    pub fn set(&mut self, x: i64, y: i64) {
        self.insert(Coordinate::new(x, y));
    }

    pub fn insert(&mut self, cell: Coordinate) {
        self.cells.insert(cell);
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.contains(Coordinate::new(x, y))
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of live cells among the eight neighbors of `(x, y)`.
    ///
    /// The cell itself never counts. Neighbors beyond the `i64` range are dead.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        Coordinate::new(x, y)
            .neighbors()
            .filter(|&n| self.contains(n))
            .count() as u8
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells in hash order, which differs between runs.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells ascending by `x`, then `y`.
    pub fn sorted_cells(&self) -> Vec<Coordinate> {
        let mut cells = self.cells.iter().copied().collect::<Vec<_>>();
        cells.sort_unstable();
        cells
    }

    /// Smallest rectangle holding every live cell, as `(min corner, max corner)`.
    pub fn bounding_box(&self) -> Option<(Coordinate, Coordinate)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| {
            (
                Coordinate::new(lo.x.min(c.x), lo.y.min(c.y)),
                Coordinate::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }

    /// Returns the grid one generation later, computed by [`SequentialEngine`].
    pub fn next_generation(&self) -> Grid {
        SequentialEngine.next_generation(self)
    }
}

impl FromIterator<Coordinate> for Grid {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for Grid {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Coordinate::from).collect()
    }
}

impl Extend<Coordinate> for Grid {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
