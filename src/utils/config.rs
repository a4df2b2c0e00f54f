use super::{CellOrder, Glyphs, Viewport};
use crate::{Engine, SequentialEngine, ThreadedEngine};
use std::time::Duration;

/// Which part of the plane the driver draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Fixed(Viewport),
    /// Bounding box of the initial grid.
    Fit,
}

/// Settings of a simulation run.
#[derive(Debug, Clone)]
pub struct Config {
    pub generations: u64,
    pub delay: Duration,
    pub viewport: ViewportMode,
    pub glyphs: Glyphs,
    pub order: CellOrder,
    /// `0` selects the sequential engine.
    pub threads: usize,
    /// Skip drawing frames, only write the final grid.
    pub quiet: bool,
}

impl Config {
    pub const DEFAULT_GENERATIONS: u64 = 10;
    pub const DEFAULT_DELAY_MS: u64 = 1000;
    pub const DEFAULT_MIN_X: i64 = 0;
    pub const DEFAULT_MAX_X: i64 = 5;
    pub const DEFAULT_MIN_Y: i64 = 0;
    pub const DEFAULT_MAX_Y: i64 = 5;
    /// Longest side of a viewport fitted around a pattern.
    pub const MAX_VIEWPORT_SIDE: u64 = 1 << 10;
    /// Most cells a single frame may draw.
    pub const MAX_VIEWPORT_CELLS: u64 = Self::MAX_VIEWPORT_SIDE * Self::MAX_VIEWPORT_SIDE;

    pub fn engine(&self) -> Box<dyn Engine> {
        match self.threads {
            0 => Box::new(SequentialEngine),
            n => Box::new(ThreadedEngine::new(n)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generations: Self::DEFAULT_GENERATIONS,
            delay: Duration::from_millis(Self::DEFAULT_DELAY_MS),
            viewport: ViewportMode::Fixed(Viewport::default()),
            glyphs: Glyphs::default(),
            order: CellOrder::Sorted,
            threads: 0,
            quiet: false,
        }
    }
}
