//! Conway's Game of Life on the unbounded `i64 x i64` plane.
//!
//! A [`Grid`] stores only live cells. An [`Engine`] advances it one
//! generation at a time by looking at live cells and their neighbors only,
//! so patterns may sit anywhere on the plane, even next to the range limits.
//! Grids are exchanged as Life 1.06 text (see [`read_life106`], [`write_life106`]).

#![warn(clippy::all)]

mod engine;
mod grid;
mod utils;

pub use engine::{survives, Engine, SequentialEngine, ThreadedEngine};
pub use grid::{Coordinate, Grid};
pub use utils::{
    parse_life106, read_life106, render, to_life106_string, write_life106, CellOrder, CodecError,
    Config, GenerationPacer, Glyphs, NiceInt, Viewport, ViewportError, ViewportMode,
    LIFE106_HEADER,
};
