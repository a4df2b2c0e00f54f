mod config;
mod format_int;
mod life106;
mod pacer;
mod render;

pub use config::{Config, ViewportMode};
pub use format_int::NiceInt;
pub use life106::{
    parse_life106, read_life106, to_life106_string, write_life106, CellOrder, CodecError,
    LIFE106_HEADER,
};
pub use pacer::GenerationPacer;
pub use render::{render, Glyphs, Viewport, ViewportError};
