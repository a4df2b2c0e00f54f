use crate::{Config, Coordinate, Grid};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViewportError {
    #[error("empty viewport: min_x = {min_x} > max_x = {max_x}")]
    InvertedX { min_x: i64, max_x: i64 },
    #[error("empty viewport: min_y = {min_y} > max_y = {max_y}")]
    InvertedY { min_y: i64, max_y: i64 },
    #[error("viewport {width} x {height} exceeds {} cells", Config::MAX_VIEWPORT_CELLS)]
    TooLarge { width: u128, height: u128 },
}

/// Number of cells in `[min, max]`; at most `2^64`, so it always fits.
fn span(min: i64, max: i64) -> u128 {
    (max as i128 - min as i128) as u128 + 1
}

/// Inclusive rectangle `[min_x, max_x] x [min_y, max_y]` of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
}

impl Viewport {
    pub fn new(min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> Result<Self, ViewportError> {
        if min_x > max_x {
            return Err(ViewportError::InvertedX { min_x, max_x });
        }
        if min_y > max_y {
            return Err(ViewportError::InvertedY { min_y, max_y });
        }
        let (width, height) = (span(min_x, max_x), span(min_y, max_y));
        // 2^64 * 2^64 overflows u128
        match width.checked_mul(height) {
            Some(area) if area <= Config::MAX_VIEWPORT_CELLS as u128 => {}
            _ => return Err(ViewportError::TooLarge { width, height }),
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Bounding box of the live cells, or the origin cell for an empty grid.
    ///
    /// Each side is cut to [`Config::MAX_VIEWPORT_SIDE`] cells, keeping the
    /// minimum corner, so the result always satisfies the area limit.
    pub fn around(grid: &Grid) -> Self {
        let (lo, hi) = grid
            .bounding_box()
            .unwrap_or((Coordinate::new(0, 0), Coordinate::new(0, 0)));
        let clamp = |min: i64, max: i64| {
            let side = span(min, max).min(Config::MAX_VIEWPORT_SIDE as u128);
            // side - 1 <= max - min, so this stays in range
            min + (side - 1) as i64
        };
        Self {
            min_x: lo.x,
            max_x: clamp(lo.x, hi.x),
            min_y: lo.y,
            max_y: clamp(lo.y, hi.y),
        }
    }

    /// Whether the viewport shows every cell of `[lo, hi]`.
    pub fn covers(&self, lo: Coordinate, hi: Coordinate) -> bool {
        self.min_x <= lo.x
            && hi.x <= self.max_x
            && self.min_y <= lo.y
            && hi.y <= self.max_y
    }

    pub fn min(&self) -> Coordinate {
        Coordinate::new(self.min_x, self.min_y)
    }

    pub fn max(&self) -> Coordinate {
        Coordinate::new(self.max_x, self.max_y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            min_x: Config::DEFAULT_MIN_X,
            max_x: Config::DEFAULT_MAX_X,
            min_y: Config::DEFAULT_MIN_Y,
            max_y: Config::DEFAULT_MAX_Y,
        }
    }
}

/// Characters drawn for live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '🟩',
            dead: '🟥',
        }
    }
}

/// Draws the viewport row by row (increasing `y`), each row in increasing `x`
/// and terminated by `'\n'`. Cells outside the viewport are never looked at.
pub fn render(grid: &Grid, viewport: &Viewport, glyphs: &Glyphs) -> String {
    let mut result = String::new();
    // inclusive ranges stop at i64::MAX without overflowing
    for y in viewport.min_y..=viewport.max_y {
        for x in viewport.min_x..=viewport.max_x {
            result.push(if grid.is_alive(x, y) {
                glyphs.alive
            } else {
                glyphs.dead
            });
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASCII: Glyphs = Glyphs {
        alive: '#',
        dead: '.',
    };

    #[test]
    fn test_render_glider() {
        let grid: Grid = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)].into_iter().collect();
        let viewport = Viewport::new(0, 3, 0, 2).unwrap();
        assert_eq!(render(&grid, &viewport, &ASCII), "..#.\n#.#.\n.##.\n");
    }

    #[test]
    fn test_render_ignores_outside() {
        let grid: Grid = [(-1, 0), (5, 5), (1, 1)].into_iter().collect();
        let viewport = Viewport::new(0, 1, 0, 1).unwrap();
        assert_eq!(render(&grid, &viewport, &ASCII), "..\n.#\n");
    }

    #[test]
    fn test_default_glyphs() {
        let grid: Grid = [(0, 0)].into_iter().collect();
        let viewport = Viewport::new(0, 1, 0, 0).unwrap();
        assert_eq!(render(&grid, &viewport, &Glyphs::default()), "🟩🟥\n");
    }

    #[test]
    fn test_viewport_at_range_limit() {
        let grid: Grid = [(i64::MAX, i64::MAX)].into_iter().collect();
        let viewport = Viewport::new(i64::MAX - 1, i64::MAX, i64::MAX, i64::MAX).unwrap();
        assert_eq!(render(&grid, &viewport, &ASCII), ".#\n");
    }

    #[test]
    fn test_inverted_viewport() {
        assert_eq!(
            Viewport::new(3, 2, 0, 0),
            Err(ViewportError::InvertedX { min_x: 3, max_x: 2 })
        );
        assert_eq!(
            Viewport::new(0, 0, 1, -1),
            Err(ViewportError::InvertedY { min_y: 1, max_y: -1 })
        );
    }

    #[test]
    fn test_around() {
        let grid: Grid = [(-2, 4), (3, 1)].into_iter().collect();
        let viewport = Viewport::around(&grid);
        assert_eq!(viewport.min(), Coordinate::new(-2, 1));
        assert_eq!(viewport.max(), Coordinate::new(3, 4));
        assert_eq!(Viewport::around(&Grid::new()).min(), Coordinate::new(0, 0));
    }

    #[test]
    fn test_too_large_viewport() {
        let side = Config::MAX_VIEWPORT_SIDE as i64;
        assert!(Viewport::new(0, side - 1, 0, side - 1).is_ok());
        assert_eq!(
            Viewport::new(0, side, 0, side - 1),
            Err(ViewportError::TooLarge {
                width: side as u128 + 1,
                height: side as u128
            })
        );
        // a single row may be long as long as the area fits
        assert!(Viewport::new(0, Config::MAX_VIEWPORT_CELLS as i64 - 1, 7, 7).is_ok());
        assert_eq!(
            Viewport::new(i64::MIN, i64::MAX, i64::MIN, i64::MAX),
            Err(ViewportError::TooLarge {
                width: 1 << 64,
                height: 1 << 64
            })
        );
    }

    #[test]
    fn test_around_far_apart_cells_is_clamped() {
        let grid: Grid = [(0, 0), (1 << 40, 0), (i64::MIN, i64::MIN), (i64::MAX, i64::MAX)]
            .into_iter()
            .collect();
        let viewport = Viewport::around(&grid);
        let side = Config::MAX_VIEWPORT_SIDE as i64;
        assert_eq!(viewport.min(), Coordinate::new(i64::MIN, i64::MIN));
        assert_eq!(
            viewport.max(),
            Coordinate::new(i64::MIN + side - 1, i64::MIN + side - 1)
        );
        let (lo, hi) = grid.bounding_box().unwrap();
        assert!(!viewport.covers(lo, hi));
        let text = render(&grid, &viewport, &ASCII);
        assert_eq!(text.lines().count(), side as usize);
        assert!(text.starts_with('#'));

        let grid: Grid = [(0, 0), (1 << 40, 0)].into_iter().collect();
        let viewport = Viewport::around(&grid);
        assert_eq!(viewport.max(), Coordinate::new(side - 1, 0));
    }
}
