//! Reader and writer for the [Life 1.06](https://conwaylife.com/wiki/Life_1.06) format.
//!
//! ```text
//! #Life 1.06
//! 0 -1
//! 1 0
//! -1 1
//! ```
//!
//! The first line is the literal header, each following non-blank line holds
//! the `x y` coordinates of one live cell.

use crate::Grid;
use std::io::{BufRead, Write};
use std::num::ParseIntError;
use thiserror::Error;

pub const LIFE106_HEADER: &str = "#Life 1.06";

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid format: expected '#Life 1.06', got '{found}'")]
    InvalidHeader { found: String },

    #[error("line {line}: expected two coordinates, got '{content}'")]
    MalformedCoordinateLine { line: usize, content: String },

    #[error("line {line}: invalid coordinate '{token}'")]
    InvalidInteger {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Order of the coordinate lines written by [`write_life106`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellOrder {
    /// Ascending by `x`, then `y`. Reproducible output.
    #[default]
    Sorted,
    /// Hash iteration order of the grid; changes from run to run.
    Unordered,
}

/// Parses a whole Life 1.06 document.
///
/// Either the complete grid is returned or the first error; nothing partial.
pub fn read_life106<R: BufRead>(reader: R) -> Result<Grid, CodecError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(CodecError::EmptyInput)??;
    let header = header.strip_suffix('\r').unwrap_or(&header);
    if header != LIFE106_HEADER {
        return Err(CodecError::InvalidHeader {
            found: header.to_string(),
        });
    }

    let mut grid = Grid::new();
    // header is line 1
    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let line = line?;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }

        let tokens = content.split_ascii_whitespace().collect::<Vec<_>>();
        let [x, y] = tokens.as_slice() else {
            return Err(CodecError::MalformedCoordinateLine {
                line: line_no,
                content: content.to_string(),
            });
        };
        grid.set(parse_coordinate(x, line_no)?, parse_coordinate(y, line_no)?);
    }
    Ok(grid)
}

/// Same as [`read_life106`] for in-memory text.
pub fn parse_life106(data: &str) -> Result<Grid, CodecError> {
    read_life106(data.as_bytes())
}

fn parse_coordinate(token: &str, line: usize) -> Result<i64, CodecError> {
    token
        .parse::<i64>()
        .map_err(|source| CodecError::InvalidInteger {
            line,
            token: token.to_string(),
            source,
        })
}

/// Writes the header followed by one `x y` line per live cell.
pub fn write_life106<W: Write>(
    mut writer: W,
    grid: &Grid,
    order: CellOrder,
) -> Result<(), CodecError> {
    writeln!(writer, "{LIFE106_HEADER}")?;
    match order {
        CellOrder::Sorted => {
            for cell in grid.sorted_cells() {
                writeln!(writer, "{cell}")?;
            }
        }
        CellOrder::Unordered => {
            for cell in grid.iter() {
                writeln!(writer, "{cell}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn to_life106_string(grid: &Grid, order: CellOrder) -> String {
    let mut buf = Vec::with_capacity(LIFE106_HEADER.len() + 1 + grid.population() * 8);
    write_life106(&mut buf, grid, order).expect("writing into a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;
    use proptest::prelude::*;

    const GLIDER: &str = "#Life 1.06\n0 1\n1 2\n2 0\n2 1\n2 2";

    #[test]
    fn test_read_glider() {
        let grid = parse_life106(GLIDER).unwrap();
        assert_eq!(grid.population(), 5);
        for (x, y) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert!(grid.is_alive(x, y), "({}, {}) should be alive", x, y);
        }
    }

    #[test]
    fn test_header_only() {
        let grid = parse_life106("#Life 1.06\n").unwrap();
        assert!(grid.is_empty());
        let grid = parse_life106("#Life 1.06").unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_life106(""), Err(CodecError::EmptyInput)));
    }

    #[test]
    fn test_invalid_header() {
        for data in [
            "#Life 1.05\n0 0",
            "0 0\n1 1",
            "\n#Life 1.06",
            "#Life 1.06 \n",
            "#life 1.06",
        ] {
            match parse_life106(data) {
                Err(CodecError::InvalidHeader { .. }) => {}
                other => panic!("{:?} -> {:?}", data, other),
            }
        }
    }

    #[test]
    fn test_header_checked_before_coordinates() {
        let err = parse_life106("#Life 1.2\nnot numbers at all").unwrap_err();
        assert!(matches!(err, CodecError::InvalidHeader { ref found } if found == "#Life 1.2"));
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let grid = parse_life106("#Life 1.06\r\n\r\n  3   -4  \r\n\n-1\t2\n").unwrap();
        assert_eq!(grid.sorted_cells(), [Coordinate::new(-1, 2), Coordinate::new(3, -4)]);
    }

    #[test]
    fn test_malformed_line() {
        for (data, line) in [("#Life 1.06\n0 0\n1\n", 3), ("#Life 1.06\n\n1 2 3", 3)] {
            match parse_life106(data) {
                Err(CodecError::MalformedCoordinateLine { line: l, .. }) => assert_eq!(l, line),
                other => panic!("{:?} -> {:?}", data, other),
            }
        }
    }

    #[test]
    fn test_invalid_integer() {
        let err = parse_life106("#Life 1.06\n0 0\n1 x2\n").unwrap_err();
        match err {
            CodecError::InvalidInteger { line, token, .. } => {
                assert_eq!(line, 3);
                assert_eq!(token, "x2");
            }
            other => panic!("{:?}", other),
        }
        // one past i64::MAX
        let err = parse_life106("#Life 1.06\n9223372036854775808 0").unwrap_err();
        assert!(matches!(err, CodecError::InvalidInteger { line: 2, .. }));
    }

    #[test]
    fn test_extreme_values() {
        let data = format!("#Life 1.06\n{} {}\n", i64::MIN, i64::MAX);
        let grid = parse_life106(&data).unwrap();
        assert!(grid.is_alive(i64::MIN, i64::MAX));
        assert_eq!(to_life106_string(&grid, CellOrder::Sorted), data);
    }

    #[test]
    fn test_write_sorted() {
        let grid: Grid = [(2, 1), (-3, 5), (2, -1), (0, 0)].into_iter().collect();
        assert_eq!(
            to_life106_string(&grid, CellOrder::Sorted),
            "#Life 1.06\n-3 5\n0 0\n2 -1\n2 1\n"
        );
    }

    #[test]
    fn test_write_unordered_has_same_cells() {
        let grid = Grid::random(16, 0.5, Some(7));
        let text = to_life106_string(&grid, CellOrder::Unordered);
        assert!(text.starts_with("#Life 1.06\n"));
        assert_eq!(text.lines().count(), grid.population() + 1);
        assert_eq!(parse_life106(&text).unwrap(), grid);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_reported() {
        let grid: Grid = [(1, 1)].into_iter().collect();
        let err = write_life106(BrokenPipe, &grid, CellOrder::Sorted).unwrap_err();
        match err {
            CodecError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(to_life106_string(&Grid::new(), CellOrder::Sorted), "#Life 1.06\n");
    }

    proptest! {
        #[test]
        fn prop_write_then_read_keeps_cells(
            cells in proptest::collection::vec(any::<(i64, i64)>(), 0..64),
        ) {
            let grid: Grid = cells.iter().copied().collect();
            let text = to_life106_string(&grid, CellOrder::Sorted);
            prop_assert_eq!(parse_life106(&text).unwrap(), grid);
        }
    }
}
