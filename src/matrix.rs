//! Square boolean module grids.
//!
//! The same type holds the encoder's module matrix and the larger disc grid
//! the compositor builds around it.

use crate::errors::{QrSolidError, Result};
use std::fmt;
use std::str::FromStr;

/// Glyph for a set cell in [`BitMatrix::render`].
pub const SET_GLYPH: char = 'x';
/// Glyph for an unset cell in [`BitMatrix::render`].
pub const UNSET_GLYPH: char = '.';

/// A `size × size` grid of modules addressed as `(x, y)`.
///
/// `x` is the first index of the rows the matrix was built from, `y` the
/// second; a module at `(x, y)` is printed as a cube centered at `(x, y, 0)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    size: usize,
    cells: Vec<bool>,
}

/// The disc layout grid. Built by [`crate::disc`], read by [`crate::emitter`].
pub type Grid = BitMatrix;

impl BitMatrix {
    /// An all-unset matrix. `size` must be non-zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(QrSolidError::InvalidInput("module matrix is empty".to_string()));
        }
        Ok(Self { size, cells: vec![false; size * size] })
    }

    /// Build from nested rows, `rows[x][y]` becoming cell `(x, y)`.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut matrix = Self::new(size)?;
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(QrSolidError::InvalidInput(format!(
                    "module matrix is not square: row {x} has {} cells, expected {size}",
                    row.len()
                )));
            }
            for (y, &bit) in row.iter().enumerate() {
                matrix.put(x, y, bit);
            }
        }
        Ok(matrix)
    }

    /// Build from `0`/`1` integers, the shape most QR encoders hand out.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let rows: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|&b| b != 0).collect())
            .collect();
        Self::from_rows(&rows)
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size, "({x}, {y}) outside {0}x{0}", self.size);
        x * self.size + y
    }

    /// Cell `(x, y)`; `false` for coordinates outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[self.index(x, y)]
    }

    /// Set cell `(x, y)`. Coordinates outside the grid are rejected.
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        if x >= self.size || y >= self.size {
            return Err(QrSolidError::InvalidInput(format!(
                "cell ({x}, {y}) is outside the {0}x{0} grid",
                self.size
            )));
        }
        self.put(x, y, value);
        Ok(())
    }

    /// Unchecked write for callers that already clipped their range.
    #[inline]
    fn put(&mut self, x: usize, y: usize, value: bool) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }

    /// Set every cell with `x` in `xs` and `y` in `ys` to `value`.
    ///
    /// Ranges are clipped to the grid.
    pub fn fill_rect(&mut self, xs: std::ops::Range<usize>, ys: std::ops::Range<usize>, value: bool) {
        let xs = xs.start.min(self.size)..xs.end.min(self.size);
        let ys = ys.start.min(self.size)..ys.end.min(self.size);
        for x in xs {
            for y in ys.clone() {
                self.put(x, y, value);
            }
        }
    }

    /// Copy every cell of `other` to `(x0 + i, y0 + j)`.
    ///
    /// Fails if `other` does not fit.
    pub fn overlay(&mut self, other: &BitMatrix, x0: usize, y0: usize) -> Result<()> {
        if x0 + other.size > self.size || y0 + other.size > self.size {
            return Err(QrSolidError::InvalidInput(format!(
                "{0}x{0} matrix does not fit at ({x0}, {y0}) in a {1}x{1} grid",
                other.size, self.size
            )));
        }
        for i in 0..other.size {
            for j in 0..other.size {
                self.put(x0 + i, y0 + j, other.get(i, j));
            }
        }
        Ok(())
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Set cells in emission order: `y` outer, `x` inner.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size).filter(move |&x| self.get(x, y)).map(move |x| (x, y))
        })
    }

    /// Text raster of the grid: one line per `y`, one glyph per `x`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for y in 0..self.size {
            for x in 0..self.size {
                out.push(if self.get(x, y) { SET_GLYPH } else { UNSET_GLYPH });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn parse_glyph(c: char) -> Option<bool> {
    match c {
        '1' | '#' | 'x' | 'X' | '█' => Some(true),
        '0' | '.' | ' ' | '_' => Some(false),
        _ => None,
    }
}

/// Parse a row dump: one text line per matrix row (first index), one glyph per cell.
///
/// `1 # x X █` are set, `0 . space _` unset. Empty lines are skipped.
impl FromStr for BitMatrix {
    type Err = QrSolidError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(col, c)| {
                    parse_glyph(c).ok_or_else(|| {
                        QrSolidError::InvalidInput(format!(
                            "unexpected character {c:?} at line {}, column {}",
                            line_no + 1,
                            col + 1
                        ))
                    })
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}
