//! Grid module - the drawing canvas
//!
//! The grid is a `width x height` array of single-character color codes.
//! Uses a flat row-major vector so every cell lives in one allocation.
//! Public coordinates are 1-based: (x, y) where x ranges 1..=width (left to right)
//! and y ranges 1..=height (top to bottom). Anything outside is ignored by writers
//! and reported as `None` by readers.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::snapshot::GridSnapshot;
use crate::types::{Color, Coord, DEFAULT_COLOR, MAX_DIMENSION, ROW_SEPARATOR};

/// Errors raised when building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimension {width}x{height} (each side must be in 1..={})", MAX_DIMENSION)]
    InvalidDimension { width: i64, height: i64 },

    #[error("fixture rows must all be {expected} characters wide, row {row} has {found}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The drawing grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Flat array of cells, row-major order ((y - 1) * width + (x - 1))
    cells: Vec<Color>,
}

impl Grid {
    /// Create a grid filled with [`DEFAULT_COLOR`]
    ///
    /// Fails with [`GridError::InvalidDimension`] unless both sides are in
    /// `1..=MAX_DIMENSION`.
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        let side = |v: i64| u32::try_from(v).ok().filter(|v| (1..=MAX_DIMENSION).contains(v));
        match (side(width), side(height)) {
            (Some(w), Some(h)) => Ok(Self {
                width: w,
                height: h,
                cells: vec![DEFAULT_COLOR; (w as usize) * (h as usize)],
            }),
            _ => Err(GridError::InvalidDimension { width, height }),
        }
    }

    /// Build a grid from textual rows, one character per cell
    ///
    /// Handy for fixtures: `Grid::from_rows(&["OOC", "OCO"])`.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len() as i64;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut grid = Self::new(width as i64, height)?;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRows {
                    row: y + 1,
                    expected: width,
                    found,
                });
            }
            let start = y * width;
            for (cell, c) in grid.cells[start..start + width].iter_mut().zip(row.chars()) {
                *cell = Color::new(c);
            }
        }

        Ok(grid)
    }

    /// Calculate flat index from 1-based (x, y) coordinates
    #[inline(always)]
    pub(crate) fn index(&self, x: Coord, y: Coord) -> Option<usize> {
        if x < 1 || x > self.width as Coord || y < 1 || y > self.height as Coord {
            return None;
        }
        Some(((y - 1) as usize) * (self.width as usize) + ((x - 1) as usize))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get_at(&self, x: Coord, y: Coord) -> Option<Color> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false (and changes nothing) if out of bounds
    pub fn set_at(&mut self, x: Coord, y: Coord, color: Color) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    pub(crate) fn paint(&mut self, idx: usize, color: Color) {
        self.cells[idx] = color;
    }

    pub fn draw_pixel(&mut self, x: Coord, y: Coord, color: Color) {
        self.set_at(x, y, color);
    }

    /// Color column `x` from `y0` to `y1` inclusive; nothing when `y1 < y0`
    pub fn draw_vertical_line(&mut self, x: Coord, y0: Coord, y1: Coord, color: Color) {
        if x < 1 || x > self.width as Coord {
            return;
        }
        for y in clip(y0, y1, self.height) {
            self.set_at(x, y, color);
        }
    }

    /// Color row `y` from `x0` to `x1` inclusive; nothing when `x1 < x0`
    pub fn draw_horizontal_line(&mut self, x0: Coord, x1: Coord, y: Coord, color: Color) {
        if y < 1 || y > self.height as Coord {
            return;
        }
        for x in clip(x0, x1, self.width) {
            self.set_at(x, y, color);
        }
    }

    /// Fill the inclusive box (x0, y0)-(x1, y1)
    ///
    /// Skipped entirely when `x1 < x0` or `y1 < y0`. Parts outside the grid are
    /// clipped away.
    pub fn draw_rectangle(&mut self, x0: Coord, y0: Coord, x1: Coord, y1: Coord, color: Color) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        for y in clip(y0, y1, self.height) {
            for x in clip(x0, x1, self.width) {
                self.set_at(x, y, color);
            }
        }
    }

    /// Reset every cell to [`DEFAULT_COLOR`]
    pub fn clear(&mut self) {
        self.draw_rectangle(
            1,
            1,
            self.width as Coord,
            self.height as Coord,
            DEFAULT_COLOR,
        );
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Cells of row `y` (1-based), or None if out of bounds
    pub fn row(&self, y: Coord) -> Option<&[Color]> {
        let start = self.index(1, y)?;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Textual form: one line per row, no separator between cells and no trailing newline
    pub fn serialize(&self) -> String {
        let width = self.width as usize;
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for (i, row) in self.cells.chunks(width).enumerate() {
            if i > 0 {
                out.push(ROW_SEPARATOR);
            }
            out.extend(row.iter().map(|c| c.as_char()));
        }
        out
    }

    /// Write [`Grid::serialize`] to `path`, creating or truncating the file
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.serialize())
    }

    /// Owned, serializable copy of the grid contents
    pub fn snapshot(&self) -> GridSnapshot {
        let width = self.width as usize;
        GridSnapshot {
            width: self.width,
            height: self.height,
            rows: self
                .cells
                .chunks(width)
                .map(|row| row.iter().map(|c| c.as_char()).collect())
                .collect(),
        }
    }

    /// Stable 64-bit FNV-1a hash of dimensions and cell contents.
    ///
    /// `DefaultHasher` is not used since its output may change across Rust releases.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut state = OFFSET_BASIS;
        let mut feed = |bytes: &[u8]| {
            for &b in bytes {
                state ^= b as u64;
                state = state.wrapping_mul(PRIME);
            }
        };

        feed(&self.width.to_le_bytes());
        feed(&self.height.to_le_bytes());
        let mut buf = [0u8; 4];
        for cell in &self.cells {
            feed(cell.as_char().encode_utf8(&mut buf).as_bytes());
        }
        state
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Intersect the inclusive range `lo..=hi` with `1..=limit`
fn clip(lo: Coord, hi: Coord, limit: u32) -> std::ops::RangeInclusive<Coord> {
    lo.max(1)..=hi.min(limit as Coord)
}
