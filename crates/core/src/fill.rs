//! Region fill - 4-connected flood fill
//!
//! Iterative: an explicit work stack replaces recursion so the fill depth never
//! depends on region size. A visited set keyed by flat index guarantees every
//! cell is painted at most once and grows with the region, not with the grid.
//!
//! The seed color is read once, before any cell is painted. Neighbors are compared
//! against that captured value, never against the cell currently under the cursor,
//! so a fill whose color equals the seed color still terminates and changes nothing.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Color, Coord};

impl Grid {
    /// Flood fill the region containing (x, y) with `color`
    ///
    /// Returns the number of cells painted; 0 when the seed is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_draw_core::Grid;
    /// use grid_draw_core::types::Color;
    ///
    /// let mut grid = Grid::new(4, 3).unwrap();
    /// grid.draw_horizontal_line(1, 4, 2, Color::new('C'));
    /// let painted = grid.fill_region(1, 1, Color::new('A'));
    ///
    /// assert_eq!(painted, 8);
    /// assert_eq!(grid.serialize(), "AAAA\nCCCC\nAAAA");
    /// ```
    pub fn fill_region(&mut self, x: Coord, y: Coord, color: Color) -> usize {
        let Some(seed) = self.index(x, y) else {
            return 0;
        };

        let seed_color = self.cells()[seed];
        let mut visited = HashSet::from([seed]);
        let mut stack = vec![seed];
        let mut painted = 0;

        while let Some(idx) = stack.pop() {
            self.paint(idx, color);
            painted += 1;

            for next in self.neighbors(idx) {
                if self.cells()[next] == seed_color && visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        painted
    }

    /// In-bounds orthogonal neighbors of a flat index (right, left, down, up)
    fn neighbors(&self, idx: usize) -> ArrayVec<usize, 4> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let (col, row) = (idx % width, idx / width);
        let mut out = ArrayVec::new();

        if col + 1 < width {
            out.push(idx + 1);
        }
        if col > 0 {
            out.push(idx - 1);
        }
        if row + 1 < height {
            out.push(idx + width);
        }
        if row > 0 {
            out.push(idx - width);
        }
        out
    }
}
