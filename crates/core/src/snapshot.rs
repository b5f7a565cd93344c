use serde::{Deserialize, Serialize};

use crate::grid::{Grid, GridError};

/// Owned copy of a grid, one string per row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<String>,
}

impl GridSnapshot {
    /// Rebuild the grid this snapshot was taken from
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        let rows: Vec<&str> = self.rows.iter().map(String::as_str).collect();
        Grid::from_rows(&rows)
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(value: &Grid) -> Self {
        value.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn snapshot_json_shape() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.draw_pixel(2, 1, Color::new('C'));

        let v = serde_json::to_value(grid.snapshot()).unwrap();
        assert_eq!(v["width"], 3);
        assert_eq!(v["height"], 2);
        assert_eq!(v["rows"][0], "OCO");
        assert_eq!(v["rows"][1], "OOO");
    }

    #[test]
    fn snapshot_rebuilds_grid() {
        let grid = Grid::from_rows(&["AB", "CD", "EF"]).unwrap();
        let snap = GridSnapshot::from(&grid);
        assert_eq!(snap.cell_count(), 6);
        assert_eq!(snap.to_grid().unwrap(), grid);
    }
}
