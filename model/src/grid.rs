use std::fmt::Display;

use crate::{coord::Coord, entry::CoordinateEntry};

/// Content of every cell no entry was placed on
pub const EMPTY_CELL: &str = " ";

/// Largest grid [Grid::from_entries] allocates
pub const MAX_CELLS: usize = 1 << 20;

/// Dense, row-major grid of cell tokens.
///
/// The grid is exactly large enough to hold the entries it was built from:
/// `max(x) + 1` columns and `max(y) + 1` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<String>,
}

impl Grid {
    /// Builds a grid from entries in input order, so a later entry replaces
    /// an earlier one on the same cell.
    ///
    /// Returns `None` if there are no entries, or if the grid would have more
    /// than [MAX_CELLS] cells.
    pub fn from_entries(entries: &[CoordinateEntry]) -> Option<Self> {
        let width = entries.iter().map(|entry| entry.x).max()? as usize + 1;
        let height = entries.iter().map(|entry| entry.y).max()? as usize + 1;

        let size = match width.checked_mul(height) {
            Some(size) if size <= MAX_CELLS => size,
            _ => {
                log::debug!("refusing {}x{} grid, limit is {} cells", width, height, MAX_CELLS);
                return None;
            }
        };

        let mut cells = vec![String::from(EMPTY_CELL); size];
        for entry in entries {
            cells[entry.y as usize * width + entry.x as usize].clone_from(&entry.token);
        }

        log::debug!("built {}x{} grid from {} entries", width, height, entries.len());

        Some(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: Coord, y: Coord) -> Option<&str> {
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x].as_str())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.width)
    }
}

impl Display for Grid {
    /// Cells are concatenated without delimiter, rows joined by `\n`, no
    /// trailing newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                f.write_str(cell)?;
            }
        }

        Ok(())
    }
}
