use crate::error::MazeError;
use crate::maze::cell::{Cell, Side};
use crate::render::{CellBounds, Point};

/// Rectangular ownership container of cells, column-major: the cell at
/// (column, row) lives at `column * num_rows + row` in flat storage.
///
/// The grid also owns the geometry (origin offset, per-cell size) used
/// to map a cell to drawable coordinates. Geometry never affects
/// algorithmic correctness.
pub struct Grid {
    cells: Box<[Cell]>,
    num_columns: u16,
    num_rows: u16,
    origin: Point,
    cell_width: f64,
    cell_height: f64,
}

impl Grid {
    /// Allocates `num_columns x num_rows` cells, all walls intact, all
    /// unvisited. Fails if either dimension is zero; no partial grid is
    /// produced.
    pub fn build(
        origin: Point,
        num_columns: u16,
        num_rows: u16,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self, MazeError> {
        if num_columns < 1 || num_rows < 1 {
            return Err(MazeError::InvalidDimensions {
                num_columns,
                num_rows,
            });
        }
        let cells =
            vec![Cell::default(); num_columns as usize * num_rows as usize].into_boxed_slice();
        Ok(Grid {
            cells,
            num_columns,
            num_rows,
            origin,
            cell_width,
            cell_height,
        })
    }

    pub fn num_columns(&self) -> u16 {
        self.num_columns
    }

    pub fn num_rows(&self) -> u16 {
        self.num_rows
    }

    fn ravel_index(&self, column: u16, row: u16) -> usize {
        // Overflow-safe since both indices are u16 (assuming usize is at least 32 bits)
        column as usize * self.num_rows as usize + row as usize
    }

    /// The coordinate one step across the given side, or `None` at the
    /// grid boundary.
    pub fn neighbor(&self, coord: (u16, u16), side: Side) -> Option<(u16, u16)> {
        let (column, row) = coord;
        let (column, row) = match side {
            Side::Left => (column.checked_sub(1)?, row),
            Side::Right => (column.saturating_add(1), row),
            Side::Top => (column, row.checked_sub(1)?),
            Side::Bottom => (column, row.saturating_add(1)),
        };
        (column < self.num_columns && row < self.num_rows).then_some((column, row))
    }

    /// Opens the passage on the given side of a cell. When an adjacent
    /// cell shares that edge, its matching flag is cleared in the same
    /// operation, so a shared wall is never half-removed. At the grid
    /// boundary only the one flag exists.
    pub fn remove_wall(&mut self, coord: (u16, u16), side: Side) {
        self[coord].set_wall(side, false);
        if let Some(neighbor) = self.neighbor(coord, side) {
            self[neighbor].set_wall(side.opposite(), false);
        }
    }

    /// A move between `coord` and its neighbor across `side` is legal
    /// only if no wall blocks that shared edge.
    pub fn is_open(&self, coord: (u16, u16), side: Side) -> bool {
        !self[coord].has_wall(side)
    }

    /// Clears the top wall of the top-left cell and the bottom wall of
    /// the bottom-right cell. This is the only entrance/exit
    /// configuration supported.
    pub fn open_entrance_and_exit(&mut self) {
        self.remove_wall((0, 0), Side::Top);
        self.remove_wall((self.num_columns - 1, self.num_rows - 1), Side::Bottom);
    }

    /// Drawable rectangle of a cell, from the grid origin and cell size.
    pub fn bounds(&self, coord: (u16, u16)) -> CellBounds {
        let (column, row) = coord;
        let x1 = self.origin.x + column as f64 * self.cell_width;
        let y1 = self.origin.y + row as f64 * self.cell_height;
        CellBounds {
            x1,
            y1,
            x2: x1 + self.cell_width,
            y2: y1 + self.cell_height,
        }
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.cells[idx]
    }
}
