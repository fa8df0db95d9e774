pub mod cell;
pub mod grid;

pub use cell::{Cell, Side};
pub use grid::Grid;

use crate::error::MazeError;
use crate::generator::carve_passages;
use crate::render::{Point, Renderer};
use crate::solver::solve_dfs;

/// A maze: one grid, an optional seed, and the renderer the generation
/// and solving phases report to. The two phases run strictly in
/// sequence; `generate` must complete before `solve` is meaningful.
pub struct Maze {
    grid: Grid,
    seed: Option<u64>,
    renderer: Box<dyn Renderer>,
}

impl Maze {
    /// Builds a fully-walled maze. Fails with
    /// [`MazeError::InvalidDimensions`] when either dimension is zero.
    pub fn new(
        origin: Point,
        num_columns: u16,
        num_rows: u16,
        cell_width: f64,
        cell_height: f64,
        renderer: Box<dyn Renderer>,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        let grid = Grid::build(origin, num_columns, num_rows, cell_width, cell_height)?;
        Ok(Maze {
            grid,
            seed,
            renderer,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Draws every wall still present, one cell at a time.
    fn draw_all_walls(&mut self) -> std::io::Result<()> {
        for column in 0..self.grid.num_columns() {
            for row in 0..self.grid.num_rows() {
                let bounds = self.grid.bounds((column, row));
                for side in Side::ALL {
                    if self.grid[(column, row)].has_wall(side) {
                        self.renderer.draw_wall(bounds, side, true)?;
                    }
                }
                self.renderer.refresh()?;
            }
        }
        Ok(())
    }

    /// Opens the entrance and exit, then carves a perfect maze. The same
    /// seed reproduces the same maze.
    pub fn generate(&mut self) -> std::io::Result<()> {
        self.draw_all_walls()?;

        self.grid.open_entrance_and_exit();
        let exit = (self.grid.num_columns() - 1, self.grid.num_rows() - 1);
        self.renderer
            .draw_wall(self.grid.bounds((0, 0)), Side::Top, false)?;
        self.renderer
            .draw_wall(self.grid.bounds(exit), Side::Bottom, false)?;
        self.renderer.refresh()?;

        carve_passages(&mut self.grid, self.renderer.as_mut(), self.seed)?;
        tracing::info!(
            num_columns = self.grid.num_columns(),
            num_rows = self.grid.num_rows(),
            seed = ?self.seed,
            "maze generated"
        );
        Ok(())
    }

    /// Runs the solver from entrance to exit. True iff a path was found;
    /// an unsolvable configuration is a normal outcome, not an error.
    pub fn solve(&mut self) -> std::io::Result<bool> {
        let found = solve_dfs(&mut self.grid, self.renderer.as_mut())?;
        tracing::info!(found, "solve finished");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NoopRenderer;

    fn maze(num_columns: u16, num_rows: u16, seed: u64) -> Maze {
        Maze::new(
            Point { x: 50.0, y: 50.0 },
            num_columns,
            num_rows,
            43.75,
            41.0 + 2.0 / 3.0,
            Box::new(NoopRenderer),
            Some(seed),
        )
        .expect("valid dimensions")
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        let result = Maze::new(
            Point { x: 0.0, y: 0.0 },
            0,
            12,
            10.0,
            10.0,
            Box::new(NoopRenderer),
            None,
        );
        assert!(matches!(
            result,
            Err(MazeError::InvalidDimensions {
                num_columns: 0,
                num_rows: 12
            })
        ));
    }

    #[test]
    fn generate_then_solve_succeeds() {
        let mut maze = maze(16, 12, 11);
        maze.generate().unwrap();
        assert!(maze.solve().unwrap());
    }

    // Fixed-seed regression fixture: a 2x2 maze generated with seed 1.
    #[test]
    fn two_by_two_seed_one_fixture() {
        let mut maze = maze(2, 2, 1);
        maze.generate().unwrap();

        let grid = maze.grid();
        assert!(!grid[(0, 0)].has_top_wall);
        assert!(!grid[(1, 1)].has_bottom_wall);

        // Spanning tree over 4 cells: exactly 3 open internal wall pairs
        let mut open = 0;
        for coord in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            for side in [Side::Right, Side::Bottom] {
                if grid.neighbor(coord, side).is_some() && grid.is_open(coord, side) {
                    open += 1;
                }
            }
        }
        assert_eq!(open, 3);

        // Same seed, same maze
        let mut again = maze_with_same_walls(2, 2, 1);
        assert_eq!(collect_walls(maze.grid()), collect_walls(again.grid()));
        assert!(again.solve().unwrap());
    }

    fn maze_with_same_walls(num_columns: u16, num_rows: u16, seed: u64) -> Maze {
        let mut m = maze(num_columns, num_rows, seed);
        m.generate().unwrap();
        m
    }

    fn collect_walls(grid: &Grid) -> Vec<[bool; 4]> {
        let mut walls = Vec::new();
        for column in 0..grid.num_columns() {
            for row in 0..grid.num_rows() {
                let cell = grid[(column, row)];
                walls.push([
                    cell.has_left_wall,
                    cell.has_right_wall,
                    cell.has_top_wall,
                    cell.has_bottom_wall,
                ]);
            }
        }
        walls
    }
}
