use crate::maze::cell::Side;
use crate::maze::grid::Grid;
use crate::render::Renderer;

#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: (u16, u16),
    /// Index into `Side::ALL` of the next direction to try.
    next_side: usize,
}

/// Finds a path of open passages from (0, 0) to the bottom-right cell,
/// reporting whether one exists.
///
/// Depth-first with backtracking over an explicit frame stack: each
/// frame remembers how many directions it has already tried, so
/// returning from a failed branch resumes the scan where it left off
/// (direction order: left, right, up, down). Entering a neighbor emits
/// a forward move; popping a dead end emits a backtrack move to the
/// parent. Works on arbitrary wall configurations, not just generated
/// mazes: a grid with no path simply exhausts the stack.
pub fn solve_dfs(grid: &mut Grid, renderer: &mut dyn Renderer) -> std::io::Result<bool> {
    let start = (0, 0);
    let goal = (grid.num_columns() - 1, grid.num_rows() - 1);

    grid[start].traversed = true;
    if start == goal {
        return Ok(true);
    }

    let mut frames = vec![Frame {
        cell: start,
        next_side: 0,
    }];

    while let Some(top) = frames.last().copied() {
        let mut next_side = top.next_side;
        let mut step = None;
        while next_side < Side::ALL.len() {
            let side = Side::ALL[next_side];
            next_side += 1;
            if let Some(neighbor) = grid.neighbor(top.cell, side) {
                if grid.is_open(top.cell, side) && !grid[neighbor].traversed {
                    step = Some(neighbor);
                    break;
                }
            }
        }
        if let Some(frame) = frames.last_mut() {
            frame.next_side = next_side;
        }

        match step {
            Some(neighbor) => {
                renderer.draw_move(
                    grid.bounds(top.cell).center(),
                    grid.bounds(neighbor).center(),
                    false,
                )?;
                renderer.refresh()?;

                grid[neighbor].traversed = true;
                if neighbor == goal {
                    return Ok(true);
                }
                frames.push(Frame {
                    cell: neighbor,
                    next_side: 0,
                });
            }
            None => {
                // Dead end: undo the move that led here
                frames.pop();
                if let Some(parent) = frames.last() {
                    renderer.draw_move(
                        grid.bounds(top.cell).center(),
                        grid.bounds(parent.cell).center(),
                        true,
                    )?;
                    renderer.refresh()?;
                }
            }
        }
    }
    Ok(false)
}
