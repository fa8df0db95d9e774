use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::maze::cell::Side;
use crate::maze::grid::Grid;
use crate::render::Renderer;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves a spanning tree of passages into a fully-walled grid with a
/// randomized depth-first walk starting at (0, 0).
///
/// The top of the stack is the current cell. Each iteration re-collects
/// its still-uncarved in-bounds neighbors (candidate order: left, right,
/// up, down), opens the wall pair to one picked uniformly at random, and
/// descends into it; a cell with no candidates left is a dead end and is
/// popped. Re-collecting after every return lets one cell spawn several
/// branches, which is what makes this a spanning-tree carve rather than
/// a single random walk. The explicit stack keeps depth off the call
/// stack, so a fully serpentine maze of `columns * rows` cells cannot
/// exhaust it.
pub fn carve_passages(
    grid: &mut Grid,
    renderer: &mut dyn Renderer,
    seed: Option<u64>,
) -> std::io::Result<()> {
    let mut rng = get_rng(seed);

    let start = (0, 0);
    grid[start].carved = true;
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let candidates = Side::ALL
            .into_iter()
            .filter(|&side| {
                grid.neighbor(cell, side)
                    .is_some_and(|neighbor| !grid[neighbor].carved)
            })
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            // Dead end: backtrack to the previous cell
            stack.pop();
            continue;
        }

        let side = candidates[rng.random_range(0..candidates.len())];
        if let Some(neighbor) = grid.neighbor(cell, side) {
            grid.remove_wall(cell, side);
            renderer.draw_wall(grid.bounds(cell), side, false)?;
            renderer.draw_wall(grid.bounds(neighbor), side.opposite(), false)?;
            renderer.refresh()?;

            grid[neighbor].carved = true;
            stack.push(neighbor);
        }
    }
    Ok(())
}
