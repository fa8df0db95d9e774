use mazer::MazeError;
use mazer::maze::{Grid, Maze, Side};
use mazer::render::{NoopRenderer, Point};

fn generated(num_columns: u16, num_rows: u16, seed: u64) -> Maze {
    let mut maze = Maze::new(
        Point { x: 50.0, y: 50.0 },
        num_columns,
        num_rows,
        43.75,
        125.0 / 3.0,
        Box::new(NoopRenderer),
        Some(seed),
    )
    .expect("valid dimensions");
    maze.generate().expect("noop renderer cannot fail");
    maze
}

fn wall_state(grid: &Grid) -> Vec<[bool; 4]> {
    let mut state = Vec::new();
    for column in 0..grid.num_columns() {
        for row in 0..grid.num_rows() {
            let cell = grid[(column, row)];
            state.push([
                cell.has_left_wall,
                cell.has_right_wall,
                cell.has_top_wall,
                cell.has_bottom_wall,
            ]);
        }
    }
    state
}

/// Open internal wall pairs, each shared edge counted once.
fn open_internal_walls(grid: &Grid) -> usize {
    let mut open = 0;
    for column in 0..grid.num_columns() {
        for row in 0..grid.num_rows() {
            for side in [Side::Right, Side::Bottom] {
                if grid.neighbor((column, row), side).is_some() && grid.is_open((column, row), side)
                {
                    open += 1;
                }
            }
        }
    }
    open
}

fn cells_reachable_from_origin(grid: &Grid) -> usize {
    let total = grid.num_columns() as usize * grid.num_rows() as usize;
    let index = |(c, r): (u16, u16)| c as usize * grid.num_rows() as usize + r as usize;
    let mut seen = vec![false; total];
    seen[0] = true;
    let mut queue = std::collections::VecDeque::from([(0u16, 0u16)]);
    while let Some(cell) = queue.pop_front() {
        for side in Side::ALL {
            if let Some(neighbor) = grid.neighbor(cell, side) {
                if grid.is_open(cell, side) && !seen[index(neighbor)] {
                    seen[index(neighbor)] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    seen.iter().filter(|&&s| s).count()
}

#[test]
fn generation_is_deterministic_per_seed() {
    for seed in [0, 1, 11, u64::MAX] {
        let first = generated(16, 12, seed);
        let second = generated(16, 12, seed);
        assert_eq!(
            wall_state(first.grid()),
            wall_state(second.grid()),
            "seed {seed} was not reproducible"
        );
    }
}

#[test]
fn generated_mazes_are_perfect() {
    for (num_columns, num_rows, seed) in [(2, 2, 1), (16, 12, 11), (9, 4, 99), (1, 7, 5)] {
        let maze = generated(num_columns, num_rows, seed);
        let nodes = num_columns as usize * num_rows as usize;
        // Spanning tree: nodes - 1 open shared edges, all cells
        // reachable. Connected with that edge count implies acyclic.
        assert_eq!(open_internal_walls(maze.grid()), nodes - 1);
        assert_eq!(cells_reachable_from_origin(maze.grid()), nodes);
    }
}

#[test]
fn entrance_and_exit_are_always_open() {
    for (num_columns, num_rows, seed) in [(1, 1, 0), (2, 2, 7), (16, 12, 3), (5, 20, 8)] {
        let maze = generated(num_columns, num_rows, seed);
        let grid = maze.grid();
        assert!(!grid[(0, 0)].has_top_wall);
        assert!(!grid[(num_columns - 1, num_rows - 1)].has_bottom_wall);
    }
}

#[test]
fn every_generated_maze_is_solvable() {
    for seed in [0, 1, 11, 42, 1000] {
        let mut maze = generated(16, 12, seed);
        assert!(
            maze.solve().expect("noop renderer cannot fail"),
            "seed {seed} produced an unsolvable maze"
        );
    }
}

#[test]
fn single_cell_maze_generates_and_solves() {
    let mut maze = generated(1, 1, 0);
    assert_eq!(open_internal_walls(maze.grid()), 0);
    assert!(maze.solve().unwrap());
}

#[test]
fn construction_rejects_zero_dimensions() {
    let result = Maze::new(
        Point { x: 0.0, y: 0.0 },
        16,
        0,
        10.0,
        10.0,
        Box::new(NoopRenderer),
        None,
    );
    assert!(matches!(
        result.err(),
        Some(MazeError::InvalidDimensions {
            num_columns: 16,
            num_rows: 0
        })
    ));
}
