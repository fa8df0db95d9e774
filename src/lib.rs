pub mod app;
pub mod error;
pub mod generator;
pub mod maze;
pub mod render;
pub mod solver;

pub use error::MazeError;
pub use maze::Maze;
