use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one column and one row. Construction aborts
    /// entirely; no partial grid is produced.
    #[error("invalid maze dimensions {num_columns}x{num_rows}: both must be at least 1")]
    InvalidDimensions { num_columns: u16, num_rows: u16 },
}
