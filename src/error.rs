/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("rows must be >= 1")]
    ZeroRows,

    #[error("cols must be >= 1")]
    ZeroCols,

    #[error("{rows}x{cols} grid is too large")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("chance_light_starts_on must be in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to parse board: {0}")]
    Parse(String),
}
