/// Rejection of a move, the board is never modified when one is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range. Columns must be between 0 and {max}")]
    ColumnOutOfRange { column: usize, max: usize },

    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),

    #[error("Invalid move, the game is already over")]
    GameOver,
}

/// Rejection of a board shape or search setting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth must be a positive integer, got {0}")]
    InvalidDepth(usize),

    #[error("a {rows}x{cols} board cannot hold a line of {connect}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        connect: usize,
    },
}
