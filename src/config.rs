use crate::error::ConfigError;

/// Search depth used when none is given
pub const DEFAULT_DEPTH: usize = 4;

/// Depths above this get a warning, an unpruned search at depth 10 visits ~7^10 leaves
pub const EXPENSIVE_DEPTH: usize = 8;

/// How the search picks between columns whose scores are equal
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// The lowest column index among the best-scoring moves
    LowestColumn,
    /// A seeded random column is the initial choice at every node and is only
    /// replaced by a strictly better move
    Random { seed: u64 },
}

/// Settings for the engine, adjustable between turns
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    depth: usize,
    pub use_pruning: bool,
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            use_pruning: true,
            tie_break: TieBreak::LowestColumn,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: usize, use_pruning: bool) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_depth(depth)?;
        config.use_pruning = use_pruning;
        Ok(config)
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sets the lookahead in plies, which must be at least 1
    pub fn set_depth(&mut self, depth: usize) -> Result<(), ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        if depth > EXPENSIVE_DEPTH {
            log::warn!(
                "search depth {} may take a long time, \
                 each ply multiplies the work by up to the column count",
                depth
            );
        }
        self.depth = depth;
        Ok(())
    }
}
