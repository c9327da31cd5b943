//! A depth-limited minimax agent for playing Connect 4

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{board::*, config::*, evaluator::*};

/// Score of a position the engine has won
pub const INFINITY: i32 = i32::MAX;
/// Score of a position the engine has lost
pub const NEG_INFINITY: i32 = -i32::MAX;

/// The value of a searched position and the move that achieves it
///
/// `column` is `None` for leaves of the search, and for positions without legal moves.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// An agent that picks moves by fixed-depth game tree search
///
/// # Notes
/// The agent always maximizes for its own player, whose pieces are scored by its
/// [`Evaluator`]. Every ply is searched on a fresh copy of the board so the caller's
/// board is never touched. With alpha-beta pruning enabled the returned score is
/// identical to the unpruned one, only fewer nodes are visited.
///
/// # Position Scoring
/// A win for the agent scores [`INFINITY`], a loss [`NEG_INFINITY`] and a full board
/// 0. Positions at the depth limit are scored by the heuristic evaluator.
#[derive(Clone)]
pub struct Solver {
    config: SearchConfig,
    evaluator: Evaluator,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
    rng: Option<StdRng>,
}

impl Solver {
    /// Creates a new `Solver` playing for `Player::Two`
    pub fn new(config: SearchConfig) -> Self {
        Self::for_player(config, Player::Two)
    }

    /// Creates a new `Solver` maximizing for the given player
    pub fn for_player(config: SearchConfig, player: Player) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(player),
            node_count: 0,
            rng: Self::rng_for(config.tie_break),
        }
    }

    fn rng_for(tie_break: TieBreak) -> Option<StdRng> {
        match tie_break {
            TieBreak::LowestColumn => None,
            TieBreak::Random { seed } => Some(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn player(&self) -> Player {
        self.evaluator.player()
    }

    pub fn set_depth(&mut self, depth: usize) -> Result<(), crate::error::ConfigError> {
        self.config.set_depth(depth)
    }

    pub fn set_pruning(&mut self, use_pruning: bool) {
        self.config.use_pruning = use_pruning;
    }

    /// Changes the tie-break policy, a random policy restarts from its seed
    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.config.tie_break = tie_break;
        self.rng = Self::rng_for(tie_break);
    }

    /// Searches `board` to the configured depth with the agent to move
    pub fn best_move(&mut self, board: &Board) -> SearchResult {
        let nodes_before = self.node_count;
        let result = self.search(board, self.config.depth(), NEG_INFINITY, INFINITY, true);
        log::debug!(
            "depth {} search (pruning {}) visited {} nodes: column {:?}, score {}",
            self.config.depth(),
            if self.config.use_pruning { "on" } else { "off" },
            self.node_count - nodes_before,
            result.column,
            result.score
        );
        result
    }

    /// Performs minimax game tree search
    ///
    /// `maximizing` is true when the agent's player is to move on `board`.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let player = self.evaluator.player();
        let valid_moves = board.valid_moves();
        let won = board.has_win(player);
        let lost = board.has_win(player.other());

        if depth == 0 || won || lost || valid_moves.is_empty() {
            let score = if lost {
                NEG_INFINITY
            } else if won {
                INFINITY
            } else if valid_moves.is_empty() {
                0
            } else {
                self.evaluator.evaluate(board)
            };
            return SearchResult {
                score,
                column: None,
            };
        }

        let mover = if maximizing { player } else { player.other() };
        let mut best = SearchResult {
            score: if maximizing { NEG_INFINITY } else { INFINITY },
            column: Some(self.initial_column(&valid_moves)),
        };

        for &column in valid_moves.iter() {
            let mut next = board.clone();
            next.play(column, mover);

            let score = self.search(&next, depth - 1, alpha, beta, !maximizing).score;
            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        column: Some(column),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        column: Some(column),
                    };
                }
                beta = beta.min(best.score);
            }

            // the opponent already has a better option elsewhere, so this node cannot
            // change the value of its parent
            if self.config.use_pruning && alpha >= beta {
                break;
            }
        }

        best
    }

    // the column kept when no move strictly beats the starting bound
    fn initial_column(&mut self, valid_moves: &[usize]) -> usize {
        match self.rng.as_mut() {
            Some(rng) => valid_moves[rng.gen_range(0..valid_moves.len())],
            None => valid_moves[0],
        }
    }

    /// Scores every legal move for the agent on `board` independently
    ///
    /// Each move is searched to the configured depth on its own copy of the board, in
    /// parallel. Returns an empty list if the game is already over.
    pub fn column_scores(&self, board: &Board) -> Vec<(usize, i32)> {
        if board.outcome().is_over() {
            return Vec::new();
        }

        let depth = self.config.depth();
        board
            .valid_moves()
            .into_par_iter()
            .map(|column| {
                let mut solver = self.clone();
                solver.node_count = 0;

                let mut next = board.clone();
                next.play(column, solver.player());
                let result = solver.search(&next, depth - 1, NEG_INFINITY, INFINITY, false);
                (column, result.score)
            })
            .collect()
    }
}
