//! Turn order and move application for a human playing against the engine

use crate::{board::*, config::*, error::*, solver::*};

/// A game between a human (`Player::One`, moving first) and the engine (`Player::Two`)
///
/// The live board is only ever changed here. After every accepted human move the
/// engine replies immediately unless the game has ended.
pub struct Game {
    board: Board,
    solver: Solver,
    to_move: Player,
    last_ai_column: Option<usize>,
}

impl Game {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_board(Board::new(), config)
    }

    /// Starts a game on a custom board
    ///
    /// Turns alternate from the human, so if the board holds an odd number of pieces
    /// the engine replies before this returns.
    pub fn with_board(board: Board, config: SearchConfig) -> Self {
        let mut game = Self {
            to_move: board.next_player(),
            board,
            solver: Solver::new(config),
            last_ai_column: None,
        };
        if game.to_move == game.solver.player() && !game.outcome().is_over() {
            game.play_ai_move();
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The column of the most recent engine move, `None` before the engine has moved
    pub fn last_ai_column(&self) -> Option<usize> {
        self.last_ai_column
    }

    pub fn config(&self) -> &SearchConfig {
        self.solver.config()
    }

    pub fn set_search_depth(&mut self, depth: usize) -> Result<(), ConfigError> {
        self.solver.set_depth(depth)
    }

    pub fn set_pruning_enabled(&mut self, enabled: bool) {
        self.solver.set_pruning(enabled);
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.solver.set_tie_break(tie_break);
    }

    /// Clears the board for a new game, keeping the search settings
    pub fn reset(&mut self) {
        self.board = self.board.cleared();
        self.to_move = Player::One;
        self.last_ai_column = None;
    }

    /// Plays the human's move and, if the game goes on, the engine's reply
    ///
    /// Returns the outcome after both moves. An invalid column is rejected without
    /// changing anything.
    pub fn apply_human_move(&mut self, column: usize) -> Result<Outcome, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        let human = self.solver.player().other();
        self.board.apply_move(column, human)?;
        self.to_move = human.other();

        let outcome = self.check_outcome();
        if outcome.is_over() {
            return Ok(outcome);
        }

        Ok(self.play_ai_move())
    }

    fn play_ai_move(&mut self) -> Outcome {
        let ai = self.solver.player();
        let result = self.solver.best_move(&self.board);

        // the search only returns columns that are playable on this board
        if let Some(column) = result.column {
            self.board.play(column, ai);
            self.last_ai_column = Some(column);
            self.to_move = ai.other();
        }

        self.check_outcome()
    }

    fn check_outcome(&self) -> Outcome {
        let outcome = self.outcome();
        match outcome {
            Outcome::PlayerOneWin => {
                log::info!("human wins after {} moves", self.board.filled_count())
            }
            Outcome::PlayerTwoWin => {
                log::info!("engine wins after {} moves", self.board.filled_count())
            }
            Outcome::Draw => log::info!("game drawn"),
            Outcome::Ongoing => {}
        }
        outcome
    }

    /// Search scores for each of the human's legal moves, from the human's point of view
    pub fn hint(&self) -> Vec<(usize, i32)> {
        let human = self.solver.player().other();
        Solver::for_player(*self.solver.config(), human).column_scores(&self.board)
    }
}
