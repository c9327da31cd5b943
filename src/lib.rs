//! A Connect 4 opponent built on depth-limited minimax search
//!
//! The engine looks a fixed number of moves ahead, optionally with alpha-beta
//! pruning, and scores the positions at the horizon with a hand-tuned heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_ai::{game::Game, board::Outcome, config::SearchConfig};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::new(SearchConfig::new(4, true)?);
//! let outcome = game.apply_human_move(3)?;
//!
//! assert_eq!(outcome, Outcome::Ongoing);
//! assert_eq!(game.board().filled_count(), 2);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod evaluator;

pub mod config;

pub mod solver;

pub mod game;


pub use board::{Board, Cell, Outcome, Player};
pub use config::{SearchConfig, TieBreak};
pub use error::{ConfigError, MoveError};
pub use game::Game;
pub use solver::{SearchResult, Solver};

/// The width of the standard game board in tiles
pub const WIDTH: usize = 7;

/// The height of the standard game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const CONNECT: usize = 4;

// ensure a winning line fits on the standard board in every direction
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
const_assert!(CONNECT >= 2);
