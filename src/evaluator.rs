//! Static evaluation of positions the search cannot see past

use crate::board::*;

/// Bonus for each engine piece in the middle column
pub const CENTER_WEIGHT: i32 = 3;
/// A full window of engine pieces
pub const LINE_WEIGHT: i32 = 100;
/// One piece short of a line, with the last cell open
pub const THREE_WEIGHT: i32 = 5;
/// Two pieces short of a line, with both cells open
pub const TWO_WEIGHT: i32 = 2;
/// The opponent is one piece short of a line with the last cell open
pub const OPPONENT_THREE_WEIGHT: i32 = -4;

/// Scores boards from the point of view of the maximizing player
#[derive(Copy, Clone, Debug)]
pub struct Evaluator {
    player: Player,
}

impl Evaluator {
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Heuristic value of `board`, higher is better for the evaluator's player
    ///
    /// This is a pure function of the cells on the board.
    pub fn evaluate(&self, board: &Board) -> i32 {
        let own = self.player.cell();

        let center = board.cols() / 2;
        let mut score = (0..board.rows())
            .filter(|&row| board.cell(row, center) == own)
            .count() as i32
            * CENTER_WEIGHT;

        for window in board.windows() {
            score += self.score_window(board.window_cells(window), board.connect());
        }

        score
    }

    /// Scores the contents of a single window of length `connect`
    pub fn score_window<I: IntoIterator<Item = Cell>>(&self, cells: I, connect: usize) -> i32 {
        let own = self.player.cell();
        let opponent = self.player.other().cell();

        let (mut own_count, mut opponent_count, mut empty_count) = (0, 0, 0);
        for cell in cells {
            if cell == own {
                own_count += 1;
            } else if cell == opponent {
                opponent_count += 1;
            } else {
                empty_count += 1;
            }
        }

        let mut score = 0;
        if own_count == connect {
            score += LINE_WEIGHT;
        } else if own_count + 1 == connect && empty_count == 1 {
            score += THREE_WEIGHT;
        } else if connect > 2 && own_count + 2 == connect && empty_count == 2 {
            score += TWO_WEIGHT;
        }
        if opponent_count + 1 == connect && empty_count == 1 {
            score += OPPONENT_THREE_WEIGHT;
        }
        score
    }
}
