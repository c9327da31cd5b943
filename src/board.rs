use std::fmt;

use crate::{error::*, CONNECT, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two sides. `One` is the human and moves first, `Two` is the engine.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// The state of a game, always derived from the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Ongoing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// The four line orientations a winning run can take
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    // (row step, column step), rows grow downwards
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// A run of `connect` cells starting at (`row`, `col`) and extending along `direction`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Window {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// A gravity-filled grid of cells
///
/// Row 0 is the top of the board and row `rows - 1` the bottom. Pieces fall to the
/// lowest empty cell of a column, so a cell above an empty cell is always empty.
/// Cloning produces a fully independent copy, which is what the search plays on.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    connect: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
    heights: Vec<usize>,
}

impl Board {
    /// Creates an empty board of the standard 6x7, connect 4 shape
    pub fn new() -> Self {
        Self::empty(HEIGHT, WIDTH, CONNECT)
    }

    /// Creates an empty board of any shape that can hold a line of `connect`
    pub fn with_dimensions(
        rows: usize,
        cols: usize,
        connect: usize,
    ) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 || connect < 2 || connect > rows.max(cols) {
            return Err(ConfigError::InvalidDimensions {
                rows,
                cols,
                connect,
            });
        }
        Ok(Self::empty(rows, cols, connect))
    }

    fn empty(rows: usize, cols: usize, connect: usize) -> Self {
        Self {
            rows,
            cols,
            connect,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
        }
    }

    /// An empty board of the same shape
    pub fn cleared(&self) -> Self {
        Self::empty(self.rows, self.cols, self.connect)
    }

    /// Replays a string of 0-indexed column digits, alternating players from `Player::One`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> anyhow::Result<Self> {
        let mut board = Self::new();
        board.play_sequence(moves)?;
        Ok(board)
    }

    /// Replays moves onto this board, continuing from whoever is due to move next
    pub fn play_sequence<S: AsRef<str>>(&mut self, moves: S) -> anyhow::Result<()> {
        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let player = self.next_player();
                    self.apply_move(column as usize, player)?;
                }
                _ => anyhow::bail!("could not parse '{}' as a valid move", column_char),
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The length of a winning line
    pub fn connect(&self) -> usize {
        self.connect
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn filled_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// The player who would move next if turns strictly alternate from `Player::One`
    pub fn next_player(&self) -> Player {
        if self.filled_count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn is_valid_move(&self, column: usize) -> bool {
        column < self.cols && self.cell(0, column).is_empty()
    }

    /// Drops a piece for `player` into `column`, returning the (row, column) it landed on
    pub fn apply_move(
        &mut self,
        column: usize,
        player: Player,
    ) -> Result<(usize, usize), MoveError> {
        if column >= self.cols {
            return Err(MoveError::ColumnOutOfRange {
                column,
                max: self.cols - 1,
            });
        }
        if !self.is_valid_move(column) {
            return Err(MoveError::ColumnFull(column));
        }
        Ok((self.play(column, player), column))
    }

    /// Drops a piece without checking the column, returning the row it landed on
    pub(crate) fn play(&mut self, column: usize, player: Player) -> usize {
        debug_assert!(self.is_valid_move(column));
        let row = self.rows - 1 - self.heights[column];
        self.cells[row * self.cols + column] = player.cell();
        self.heights[column] += 1;
        row
    }

    /// Playable columns in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&column| self.is_valid_move(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|column| !self.is_valid_move(column))
    }

    pub fn has_win(&self, player: Player) -> bool {
        let target = player.cell();
        self.windows()
            .any(|window| self.window_cells(window).all(|cell| cell == target))
    }

    pub fn outcome(&self) -> Outcome {
        if self.has_win(Player::One) {
            Outcome::PlayerOneWin
        } else if self.has_win(Player::Two) {
            Outcome::PlayerTwoWin
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Every window of `connect` cells that fits on the board, in all four directions
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        Direction::ALL
            .into_iter()
            .flat_map(move |direction| {
                (0..self.rows).flat_map(move |row| {
                    (0..self.cols).map(move |col| Window { row, col, direction })
                })
            })
            .filter(move |window| self.window_fits(window))
    }

    fn window_fits(&self, window: &Window) -> bool {
        let (dr, dc) = window.direction.step();
        let reach = self.connect as isize - 1;
        let end_row = window.row as isize + dr * reach;
        let end_col = window.col as isize + dc * reach;
        end_row >= 0
            && end_row < self.rows as isize
            && end_col >= 0
            && end_col < self.cols as isize
    }

    /// The cells covered by a window produced by [`Board::windows`]
    pub fn window_cells(&self, window: Window) -> impl Iterator<Item = Cell> + '_ {
        let (dr, dc) = window.direction.step();
        (0..self.connect as isize).map(move |i| {
            let row = (window.row as isize + dr * i) as usize;
            let col = (window.col as isize + dc * i) as usize;
            self.cell(row, col)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.cell(row, col) {
                    Cell::Empty => '.',
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
