use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use crossterm::{
    style::{Color, Print, PrintStyledContent, Stylize},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_ai::{config::DEFAULT_DEPTH, *};

/// Play Connect 4 against a minimax engine
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax engine")]
struct Cli {
    /// Number of plies the engine looks ahead
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Disable alpha-beta pruning
    #[arg(long)]
    no_pruning: bool,

    /// Break ties between equally good moves randomly, from this seed
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Play(usize),
    Depth(usize),
    Pruning(bool),
    Hint,
    Reset,
    Quit,
}

fn parse_command(input: &str, width: usize) -> Result<Command> {
    let mut words = input.split_whitespace();
    let command = match (words.next(), words.next()) {
        (Some("depth"), Some(depth)) => Command::Depth(
            depth
                .parse()
                .with_context(|| format!("Invalid depth: {}", depth))?,
        ),
        (Some("pruning"), Some("on")) => Command::Pruning(true),
        (Some("pruning"), Some("off")) => Command::Pruning(false),
        (Some("hint"), None) => Command::Hint,
        (Some("reset"), None) => Command::Reset,
        (Some("quit"), None) => Command::Quit,
        (Some(column), None) => match column.parse::<usize>() {
            Ok(column) if (1..=width).contains(&column) => Command::Play(column - 1),
            Ok(column) => bail!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column,
                width
            ),
            Err(_) => bail!("Invalid number: {}", column),
        },
        _ => return Err(anyhow!("Unknown command: {}", input.trim())),
    };
    Ok(command)
}

fn display(board: &Board, last_ai_column: Option<usize>) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=board.cols()).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(cols.bold()))?.queue(Print("\n"))?;

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let color = match board.cell(row, col) {
                Cell::PlayerOne => Color::Red,
                Cell::PlayerTwo => Color::Yellow,
                Cell::Empty => Color::DarkBlue,
            };
            stdout.queue(PrintStyledContent("O".bold().on(Color::DarkBlue).with(color)))?;
        }
        stdout.queue(Print("\n"))?;
    }

    // mark the engine's last move
    if let Some(column) = last_ai_column {
        let marker = format!("{}^\n", " ".repeat(column));
        stdout.queue(PrintStyledContent(marker.with(Color::Yellow)))?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = SearchConfig::new(cli.depth, !cli.no_pruning)?;
    if let Some(seed) = cli.seed {
        config = config.with_tie_break(TieBreak::Random { seed });
    }
    let mut game = Game::new(config);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("Commands: <column>, depth <k>, pruning on|off, hint, reset, quit\n");

    loop {
        display(game.board(), game.last_ai_column()).context("Failed to draw board!")?;

        match game.outcome() {
            Outcome::Ongoing => {}
            Outcome::PlayerOneWin => println!("You win! Type 'reset' to play again."),
            Outcome::PlayerTwoWin => println!("AI wins! Type 'reset' to play again."),
            Outcome::Draw => println!("It's a tie! Type 'reset' to play again."),
        }

        print!(
            "[depth {}, pruning {}] > ",
            game.config().depth(),
            if game.config().use_pruning { "on" } else { "off" }
        );
        stdout().flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&input, game.board().cols()) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match command {
            Command::Play(column) => {
                match game.apply_human_move(column) {
                    // columns are shown 1-indexed
                    Err(MoveError::ColumnFull(column)) => {
                        println!("{}", MoveError::ColumnFull(column + 1))
                    }
                    Err(err) => println!("{}", err),
                    Ok(_) => {}
                }
            }
            Command::Depth(depth) => {
                if let Err(err) = game.set_search_depth(depth) {
                    println!("{}", err);
                }
            }
            Command::Pruning(enabled) => game.set_pruning_enabled(enabled),
            Command::Hint => {
                for (column, score) in game.hint() {
                    let score = match score {
                        solver::INFINITY => "win".to_string(),
                        solver::NEG_INFINITY => "loss".to_string(),
                        score => score.to_string(),
                    };
                    println!("column {}: {}", column + 1, score);
                }
            }
            Command::Reset => game.reset(),
            Command::Quit => break,
        }
    }
    Ok(())
}
