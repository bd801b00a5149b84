//! Terminal Omok driver
//!
//! A thin REPL over the core engine: prints the board, reads `row col`
//! pairs until the game finishes. `--replay` runs a recorded fixture
//! instead of playing interactively.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use omok::replay::{expected_winner, parse_moves, replay};
use omok::{Mark, Omok};

/// Terminal Omok: 15x15, five in a row, no double threes
#[derive(Parser)]
#[command(name = "omok")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Replay a recorded game file instead of playing interactively
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Winner code (0, 1 or 2) to verify after a replay
    #[arg(long, requires = "replay")]
    expect: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.replay {
        Some(path) => run_replay(&path, cli.expect),
        None => run_interactive(),
    }
}

fn run_replay(path: &Path, expect: Option<u8>) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let moves = parse_moves(&text)?;
    let game = replay(&moves)?;

    println!("{}", game.board());
    match game.winner() {
        Some(mark) => println!("Winner after {} moves: {}", moves.len(), mark_name(mark)),
        None => println!("No winner after {} moves", moves.len()),
    }

    if let Some(code) = expect {
        anyhow::ensure!(
            game.winner() == expected_winner(code),
            "expected winner code {}, game ended with {:?}",
            code,
            game.winner()
        );
        println!("Replay matches expected winner code {}", code);
    }
    Ok(())
}

fn run_interactive() -> anyhow::Result<()> {
    let mut game = Omok::new();
    let stdin = io::stdin();

    while !game.is_finished() {
        println!("\n{}", game.board());
        print!("{} to move (row col): ", mark_name(game.mover()));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session
            println!();
            return Ok(());
        }

        let mut nums = line.split_whitespace().map(str::parse::<usize>);
        let (Some(Ok(row)), Some(Ok(col))) = (nums.next(), nums.next()) else {
            println!("Enter two numbers, e.g. `7 7`");
            continue;
        };

        if let Err(err) = game.try_place(row, col) {
            println!("Rejected: {}", err);
        }
    }

    println!("\n{}", game.board());
    if let Some(winner) = game.winner() {
        println!("Game over: {} wins", mark_name(winner));
    }
    Ok(())
}

fn mark_name(mark: Mark) -> &'static str {
    match mark {
        Mark::Black => "Black",
        Mark::White => "White",
        Mark::Empty => "Empty",
    }
}
