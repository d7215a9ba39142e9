use std::io::{self, BufRead, Write};

use clap::Parser;
use fourline::{visualize_board, GameOutcome, GameSession, MoveOutcome};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Two-player connect four at the terminal.
///
/// Type a column number to drop a piece, 'r' to restart, 'q' to quit.
#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = GameSession::new();

    println!("{}", visualize_board(session.board()));
    loop {
        prompt(&session)?;
        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        match input.trim() {
            "" => continue,
            "q" => break,
            "r" => {
                session.reset();
                info!("New game");
                println!("{}", visualize_board(session.board()));
                continue;
            }
            entry => {
                let Ok(column) = entry.parse::<i8>() else {
                    println!("'{}' is not a column number, 'r' or 'q'", entry);
                    continue;
                };
                play(&mut session, column);
            }
        }
    }

    Ok(())
}

fn prompt(session: &GameSession) -> anyhow::Result<()> {
    if session.is_terminal() {
        print!("Play again ('r') or quit ('q')? ");
    } else {
        print!(
            "{}, choose a column (0-{}): ",
            session.current_player(),
            session.board().width() - 1
        );
    }
    io::stdout().flush()?;
    Ok(())
}

fn play(session: &mut GameSession, column: i8) {
    // The session no-ops anything that is not a legal drop, so every
    // entry can be forwarded as-is, even after the game has ended.
    match session.play_column(column) {
        MoveOutcome::Placed { piece, outcome } => {
            debug!(row = piece.row, column = piece.column, %piece.player);
            println!("{}", visualize_board(session.board()));
            match outcome {
                GameOutcome::InProgress => {}
                GameOutcome::Win { player } => {
                    info!(%player, "Game over");
                    println!("{} won!", player);
                }
                GameOutcome::Draw => {
                    info!("Game over");
                    println!("It's a draw!");
                }
            }
        }
        MoveOutcome::ColumnFull => {
            println!("Column {} is full, pick another one", column);
        }
        MoveOutcome::OutOfBounds => {
            println!(
                "Column {} is out of range, pick one of 0-{}",
                column,
                session.board().width() - 1
            );
        }
        MoveOutcome::GameOver => {
            println!("The game is over; restart with 'r'");
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
