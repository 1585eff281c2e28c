use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use minefield_core::{BoardView, CellCount, Coord, GameConfig, GameError, Hud};
use serde::Serialize;

use crate::command::{Command, HELP};
use crate::session::GameSession;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the minefield from your terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of columns
    #[arg(long, default_value_t = GameConfig::DEFAULT_WIDTH)]
    width: Coord,

    /// Number of rows
    #[arg(long, default_value_t = GameConfig::DEFAULT_HEIGHT)]
    height: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random, restarts keep counting up from it
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final board as JSON when a game ends
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    elapsed_secs: u32,
    hud: Hud,
    board: &'a BoardView,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = GameConfig::new(args.width, args.height, args.mines)
        .context("Invalid board configuration")?;
    let mut next_seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("config: {:?}, seed: {}", config, next_seed);

    let mut session = GameSession::new(config, next_seed)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    draw(&mut stdout, &session)?;
    println!("{HELP}");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let was_finished = session.game.is_finished();
        let now = Utc::now();
        let updated = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                false
            }
            Command::NewGame => {
                next_seed = next_seed.wrapping_add(1);
                session = GameSession::new(config, next_seed)?;
                true
            }
            Command::Open(coords) => {
                ignore_out_of_bounds(session.primary_action(coords, now))?
                    .is_some_and(|outcome| outcome.has_update())
            }
            Command::Mark(coords) => {
                ignore_out_of_bounds(session.secondary_action(coords, now))?
                    .is_some_and(|outcome| outcome.has_update())
            }
        };

        if updated {
            draw(&mut stdout, &session)?;
        }
        if !was_finished && session.game.is_finished() {
            if args.json {
                print_report(&session)?;
            }
            println!("type `n` for a new game or `q` to quit");
        }
    }

    Ok(())
}

/// Out-of-range coordinates are reported and otherwise ignored.
fn ignore_out_of_bounds<T>(result: minefield_core::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(GameError::OutOfBounds((x, y))) => {
            println!("{x} {y} is outside the board");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn draw(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let hud = Hud::from_game(&session.game);
    let view = BoardView::from_game(&session.game);
    writeln!(out, "{}", render::hud_line(&hud, session.elapsed_secs(Utc::now())))?;
    write!(out, "{}", render::board(&view))?;
    out.flush()
}

fn print_report(session: &GameSession) -> Result<()> {
    let board = BoardView::from_game(&session.game);
    let report = Report {
        seed: session.seed,
        elapsed_secs: session.elapsed_secs(Utc::now()),
        hud: Hud::from_game(&session.game),
        board: &board,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
