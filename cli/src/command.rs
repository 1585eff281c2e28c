use std::str::FromStr;

use minefield_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Primary action, reveal.
    Open(Coord2),
    /// Secondary action, flag or chord.
    Mark(Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `?` for help")]
    Unknown(String),
    #[error("expected two coordinates, like `{0} 3 4`")]
    MissingCoords(String),
    #[error("`{0}` is not a valid coordinate")]
    BadCoord(String),
}

pub(crate) const HELP: &str = "\
commands:
  o X Y   reveal the cell at column X, row Y (also `r`)
  f X Y   flag a hidden cell, or chord a revealed number
  n       start a new game
  ?       show this help
  q       quit";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let verb = verb.to_ascii_lowercase();

        match verb.as_str() {
            "o" | "r" | "open" | "reveal" => parse_coords(&verb, words).map(Command::Open),
            "f" | "m" | "flag" | "mark" => parse_coords(&verb, words).map(Command::Mark),
            "n" | "new" => Ok(Command::NewGame),
            "?" | "h" | "help" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseCommandError::Unknown(verb)),
        }
    }
}

fn parse_coords<'a>(
    verb: &str,
    mut words: impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let (Some(x), Some(y)) = (words.next(), words.next()) else {
        return Err(ParseCommandError::MissingCoords(verb.to_owned()));
    };
    let parse = |word: &str| {
        word.parse::<Coord>()
            .map_err(|_| ParseCommandError::BadCoord(word.to_owned()))
    };
    Ok((parse(x)?, parse(y)?))
}
