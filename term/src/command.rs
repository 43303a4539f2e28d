use std::str::FromStr;

use sweeper_core::{Coord, Coord2, Intent};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` takes two coordinates: {0} <x> <y>")]
    MissingCoords(&'static str),
    #[error("Not a coordinate: `{0}`")]
    BadCoord(String),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Intent),
    Board,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  open <x> <y>   (o)  open a cell
  flag <x> <y>   (f)  toggle a flag
  reset          (r)  start a new game
  board          (b)  print the debug grid
  help           (h)  show this help
  quit           (q)  leave";

fn parse_coords(name: &'static str, mut args: std::str::SplitWhitespace) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let arg = args.next().ok_or(CommandError::MissingCoords(name))?;
        arg.parse().map_err(|_| CommandError::BadCoord(arg.to_string()))
    };
    let x = next()?;
    let y = next()?;
    Ok((x, y))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        Ok(match name.to_ascii_lowercase().as_str() {
            "o" | "open" => Command::Play(Intent::Open(parse_coords("open", words)?)),
            "f" | "flag" => Command::Play(Intent::ToggleFlag(parse_coords("flag", words)?)),
            "r" | "reset" => Command::Play(Intent::Reset),
            "b" | "board" => Command::Board,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("o 3 4".parse::<Command>(), Ok(Command::Play(Intent::Open((3, 4)))));
        assert_eq!(
            "  FLAG 0 9 ".parse::<Command>(),
            Ok(Command::Play(Intent::ToggleFlag((0, 9))))
        );
        assert_eq!("reset".parse::<Command>(), Ok(Command::Play(Intent::Reset)));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn negative_coordinates_reach_the_engine() {
        assert_eq!("open -1 0".parse::<Command>(), Ok(Command::Play(Intent::Open((-1, 0)))));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("open 1".parse::<Command>(), Err(CommandError::MissingCoords("open")));
        assert_eq!(
            "f x 1".parse::<Command>(),
            Err(CommandError::BadCoord("x".to_string()))
        );
        assert_eq!(
            "dig 1 1".parse::<Command>(),
            Err(CommandError::Unknown("dig".to_string()))
        );
    }
}
