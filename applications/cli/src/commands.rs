//! Console commands read from stdin

use crate::error::CliError;
use std::str::FromStr;

/// A line typed by the user during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play the whole catalog starting at an index
    Play(usize),

    /// Play one catalog episode on its own
    Single(usize),

    Next,
    Previous,
    Toggle,
    Loop,
    Shuffle,

    /// Seek to a position in seconds
    Seek(u64),

    Clear,
    Status,
    List,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| CliError::Command("empty input".to_string()))?
            .to_ascii_lowercase();
        let argument = parts.next();

        if parts.next().is_some() {
            return Err(CliError::Command(format!("too many arguments: {line}")));
        }

        let command = match name.as_str() {
            "play" | "p" => Self::Play(parse_number(&name, argument)?),
            "single" | "one" => Self::Single(parse_number(&name, argument)?),
            "next" | "n" => Self::Next,
            "prev" | "previous" | "b" => Self::Previous,
            "toggle" | "t" | "pause" => Self::Toggle,
            "loop" | "l" => Self::Loop,
            "shuffle" | "s" => Self::Shuffle,
            "seek" => Self::Seek(parse_number(&name, argument)?),
            "clear" => Self::Clear,
            "status" | "?" => Self::Status,
            "list" | "ls" => Self::List,
            "help" | "h" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CliError::Command(other.to_string())),
        };

        let takes_argument = matches!(command, Self::Play(_) | Self::Single(_) | Self::Seek(_));
        if !takes_argument && argument.is_some() {
            return Err(CliError::Command(format!("`{name}` takes no argument")));
        }

        Ok(command)
    }
}

fn parse_number<T: FromStr>(name: &str, argument: Option<&str>) -> Result<T, CliError> {
    let argument =
        argument.ok_or_else(|| CliError::Command(format!("`{name}` needs a number")))?;

    argument
        .parse()
        .map_err(|_| CliError::Command(format!("`{argument}` is not a valid number")))
}

pub const HELP: &str = "\
Commands:
  play <n>     play the catalog starting at episode n
  single <n>   play episode n on its own
  next, prev   move through the queue
  toggle       play/pause
  loop         toggle repeat of the current episode
  shuffle      toggle random next
  seek <secs>  jump to a position
  clear        stop and empty the queue
  status       show what is playing
  list         show the catalog
  quit         leave";
