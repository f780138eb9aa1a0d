//! Commands accepted by the interactive calculator.
//!
//! | Command            | Effect |
//! |--------------------|--------|
//! | `bill <text>`      | Type `<text>` into the bill field (`bill` alone clears it) |
//! | `slide <position>` | Drag the slider to a position in `0.0..=30.0` |
//! | `percent <n>`      | Set the percentage to a whole number in `0..=30` |
//! | `calculate`        | Press "Calculate Tip" |
//! | `reset`            | Press "Reset" |
//! | `done`             | Submit the bill field |
//! | `show`             | Redraw the screen |
//! | `log <directive>`  | Change the log filter |
//! | `help`             | List commands |
//! | `quit`             | Leave the calculator |

use std::str::FromStr;

use thiserror::Error;
use tip_core::{TipPercentage, TipPercentageError};

pub const HELP: &str = "\
Commands:
  bill <text>        type into the bill field (no text clears it)
  slide <position>   move the slider (0.0 to 30.0)
  percent <n>        set the tip percentage (0 to 30)
  calculate          press \"Calculate Tip\"
  reset              press \"Reset\"
  done               submit the bill field
  show               redraw the screen
  log <directive>    change the log filter, e.g. `log debug`
  help               show this list
  quit               leave the calculator";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Bill(String),
    Slide(f32),
    Percent(TipPercentage),
    Calculate,
    Reset,
    Done,
    Show,
    Log(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("no command given (type 'help' for a list)")]
    Empty,

    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid slider position '{0}'")]
    InvalidSlider(String),

    #[error("invalid percentage '{0}'")]
    InvalidPercentage(String),

    #[error(transparent)]
    PercentageOutOfRange(#[from] TipPercentageError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = rest.trim();

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            // The bill text keeps its inner spacing; the validator decides
            // what to make of it.
            "bill" | "b" => Ok(Self::Bill(rest.trim_end_matches(['\r', '\n']).to_string())),
            "slide" | "s" => {
                let position = required(arg, "slide", "a slider position")?;
                position
                    .parse::<f32>()
                    .map(Self::Slide)
                    .map_err(|_| CommandError::InvalidSlider(position.to_string()))
            }
            "percent" | "p" => {
                let value = required(arg, "percent", "a whole number from 0 to 30")?;
                let value = value
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidPercentage(value.to_string()))?;
                Ok(Self::Percent(TipPercentage::new(value)?))
            }
            "calculate" | "calc" | "c" => Ok(Self::Calculate),
            "reset" | "r" => Ok(Self::Reset),
            "done" | "d" => Ok(Self::Done),
            "show" => Ok(Self::Show),
            "log" => Ok(Self::Log(
                required(arg, "log", "a level or filter directive")?.to_string(),
            )),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(
    arg: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(arg)
    }
}
