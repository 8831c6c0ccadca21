//! randkit command-line front end.
//!
//! Parses `randkit <command> [args...]` into a [`Command`] and runs it
//! against a [`Random`] adapter. The binary only wires up logging and the
//! configured source.

use std::slice::Iter;
use std::str::FromStr;

use randkit_core::{EntropySource, Random, RandomError};
use thiserror::Error;

/// Help text printed for `help` and on usage errors.
pub const USAGE: &str = "\
usage: randkit <command> [args...]

commands:
  float                         uniform float in [0, 1)
  number <min> <max> [--rounded]
                                float in [min, max), or whole number in [min, max]
  int <min> <max>               integer in [min, max]
  uint <max>                    integer in [0, max]
  bool                          coin flip
  pick <item>...                one of the given items
  char <text>                   one character of text
  help                          show this message

environment:
  RANDKIT_SEED                  u64 seed for reproducible output
  RUST_LOG                      log filter (default: warn)";

/// Errors surfaced by the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// No command was given.
    #[error("no command given")]
    MissingCommand,

    /// The command name is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required positional argument is absent.
    #[error("{command}: missing argument <{name}>")]
    MissingArgument {
        /// Command being parsed.
        command: &'static str,
        /// Name of the missing argument.
        name: &'static str,
    },

    /// A positional argument could not be parsed.
    #[error("{command}: invalid <{name}> value {value:?}")]
    InvalidArgument {
        /// Command being parsed.
        command: &'static str,
        /// Name of the offending argument.
        name: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },

    /// More arguments were given than the command accepts.
    #[error("{command}: unexpected argument {value:?}")]
    UnexpectedArgument {
        /// Command being parsed.
        command: &'static str,
        /// First surplus argument.
        value: String,
    },

    /// `pick` or `char` was given nothing to choose from.
    #[error("{0}: nothing to pick from")]
    EmptySelection(&'static str),

    /// The adapter or its configuration rejected the request.
    #[error(transparent)]
    Random(#[from] RandomError),
}

impl CliError {
    /// Whether the error stems from malformed command-line input.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingCommand
                | Self::UnknownCommand(_)
                | Self::MissingArgument { .. }
                | Self::InvalidArgument { .. }
                | Self::UnexpectedArgument { .. }
        )
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the usage text.
    Help,
    /// Raw uniform draw.
    Float,
    /// Number in a range, optionally rounded.
    Number {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Round down to a whole number, `max` inclusive.
        rounded: bool,
    },
    /// Inclusive integer range.
    Int {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// Inclusive unsigned range from zero.
    Uint {
        /// Upper bound.
        max: u64,
    },
    /// Coin flip.
    Bool,
    /// Pick one of the items.
    Pick(Vec<String>),
    /// Pick one character of the text.
    Char(String),
}

/// Positional argument cursor for one command.
struct Args<'a> {
    command: &'static str,
    rest: Iter<'a, String>,
}

impl Args<'_> {
    fn required<T: FromStr>(&mut self, name: &'static str) -> Result<T, CliError> {
        let raw = self.rest.next().ok_or(CliError::MissingArgument {
            command: self.command,
            name,
        })?;
        raw.parse().map_err(|_| CliError::InvalidArgument {
            command: self.command,
            name,
            value: raw.clone(),
        })
    }

    fn flag(&mut self, flag: &str) -> bool {
        if self.rest.as_slice().first().is_some_and(|arg| arg == flag) {
            self.rest.next();
            true
        } else {
            false
        }
    }

    fn remaining(&mut self) -> Vec<String> {
        self.rest.by_ref().cloned().collect()
    }

    fn finish(mut self) -> Result<(), CliError> {
        match self.rest.next() {
            Some(extra) => Err(CliError::UnexpectedArgument {
                command: self.command,
                value: extra.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Command {
    /// Parse the arguments following the program name.
    ///
    /// # Errors
    ///
    /// Returns a usage `CliError` for an unknown command or for missing,
    /// malformed, or surplus arguments.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let (name, rest) = args.split_first().ok_or(CliError::MissingCommand)?;
        let command = match name.as_str() {
            "help" | "-h" | "--help" => "help",
            "float" => "float",
            "number" => "number",
            "int" => "int",
            "uint" => "uint",
            "bool" => "bool",
            "pick" => "pick",
            "char" => "char",
            other => return Err(CliError::UnknownCommand(other.to_owned())),
        };
        let mut args = Args {
            command,
            rest: rest.iter(),
        };

        let parsed = match command {
            "help" => Self::Help,
            "float" => Self::Float,
            "number" => Self::Number {
                min: args.required("min")?,
                max: args.required("max")?,
                rounded: args.flag("--rounded"),
            },
            "int" => Self::Int {
                min: args.required("min")?,
                max: args.required("max")?,
            },
            "uint" => Self::Uint {
                max: args.required("max")?,
            },
            "bool" => Self::Bool,
            "pick" => Self::Pick(args.remaining()),
            _ => Self::Char(args.required("text")?),
        };
        args.finish()?;
        Ok(parsed)
    }
}

/// Run a command and render its result as a single line.
///
/// # Errors
///
/// Returns `CliError::EmptySelection` when there is nothing to pick from and
/// `CliError::Random` when the adapter rejects the range.
pub fn run<S: EntropySource>(command: &Command, random: &mut Random<S>) -> Result<String, CliError> {
    let output = match command {
        Command::Help => USAGE.to_owned(),
        Command::Float => random.uniform_float().to_string(),
        Command::Number { min, max, rounded } => {
            random.number_in_range(*min, *max, *rounded).to_string()
        }
        Command::Int { min, max } => random.integer_in_range(*min, *max)?.to_string(),
        Command::Uint { max } => random.unsigned_integer_up_to(*max).to_string(),
        Command::Bool => random.boolean().to_string(),
        Command::Pick(items) => random
            .pick_item(items)
            .ok_or(CliError::EmptySelection("pick"))?
            .clone(),
        Command::Char(text) => random
            .pick_character(text)
            .ok_or(CliError::EmptySelection("char"))?
            .to_string(),
    };
    Ok(output)
}
