use std::str::FromStr;

use super::{
    flags::{FlagError, Flags},
    outcome::Outcome,
};
use crate::toolkit::Toolkit;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error(transparent)]
    Flags(#[from] FlagError),
    #[error("{command}: missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("{command}: invalid {what} '{value}'")]
    InvalidArgument {
        command: &'static str,
        what: &'static str,
        value: String,
    },
}

/// A toolkit operation the interactive prompt can dispatch by name
pub trait Command {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn usage(&self) -> &'static str;

    /// Flags that stand alone; any other letter outside `value_flags` is rejected
    fn switches(&self) -> &'static [char] {
        &[]
    }

    /// Flags whose value is the following argument
    fn value_flags(&self) -> &'static [char] {
        &[]
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError>;
}

/// Returns the operand at `index`, or a missing-argument error naming `what`.
pub fn required<'a>(
    flags: &'a Flags,
    index: usize,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    flags
        .positional(index)
        .ok_or(CommandError::MissingArgument { command, what })
}

pub fn parse<T: FromStr>(
    value: &str,
    command: &'static str,
    what: &'static str,
) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        what,
        value: value.to_string(),
    })
}

/// Parses the value of `flag` if it was given.
pub fn parse_flag<T: FromStr>(
    flags: &Flags,
    flag: char,
    command: &'static str,
    what: &'static str,
) -> Result<Option<T>, CommandError> {
    flags
        .get_value(flag)
        .map(|value| parse(value, command, what))
        .transpose()
}
